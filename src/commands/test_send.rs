//! Implementation of the `notice test-send` command.
//!
//! Composes a stored template against the sample or a supplied context and
//! writes the message into the outbox. Delivery happens elsewhere.

use super::preview::compose_stored;
use super::{load_context, resolve_template_id};
use crate::cli::TestSendArgs;
use crate::config::Config;
use crate::context::Context;
use crate::error::{NoticeError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::outbox::{OutboxMessage, write_message};
use crate::workspace::{Workspace, require_initialized_workspace};
use chrono::Utc;
use serde_json::json;
use std::path::PathBuf;

/// Execute the `notice test-send` command.
pub fn cmd_test_send(args: TestSendArgs) -> Result<()> {
    let workspace = require_initialized_workspace()?;
    let config = workspace.load_config()?;
    let context = load_context(args.context.as_deref())?;
    let template_id = resolve_template_id(args.template_id, &config);

    let (message, path) = test_send(&workspace, &config, &template_id, args.to, &context)?;

    println!(
        "Queued test notification '{}' for {}",
        message.id,
        message.to.join(", ")
    );
    println!("  {}", path.display());
    Ok(())
}

/// Compose, validate, write, and log one test message.
pub(crate) fn test_send(
    workspace: &Workspace,
    config: &Config,
    template_id: &str,
    to: Vec<String>,
    context: &Context,
) -> Result<(OutboxMessage, PathBuf)> {
    let (rendered, enabled) = compose_stored(workspace, config, template_id, context)?;
    if !enabled {
        return Err(NoticeError::UserError(format!(
            "template '{}' is disabled.\n\n\
             Run `notice template enable {}` first.",
            template_id, template_id
        )));
    }

    let recipients = if to.is_empty() {
        config.default_recipients.clone()
    } else {
        to
    };

    let mut message = OutboxMessage::new(&config.sender, recipients, rendered, Utc::now())?;
    let path = write_message(&workspace.outbox_dir(config), &mut message)?;

    let event = Event::new(EventAction::TestSend)
        .with_template(template_id)
        .with_details(json!({
            "message": message.id,
            "to": message.to,
            "subject": message.subject,
        }));
    append_event(workspace, &event)?;

    Ok((message, path))
}
