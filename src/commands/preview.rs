//! Implementation of the `notice preview` command.

use super::{load_context, resolve_template_id};
use crate::cli::PreviewArgs;
use crate::config::Config;
use crate::context::Context;
use crate::error::Result;
use crate::notification::RenderedNotification;
use crate::store::TemplateStore;
use crate::workspace::{Workspace, require_initialized_workspace};

/// Execute the `notice preview` command.
///
/// Prints the composed subject, a blank line, then the body as rendered.
/// Disabled templates can still be previewed; a note goes to stderr.
pub fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let workspace = require_initialized_workspace()?;
    let config = workspace.load_config()?;
    let context = load_context(args.context.as_deref())?;
    let template_id = resolve_template_id(args.template_id, &config);

    let (rendered, enabled) = compose_stored(&workspace, &config, &template_id, &context)?;
    if !enabled {
        eprintln!(
            "note: template '{}' is disabled; test-send will refuse it",
            template_id
        );
    }

    println!("Subject: {}", rendered.subject);
    println!();
    print!("{}", rendered.body);
    if !rendered.body.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Load a stored template and compose it, applying the configured subject
/// prefix. Also returns whether the template is enabled.
pub(super) fn compose_stored(
    workspace: &Workspace,
    config: &Config,
    template_id: &str,
    context: &Context,
) -> Result<(RenderedNotification, bool)> {
    let store = TemplateStore::load(workspace.templates_path())?;
    let template = store.get(template_id)?;

    let mut rendered = template.compose(context);
    rendered.subject = format!("{}{}", config.subject_prefix, rendered.subject);
    Ok((rendered, template.enabled))
}
