//! Command implementations for notice.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the context and template lookups that several
//! commands share.

mod init;
mod log;
mod outbox;
mod preview;
mod render;
mod template;
mod test_send;

use crate::cli::{Command, TemplateAction, TemplateCommand};
use crate::config::Config;
use crate::context::Context;
use crate::error::{NoticeError, Result};
use crate::notification::RebalanceContext;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init => init::cmd_init(),
        Command::Render(args) => render::cmd_render(args),
        Command::Preview(args) => preview::cmd_preview(args),
        Command::TestSend(args) => test_send::cmd_test_send(args),
        Command::Template(template_cmd) => dispatch_template(template_cmd),
        Command::Outbox => outbox::cmd_outbox(),
        Command::Log(args) => log::cmd_log(args),
    }
}

/// Dispatch template subcommands.
fn dispatch_template(template_cmd: TemplateCommand) -> Result<()> {
    match template_cmd.action {
        TemplateAction::List => template::cmd_list(),
        TemplateAction::Show(args) => template::cmd_show(args),
        TemplateAction::Add(args) => template::cmd_add(args),
        TemplateAction::Edit(args) => template::cmd_edit(args),
        TemplateAction::Enable(args) => template::cmd_set_enabled(args, true),
        TemplateAction::Disable(args) => template::cmd_set_enabled(args, false),
        TemplateAction::Remove(args) => template::cmd_remove(args),
    }
}

/// Context from a JSON file, or the rebalancing sample when none is given.
fn load_context(path: Option<&Path>) -> Result<Context> {
    match path {
        Some(path) => Context::load(path),
        None => RebalanceContext::sample().to_context(),
    }
}

/// The template id to use: the explicit one, else the configured default.
fn resolve_template_id(explicit: Option<String>, config: &Config) -> String {
    explicit.unwrap_or_else(|| config.default_template.clone())
}

/// Read a UTF-8 text file named on the command line.
fn read_text_file(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        NoticeError::IoError(format!(
            "failed to read {} '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}
