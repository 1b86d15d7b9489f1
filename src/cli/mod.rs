//! CLI argument parsing for notice.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Notice: notification templates for portfolio rebalancing alerts.
///
/// Templates use `{{field}}` placeholders and `{{#rows}}...{{/rows}}` blocks.
/// A workspace (`.notice/`) stores templates, config, an outbox for test
/// sends, and an audit log.
#[derive(Parser, Debug)]
#[command(name = "notice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for notice.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a workspace in the current directory.
    ///
    /// Creates `.notice/` with a default config, the built-in rebalancing
    /// template, an outbox, and an events log. Existing files are kept.
    Init,

    /// Render a template file or string and print the result.
    ///
    /// Does not need a workspace.
    Render(RenderArgs),

    /// Preview a stored template's subject and body.
    Preview(PreviewArgs),

    /// Compose a test notification and place it in the outbox.
    #[command(name = "test-send")]
    TestSend(TestSendArgs),

    /// Template management commands.
    Template(TemplateCommand),

    /// List messages waiting in the outbox.
    Outbox,

    /// Show the workspace audit log.
    Log(LogArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file to render.
    #[arg(short, long, conflicts_with = "inline", required_unless_present = "inline")]
    pub template: Option<PathBuf>,

    /// Template text given directly on the command line.
    #[arg(short, long)]
    pub inline: Option<String>,

    /// JSON file supplying the context.
    #[arg(short, long, conflicts_with = "sample")]
    pub context: Option<PathBuf>,

    /// Use the built-in rebalancing sample as context.
    #[arg(long)]
    pub sample: bool,

    /// Fail if the template references fields the context does not define.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Template ID. Defaults to `default_template` from config.
    pub template_id: Option<String>,

    /// JSON file supplying the context. Defaults to the rebalancing sample.
    #[arg(short, long)]
    pub context: Option<PathBuf>,
}

/// Arguments for the `test-send` command.
#[derive(Parser, Debug)]
pub struct TestSendArgs {
    /// Template ID. Defaults to `default_template` from config.
    pub template_id: Option<String>,

    /// Recipient addresses. Defaults to `default_recipients` from config.
    #[arg(long, value_delimiter = ',')]
    pub to: Vec<String>,

    /// JSON file supplying the context. Defaults to the rebalancing sample.
    #[arg(short, long)]
    pub context: Option<PathBuf>,
}

/// Template subcommands.
#[derive(Parser, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub action: TemplateAction,
}

/// Available template actions.
#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// List stored templates.
    List,

    /// Show a template and the fields it uses.
    Show(TemplateIdArgs),

    /// Add a new template.
    Add(TemplateAddArgs),

    /// Change a template's name, subject, or content.
    Edit(TemplateEditArgs),

    /// Enable a template for test sends.
    Enable(TemplateIdArgs),

    /// Disable a template. Disabled templates can be previewed but not sent.
    Disable(TemplateIdArgs),

    /// Remove a template.
    ///
    /// Requires --force flag to prevent accidental removal.
    Remove(TemplateRemoveArgs),
}

/// A single template ID argument.
#[derive(Parser, Debug)]
pub struct TemplateIdArgs {
    /// Template ID (e.g., rebalance).
    pub template_id: String,
}

/// Arguments for the `template add` command.
#[derive(Parser, Debug)]
pub struct TemplateAddArgs {
    /// ID for the new template (lowercase letters, digits, '-', '_').
    pub template_id: String,

    /// Display name.
    #[arg(long)]
    pub name: String,

    /// Subject template.
    #[arg(long)]
    pub subject: String,

    /// Body template text.
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,

    /// Read the body template from a file.
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Add the template disabled.
    #[arg(long)]
    pub disabled: bool,
}

/// Arguments for the `template edit` command.
#[derive(Parser, Debug)]
pub struct TemplateEditArgs {
    /// Template ID to edit.
    pub template_id: String,

    /// New display name.
    #[arg(long)]
    pub name: Option<String>,

    /// New subject template.
    #[arg(long)]
    pub subject: Option<String>,

    /// New body template text.
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the new body template from a file.
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

/// Arguments for the `template remove` command.
#[derive(Parser, Debug)]
pub struct TemplateRemoveArgs {
    /// Template ID to remove.
    pub template_id: String,

    /// Confirm the removal.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `log` command.
#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Show only the most recent N events.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
