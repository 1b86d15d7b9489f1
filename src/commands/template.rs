//! Implementation of the `notice template` subcommands.
//!
//! Each mutating subcommand loads the store, applies one change, saves it
//! atomically, and logs an event. The pure store edits live in
//! [`crate::store`]; this module adds I/O, output, and logging.

use super::read_text_file;
use crate::cli::{TemplateAddArgs, TemplateEditArgs, TemplateIdArgs, TemplateRemoveArgs};
use crate::error::{NoticeError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::notification::NotificationTemplate;
use crate::store::{TemplatePatch, TemplateStore};
use crate::template::placeholders;
use crate::workspace::{Workspace, require_initialized_workspace};
use serde_json::json;

/// Execute `notice template list`.
pub fn cmd_list() -> Result<()> {
    let workspace = require_initialized_workspace()?;
    let store = TemplateStore::load(workspace.templates_path())?;

    if store.list().is_empty() {
        println!("No templates. Add one with `notice template add`.");
        return Ok(());
    }

    println!("{:<20} {:<8} NAME", "ID", "ENABLED");
    for template in store.list() {
        println!(
            "{:<20} {:<8} {}",
            template.id,
            if template.enabled { "yes" } else { "no" },
            template.name
        );
    }
    Ok(())
}

/// Execute `notice template show`.
pub fn cmd_show(args: TemplateIdArgs) -> Result<()> {
    let workspace = require_initialized_workspace()?;
    let store = TemplateStore::load(workspace.templates_path())?;
    let template = store.get(&args.template_id)?;

    print!("{}", describe(template));
    Ok(())
}

/// Execute `notice template add`.
pub fn cmd_add(args: TemplateAddArgs) -> Result<()> {
    let workspace = require_initialized_workspace()?;

    let content = match (args.content, args.content_file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_text_file(&path, "content file")?,
        (None, None) => {
            return Err(NoticeError::UserError(
                "pass the body with --content or --content-file".to_string(),
            ));
        }
    };

    let template = NotificationTemplate {
        id: args.template_id,
        name: args.name,
        subject: args.subject,
        content,
        enabled: !args.disabled,
    };
    let id = template.id.clone();

    add_template(&workspace, template)?;
    println!("Added template '{}'", id);
    Ok(())
}

/// Execute `notice template edit`.
pub fn cmd_edit(args: TemplateEditArgs) -> Result<()> {
    let workspace = require_initialized_workspace()?;

    let content = match (args.content, args.content_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(read_text_file(&path, "content file")?),
        (None, None) => None,
    };
    let patch = TemplatePatch {
        name: args.name,
        subject: args.subject,
        content,
    };
    if patch.is_empty() {
        return Err(NoticeError::UserError(
            "nothing to change: pass --name, --subject, --content or --content-file".to_string(),
        ));
    }

    edit_template(&workspace, &args.template_id, patch)?;
    println!("Updated template '{}'", args.template_id);
    Ok(())
}

/// Execute `notice template enable` / `notice template disable`.
pub fn cmd_set_enabled(args: TemplateIdArgs, enabled: bool) -> Result<()> {
    let workspace = require_initialized_workspace()?;
    let state = if enabled { "enabled" } else { "disabled" };

    if set_template_enabled(&workspace, &args.template_id, enabled)? {
        println!("Template '{}' {}", args.template_id, state);
    } else {
        println!("Template '{}' already {}", args.template_id, state);
    }
    Ok(())
}

/// Execute `notice template remove`.
pub fn cmd_remove(args: TemplateRemoveArgs) -> Result<()> {
    if !args.force {
        return Err(NoticeError::UserError(format!(
            "refusing to remove template '{}' without --force",
            args.template_id
        )));
    }

    let workspace = require_initialized_workspace()?;
    remove_template(&workspace, &args.template_id)?;
    println!("Removed template '{}'", args.template_id);
    Ok(())
}

pub(crate) fn add_template(workspace: &Workspace, template: NotificationTemplate) -> Result<()> {
    let mut store = TemplateStore::load(workspace.templates_path())?;
    let event = Event::new(EventAction::TemplateAdd)
        .with_template(&template.id)
        .with_details(json!({ "name": template.name, "enabled": template.enabled }));

    store.add(template)?;
    store.save(workspace.templates_path())?;
    append_event(workspace, &event)
}

pub(crate) fn edit_template(workspace: &Workspace, id: &str, patch: TemplatePatch) -> Result<()> {
    let mut store = TemplateStore::load(workspace.templates_path())?;

    let mut changed = Vec::new();
    if patch.name.is_some() {
        changed.push("name");
    }
    if patch.subject.is_some() {
        changed.push("subject");
    }
    if patch.content.is_some() {
        changed.push("content");
    }

    store.update(id, patch)?;
    store.save(workspace.templates_path())?;

    let event = Event::new(EventAction::TemplateEdit)
        .with_template(id)
        .with_details(json!({ "changed": changed }));
    append_event(workspace, &event)
}

/// Returns whether the flag changed. Unchanged flags are not logged.
pub(crate) fn set_template_enabled(workspace: &Workspace, id: &str, enabled: bool) -> Result<bool> {
    let mut store = TemplateStore::load(workspace.templates_path())?;
    if !store.set_enabled(id, enabled)? {
        return Ok(false);
    }
    store.save(workspace.templates_path())?;

    let action = if enabled {
        EventAction::TemplateEnable
    } else {
        EventAction::TemplateDisable
    };
    append_event(workspace, &Event::new(action).with_template(id))?;
    Ok(true)
}

pub(crate) fn remove_template(workspace: &Workspace, id: &str) -> Result<()> {
    let mut store = TemplateStore::load(workspace.templates_path())?;
    let removed = store.remove(id)?;
    store.save(workspace.templates_path())?;

    let event = Event::new(EventAction::TemplateRemove)
        .with_template(id)
        .with_details(json!({ "name": removed.name }));
    append_event(workspace, &event)
}

/// Human-readable summary of a template and the fields it consumes.
fn describe(template: &NotificationTemplate) -> String {
    let mut out = String::new();
    out.push_str(&format!("ID:       {}\n", template.id));
    out.push_str(&format!("Name:     {}\n", template.name));
    out.push_str(&format!(
        "Enabled:  {}\n",
        if template.enabled { "yes" } else { "no" }
    ));
    out.push_str(&format!("Subject:  {}\n", template.subject));
    out.push_str("\nContent:\n");
    out.push_str(&template.content);
    if !template.content.ends_with('\n') {
        out.push('\n');
    }

    let subject = placeholders(&template.subject);
    let content = placeholders(&template.content);

    let mut scalars = subject.scalars.clone();
    for name in content.scalars {
        if !scalars.contains(&name) {
            scalars.push(name);
        }
    }

    out.push_str("\nFields:\n");
    if !scalars.is_empty() {
        out.push_str(&format!("  {}\n", scalars.join(", ")));
    }
    for block in subject.blocks.iter().chain(&content.blocks) {
        out.push_str(&format!("  #{}: {}\n", block.key, block.fields.join(", ")));
    }
    for (open, close) in subject.mismatched.iter().chain(&content.mismatched) {
        out.push_str(&format!(
            "  warning: {{{{#{}}}}} is closed by {{{{/{}}}}} and always renders empty\n",
            open, close
        ));
    }

    out
}
