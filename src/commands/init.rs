//! Implementation of the `notice init` command.
//!
//! # What `notice init` does
//!
//! 1. Creates the workspace directory (default: `.notice/`)
//! 2. Writes `config.yaml` with defaults (if missing)
//! 3. Writes `templates.yaml` seeded with the rebalancing template (if missing)
//! 4. Creates the outbox and events directories
//! 5. Logs an `init` event naming what was created

use crate::config::Config;
use crate::error::{NoticeError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::fs::atomic_write_file;
use crate::store::TemplateStore;
use crate::workspace::Workspace;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Execute the `notice init` command.
///
/// This command is **idempotent**: running it again keeps existing config
/// and templates and only fills in what is missing.
pub fn cmd_init() -> Result<()> {
    let workspace = Workspace::resolve()?;
    let created = init_workspace(&workspace)?;

    if created.is_empty() {
        println!(
            "Workspace already initialized at {}",
            workspace.root.display()
        );
    } else {
        println!("Initialized workspace at {}", workspace.root.display());
        for item in &created {
            println!("  created {}", item);
        }
    }

    Ok(())
}

/// Create whatever parts of the workspace are missing.
///
/// Returns the names of the created entries, relative to the workspace root.
pub(crate) fn init_workspace(workspace: &Workspace) -> Result<Vec<String>> {
    let mut created = Vec::new();

    if ensure_dir(&workspace.root)? {
        created.push(".".to_string());
    }

    let config = if workspace.config_path().exists() {
        Config::load(workspace.config_path())?
    } else {
        let config = Config::default();
        atomic_write_file(workspace.config_path(), &config.to_yaml()?)?;
        created.push("config.yaml".to_string());
        config
    };

    if !workspace.templates_path().exists() {
        TemplateStore::seeded().save(workspace.templates_path())?;
        created.push("templates.yaml".to_string());
    }

    if ensure_dir(&workspace.outbox_dir(&config))? {
        created.push(format!("{}/", config.outbox_dir));
    }

    if ensure_dir(&workspace.events_dir())? {
        created.push("events/".to_string());
    }

    if !created.is_empty() {
        let event = Event::new(EventAction::Init).with_details(json!({ "created": created }));
        append_event(workspace, &event)?;
    }

    Ok(created)
}

/// Create a directory if missing. Returns whether it was created.
fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| {
        NoticeError::IoError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(true)
}
