//! Audit log for workspace changes.
//!
//! Events are appended as NDJSON (one JSON object per line) to
//! `.notice/events/events.ndjson`. Template edits and test sends are logged;
//! renders and previews are not.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (init, template_add, test_send, ...)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `template`: Optional template id
//! - `details`: Freeform object with action-specific details

use crate::error::{NoticeError, Result};
use crate::workspace::Workspace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Workspace initialized
    Init,
    /// Template added to the store
    TemplateAdd,
    /// Template name, subject or content changed
    TemplateEdit,
    /// Template enabled
    TemplateEnable,
    /// Template disabled
    TemplateDisable,
    /// Template removed from the store
    TemplateRemove,
    /// Test notification written to the outbox
    TestSend,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Init => write!(f, "init"),
            EventAction::TemplateAdd => write!(f, "template_add"),
            EventAction::TemplateEdit => write!(f, "template_edit"),
            EventAction::TemplateEnable => write!(f, "template_enable"),
            EventAction::TemplateDisable => write!(f, "template_disable"),
            EventAction::TemplateRemove => write!(f, "template_remove"),
            EventAction::TestSend => write!(f, "test_send"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Template id for template-specific events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            template: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template = Some(template_id.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| NoticeError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// `USER@HOST` for event metadata.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

pub fn events_file_path(workspace: &Workspace) -> PathBuf {
    workspace.events_dir().join("events.ndjson")
}

/// Append an event to the events log, creating the file if needed.
pub fn append_event(workspace: &Workspace, event: &Event) -> Result<()> {
    let events_file = events_file_path(workspace);
    let json_line = event.to_ndjson_line()?;

    let events_dir = workspace.events_dir();
    if !events_dir.exists() {
        fs::create_dir_all(&events_dir).map_err(|e| {
            NoticeError::IoError(format!(
                "failed to create events directory '{}': {}",
                events_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            NoticeError::IoError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        NoticeError::IoError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        NoticeError::IoError(format!(
            "failed to sync events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read all events, oldest first. A missing log is empty.
pub fn read_events(workspace: &Workspace) -> Result<Vec<Event>> {
    let events_file = events_file_path(workspace);
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&events_file).map_err(|e| {
        NoticeError::IoError(format!(
            "failed to read events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| {
                NoticeError::UserError(format!(
                    "malformed event on line {} of '{}': {}",
                    i + 1,
                    events_file.display(),
                    e
                ))
            })
        })
        .collect()
}
