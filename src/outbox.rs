//! Outbox hand-off for test sends.
//!
//! A test send composes the message and writes it as a JSON file under the
//! outbox directory. Delivery belongs to whatever transport watches that
//! directory; nothing here talks to a mail server.

use crate::error::{NoticeError, Result};
use crate::fs::atomic_write_file;
use crate::notification::RenderedNotification;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A composed message waiting for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxMessage {
    /// `<timestamp>-<template id>`, also the file stem.
    pub id: String,
    pub created: DateTime<Utc>,
    pub from: String,
    pub to: Vec<String>,
    pub template_id: String,
    pub subject: String,
    pub body: String,
}

impl OutboxMessage {
    /// Build a message from a rendered notification.
    ///
    /// Requires at least one recipient, and every address must contain `@`.
    pub fn new(
        from: &str,
        to: Vec<String>,
        rendered: RenderedNotification,
        created: DateTime<Utc>,
    ) -> Result<Self> {
        if to.is_empty() {
            return Err(NoticeError::UserError(
                "no recipients: pass --to or set default_recipients in config.yaml".to_string(),
            ));
        }
        if let Some(bad) = to.iter().find(|addr| !addr.contains('@')) {
            return Err(NoticeError::UserError(format!(
                "'{}' is not an email address",
                bad
            )));
        }

        Ok(Self {
            id: format!(
                "{}-{}",
                created.format("%Y%m%dT%H%M%S%3fZ"),
                rendered.template_id
            ),
            created,
            from: from.to_string(),
            to,
            template_id: rendered.template_id,
            subject: rendered.subject,
            body: rendered.body,
        })
    }

    /// Position among messages sharing a timestamp and template: `1` for the
    /// first, then the number of the `-N` suffix `write_message` added.
    fn collision_index(&self) -> u32 {
        let base = format!(
            "{}-{}",
            self.created.format("%Y%m%dT%H%M%S%3fZ"),
            self.template_id
        );
        self.id
            .strip_prefix(&base)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse().ok())
            .unwrap_or(1)
    }
}

/// Write a message into the outbox and return its path.
///
/// If a message with the same id already exists, a numeric suffix is added
/// to the id rather than overwriting it.
pub fn write_message(outbox_dir: &Path, message: &mut OutboxMessage) -> Result<PathBuf> {
    let base_id = message.id.clone();
    let mut path = outbox_dir.join(format!("{}.json", message.id));
    let mut n = 2;
    while path.exists() {
        message.id = format!("{}-{}", base_id, n);
        path = outbox_dir.join(format!("{}.json", message.id));
        n += 1;
    }

    let json = serde_json::to_string_pretty(message).map_err(|e| {
        NoticeError::UserError(format!("failed to serialize outbox message: {}", e))
    })?;
    atomic_write_file(&path, &json)?;
    Ok(path)
}

/// All messages in the outbox, oldest first. Same-timestamp collisions keep
/// their write order. A missing outbox is empty.
pub fn list_messages(outbox_dir: &Path) -> Result<Vec<OutboxMessage>> {
    if !outbox_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(outbox_dir).map_err(|e| {
        NoticeError::IoError(format!(
            "failed to read outbox '{}': {}",
            outbox_dir.display(),
            e
        ))
    })?;

    let mut messages = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| NoticeError::IoError(format!("failed to read outbox entry: {}", e)))?;
        let path = entry.path();
        let is_message = path.extension().is_some_and(|ext| ext == "json")
            && !path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.'));
        if !is_message {
            continue;
        }

        let text = fs::read_to_string(&path).map_err(|e| {
            NoticeError::IoError(format!("failed to read '{}': {}", path.display(), e))
        })?;
        let message: OutboxMessage = serde_json::from_str(&text).map_err(|e| {
            NoticeError::UserError(format!(
                "malformed outbox message '{}': {}",
                path.display(),
                e
            ))
        })?;
        messages.push(message);
    }

    messages.sort_by(|a, b| {
        (a.created, &a.template_id, a.collision_index(), &a.id).cmp(&(
            b.created,
            &b.template_id,
            b.collision_index(),
            &b.id,
        ))
    });
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn rendered() -> RenderedNotification {
        RenderedNotification {
            template_id: "rebalance".to_string(),
            subject: "【调仓通知】趋势增强策略".to_string(),
            body: "招商银行|2000\n".to_string(),
        }
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 35, 20).unwrap()
    }

    #[test]
    fn test_message_id_from_timestamp_and_template() {
        let message = OutboxMessage::new(
            "notice@localhost",
            vec!["pm@example.com".to_string()],
            rendered(),
            created(),
        )
        .unwrap();

        assert_eq!(message.id, "20240115T093520000Z-rebalance");
        assert_eq!(message.subject, "【调仓通知】趋势增强策略");
    }

    #[test]
    fn test_requires_recipient() {
        let err = OutboxMessage::new("a@b.c", Vec::new(), rendered(), created()).unwrap_err();
        assert!(err.to_string().contains("no recipients"));
    }

    #[test]
    fn test_rejects_bad_address() {
        let err = OutboxMessage::new(
            "a@b.c",
            vec!["pm@example.com".to_string(), "pm".to_string()],
            rendered(),
            created(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("'pm'"));
    }

    #[test]
    fn test_write_and_list_messages() {
        let temp = TempDir::new().unwrap();
        let outbox = temp.path().join("outbox");

        let mut message =
            OutboxMessage::new("a@b.c", vec!["x@y.z".to_string()], rendered(), created())
                .unwrap();
        let path = write_message(&outbox, &mut message).unwrap();
        assert!(path.ends_with("20240115T093520000Z-rebalance.json"));

        let listed = list_messages(&outbox).unwrap();
        assert_eq!(listed, vec![message]);
    }

    #[test]
    fn test_write_does_not_overwrite_same_id() {
        let temp = TempDir::new().unwrap();
        let outbox = temp.path().join("outbox");

        let make = || {
            OutboxMessage::new("a@b.c", vec!["x@y.z".to_string()], rendered(), created())
                .unwrap()
        };
        let mut first = make();
        let mut second = make();
        write_message(&outbox, &mut first).unwrap();
        write_message(&outbox, &mut second).unwrap();

        assert_eq!(second.id, "20240115T093520000Z-rebalance-2");
        assert_eq!(list_messages(&outbox).unwrap().len(), 2);
    }

    #[test]
    fn test_list_orders_collision_suffixes_numerically() {
        let temp = TempDir::new().unwrap();
        let outbox = temp.path().join("outbox");

        for _ in 0..11 {
            let mut message =
                OutboxMessage::new("a@b.c", vec!["x@y.z".to_string()], rendered(), created())
                    .unwrap();
            write_message(&outbox, &mut message).unwrap();
        }

        let ids: Vec<String> = list_messages(&outbox)
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids.len(), 11);
        assert_eq!(ids[0], "20240115T093520000Z-rebalance");
        assert_eq!(ids[1], "20240115T093520000Z-rebalance-2");
        assert_eq!(ids[9], "20240115T093520000Z-rebalance-10");
        assert_eq!(ids[10], "20240115T093520000Z-rebalance-11");
    }

    #[test]
    fn test_list_missing_outbox_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(list_messages(&temp.path().join("outbox")).unwrap().is_empty());
    }
}
