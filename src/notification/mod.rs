//! Notification template records and message composition.
//!
//! A [`NotificationTemplate`] is what an operator edits: a subject line and
//! a body, both rendered with the same engine. [`RebalanceContext`] is the
//! data shape supplied for portfolio rebalancing notices.

mod rebalance;

#[cfg(test)]
mod tests;

pub use rebalance::{Order, RebalanceContext};

use crate::context::Context;
use crate::error::{NoticeError, Result};
use crate::template::render;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Id of the built-in rebalancing template.
pub const REBALANCE_TEMPLATE_ID: &str = "rebalance";

/// Regex pattern for valid template IDs.
static TEMPLATE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("Invalid template ID regex"));

/// A stored notification template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub content: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// Subject and body produced from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNotification {
    pub template_id: String,
    pub subject: String,
    pub body: String,
}

impl NotificationTemplate {
    /// The rebalancing notice shipped with a fresh workspace.
    pub fn rebalance_default() -> Self {
        Self {
            id: REBALANCE_TEMPLATE_ID.to_string(),
            name: "调仓通知".to_string(),
            subject: "【调仓通知】{{strategyName}} {{date}}".to_string(),
            content: "策略名称：{{strategyName}}\n委托时间：{{orderTime}}\n{{#orders}}{{stock}}|{{quantity}}|{{orderType}}|{{price}}|{{action}}|{{position}}\n{{/orders}}".to_string(),
            enabled: true,
        }
    }

    /// Render subject and body against a context.
    pub fn compose(&self, context: &Context) -> RenderedNotification {
        RenderedNotification {
            template_id: self.id.clone(),
            subject: render(&self.subject, context),
            body: render(&self.content, context),
        }
    }

    /// Check the record before it is saved.
    ///
    /// Validation rules:
    /// - `id` is lowercase ASCII letters, digits, `-` or `_`, starting with
    ///   a letter or digit
    /// - `name`, `subject` and `content` are non-blank
    pub fn validate(&self) -> Result<()> {
        if !TEMPLATE_ID_REGEX.is_match(&self.id) {
            return Err(NoticeError::ValidationError(format!(
                "invalid template id '{}': use lowercase letters, digits, '-' or '_'",
                self.id
            )));
        }

        for (field, value) in [
            ("name", &self.name),
            ("subject", &self.subject),
            ("content", &self.content),
        ] {
            if value.trim().is_empty() {
                return Err(NoticeError::ValidationError(format!(
                    "template '{}': {} must not be empty",
                    self.id, field
                )));
            }
        }

        Ok(())
    }
}
