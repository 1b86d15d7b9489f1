//! Template store persisted as `.notice/templates.yaml`.
//!
//! The store is a plain list of [`NotificationTemplate`] records. Every
//! mutation validates the affected record and keeps ids unique; callers
//! persist with [`TemplateStore::save`], which writes atomically.

mod operations;


pub use operations::TemplatePatch;

use crate::notification::NotificationTemplate;
use serde::{Deserialize, Serialize};

/// All templates in a workspace, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateStore {
    pub templates: Vec<NotificationTemplate>,
}

impl TemplateStore {
    /// A store holding only the built-in rebalancing template.
    pub fn seeded() -> Self {
        Self {
            templates: vec![NotificationTemplate::rebalance_default()],
        }
    }
}
