//! Config struct definition and default implementation.

use crate::notification::REBALANCE_TEMPLATE_ID;
use serde::{Deserialize, Serialize};

/// Configuration for a notice workspace.
///
/// This struct represents the contents of `.notice/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Composition settings
    // =========================================================================
    /// Template used by `preview` and `test-send` when no id is given.
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Text prepended verbatim to every composed subject.
    #[serde(default)]
    pub subject_prefix: String,

    // =========================================================================
    // Test-send settings
    // =========================================================================
    /// From address recorded on outbox messages.
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Recipients used when `test-send` is given no `--to`.
    #[serde(default)]
    pub default_recipients: Vec<String>,

    /// Outbox directory, relative to the workspace root.
    #[serde(default = "default_outbox_dir")]
    pub outbox_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            subject_prefix: String::new(),
            sender: default_sender(),
            default_recipients: Vec::new(),
            outbox_dir: default_outbox_dir(),
        }
    }
}

fn default_template() -> String {
    REBALANCE_TEMPLATE_ID.to_string()
}

fn default_sender() -> String {
    "notice@localhost".to_string()
}

fn default_outbox_dir() -> String {
    "outbox".to_string()
}
