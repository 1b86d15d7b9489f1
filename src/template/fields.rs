//! Placeholder inspection.
//!
//! Reports which fields a template consumes without rendering it. The scan
//! uses the same patterns as [`render`](super::render), so what it reports
//! is exactly what rendering will look up.

use super::render::{BLOCK_REGEX, SCALAR_REGEX};
use crate::context::Context;

/// Fields referenced inside one `{{#key}}...{{/key}}` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockFields {
    pub key: String,
    pub fields: Vec<String>,
}

/// Everything a template references, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFields {
    /// Top-level scalar names.
    pub scalars: Vec<String>,
    /// Blocks with matching keys.
    pub blocks: Vec<BlockFields>,
    /// Blocks whose open and close keys differ, as `(open, close)`.
    /// These always render empty.
    pub mismatched: Vec<(String, String)>,
}

impl TemplateFields {
    /// Names the context cannot satisfy.
    ///
    /// Scalars are reported by name, blocks as `#key`. Row fields are not
    /// checked since rows may legitimately differ in shape.
    pub fn missing(&self, context: &Context) -> Vec<String> {
        let scalars = self
            .scalars
            .iter()
            .filter(|name| context.scalar(name).is_none())
            .cloned();
        let blocks = self
            .blocks
            .iter()
            .filter(|block| context.rows(&block.key).is_none())
            .map(|block| format!("#{}", block.key));

        scalars.chain(blocks).collect()
    }
}

/// Collect the placeholders of a template.
pub fn placeholders(template: &str) -> TemplateFields {
    let mut fields = TemplateFields::default();
    let mut last = 0;

    for caps in BLOCK_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        collect_scalars(&template[last..whole.start()], &mut fields.scalars);
        last = whole.end();

        let (open, close) = (&caps[1], &caps[3]);
        if open != close {
            fields.mismatched.push((open.to_string(), close.to_string()));
            continue;
        }

        let index = match fields.blocks.iter().position(|b| b.key == open) {
            Some(index) => index,
            None => {
                fields.blocks.push(BlockFields {
                    key: open.to_string(),
                    fields: Vec::new(),
                });
                fields.blocks.len() - 1
            }
        };
        collect_scalars(&caps[2], &mut fields.blocks[index].fields);
    }

    collect_scalars(&template[last..], &mut fields.scalars);
    fields
}

fn collect_scalars(text: &str, names: &mut Vec<String>) {
    for caps in SCALAR_REGEX.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
}
