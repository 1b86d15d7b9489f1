//! Template engine for notification messages.
//!
//! This module expands user-authored notification templates against a
//! [`Context`](crate::context::Context). It is used for:
//!
//! - Previewing a stored template against sample or live data
//! - Composing the subject and body of a test-send message
//!
//! # Syntax
//!
//! - `{{name}}` - Substitutes the scalar field `name`
//! - `{{#key}}...{{/key}}` - Repeats the enclosed text once per row of `key`;
//!   inside, `{{field}}` refers to the current row
//!
//! Names are ASCII word characters. Any other text between braces is left
//! as written.
//!
//! # Error Handling
//!
//! Rendering is total: unknown fields become empty strings, and a block whose
//! open and close keys differ, or whose field is not a row sequence, renders
//! empty. Values are inserted verbatim without HTML escaping.

mod fields;
mod render;

#[cfg(test)]
mod tests;

pub use fields::{BlockFields, TemplateFields, placeholders};
pub use render::render;
