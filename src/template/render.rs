//! Two-pass placeholder substitution.

use crate::context::{Context, Row};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// `{{#open}}body{{/close}}`, shortest body first.
pub(super) static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{#([A-Za-z0-9_]+)\}\}(?s:(.*?))\{\{/([A-Za-z0-9_]+)\}\}")
        .expect("Invalid block regex")
});

/// `{{name}}`
pub(super) static SCALAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid scalar regex"));

/// Render a template against a context.
///
/// Blocks are expanded first, each row substituted into its own copy of the
/// block body. The text between blocks then has its scalars substituted from
/// the top-level context. Substituted text is never scanned again, so row
/// values containing `{{...}}` come out literally.
pub fn render(template: &str, context: &Context) -> String {
    let mut output = String::with_capacity(template.len());
    let mut last = 0;

    for caps in BLOCK_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        output.push_str(&substitute(&template[last..whole.start()], |name| {
            context.scalar(name)
        }));
        output.push_str(&expand_block(&caps[1], &caps[2], &caps[3], context));
        last = whole.end();
    }

    output.push_str(&substitute(&template[last..], |name| context.scalar(name)));
    output
}

/// Expand one block match. Mismatched keys and non-row fields render empty.
fn expand_block(open: &str, body: &str, close: &str, context: &Context) -> String {
    if open != close {
        return String::new();
    }

    let Some(rows) = context.rows(open) else {
        return String::new();
    };

    rows.iter().map(|row| render_row(body, row)).collect()
}

fn render_row(body: &str, row: &Row) -> String {
    substitute(body, |name| row.get(name).map(String::as_str)).into_owned()
}

/// Replace every `{{name}}` in `text` with its looked-up value, or nothing.
fn substitute<'t, 'v, F>(text: &'t str, lookup: F) -> Cow<'t, str>
where
    F: Fn(&str) -> Option<&'v str>,
{
    SCALAR_REGEX.replace_all(text, |caps: &Captures<'_>| lookup(&caps[1]).unwrap_or(""))
}
