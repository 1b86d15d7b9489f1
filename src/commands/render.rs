//! Implementation of the `notice render` command.
//!
//! Renders a template file or inline string against a JSON context (or the
//! rebalancing sample) and prints the result exactly, with no trailing
//! newline added.

use super::{load_context, read_text_file};
use crate::cli::RenderArgs;
use crate::context::Context;
use crate::error::{NoticeError, Result};
use crate::template::{placeholders, render};
use std::io::Write;

/// Execute the `notice render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let template = match (&args.inline, &args.template) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_text_file(path, "template file")?,
        (None, None) => {
            return Err(NoticeError::UserError(
                "pass a template with --template <FILE> or --inline <TEXT>".to_string(),
            ));
        }
    };

    let context = if args.context.is_some() || args.sample {
        load_context(args.context.as_deref())?
    } else {
        Context::new()
    };

    let output = render(&template, &context);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| NoticeError::IoError(format!("failed to write output: {}", e)))?;

    if args.strict {
        check_strict(&template, &context)?;
    }

    Ok(())
}

/// Fail if the template uses names the context lacks, or has blocks that
/// can never render because their keys do not match.
fn check_strict(template: &str, context: &Context) -> Result<()> {
    let fields = placeholders(template);
    let mut problems: Vec<String> = Vec::new();

    let missing = fields.missing(context);
    if !missing.is_empty() {
        problems.push(format!("undefined fields: {}", missing.join(", ")));
    }

    for (open, close) in &fields.mismatched {
        problems.push(format!(
            "block {{{{#{}}}}} is closed by {{{{/{}}}}} and renders empty",
            open, close
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(NoticeError::ValidationError(problems.join("; ")))
    }
}
