//! Implementation of the `notice log` command.

use crate::cli::LogArgs;
use crate::error::Result;
use crate::events::{Event, read_events};
use crate::workspace::require_initialized_workspace;

/// Print the audit log, oldest first.
pub fn cmd_log(args: LogArgs) -> Result<()> {
    let workspace = require_initialized_workspace()?;
    let events = read_events(&workspace)?;

    for event in tail(&events, args.limit) {
        println!("{}", format_event(event));
    }
    Ok(())
}

/// The last `limit` events, or all of them.
fn tail(events: &[Event], limit: Option<usize>) -> &[Event] {
    match limit {
        Some(n) if n < events.len() => &events[events.len() - n..],
        _ => events,
    }
}

fn format_event(event: &Event) -> String {
    let mut line = format!(
        "{}  {:<16} {}",
        event.ts.format("%Y-%m-%d %H:%M:%S"),
        event.action.to_string(),
        event.actor
    );
    if let Some(template) = &event.template {
        line.push_str(&format!("  [{}]", template));
    }
    line
}
