//! Implementation of the `notice outbox` command.

use crate::error::Result;
use crate::outbox::list_messages;
use crate::workspace::require_initialized_workspace;

/// List messages waiting in the outbox, oldest first.
pub fn cmd_outbox() -> Result<()> {
    let workspace = require_initialized_workspace()?;
    let config = workspace.load_config()?;
    let outbox_dir = workspace.outbox_dir(&config);

    let messages = list_messages(&outbox_dir)?;
    if messages.is_empty() {
        println!("Outbox is empty ({})", outbox_dir.display());
        return Ok(());
    }

    for message in &messages {
        println!("{}", message.id);
        println!("  to:      {}", message.to.join(", "));
        println!("  subject: {}", message.subject);
    }
    println!();
    println!("{} message(s) in {}", messages.len(), outbox_dir.display());
    Ok(())
}
