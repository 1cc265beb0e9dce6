//! Completion toggle command.
//!
//! Marks a task as completed, or reopens it with `--undo`. The server's
//! returned record replaces the stored copy in full.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task identifier
    id: i64,
    /// Reopen the task instead of completing it
    #[arg(long)]
    undo: bool,
}

pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let mut store = super::store()?;
    store.load().await?;

    if store.find(args.id).is_none() {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    }

    let completed = !args.undo;
    store.toggle_task(args.id, completed).await?;

    if completed {
        msg_success!(Message::TaskCompleted(args.id));
    } else {
        msg_success!(Message::TaskReopened(args.id));
    }
    Ok(())
}
