//! Task creation command.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Optional longer description
    #[arg(short, long)]
    description: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    // Refused here, before anything is dispatched; the client enforces
    // the same precondition.
    let title = args.title.trim().to_string();
    if title.is_empty() {
        msg_bail_anyhow!(Message::EmptyTaskTitle);
    }

    let mut store = super::store()?;
    let task = store.add_task(&title, args.description.as_deref()).await?;

    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}
