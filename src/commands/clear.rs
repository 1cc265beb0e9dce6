//! Bulk deletion command.
//!
//! `--completed` deletes every finished task, `--all` wipes the whole
//! list. Both confirm first with the affected count and report the
//! server's deleted count afterwards through the store's notification.

use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Delete only the completed tasks
    #[arg(long, conflicts_with = "all", required_unless_present = "all")]
    completed: bool,
    /// Delete every task in the list
    #[arg(long)]
    all: bool,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: ClearArgs) -> Result<()> {
    let mut store = super::store()?;
    store.load().await?;

    if args.all {
        if store.total_count() == 0 {
            msg_info!(Message::NoTasksFound);
            return Ok(());
        }
        if !args.yes && !confirm(Message::ConfirmClearAll(store.total_count()))? {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
        store.clear_all().await?;
    } else {
        if store.completed_count() == 0 {
            msg_warning!(Message::NoCompletedTasks);
            return Ok(());
        }
        if !args.yes && !confirm(Message::ConfirmClearCompleted(store.completed_count()))? {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
        store.clear_completed().await?;
    }

    Ok(())
}

fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
