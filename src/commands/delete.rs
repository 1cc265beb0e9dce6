//! Single task deletion command.
//!
//! Asks for confirmation before deleting unless `--yes` is passed; the
//! local copy is dropped only after the server confirms.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task identifier
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = super::store()?;
    store.load().await?;

    if store.find(args.id).is_none() {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
    }

    store.remove_task(args.id).await?;

    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
