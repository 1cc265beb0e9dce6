//! Task editing command.
//!
//! Updates a task's title and description from flags, or interactively
//! when no flag is given, pre-filling the prompts with current values.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task identifier
    id: i64,
    /// New task title
    #[arg(short, long)]
    title: Option<String>,
    /// New task description
    #[arg(short, long)]
    description: Option<String>,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let mut store = super::store()?;
    store.load().await?;

    let current = match store.find(args.id) {
        Some(task) => task.clone(),
        None => msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id)),
    };

    let (title, description) = if args.title.is_none() && args.description.is_none() {
        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitleEdit.to_string())
            .default(current.title.clone())
            .interact_text()?;
        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescriptionEdit.to_string())
            .default(current.description.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let description = description.trim().to_string();
        (title, (!description.is_empty()).then_some(description))
    } else {
        (
            args.title.unwrap_or_else(|| current.title.clone()),
            args.description.or_else(|| current.description.clone()),
        )
    };

    let title = title.trim().to_string();
    if title.is_empty() {
        msg_bail_anyhow!(Message::EmptyTaskTitle);
    }

    if title == current.title && description == current.description {
        msg_print!(Message::NoChangesDetected);
        return Ok(());
    }

    store.edit_task(args.id, &title, description.as_deref()).await?;

    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}
