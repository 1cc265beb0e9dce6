//! Task listing command.
//!
//! Loads a fresh snapshot from the service and renders the visible slice
//! as a table: incomplete tasks first, newest creation first within each
//! group. The summary counts always reflect the whole collection, not
//! just the visible slice.

use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which slice of the collection to show
    #[arg(short, long, value_enum, default_value = "all")]
    filter: TaskFilter,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let mut store = super::store()?;
    store.load().await?;
    store.set_filter(args.filter);

    let visible = store.visible_tasks();
    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
    } else {
        View::tasks(&visible);
    }
    View::summary(store.total_count(), store.active_count(), store.completed_count());

    Ok(())
}
