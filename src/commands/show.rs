//! Single task detail command.

use crate::api::TodoApi;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task identifier
    id: i64,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let client = super::client()?;
    let task = client.get_task(args.id).await?;

    View::task(&task);
    Ok(())
}
