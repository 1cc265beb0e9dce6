pub mod add;
pub mod clear;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod status;

use crate::api::TodoClient;
use crate::libs::config::Config;
use crate::store::TodoStore;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as completed (or reopen it)")]
    Complete(complete::CompleteArgs),
    #[command(about = "Edit a task's title or description")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete completed tasks or the whole list")]
    Clear(clear::ClearArgs),
    #[command(about = "Show a single task in detail")]
    Show(show::ShowArgs),
    #[command(about = "Check the todo service health")]
    Status,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Clear(args) => clear::cmd(args).await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Status => status::cmd().await,
        }
    }
}

/// Builds a store around a client configured from the saved settings.
pub(crate) fn store() -> Result<TodoStore<TodoClient>> {
    Ok(TodoStore::new(client()?))
}

/// Builds a bare client for commands that bypass the store.
pub(crate) fn client() -> Result<TodoClient> {
    let server = Config::read()?.server();
    crate::msg_debug!(format!("using todo service at {}", server.api_url));
    TodoClient::new(&server)
}
