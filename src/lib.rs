//! # Todoctl - Command-Line Todo Client
//!
//! A command-line client for a personal todo list backed by a remote
//! HTTP service.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete, and delete tasks
//! - **Filtered Views**: Show all, active, or completed tasks, unfinished
//!   newest work first
//! - **Bulk Cleanup**: Clear completed tasks or wipe the whole list
//! - **Server-Confirmed State**: The local snapshot only changes after
//!   the service confirms a mutation
//! - **Health Probe**: Check the service status and version
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todoctl::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
pub mod store;
