//! Core library modules for the todoctl application.
//!
//! Provides the shared building blocks the client, store, and commands
//! sit on: the task data model, configuration handling, message display,
//! and console rendering.

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod view;
