//! `megasoft` command-line adapter.
//!
//! [`bootstrap`] is the composition root; [`handlers`] turn parsed
//! commands into calls on `megasoft_core::AppCore`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Runtime is driven from main.rs
use tokio as _;

pub mod bootstrap;
pub mod client_commands;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, load_env_file};
pub use client_commands::ClientCommand;
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
