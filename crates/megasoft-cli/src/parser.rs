//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the megasoft client registry.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "megasoft")]
#[command(about = "Manage the megasoft client database and its schema migrations")]
#[command(version)]
pub struct Cli {
    /// Database file to use (overrides MEGASOFT_DATABASE)
    #[arg(long = "database", global = true)]
    pub database: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
