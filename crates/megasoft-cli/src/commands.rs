//! Main commands enum.

use clap::Subcommand;

use crate::client_commands::ClientCommand;

/// Available commands for the megasoft tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Apply pending schema migrations, then show migration info
    Migrate {
        /// Drop the whole schema first (requires MEGASOFT_CLEAN_ENABLED)
        #[arg(long)]
        clean: bool,
    },

    /// Drop every table, view and trigger, including migration history
    Clean,

    /// Show applied and pending migrations
    Info,

    /// Check applied migrations against the available scripts
    Validate,

    /// Manage clients
    Client {
        #[command(subcommand)]
        command: ClientCommand,
    },

    /// Migrate, then walk through create, read, rename, list and delete
    Demo {
        /// Drop the whole schema first (requires MEGASOFT_CLEAN_ENABLED)
        #[arg(long)]
        clean: bool,
    },

    /// Show the resolved database path and migration source
    Paths,
}
