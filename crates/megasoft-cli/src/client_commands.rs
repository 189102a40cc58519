//! Client management subcommands.

use clap::Subcommand;

/// Client CRUD subcommands.
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Create a client and print its ID
    Create {
        /// Client name (2 to 100 characters)
        name: String,
    },

    /// Print a client's name
    Get {
        /// Client ID
        id: i64,
    },

    /// Rename a client
    Rename {
        /// Client ID
        id: i64,
        /// New name (2 to 100 characters)
        name: String,
    },

    /// Delete a client
    Delete {
        /// Client ID
        id: i64,
    },

    /// List all clients
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
