//! Terminal output formatting.

pub mod tables;

pub use tables::{
    format_client_row, format_migration_row, print_clients, print_migrations, truncate_string,
};
