//! Domain types.
//!
//! Plain data types shared between services and adapters. Nothing here
//! touches storage.

mod client;
mod migration;

pub use client::{CLIENT_NAME_MAX_LEN, CLIENT_NAME_MIN_LEN, Client, validate_client_name};
pub use migration::{CleanReport, MigrationInfo, MigrationReport, MigrationState};
