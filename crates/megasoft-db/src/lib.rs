//! `SQLite` adapters for megasoft.
//!
//! - [`setup`] opens the database file
//! - [`migrator`] applies versioned schema migrations
//! - [`repositories`] implements the core repository ports
//! - [`factory`] wires everything into `megasoft_core::Repos`
#![deny(unsafe_code)]

pub mod factory;
pub mod migrator;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use migrator::{EMBEDDED_MIGRATIONS, MigrationSource, SqliteMigrator};
pub use repositories::SqliteClientRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
