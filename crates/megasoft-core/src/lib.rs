//! Core domain types, ports and services for megasoft.
//!
//! This crate has no storage dependencies. Adapters (`megasoft-db`,
//! `megasoft-cli`) implement the ports defined here and compose the
//! services at their entry points.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::DatabaseConfig;
pub use domain::{
    CLIENT_NAME_MAX_LEN, CLIENT_NAME_MIN_LEN, CleanReport, Client, MigrationInfo,
    MigrationReport, MigrationState, validate_client_name,
};
pub use ports::{
    ClientRepository, CoreError, MigrationError, MigrationPort, Repos, RepositoryError,
};
pub use services::{AppCore, ClientService, MigrationService};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path, normalize_user_path};
