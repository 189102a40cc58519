//! Core services.
//!
//! Services hold port trait objects and contain the business rules.
//! They never see storage types.

mod app_core;
mod client_service;
mod migration_service;

pub use app_core::AppCore;
pub use client_service::ClientService;
pub use migration_service::MigrationService;
