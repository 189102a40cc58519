//! Command handlers that delegate to AppCore.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Call AppCore services
//!   2. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access repositories directly
//! - Contain business logic
//! - Manage database connections

pub mod clean;
pub mod client;
pub mod demo;
pub mod info;
pub mod migrate;
pub mod paths;
pub mod validate;
