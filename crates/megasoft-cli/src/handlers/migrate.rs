//! Migrate command handler.
//!
//! Applies pending migrations (optionally after a clean) and then prints
//! the resulting migration table.

use megasoft_core::MigrationReport;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_migrations;

/// Execute the migrate command.
pub async fn execute(ctx: &CliContext, clean: bool) -> Result<MigrationReport, CliError> {
    let migrations = ctx.app().migrations();
    let report = migrations.run(clean).await?;

    match report.current_version {
        Some(version) if report.applied.is_empty() => {
            println!("Schema is up to date at version {version}.");
        }
        Some(version) => println!(
            "Applied {} migration(s); schema is now at version {version}.",
            report.applied_count()
        ),
        None => println!("No migrations to apply."),
    }
    println!();

    print_migrations(&migrations.info().await?);
    Ok(report)
}
