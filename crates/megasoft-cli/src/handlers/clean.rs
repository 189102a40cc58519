//! Clean command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Drop every schema object, migration history included.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let report = ctx.app().migrations().clean_database().await?;

    if report.dropped.is_empty() {
        println!("Nothing to clean.");
    } else {
        println!(
            "Dropped {} object(s): {}",
            report.dropped.len(),
            report.dropped.join(", ")
        );
    }
    Ok(())
}
