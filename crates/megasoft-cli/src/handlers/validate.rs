//! Validate command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Check applied migrations against the resolved scripts.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    ctx.app().migrations().validate().await?;
    println!("Applied migrations are valid.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::test_support::context;

    #[tokio::test]
    async fn test_validate_fresh_and_migrated() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context(temp.path(), false).await;

        // Pending migrations are not a validation failure
        execute(&ctx).await.unwrap();

        ctx.app().migrations().migrate_database().await.unwrap();
        execute(&ctx).await.unwrap();
    }
}
