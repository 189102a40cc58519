//! Info command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_migrations;

/// Print applied and pending migrations.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let infos = ctx.app().migrations().info().await?;
    print_migrations(&infos);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::test_support::context;
    use megasoft_core::MigrationState;

    #[tokio::test]
    async fn test_info_before_and_after_migrate() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context(temp.path(), false).await;

        execute(&ctx).await.unwrap();
        let before = ctx.app().migrations().info().await.unwrap();
        assert!(before.iter().all(|i| i.state == MigrationState::Pending));

        ctx.app().migrations().migrate_database().await.unwrap();
        execute(&ctx).await.unwrap();
        let after = ctx.app().migrations().info().await.unwrap();
        assert!(after.iter().all(|i| i.state == MigrationState::Success));
    }
}
