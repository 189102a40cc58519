//! Demo command handler.
//!
//! Runs the full lifecycle against the configured database: migrate,
//! confirm the schema, then create, read, rename, list and delete one
//! client. Each step is logged.

use megasoft_core::Client;

use crate::bootstrap::CliContext;
use crate::error::CliError;

const DEMO_NAME: &str = "New Client";
const DEMO_RENAMED: &str = "Updated Client Name";

/// What the demo observed, for callers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    pub client_id: i64,
    pub fetched_name: String,
    pub listed: Vec<Client>,
}

/// Execute the demo command.
pub async fn execute(ctx: &CliContext, clean: bool) -> Result<DemoOutcome, CliError> {
    ctx.app().migrations().run(clean).await?;

    let clients = ctx.app().clients().await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to connect to the database.");
    })?;
    tracing::info!("Successfully connected to the database.");

    let outcome = async {
        let client_id = clients.create(DEMO_NAME).await?;
        tracing::info!(client_id, "Created new client");

        let fetched_name = clients.get_by_id(client_id).await?;
        tracing::info!(client_id, name = %fetched_name, "Retrieved client name by ID");

        clients.set_name(client_id, DEMO_RENAMED).await?;
        tracing::info!("Updated client name to '{DEMO_RENAMED}'");

        let listed = clients.list_all().await?;
        for client in &listed {
            tracing::info!(id = client.id, name = %client.name, "Client");
        }

        clients.delete_by_id(client_id).await?;
        tracing::info!(client_id, "Deleted client");

        Ok::<_, megasoft_core::CoreError>(DemoOutcome {
            client_id,
            fetched_name,
            listed,
        })
    }
    .await
    .inspect_err(|e| tracing::error!(error = %e, "Database error occurred"))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::test_support::context;

    #[tokio::test]
    async fn test_demo_lifecycle() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context(temp.path(), false).await;

        let outcome = execute(&ctx, false).await.unwrap();
        assert_eq!(outcome.fetched_name, DEMO_NAME);
        assert_eq!(
            outcome.listed,
            vec![Client::new(outcome.client_id, DEMO_RENAMED)]
        );

        // The demo cleans up after itself
        let remaining = ctx.app().clients().await.unwrap().list_all().await.unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn test_demo_with_clean() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context(temp.path(), true).await;

        execute(&ctx, false).await.unwrap();
        let outcome = execute(&ctx, true).await.unwrap();
        // Clean resets the id sequence
        assert_eq!(outcome.client_id, 1);
    }
}
