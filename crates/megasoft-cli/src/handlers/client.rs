//! Client command handlers.

use crate::bootstrap::CliContext;
use crate::client_commands::ClientCommand;
use crate::error::CliError;
use crate::presentation::print_clients;

/// Execute a client subcommand.
///
/// The schema must already be migrated; otherwise this fails before
/// touching any data.
pub async fn execute(ctx: &CliContext, command: ClientCommand) -> Result<(), CliError> {
    let clients = ctx.app().clients().await?;

    match command {
        ClientCommand::Create { name } => {
            let id = clients.create(&name).await?;
            println!("{id}");
        }
        ClientCommand::Get { id } => {
            println!("{}", clients.get_by_id(id).await?);
        }
        ClientCommand::Rename { id, name } => {
            clients.set_name(id, &name).await?;
            println!("Client {id} renamed to '{name}'.");
        }
        ClientCommand::Delete { id } => {
            clients.delete_by_id(id).await?;
            println!("Client {id} deleted.");
        }
        ClientCommand::List { json } => {
            let all = clients.list_all().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                print_clients(&all);
            }
        }
    }

    Ok(())
}
