//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to AppCore.

use clap::{CommandFactory, Parser};

use megasoft_cli::{
    Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers, load_env_file, logging,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // .env may carry RUST_LOG, so it is loaded before the subscriber.
    let env_file = load_env_file(None);
    logging::init(cli.verbose);
    if let Err(e) = env_file {
        tracing::warn!(error = %e, "Failed to load .env file");
    }

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_env(cli.database.as_deref())?;

    // Paths only reports configuration; it must not create the database.
    if let Commands::Paths = command {
        handlers::paths::execute(&config);
        return Ok(());
    }

    let ctx = bootstrap(config).await?;
    dispatch(&ctx, command).await
}

async fn dispatch(ctx: &CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Migrate { clean } => {
            handlers::migrate::execute(ctx, clean).await?;
        }
        Commands::Clean => handlers::clean::execute(ctx).await?,
        Commands::Info => handlers::info::execute(ctx).await?,
        Commands::Validate => handlers::validate::execute(ctx).await?,
        Commands::Client { command } => handlers::client::execute(ctx, command).await?,
        Commands::Demo { clean } => {
            handlers::demo::execute(ctx, clean).await?;
        }
        Commands::Paths => handlers::paths::execute(ctx.config()),
    }

    Ok(())
}
