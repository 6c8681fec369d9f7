use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use notes::cli::{execute, Cli, Commands};
use notes::storage::dynamodb::schema::{ensure_table, notes_table_config, Provisioned};
use notes::storage::DynamoDbTable;
use notes::UuidIdGenerator;
use notes_core::note::NoteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output can be piped.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes=info,notes_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    tracing::debug!(destination = %config.target_display(), "Using table");

    let table = DynamoDbTable::from_config(&config).await;

    match cli.command {
        Commands::InitTable => {
            let table_config = notes_table_config(table.table_name());
            let provisioned = ensure_table(table.client(), &table_config).await?;
            if !cli.quiet {
                match provisioned {
                    Provisioned::Created => println!("Created table {}", table.table_name()),
                    Provisioned::AlreadyExists => {
                        println!("Table {} already exists", table.table_name())
                    }
                }
            }
        }
        Commands::Note(command) => {
            let store = NoteStore::new(Arc::new(table), Arc::new(UuidIdGenerator));
            let output = execute(&store, command, cli.format).await?;
            println!("{output}");
        }
    }

    Ok(())
}
