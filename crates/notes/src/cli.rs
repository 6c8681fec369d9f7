//! CLI command definitions.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use notes_core::note::{NewNote, NoteStore};

use crate::config::Config;
use crate::output::{format_json, format_list_items, format_note, OutputFormat};

/// Notes - store short notes in a single DynamoDB table
#[derive(Debug, Parser)]
#[command(name = "notes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// DynamoDB table name.
    #[arg(long, env = "NOTES_TABLE_NAME", default_value = "notes")]
    pub table_name: String,

    /// AWS region.
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom DynamoDB endpoint, e.g. http://localhost:8000.
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Storage configuration resolved from flags and environment.
    pub fn config(&self) -> Config {
        Config {
            table_name: self.table_name.clone(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the notes table if it does not exist.
    InitTable,
    #[command(flatten)]
    Note(NoteCommand),
}

/// Commands that operate on notes.
#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// Create a new note.
    Create {
        /// Owning user ID.
        #[arg(long)]
        user_id: String,
        /// URL slug.
        #[arg(long)]
        slug: String,
        /// Note title.
        #[arg(long)]
        title: String,
        /// Note body.
        #[arg(long)]
        body: String,
    },
    /// Get a note by ID.
    Get {
        /// Note ID.
        id: String,
        /// Owning user ID.
        #[arg(long)]
        user_id: String,
    },
    /// List a user's notes.
    List {
        /// Owning user ID.
        #[arg(long)]
        user_id: String,
    },
    /// Delete a note.
    Delete {
        /// Note ID.
        id: String,
        /// Owning user ID.
        #[arg(long)]
        user_id: String,
    },
}

/// Runs a note command against the store and renders its result.
pub async fn execute(
    store: &NoteStore,
    command: NoteCommand,
    format: OutputFormat,
) -> Result<String> {
    let output = match command {
        NoteCommand::Create {
            user_id,
            slug,
            title,
            body,
        } => {
            let note = store
                .create_note(NewNote::new(user_id, slug, title, body))
                .await?;
            match format {
                OutputFormat::Json => format_json(&note),
                OutputFormat::Pretty => format!("Created:\n{}", format_note(&note)),
            }
        }
        NoteCommand::Get { id, user_id } => {
            let Some(note) = store.get_note(&id, &user_id).await? else {
                bail!("note {id} not found");
            };
            match format {
                OutputFormat::Json => format_json(&note),
                OutputFormat::Pretty => format_note(&note),
            }
        }
        NoteCommand::List { user_id } => {
            let items = store.get_note_list_items(&user_id).await?;
            match format {
                OutputFormat::Json => format_json(&items),
                OutputFormat::Pretty => format_list_items(&items),
            }
        }
        NoteCommand::Delete { id, user_id } => {
            store.delete_note(&id, &user_id).await?;
            match format {
                OutputFormat::Json => {
                    format_json(&serde_json::json!({ "id": id, "deleted": true }))
                }
                OutputFormat::Pretty => format!("Deleted note {id}"),
            }
        }
    };

    Ok(output)
}
