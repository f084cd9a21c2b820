use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scribe_config::DatabaseBackend;

mod commands;
mod utils;
use commands::{
    cmd_group_add, cmd_group_remove, cmd_init, cmd_migrate, cmd_schema, cmd_serve, cmd_sql,
    cmd_user_add, cmd_user_remove,
};

/// scribe command-line interface.
#[derive(Parser, Debug)]
#[command(name = "scribe", author, version, about)]
struct Cli {
    /// Configuration file. Defaults apply when it does not exist.
    #[arg(short, long, global = true, default_value = "scribe.json")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a configuration file with defaults.
    Init,
    /// Apply migrations and serve HTTP until interrupted.
    Serve,
    /// Create missing tables and indexes.
    Migrate,
    /// Print the schema DDL.
    Sql {
        /// SQL dialect; inferred from `databaseUrl` when omitted.
        #[arg(short, long, value_enum)]
        backend: Option<DatabaseBackend>,
    },
    /// Print the JSON Schema of the configuration file.
    Schema,
    /// Manage users.
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage groups.
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },
}

#[derive(Subcommand, Debug)]
enum UserAction {
    /// Create a user.
    Add {
        username: String,
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// Delete a user with their posts, comments, and follows.
    Remove { username: String },
}

#[derive(Subcommand, Debug)]
enum GroupAction {
    /// Create a group.
    Add {
        slug: String,
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Delete a group. Its posts are kept without a group.
    Remove { slug: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_path();
    match cli.command {
        Commands::Init => cmd_init(config),
        Commands::Serve => cmd_serve(config).await,
        Commands::Migrate => cmd_migrate(config).await,
        Commands::Sql { backend } => cmd_sql(config, backend),
        Commands::Schema => cmd_schema(),
        Commands::User { action } => match action {
            UserAction::Add { username, email } => cmd_user_add(config, &username, &email).await,
            UserAction::Remove { username } => cmd_user_remove(config, &username).await,
        },
        Commands::Group { action } => match action {
            GroupAction::Add {
                slug,
                title,
                description,
            } => cmd_group_add(config, &slug, &title, &description).await,
            GroupAction::Remove { slug } => cmd_group_remove(config, &slug).await,
        },
    }
}
