//! `blog` command-line tool
//!
//! ```bash
//! blog migrate dev --name add_reactions
//! blog migrate deploy
//! blog migrate reset --force
//! blog migrate status
//! blog migrate generate
//! blog seed
//! ```
//!
//! Any failure exits with status 1.

mod commands;

use std::process::ExitCode;

use blog_common::{
    try_init_tracing_with_config, AppConfig, AppError, AppResult, ErrorResponse, TracingConfig,
};
use clap::{Parser, Subcommand};
use tracing::debug;

use commands::{migrate, seed};

#[derive(Debug, Parser)]
#[command(name = "blog")]
#[command(about = "Schema migrations and demo data for the blog backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database migration management
    Migrate {
        #[command(subcommand)]
        migrate_command: MigrateCommands,
    },

    /// Wipe every table and load the demo data
    Seed {
        /// Allow seeding when APP_ENV=production
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
enum MigrateCommands {
    /// Optionally scaffold a new migration, then apply pending ones
    Dev {
        /// Name of a new migration file to create first
        #[arg(long)]
        name: Option<String>,
    },

    /// Apply pending migrations
    Deploy,

    /// Drop the schema and re-apply every migration. Irreversible
    Reset {
        /// Confirm that all data will be destroyed
        #[arg(long)]
        force: bool,
    },

    /// List applied and pending migrations
    Status,

    /// Regenerate offline query metadata (`cargo sqlx prepare --workspace`)
    Generate,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => return fail(&AppError::from(e)),
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::from_app_config(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

async fn run(command: Commands, config: &AppConfig) -> AppResult<()> {
    match command {
        Commands::Migrate { migrate_command } => match migrate_command {
            MigrateCommands::Dev { name } => migrate::dev(config, name.as_deref()).await,
            MigrateCommands::Deploy => migrate::deploy(config).await,
            MigrateCommands::Reset { force } => migrate::reset(config, force).await,
            MigrateCommands::Status => migrate::status(config).await,
            MigrateCommands::Generate => migrate::generate().await,
        },
        Commands::Seed { force } => seed::run(config, force).await,
    }
}

/// Print the failure as one `ErrorResponse` JSON line on stderr
///
/// Service failures are already logged where they happen, so this only
/// traces at debug level.
fn fail(err: &AppError) -> ExitCode {
    debug!(code = err.error_code(), error = %err, "Command failed");
    eprintln!("{}", error_line(err));
    ExitCode::FAILURE
}

fn error_line(err: &AppError) -> String {
    serde_json::to_string(&ErrorResponse::from(err)).unwrap_or_else(|_| err.to_string())
}
