use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use configuration::{init_tracing, load_config, Config, LogFormat};
use core_types::{Potion, Qualite};
use database::{
    connect, default_qualites, run_migrations, CrudRepository, InMemoryRepository, PgPotionDao,
    PgQualiteDao,
};
use std::path::PathBuf;
use std::sync::Arc;
use web_server::{run_server, AppState};

/// The main entry point for the Spring Aventure admin backend.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; settings may come from config.toml or the environment.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args, config).await,
        Commands::Migrate => handle_migrate(&config).await,
        Commands::Potions => handle_potions(&config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Administration backend for the Spring Aventure game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (defaults to ./config.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `logging.format` from the configuration.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the admin HTTP server.
    Serve(ServeArgs),
    /// Apply pending database migrations and exit.
    Migrate,
    /// Print every potion in the database as a table.
    Potions,
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides `server.port` from the configuration.
    #[arg(long)]
    port: Option<u16>,

    /// Use process-local stores instead of PostgreSQL. Data is lost on exit.
    #[arg(long)]
    in_memory: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let pagination = config.pagination.clone();
    let state = if args.in_memory {
        tracing::warn!("Running with in-memory stores; nothing will be persisted.");
        AppState::new(
            Arc::new(InMemoryRepository::<Potion>::new()),
            Arc::new(InMemoryRepository::<Qualite>::with_records(default_qualites())),
            pagination,
        )
    } else {
        let pool = connect(&config.database).await?;
        run_migrations(&pool).await?;
        AppState::new(
            Arc::new(PgPotionDao::new(pool.clone())),
            Arc::new(PgQualiteDao::new(pool)),
            pagination,
        )
    };

    run_server(&config.server, state).await
}

async fn handle_migrate(config: &Config) -> anyhow::Result<()> {
    let pool = connect(&config.database).await?;
    run_migrations(&pool).await?;
    println!("Migrations applied.");
    Ok(())
}

async fn handle_potions(config: &Config) -> anyhow::Result<()> {
    let pool = connect(&config.database).await?;
    let potions = PgPotionDao::new(pool).find_all().await?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Nom", "Description", "Effet", "Soin"]);
    for potion in &potions {
        table.add_row(vec![
            potion.id.map(|id| id.to_string()).unwrap_or_default(),
            potion.name.clone(),
            potion.description.clone(),
            potion.effect_description.clone(),
            potion.heal_amount.to_string(),
        ]);
    }

    println!("{table}");
    println!("{} potion(s).", potions.len());
    Ok(())
}
