use std::env;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use roastery_core::{db, seed};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Roastery catalog administrative tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reconcile the fixed coffee catalog into the database
    DbSeed(DbSeedArgs),
    /// Run embedded database migrations and exit
    Migrate,
}

#[derive(Args, Debug, Default)]
struct DbSeedArgs {
    /// Skip running embedded database migrations before seeding
    #[arg(long)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::DbSeed(args) => handle_db_seed(args).await,
        Command::Migrate => handle_migrate().await,
    };

    if let Err(err) = outcome {
        error!("Catalog run aborted: {err:#}");
        std::process::exit(1);
    }
}

async fn handle_db_seed(args: DbSeedArgs) -> Result<()> {
    let pool = connect_pool().await?;

    if args.skip_migrations {
        info!("Skipping migrations at user request");
    } else {
        db::run_migrations(&pool).await?;
    }

    seed::run(&pool).await?;
    info!("Catalog reconciled");

    Ok(())
}

async fn handle_migrate() -> Result<()> {
    let pool = connect_pool().await?;
    db::run_migrations(&pool).await?;
    info!("Database migrations applied");
    Ok(())
}

async fn connect_pool() -> Result<db::DbPool> {
    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL")
        .or_else(|_| env::var("ROASTERY_DATABASE_URL"))
        .context("DATABASE_URL (or ROASTERY_DATABASE_URL) must be set")?;
    Ok(db::connect(&database_url).await?)
}
