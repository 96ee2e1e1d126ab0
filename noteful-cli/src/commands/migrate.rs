//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use noteful_server::db::{create_pool, migrations};

use crate::config::NotefulConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the folder and note tables, then exit
pub async fn run_migrate(args: MigrateArgs, config: &NotefulConfig) -> Result<()> {
    let database_url = config
        .database_url(args.database_url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.noteful/config.toml")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
