//! HTTP server command
//!
//! Runs the folders/notes API against PostgreSQL, or against an in-memory
//! store with `--in-memory`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use noteful_server::db::{create_pool_with_options, migrations};
use noteful_server::{run_server, AppState, MemoryRepository, PgRepository, ServerConfig};

use crate::config::NotefulConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "NOTEFUL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep data in process memory instead of PostgreSQL (ignores --database-url)
    #[arg(long)]
    pub in_memory: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &NotefulConfig) -> Result<()> {
    let server_config = ServerConfig {
        bind_addr: config.bind_addr(args.bind),
        cors_permissive: config.cors_permissive(args.cors_permissive),
        request_timeout: config.request_timeout(args.timeout),
    };

    let state = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        AppState::new(MemoryRepository::new())
    } else {
        let database_url = config.database_url(args.database_url).context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.noteful/config.toml",
        )?;

        let pool = create_pool_with_options(&database_url, config.max_connections())
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        AppState::new(PgRepository::new(pool))
    };

    tracing::info!("Starting noteful server on {}", server_config.bind_addr);

    // Blocks until shutdown
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
