use anyhow::{Context, Result};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use lending_pool_indexer::config::Config;
use lending_pool_indexer::db::{self, Repositories};
use lending_pool_indexer::events::RawLog;
use lending_pool_indexer::router::create_router;
use lending_pool_indexer::worker::{LendingPoolWorker, ProcessSummary};

/// Feeds newline-delimited JSON logs from stdin through the worker.
async fn ingest_stdin(worker: LendingPoolWorker) -> Result<ProcessSummary> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut total = ProcessSummary::default();

    while let Some(line) = lines.next_line().await.context("Failed to read log from stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let log: RawLog = match serde_json::from_str(&line) {
            Ok(log) => log,
            Err(e) => {
                warn!("Skipping malformed log line: {}", e);
                total.failed += 1;
                continue;
            }
        };

        let batch_worker = worker.clone();
        let summary = tokio::task::spawn_blocking(move || batch_worker.process_logs(&[log]))
            .await
            .context("Log processing task failed")?;
        total.stored += summary.stored;
        total.skipped += summary.skipped;
        total.failed += summary.failed;
    }

    Ok(total)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting LendingPool indexer and API server...");

    // --- Configuration ---
    let config_path =
        env::var("CONFIG_PATH").unwrap_or_else(|_| "config/mainnet.toml".to_string());
    info!("Loading configuration from: {}", config_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;
    let contract_address = config.contract_address()?;

    // --- Database Setup ---
    info!("Setting up database connection pool...");
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder()
        .max_size(config.max_pool_size)
        .build(manager)
        .context("Failed to create database connection pool")?;
    db::run_migrations(&pool)?;
    let db_pool = Arc::new(pool);
    info!("Database pool created successfully.");

    // --- Initialize Components --- //
    let repos = Repositories::postgres(db_pool);
    let worker = LendingPoolWorker::new(repos.clone(), contract_address);
    let app = create_router(repos);

    // --- Setup Ingestion Task ---
    tokio::spawn(async move {
        match ingest_stdin(worker).await {
            Ok(summary) => info!(
                stored = summary.stored,
                skipped = summary.skipped,
                failed = summary.failed,
                "Log ingestion finished."
            ),
            Err(e) => error!(error = %e, "Log ingestion failed."),
        }
    });

    // --- Setup Server Task ---
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen_addr format in config: {}", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind TCP listener")?;
    info!("API server listening on {}", addr);
    let server = axum::serve(listener, app.into_make_service());

    tokio::select! {
        res = server => {
            match res {
                Ok(_) => info!("Axum server finished gracefully."),
                Err(e) => error!(error = %e, "Axum server failed."),
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal.");
        },
    }

    info!("Application shut down.");
    Ok(())
}
