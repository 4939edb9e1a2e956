mod model;
mod server;

use std::{process::ExitCode, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    cli::Cli,
    config::Config,
    error::AppError,
    lifecycle::{self, ConnectionTimeouts},
    router::router,
    startup,
    state::AppState,
    util::clock::SystemClock,
};

const DEFAULT_LOG_FILTER: &str = "bookshelf=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before the subscriber so `RUST_LOG` from `.env` applies.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse_args();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_schema(&db).await?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let app = router(AppState::new(db, Arc::new(SystemClock)));

    lifecycle::serve(
        listener,
        app,
        ConnectionTimeouts::default(),
        cli.graceful_timeout,
        lifecycle::shutdown_signal(),
    )
    .await;

    Ok(())
}
