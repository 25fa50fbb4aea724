use pc_server::{AppState, ServerError, build_router, logger};

use pc_config::Config;
use pc_db::PoolSettings;

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::Io {
            message: format!("Failed to create log directory {}", log_dir.display()),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the store; migrations run before the pool is returned
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = pc_db::connect(
        &database_path,
        &PoolSettings {
            max_connections: config.database.max_connections,
            busy_timeout: config.busy_timeout(),
        },
    )
    .await
    .map_err(ServerError::from)?;

    info!("Database connection established");

    let app = build_router(AppState::new(pool.clone()));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Io {
            message: format!("Failed to bind {}", bind_addr),
            source: e,
        })?;

    // Actual address matters when port is 0
    let actual_addr = listener.local_addr().map_err(|e| ServerError::Io {
        message: "Failed to read listener address".to_string(),
        source: e,
    })?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Io {
            message: "Server error".to_string(),
            source: e,
        })?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; only an explicit signal stops the server
            std::future::pending::<()>().await;
        }
    }
}
