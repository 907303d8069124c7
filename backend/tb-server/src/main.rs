use tb_server::error::Result as ServerErrorResult;
use tb_server::{AppState, build_router, logger, seed};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = tb_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = match config.database_path()? {
        Some(path) => tb_db::connect(&path, config.database.max_connections).await?,
        None => {
            info!("Using in-memory database");
            tb_db::connect_in_memory().await?
        }
    };

    info!("Running database migrations...");
    tb_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    if config.database.seed_demo_project {
        seed::ensure_demo_project(&pool).await?;
    }

    let app = build_router(AppState::new(pool.clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual address matters when port is 0
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
