//! Reactor Timer - a countdown and access-code panel served over HTTP
//!
//! This is the main entry point for the reactor-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use reactor_timer::{
    config::{Config, INITIAL_SECONDS, PENALTY_SECONDS},
    state::AppState,
    api::create_router,
    tasks::countdown_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("reactor_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting reactor-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms, countdown={}s, penalty={}s",
          config.host, config.port, config.tick_millis, INITIAL_SECONDS, PENALTY_SECONDS);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.tick_interval()));

    // Start the countdown background task
    let countdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(countdown_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /view    - Current countdown and status");
    info!("  PUT  /input   - Set pending code entry");
    info!("  POST /submit  - Submit pending code");
    info!("  POST /code    - Enter and submit a code");
    info!("  GET  /events  - Stream view changes (SSE)");
    info!("  GET  /status  - View plus server information");
    info!("  GET  /health  - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
