//! Confbook Server: conference booking allocation engine
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use confbook_api::AppState;
use confbook_core::config::AppConfig;
use confbook_core::error::AppError;
use confbook_core::traits::SystemClock;
use confbook_service::{BookingEngine, ConferenceService, UserService};
use confbook_store::{MemoryBookingStore, MemoryConferenceStore, MemoryUserStore};
use confbook_worker::SweepScheduler;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CONFBOOK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Confbook v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Stores ───────────────────────────────────────────
    let clock = Arc::new(SystemClock);
    let conferences = Arc::new(MemoryConferenceStore::new());
    let users = Arc::new(MemoryUserStore::new());
    let bookings = Arc::new(MemoryBookingStore::new(conferences.clone()));

    // ── Step 2: Services ─────────────────────────────────────────
    let booking_engine = Arc::new(BookingEngine::new(
        conferences.clone(),
        users.clone(),
        bookings,
        clock.clone(),
        config.booking.clone(),
    ));
    let conference_service = Arc::new(ConferenceService::new(
        conferences,
        config.booking.clone(),
    ));
    let user_service = Arc::new(UserService::new(users, clock));

    tracing::info!(
        waitlist_hold_minutes = config.booking.waitlist_hold_minutes,
        max_conference_hours = config.booking.max_conference_hours,
        "Booking engine initialized"
    );

    // ── Step 3: Reconciliation sweep ─────────────────────────────
    let sweep_handle = if config.sweep.enabled {
        let scheduler = SweepScheduler::new(Arc::clone(&booking_engine), config.sweep.clone());
        Some(scheduler.start())
    } else {
        tracing::info!("Booking sweep disabled");
        None
    };

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        booking_engine,
        conference_service,
        user_service,
    };

    let app = confbook_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Confbook server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = sweep_handle {
        tracing::info!("Waiting for booking sweep to stop...");
        handle.stop().await?;
    }

    tracing::info!("Confbook server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
