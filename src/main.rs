//! ClassGate Server: approval-gated lesson access.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use classgate_api::state::AppState;
use classgate_auth::credentials::AdminCredentials;
use classgate_auth::identity::{IdentityProvider, RestIdentityProvider};
use classgate_auth::session::store::SessionStore;
use classgate_core::config::AppConfig;
use classgate_core::error::AppError;
use classgate_database::store::{LessonRequestStore, PaymentRequestStore};
use classgate_service::account::AccountService;
use classgate_service::lesson::LessonService;

#[tokio::main]
async fn main() {
    let env = std::env::var("CLASSGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
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
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ClassGate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Request stores ───────────────────────────────────
    let (lesson_store, payment_store) = build_stores(&config).await?;

    // ── Step 2: Auth system ──────────────────────────────────────
    let sessions = Arc::new(SessionStore::new(&config.session));
    let admin_credentials = Arc::new(AdminCredentials::new(&config.admin));
    let identity =
        Arc::new(RestIdentityProvider::new(&config.identity)?) as Arc<dyn IdentityProvider>;
    tracing::info!(base_url = %config.identity.base_url, "Identity provider client ready");

    // ── Step 3: Services ─────────────────────────────────────────
    let accounts = Arc::new(AccountService::new(identity));
    let lessons = Arc::new(LessonService::new(Arc::clone(&lesson_store)));

    // ── Step 4: HTTP server ──────────────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        sessions,
        admin_credentials,
        accounts,
        lessons,
        payments: payment_store,
    };

    let app = classgate_api::build_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ClassGate server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("ClassGate server shut down gracefully");
    Ok(())
}

/// Build the request stores selected by configuration.
async fn build_stores(
    config: &AppConfig,
) -> Result<(Arc<dyn LessonRequestStore>, Arc<dyn PaymentRequestStore>), AppError> {
    match config.store.provider.as_str() {
        "postgres" => {
            let db = classgate_database::DatabasePool::connect(&config.database).await?;
            classgate_database::migration::run_migrations(db.pool()).await?;

            let lessons = Arc::new(
                classgate_database::repositories::LessonRequestRepository::new(db.pool().clone()),
            ) as Arc<dyn LessonRequestStore>;
            let payments = Arc::new(
                classgate_database::repositories::PaymentRequestRepository::new(db.pool().clone()),
            ) as Arc<dyn PaymentRequestStore>;
            Ok((lessons, payments))
        }
        "memory" => {
            tracing::info!("Using in-memory request stores (records do not survive restart)");
            let lessons = Arc::new(classgate_database::memory::MemoryLessonRequestStore::new())
                as Arc<dyn LessonRequestStore>;
            let payments = Arc::new(classgate_database::memory::MemoryPaymentRequestStore::new())
                as Arc<dyn PaymentRequestStore>;
            Ok((lessons, payments))
        }
        other => Err(AppError::configuration(format!(
            "Unknown store provider: '{other}'. Supported: postgres, memory"
        ))),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
