use anyhow::{Context, Result};
use axum::{extract::Extension, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::store::{PgUserStore, UserStore};

/// Whether schema initialization reached the database at startup.
///
/// Decided once, before the listener starts, and never revisited for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoreAvailability {
    Available,
    /// Demo mode: reads return placeholder data and writes are refused.
    Unavailable,
}

impl StoreAvailability {
    pub(crate) fn is_available(self) -> bool {
        self == StoreAvailability::Available
    }
}

/// Shared, read-only state handed to every handler.
pub(crate) struct State {
    pub(crate) store: Arc<dyn UserStore>,
    pub(crate) availability: StoreAvailability,
}

impl State {
    /// Initialize the schema and record whether that worked. Failure is logged, never returned.
    pub(crate) async fn initialize(store: Arc<dyn UserStore>) -> State {
        let availability = match store.initialize().await {
            Ok(()) => {
                tracing::info!("Database initialized successfully");
                StoreAvailability::Available
            }
            Err(e) => {
                tracing::warn!("Database initialization failed: {}", e);
                tracing::warn!("App will run without database functionality");
                StoreAvailability::Unavailable
            }
        };

        State {
            store,
            availability,
        }
    }
}

/// Build the router with every endpoint.
pub(crate) fn app(state: State) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(state)))
}

fn store_from(config: &Config) -> Arc<dyn UserStore> {
    Arc::new(PgUserStore::new(
        config.database_url.clone(),
        config.connect_timeout(),
    ))
}

/// Run the server.
pub(crate) async fn run(config: Config) -> Result<()> {
    let state = State::initialize(store_from(&config)).await;

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, availability = ?state.availability, "Listening for HTTP traffic");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Only initialize the schema. Unlike serving, a failure here is an error.
pub(crate) async fn migrate(config: Config) -> Result<()> {
    store_from(&config)
        .initialize()
        .await
        .context("database migration failed")?;
    tracing::info!("Database migration completed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryUserStore;

    #[tokio::test]
    async fn reachable_store_is_available() {
        let state = State::initialize(Arc::new(MemoryUserStore::new())).await;
        assert_eq!(state.availability, StoreAvailability::Available);
    }

    #[tokio::test]
    async fn unreachable_store_degrades_instead_of_failing() {
        let state = State::initialize(Arc::new(MemoryUserStore::unreachable())).await;
        assert_eq!(state.availability, StoreAvailability::Unavailable);
    }

    #[tokio::test]
    async fn availability_is_not_rechecked_once_decided() {
        let store = Arc::new(MemoryUserStore::unreachable());
        let state = State::initialize(store.clone()).await;
        store.set_reachable(true);
        assert!(!state.availability.is_available());
    }
}
