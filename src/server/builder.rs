//! ServerBuilder for fluent API to build the HTTP server

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::{handlers, AppState, Pages};
use crate::actions::{Authenticator, InvoiceActions};
use crate::cache::RouteCache;
use crate::core::auth::IdentityProvider;
use crate::core::service::InvoiceStore;

/// Builder wiring store, identity provider and templates into a router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryInvoiceStore::new())
///     .with_identity_provider(SeededCredentialsProvider::new(users))
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn InvoiceStore>>,
    provider: Option<Arc<dyn IdentityProvider>>,
    cache: RouteCache,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            provider: None,
            cache: RouteCache::new(),
        }
    }

    /// Set the invoice store (required)
    pub fn with_store(mut self, store: impl InvoiceStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set the identity provider (required)
    pub fn with_identity_provider(mut self, provider: impl IdentityProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Replace the route cache (a fresh one is used by default)
    pub fn with_cache(mut self, cache: RouteCache) -> Self {
        self.cache = cache;
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("InvoiceStore is required. Call .with_store()"))?;
        let provider = self.provider.ok_or_else(|| {
            anyhow::anyhow!("IdentityProvider is required. Call .with_identity_provider()")
        })?;

        let cache = self.cache;
        let actions = InvoiceActions::new(store.clone(), Arc::new(cache.clone()));
        let authenticator = Authenticator::new(provider);
        let pages = Pages::new()?;

        let state = AppState {
            actions,
            authenticator,
            store,
            cache,
            pages,
        };

        Ok(Router::new()
            .route("/", get(handlers::index))
            .route(
                "/dashboard/invoices",
                get(handlers::invoices_page).post(handlers::create_invoice),
            )
            .route("/dashboard/invoices/create", get(handlers::create_page))
            .route("/dashboard/invoices/{id}", post(handlers::update_invoice))
            .route(
                "/dashboard/invoices/{id}/delete",
                post(handlers::delete_invoice),
            )
            .route("/login", get(handlers::login_page).post(handlers::login))
            .layer(TraceLayer::new_for_http())
            .with_state(state))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
