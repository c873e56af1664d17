//! Invoice dashboard server
//!
//! Wires configuration → storage → actions → HTTP server. Pass a YAML
//! config path as the first argument, or run with the built-in
//! development defaults (in-memory store, one seeded login).

use anyhow::Result;
use billing::config::{AppConfig, StorageBackend};
use billing::core::auth::SeededCredentialsProvider;
use billing::server::ServerBuilder;
use billing::storage::InMemoryInvoiceStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default_config(),
    };

    tracing::info!(
        bind_addr = %config.bind_addr,
        storage = ?config.storage,
        "starting invoice dashboard"
    );

    let provider = SeededCredentialsProvider::new(
        config
            .users
            .iter()
            .map(|user| (user.email.clone(), user.password.clone())),
    );

    match config.storage {
        StorageBackend::InMemory => {
            ServerBuilder::new()
                .with_store(InMemoryInvoiceStore::new())
                .with_identity_provider(provider)
                .serve(&config.bind_addr)
                .await
        }
        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("database_url is required for postgres storage"))?;

            let pool = sqlx::PgPool::connect(url).await?;
            billing::storage::postgres::ensure_schema(&pool).await?;

            ServerBuilder::new()
                .with_store(billing::storage::PostgresInvoiceStore::new(pool))
                .with_identity_provider(provider)
                .serve(&config.bind_addr)
                .await
        }
        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => {
            anyhow::bail!("postgres storage requires building with the `postgres` feature")
        }
    }
}
