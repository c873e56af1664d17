//! PostgreSQL storage backend using sqlx.
//!
//! Provides the [`InvoiceStore`] implementation backed by a PostgreSQL
//! database via `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! billing-rs = { version = "0.1", features = ["postgres"] }
//! ```

use crate::core::error::{BillingError, BillingResult};
use crate::core::invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
use crate::core::service::InvoiceStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// Apply the required table (idempotent). Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> BillingResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id UUID NOT NULL PRIMARY KEY,
            customer_id TEXT NOT NULL,
            amount BIGINT NOT NULL,
            status TEXT NOT NULL,
            date DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| storage_error("create schema for", e))?;

    Ok(())
}

fn storage_error(operation: &str, err: sqlx::Error) -> BillingError {
    BillingError::Storage {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}

type InvoiceRow = (Uuid, String, i64, String, NaiveDate);

/// Invoice store backed by PostgreSQL.
///
/// One parameterized statement per operation against the `invoices`
/// table; parameter binding is injection-safe by construction.
#[derive(Clone, Debug)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn decode_row((id, customer_id, amount, status, date): InvoiceRow) -> BillingResult<Invoice> {
        let status = InvoiceStatus::from_str(&status).map_err(|message| BillingError::Storage {
            operation: "decode".to_string(),
            message,
        })?;

        Ok(Invoice {
            id,
            customer_id,
            amount_cents: amount,
            status,
            date,
        })
    }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> BillingResult<Invoice> {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount_cents)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("insert", e))?;

        Ok(Invoice {
            id,
            customer_id: invoice.customer_id,
            amount_cents: invoice.amount_cents,
            status: invoice.status,
            date: invoice.date,
        })
    }

    async fn get(&self, id: &Uuid) -> BillingResult<Option<Invoice>> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("get", e))?;

        row.map(Self::decode_row).transpose()
    }

    async fn list(&self) -> BillingResult<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list", e))?;

        rows.into_iter().map(Self::decode_row).collect()
    }

    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> BillingResult<()> {
        sqlx::query(
            "UPDATE invoices SET customer_id = $1, amount = $2, status = $3 WHERE id = $4",
        )
        .bind(&changes.customer_id)
        .bind(changes.amount_cents)
        .bind(changes.status.as_str())
        .bind(*id)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("update", e))?;

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> BillingResult<()> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(*id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete", e))?;

        Ok(())
    }
}
