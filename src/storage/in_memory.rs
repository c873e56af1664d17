//! In-memory implementation of InvoiceStore for testing and development

use crate::core::error::{BillingError, BillingResult};
use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use crate::core::service::InvoiceStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory invoice store.
///
/// Useful for testing and development. Uses RwLock for thread-safe
/// access; clones share the same underlying rows.
#[derive(Clone, Default)]
pub struct InMemoryInvoiceStore {
    rows: Arc<RwLock<HashMap<Uuid, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(operation: &str, err: impl std::fmt::Display) -> BillingError {
    BillingError::Storage {
        operation: operation.to_string(),
        message: format!("failed to acquire lock: {}", err),
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> BillingResult<Invoice> {
        let mut rows = self.rows.write().map_err(|e| lock_error("insert", e))?;

        let row = Invoice {
            id: Uuid::new_v4(),
            customer_id: invoice.customer_id,
            amount_cents: invoice.amount_cents,
            status: invoice.status,
            date: invoice.date,
        };
        rows.insert(row.id, row.clone());

        Ok(row)
    }

    async fn get(&self, id: &Uuid) -> BillingResult<Option<Invoice>> {
        let rows = self.rows.read().map_err(|e| lock_error("get", e))?;

        Ok(rows.get(id).cloned())
    }

    async fn list(&self) -> BillingResult<Vec<Invoice>> {
        let rows = self.rows.read().map_err(|e| lock_error("list", e))?;

        let mut invoices: Vec<Invoice> = rows.values().cloned().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(invoices)
    }

    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> BillingResult<()> {
        let mut rows = self.rows.write().map_err(|e| lock_error("update", e))?;

        // Mirrors the UPDATE statement: unknown id is a no-op.
        if let Some(row) = rows.get_mut(id) {
            row.customer_id = changes.customer_id;
            row.amount_cents = changes.amount_cents;
            row.status = changes.status;
        }

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> BillingResult<()> {
        let mut rows = self.rows.write().map_err(|e| lock_error("delete", e))?;

        rows.remove(id);

        Ok(())
    }
}
