//! Service traits for invoice persistence and route revalidation

use crate::core::error::BillingResult;
use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence gateway for the `invoices` relation.
///
/// Implementations issue one parameterized statement per call against an
/// opaque relational store; validation and sequencing belong to the
/// actions layer. Concurrent mutations of the same row resolve with the
/// store's native last-writer-wins behavior — there is no version column
/// or optimistic check at this layer.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Insert a new invoice, assigning its id.
    async fn insert(&self, invoice: NewInvoice) -> BillingResult<Invoice>;

    /// Fetch an invoice by id.
    async fn get(&self, id: &Uuid) -> BillingResult<Option<Invoice>>;

    /// List all invoices, newest first.
    async fn list(&self) -> BillingResult<Vec<Invoice>>;

    /// Update the mutable fields of an invoice.
    ///
    /// Mirrors the underlying UPDATE statement: an unknown id is a no-op,
    /// not an error. `id` and `date` never change.
    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> BillingResult<()>;

    /// Delete an invoice. Deleting an unknown id is not an error.
    async fn delete(&self, id: &Uuid) -> BillingResult<()>;
}

/// Marks cached render output for a route as stale.
#[async_trait]
pub trait Revalidator: Send + Sync {
    /// Mark the page at `path` stale so the next render re-fetches data.
    async fn revalidate(&self, path: &str) -> BillingResult<()>;
}
