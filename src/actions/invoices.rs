//! Invoice create, update and delete actions
//!
//! Each action performs at most one database round trip and reports
//! success or failure synchronously. Revalidation and the redirect are
//! ordered strictly after persistence succeeds.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::core::error::BillingResult;
use crate::core::form::FormData;
use crate::core::invoice::{to_cents, InvoiceChanges, NewInvoice};
use crate::core::service::{InvoiceStore, Revalidator};
use crate::core::validation::{FieldErrors, InvoiceSchema};

/// Route that lists invoices; mutations invalidate it and return to it.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Message shown when create fails validation.
pub const CREATE_FAILED: &str = "Failed to create invoice.";
/// Message shown when the insert itself fails.
pub const CREATE_DB_FAILED: &str = "Database error: failed to create invoice.";

/// UI state for the invoice form, re-rendered inline on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A navigation effect: transfer control to the contained route.
///
/// Actions return redirects as plain values; the HTTP layer turns them
/// into 303 responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect(String);

impl Redirect {
    pub fn to(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    /// The target route.
    pub fn location(&self) -> &str {
        &self.0
    }
}

/// Outcome of the create action.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The invoice was stored; the caller should navigate to the route.
    Redirect(Redirect),
    /// Something went wrong; re-render the form with this state.
    State(FormState),
}

/// Invoice form actions with explicitly injected collaborators.
#[derive(Clone)]
pub struct InvoiceActions {
    store: Arc<dyn InvoiceStore>,
    cache: Arc<dyn Revalidator>,
}

impl InvoiceActions {
    pub fn new(store: Arc<dyn InvoiceStore>, cache: Arc<dyn Revalidator>) -> Self {
        Self { store, cache }
    }

    /// Create an invoice from a form submission.
    ///
    /// Validation failures become UI state merged over `prev` so the form
    /// can re-render with inline errors. A failed insert is likewise
    /// folded into state with a generic message rather than leaking the
    /// raw error to the form.
    pub async fn create(&self, prev: FormState, form: &FormData) -> CreateOutcome {
        let input = match InvoiceSchema::safe_parse(form) {
            Ok(input) => input,
            Err(errors) => {
                let mut state = prev;
                state.errors = Some(errors);
                state.message = Some(CREATE_FAILED.to_string());
                return CreateOutcome::State(state);
            }
        };

        let invoice = NewInvoice {
            customer_id: input.customer_id,
            amount_cents: to_cents(input.amount),
            status: input.status,
            date: today(),
        };

        if let Err(err) = self.store.insert(invoice).await {
            tracing::error!(error = %err, "invoice insert failed");
            let mut state = prev;
            state.errors = None;
            state.message = Some(CREATE_DB_FAILED.to_string());
            return CreateOutcome::State(state);
        }

        self.invalidate_listing().await;
        CreateOutcome::Redirect(Redirect::to(INVOICES_PATH))
    }

    /// Update an invoice from a form submission.
    ///
    /// This path validates strictly: unlike [`create`](Self::create)
    /// there is no field-error reporting here — invalid input is treated
    /// as a programming error and propagates, along with any storage
    /// failure, to the caller's error boundary.
    pub async fn update(&self, id: &Uuid, form: &FormData) -> BillingResult<Redirect> {
        let input = InvoiceSchema::parse(form)?;

        let changes = InvoiceChanges {
            customer_id: input.customer_id,
            amount_cents: to_cents(input.amount),
            status: input.status,
        };

        self.store.update(id, changes).await?;

        self.invalidate_listing().await;
        Ok(Redirect::to(INVOICES_PATH))
    }

    /// Delete an invoice.
    ///
    /// No redirect: deletion happens in place from the list view. The
    /// listing is revalidated even when the row did not exist, so the
    /// operation is idempotent from the caller's perspective.
    pub async fn delete(&self, id: &Uuid) -> BillingResult<()> {
        self.store.delete(id).await?;
        self.invalidate_listing().await;
        Ok(())
    }

    /// Revalidation is advisory; a failure is logged, never surfaced.
    async fn invalidate_listing(&self) {
        if let Err(err) = self.cache.revalidate(INVOICES_PATH).await {
            tracing::warn!(error = %err, path = INVOICES_PATH, "revalidation failed");
        }
    }
}

/// Creation date for new invoices: the current UTC date.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
