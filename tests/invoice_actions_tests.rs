//! Tests for the invoice form actions
//!
//! These drive the actions against the in-memory store and verify:
//! - validation failures surface as field errors and never write
//! - the success path converts amounts, stamps the date, revalidates
//!   the listing and redirects there
//! - update touches only the mutable fields
//! - delete is idempotent from the caller's perspective

use billing::prelude::*;
use std::sync::Arc;

fn form(fields: &[(&str, &str)]) -> FormData {
    fields
        .iter()
        .fold(FormData::new(), |form, (field, value)| form.with(*field, *value))
}

fn valid_form() -> FormData {
    form(&[
        ("customer_id", "c1"),
        ("amount", "10.50"),
        ("status", "pending"),
    ])
}

struct Fixture {
    actions: InvoiceActions,
    store: InMemoryInvoiceStore,
    cache: RouteCache,
}

fn fixture() -> Fixture {
    let store = InMemoryInvoiceStore::new();
    let cache = RouteCache::new();
    let actions = InvoiceActions::new(Arc::new(store.clone()), Arc::new(cache.clone()));
    Fixture {
        actions,
        store,
        cache,
    }
}

fn expect_state(outcome: CreateOutcome) -> FormState {
    match outcome {
        CreateOutcome::State(state) => state,
        CreateOutcome::Redirect(redirect) => {
            panic!("expected state, got redirect to {}", redirect.location())
        }
    }
}

// =============================================================================
// Create — validation failures
// =============================================================================

#[tokio::test]
async fn test_create_rejects_zero_amount() {
    let fx = fixture();

    let outcome = fx
        .actions
        .create(FormState::default(), &valid_form().with("amount", "0"))
        .await;

    let state = expect_state(outcome);
    let errors = state.errors.expect("expected field errors");
    assert!(!errors.get("amount").unwrap().is_empty());
    assert_eq!(state.message.as_deref(), Some("Failed to create invoice."));

    assert!(fx.store.list().await.unwrap().is_empty());
    assert!(!fx.cache.is_stale(INVOICES_PATH));
}

#[tokio::test]
async fn test_create_rejects_negative_amount() {
    let fx = fixture();

    let outcome = fx
        .actions
        .create(FormState::default(), &valid_form().with("amount", "-12.30"))
        .await;

    let state = expect_state(outcome);
    assert!(state.errors.unwrap().get("amount").is_some());
    assert!(fx.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_missing_customer() {
    let fx = fixture();

    let outcome = fx
        .actions
        .create(
            FormState::default(),
            &form(&[("amount", "10"), ("status", "paid")]),
        )
        .await;

    let state = expect_state(outcome);
    let errors = state.errors.expect("expected field errors");
    assert!(!errors.get("customer_id").unwrap().is_empty());
    assert!(errors.get("amount").is_none());

    assert!(fx.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_unknown_status() {
    let fx = fixture();

    let outcome = fx
        .actions
        .create(FormState::default(), &valid_form().with("status", "overdue"))
        .await;

    let state = expect_state(outcome);
    assert!(!state.errors.unwrap().get("status").unwrap().is_empty());
    assert!(fx.store.list().await.unwrap().is_empty());
}

// =============================================================================
// Create — success path
// =============================================================================

#[tokio::test]
async fn test_create_persists_cents_and_redirects() {
    let fx = fixture();

    let outcome = fx.actions.create(FormState::default(), &valid_form()).await;

    match outcome {
        CreateOutcome::Redirect(redirect) => {
            assert_eq!(redirect.location(), INVOICES_PATH);
        }
        CreateOutcome::State(state) => panic!("expected redirect, got state {:?}", state),
    }

    let invoices = fx.store.list().await.unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].customer_id, "c1");
    assert_eq!(invoices[0].amount_cents, 1050);
    assert_eq!(invoices[0].status, InvoiceStatus::Pending);
    assert_eq!(invoices[0].date, chrono::Utc::now().date_naive());

    assert!(fx.cache.is_stale(INVOICES_PATH));
}

#[tokio::test]
async fn test_create_accepts_whole_unit_amount() {
    let fx = fixture();

    fx.actions
        .create(FormState::default(), &valid_form().with("amount", "5"))
        .await;

    let invoices = fx.store.list().await.unwrap();
    assert_eq!(invoices[0].amount_cents, 500);
}

// =============================================================================
// Create — persistence failure is normalized
// =============================================================================

struct FailingStore;

#[async_trait]
impl InvoiceStore for FailingStore {
    async fn insert(&self, _invoice: NewInvoice) -> BillingResult<Invoice> {
        Err(BillingError::Storage {
            operation: "insert".to_string(),
            message: "connection refused".to_string(),
        })
    }

    async fn get(&self, _id: &Uuid) -> BillingResult<Option<Invoice>> {
        Ok(None)
    }

    async fn list(&self) -> BillingResult<Vec<Invoice>> {
        Ok(Vec::new())
    }

    async fn update(&self, _id: &Uuid, _changes: InvoiceChanges) -> BillingResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: &Uuid) -> BillingResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_create_insert_failure_becomes_form_state() {
    let cache = RouteCache::new();
    let actions = InvoiceActions::new(Arc::new(FailingStore), Arc::new(cache.clone()));

    let outcome = actions.create(FormState::default(), &valid_form()).await;

    let state = expect_state(outcome);
    assert_eq!(
        state.message.as_deref(),
        Some("Database error: failed to create invoice.")
    );
    assert!(state.errors.is_none());

    // No revalidation on the failure path.
    assert!(!cache.is_stale(INVOICES_PATH));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_changes_mutable_fields_and_redirects() {
    let fx = fixture();
    fx.actions.create(FormState::default(), &valid_form()).await;

    let created = fx.store.list().await.unwrap().remove(0);
    fx.cache.refresh(INVOICES_PATH);

    let redirect = fx
        .actions
        .update(
            &created.id,
            &form(&[
                ("customer_id", "c2"),
                ("amount", "5"),
                ("status", "paid"),
            ]),
        )
        .await
        .unwrap();
    assert_eq!(redirect.location(), INVOICES_PATH);

    let updated = fx.store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(updated.customer_id, "c2");
    assert_eq!(updated.amount_cents, 500);
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date, created.date);

    assert!(fx.cache.is_stale(INVOICES_PATH));
}

#[tokio::test]
async fn test_update_fails_hard_on_invalid_input() {
    let fx = fixture();
    fx.actions.create(FormState::default(), &valid_form()).await;
    let created = fx.store.list().await.unwrap().remove(0);

    let err = fx
        .actions
        .update(&created.id, &valid_form().with("amount", "-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, BillingError::Validation(_)));

    // The row is untouched.
    let unchanged = fx.store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.amount_cents, 1050);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_removes_exactly_one_row() {
    let fx = fixture();
    fx.actions.create(FormState::default(), &valid_form()).await;
    fx.actions
        .create(
            FormState::default(),
            &valid_form().with("customer_id", "c2"),
        )
        .await;

    let invoices = fx.store.list().await.unwrap();
    let target = invoices
        .iter()
        .find(|invoice| invoice.customer_id == "c1")
        .unwrap();

    fx.actions.delete(&target.id).await.unwrap();

    let remaining = fx.store.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].customer_id, "c2");
}

#[tokio::test]
async fn test_delete_unknown_id_is_idempotent() {
    let fx = fixture();

    fx.actions.delete(&Uuid::new_v4()).await.unwrap();

    // Revalidation occurs even though the row did not exist.
    assert!(fx.cache.is_stale(INVOICES_PATH));
}
