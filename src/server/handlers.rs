//! HTTP handlers binding form submissions to actions
//!
//! Handlers only translate between HTTP and the action layer: extract
//! the form, run the action, turn the outcome into a response. Business
//! rules live in [`crate::actions`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use std::collections::HashMap;
use uuid::Uuid;

use crate::actions::{CreateOutcome, FormState, INVOICES_PATH};
use crate::core::error::BillingError;
use crate::core::form::FormData;
use crate::server::AppState;

/// GET /
pub async fn index() -> Redirect {
    Redirect::to(INVOICES_PATH)
}

/// GET /dashboard/invoices
pub async fn invoices_page(State(state): State<AppState>) -> Result<Html<String>, BillingError> {
    // A stale mark means a mutation happened since the last render; the
    // fetch below is the re-fetch that clears it.
    state.cache.refresh(INVOICES_PATH);

    let invoices = state.store.list().await?;
    let html = state
        .pages
        .invoices(&invoices)
        .map_err(|e| BillingError::Internal(e.to_string()))?;

    Ok(Html(html))
}

/// GET /dashboard/invoices/create
pub async fn create_page(State(state): State<AppState>) -> Result<Html<String>, BillingError> {
    let html = state
        .pages
        .invoice_form(&FormState::default(), &FormData::new())
        .map_err(|e| BillingError::Internal(e.to_string()))?;

    Ok(Html(html))
}

/// POST /dashboard/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, BillingError> {
    let form = FormData::from(fields);

    match state.actions.create(FormState::default(), &form).await {
        CreateOutcome::Redirect(redirect) => Ok(see_other(redirect.location())),
        CreateOutcome::State(form_state) => {
            let html = state
                .pages
                .invoice_form(&form_state, &form)
                .map_err(|e| BillingError::Internal(e.to_string()))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

/// POST /dashboard/invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, BillingError> {
    let form = FormData::from(fields);
    let redirect = state.actions.update(&id, &form).await?;

    Ok(Redirect::to(redirect.location()))
}

/// POST /dashboard/invoices/{id}/delete
///
/// The action performs no navigation effect; the 303 back to the
/// listing is plain HTTP plumbing for browser form posts.
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, BillingError> {
    state.actions.delete(&id).await?;

    Ok(Redirect::to(INVOICES_PATH))
}

/// GET /login
pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, BillingError> {
    let html = state
        .pages
        .login(None)
        .map_err(|e| BillingError::Internal(e.to_string()))?;

    Ok(Html(html))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, BillingError> {
    let form = FormData::from(fields);

    match state.authenticator.authenticate(None, &form).await {
        Ok(None) => Ok(see_other(INVOICES_PATH)),
        Ok(Some(message)) => {
            let html = state
                .pages
                .login(Some(&message))
                .map_err(|e| BillingError::Internal(e.to_string()))?;
            Ok((StatusCode::UNAUTHORIZED, Html(html)).into_response())
        }
        Err(err) => Err(BillingError::Internal(err.to_string())),
    }
}

fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}
