//! Form actions
//!
//! An action is a server-side handler bound to a form submission: it
//! receives prior UI state and the submitted fields, and returns new UI
//! state or a redirect. Every collaborator — store, route cache,
//! identity provider — is injected through the constructor; there is no
//! ambient database client or provider session anywhere in this layer.

pub mod auth;
pub mod invoices;

pub use auth::{Authenticator, GENERIC_FAILURE, INVALID_CREDENTIALS};
pub use invoices::{
    CreateOutcome, FormState, InvoiceActions, Redirect, CREATE_DB_FAILED, CREATE_FAILED,
    INVOICES_PATH,
};
