//! Core module containing the domain types, service traits and validation

pub mod auth;
pub mod error;
pub mod form;
pub mod invoice;
pub mod service;
pub mod validation;

pub use auth::{AuthFailure, IdentityProvider, SeededCredentialsProvider, SignInError};
pub use error::{BillingError, BillingResult};
pub use form::FormData;
pub use invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
pub use service::{InvoiceStore, Revalidator};
pub use validation::{FieldErrors, InvoiceInput, InvoiceSchema};
