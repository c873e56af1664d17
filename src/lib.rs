//! # Billing
//!
//! An invoice-management web application: server-rendered pages, form
//! submissions that create, update and delete invoice records, and a
//! credentials-based login flow.
//!
//! The action layer is deliberately thin. Each form submission is handled
//! by validating the raw fields with a schema, issuing one parameterized
//! statement against the `invoices` relation, marking the listing route
//! stale and redirecting. What the crate cares about is the wiring:
//!
//! - **Explicit dependencies**: actions receive their store, cache and
//!   identity provider through constructors, never ambient globals
//! - **Enumerable outcomes**: a redirect is a value
//!   ([`actions::CreateOutcome::Redirect`]), not a control-flow interrupt
//! - **Typed errors**: failures surface as [`core::error::BillingError`]
//!   categories with stable HTTP mappings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billing::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryInvoiceStore::new())
//!     .with_identity_provider(SeededCredentialsProvider::new([(
//!         "user@example.com".to_string(),
//!         "123456".to_string(),
//!     )]))
//!     .build()?;
//!
//! // `app` is an axum Router; serve it or drive it from tests.
//! ```

pub mod actions;
pub mod cache;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Actions ===
    pub use crate::actions::{
        Authenticator, CreateOutcome, FormState, InvoiceActions, Redirect, INVOICES_PATH,
    };

    // === Core types and traits ===
    pub use crate::core::auth::{
        AuthFailure, IdentityProvider, SeededCredentialsProvider, SignInError,
        CREDENTIALS_STRATEGY,
    };
    pub use crate::core::error::{BillingError, BillingResult, ErrorResponse};
    pub use crate::core::form::FormData;
    pub use crate::core::invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
    pub use crate::core::service::{InvoiceStore, Revalidator};
    pub use crate::core::validation::{FieldErrors, InvoiceInput, InvoiceSchema};

    // === Cache ===
    pub use crate::cache::RouteCache;

    // === Config ===
    pub use crate::config::{AppConfig, SeedUser, StorageBackend};

    // === Server ===
    pub use crate::server::{AppState, Pages, ServerBuilder};

    // === Storage ===
    pub use crate::storage::InMemoryInvoiceStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresInvoiceStore;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
