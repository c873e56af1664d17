//! HTTP server assembly

pub mod builder;
pub mod handlers;
pub mod pages;

pub use builder::ServerBuilder;
pub use pages::Pages;

use std::sync::Arc;

use crate::actions::{Authenticator, InvoiceActions};
use crate::cache::RouteCache;
use crate::core::service::InvoiceStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub actions: InvoiceActions,
    pub authenticator: Authenticator,
    /// Read-side access for page renders; mutations go through `actions`.
    pub store: Arc<dyn InvoiceStore>,
    pub cache: RouteCache,
    pub pages: Pages,
}
