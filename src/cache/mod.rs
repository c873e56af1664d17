//! Route revalidation
//!
//! Mutations never re-render pages eagerly; they mark the listing route
//! stale and let the next render re-fetch. The in-process cache here
//! only tracks which paths went stale — there is no eviction policy or
//! stored render output at this layer.

use crate::core::error::{BillingError, BillingResult};
use crate::core::service::Revalidator;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// In-process record of stale routes.
///
/// Uses RwLock for thread-safe access; clones share the same marks.
#[derive(Clone, Default)]
pub struct RouteCache {
    stale: Arc<RwLock<HashSet<String>>>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` is currently marked stale.
    pub fn is_stale(&self, path: &str) -> bool {
        self.stale
            .read()
            .map(|stale| stale.contains(path))
            .unwrap_or(false)
    }

    /// Clear the stale mark for `path`, returning whether it was set.
    ///
    /// Page renders call this once they have re-fetched.
    pub fn refresh(&self, path: &str) -> bool {
        self.stale
            .write()
            .map(|mut stale| stale.remove(path))
            .unwrap_or(false)
    }
}

#[async_trait]
impl Revalidator for RouteCache {
    async fn revalidate(&self, path: &str) -> BillingResult<()> {
        let mut stale = self.stale.write().map_err(|e| {
            BillingError::Internal(format!("failed to acquire cache lock: {}", e))
        })?;

        stale.insert(path.to_string());
        tracing::debug!(path = %path, "route marked stale");

        Ok(())
    }
}
