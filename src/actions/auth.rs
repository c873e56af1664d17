//! Login form action

use std::sync::Arc;

use anyhow::Result;

use crate::core::auth::{AuthFailure, IdentityProvider, SignInError, CREDENTIALS_STRATEGY};
use crate::core::form::FormData;

/// Message for a rejected username/password pair.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
/// Message for any other categorized provider failure.
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Login action delegating to an injected identity provider.
#[derive(Clone)]
pub struct Authenticator {
    provider: Arc<dyn IdentityProvider>,
}

impl Authenticator {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Run the credentials sign-in flow for a login form submission.
    ///
    /// Returns `Ok(None)` on success — navigation is the caller's
    /// concern — and `Ok(Some(message))` for a categorized
    /// authentication failure. Anything uncategorized is re-signaled as
    /// `Err` and must reach the caller's error boundary untranslated.
    ///
    /// The previous message state is carried for form-state plumbing
    /// parity; it never influences the outcome.
    pub async fn authenticate(
        &self,
        _prev: Option<String>,
        form: &FormData,
    ) -> Result<Option<String>> {
        match self.provider.sign_in(CREDENTIALS_STRATEGY, form).await {
            Ok(()) => Ok(None),
            Err(SignInError::Auth(AuthFailure::CredentialsSignin)) => {
                Ok(Some(INVALID_CREDENTIALS.to_string()))
            }
            Err(SignInError::Auth(failure)) => {
                tracing::warn!(error = %failure, "sign-in failed");
                Ok(Some(GENERIC_FAILURE.to_string()))
            }
            Err(SignInError::Unexpected(err)) => Err(err),
        }
    }
}
