//! Credentials authentication seam
//!
//! Credential verification is delegated to an identity provider behind a
//! trait, the same way entity persistence hides behind
//! [`InvoiceStore`](crate::core::service::InvoiceStore). The provider's
//! internal token and session mechanics stay on its side of the
//! boundary; only the failure taxonomy crosses it.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::form::FormData;

/// The fixed strategy name for username/password sign-in.
pub const CREDENTIALS_STRATEGY: &str = "credentials";

/// Categorized authentication failure reported by the provider.
#[derive(Debug, Error)]
pub enum AuthFailure {
    /// The supplied credentials were rejected.
    #[error("credentials rejected")]
    CredentialsSignin,

    /// The provider refused the sign-in for another reason.
    #[error("access denied")]
    AccessDenied,

    /// The provider cannot run the requested strategy.
    #[error("provider misconfigured: {0}")]
    Configuration(String),
}

/// Failure reported by [`IdentityProvider::sign_in`].
///
/// `Auth` carries a categorized verdict the login action translates into
/// a user-facing message. `Unexpected` is anything else — not an
/// authentication verdict — and must propagate untranslated.
#[derive(Debug, Error)]
pub enum SignInError {
    #[error(transparent)]
    Auth(#[from] AuthFailure),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// External identity provider for form-based sign-in strategies.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify the credentials carried in `form` using the named strategy.
    async fn sign_in(&self, strategy: &str, form: &FormData) -> Result<(), SignInError>;
}

/// Identity provider backed by a seeded email/password table.
///
/// The default provider for development and tests. Lookups read the
/// `email` and `password` form fields.
pub struct SeededCredentialsProvider {
    users: HashMap<String, String>,
}

impl SeededCredentialsProvider {
    pub fn new(users: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }
}

#[async_trait]
impl IdentityProvider for SeededCredentialsProvider {
    async fn sign_in(&self, strategy: &str, form: &FormData) -> Result<(), SignInError> {
        if strategy != CREDENTIALS_STRATEGY {
            return Err(AuthFailure::Configuration(format!(
                "unknown strategy: {}",
                strategy
            ))
            .into());
        }

        let email = form.get("email").unwrap_or_default();
        let password = form.get("password").unwrap_or_default();

        match self.users.get(email) {
            Some(expected) if expected == password => Ok(()),
            _ => Err(AuthFailure::CredentialsSignin.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SeededCredentialsProvider {
        SeededCredentialsProvider::new([(
            "user@example.com".to_string(),
            "123456".to_string(),
        )])
    }

    fn login_form(email: &str, password: &str) -> FormData {
        FormData::new().with("email", email).with("password", password)
    }

    #[tokio::test]
    async fn test_sign_in_accepts_seeded_user() {
        let result = provider()
            .sign_in(CREDENTIALS_STRATEGY, &login_form("user@example.com", "123456"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sign_in_rejects_wrong_password() {
        let result = provider()
            .sign_in(CREDENTIALS_STRATEGY, &login_form("user@example.com", "nope"))
            .await;
        assert!(matches!(
            result,
            Err(SignInError::Auth(AuthFailure::CredentialsSignin))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_rejects_unknown_email() {
        let result = provider()
            .sign_in(CREDENTIALS_STRATEGY, &login_form("ghost@example.com", "123456"))
            .await;
        assert!(matches!(
            result,
            Err(SignInError::Auth(AuthFailure::CredentialsSignin))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_rejects_missing_fields() {
        let result = provider().sign_in(CREDENTIALS_STRATEGY, &FormData::new()).await;
        assert!(matches!(
            result,
            Err(SignInError::Auth(AuthFailure::CredentialsSignin))
        ));
    }

    #[tokio::test]
    async fn test_unknown_strategy_is_a_configuration_failure() {
        let result = provider()
            .sign_in("oauth", &login_form("user@example.com", "123456"))
            .await;
        assert!(matches!(
            result,
            Err(SignInError::Auth(AuthFailure::Configuration(_)))
        ));
    }
}
