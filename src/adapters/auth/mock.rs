//! Mock identity adapter for testing and development.
//!
//! Implements the `IdentityProvider` port without a real identity backend.
//!
//! # Example
//!
//! ```ignore
//! use masquerade::adapters::auth::MockIdentityProvider;
//! use masquerade::ports::IdentityProvider;
//!
//! let provider = MockIdentityProvider::signed_in("user-123");
//! let user = provider.current_user().await?.expect("signed in");
//! assert_eq!(user.id.as_str(), "user-123");
//! ```

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::IdentityProvider;

/// Mock identity provider for testing.
///
/// Holds at most one signed-in user. `signed_out()` models the anonymous
/// visitor; `with_error` forces failures for error-path tests.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    user: RwLock<Option<AuthenticatedUser>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockIdentityProvider {
    /// Creates a provider with nobody signed in.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Creates a provider with the given user signed in.
    pub fn with_user(user: AuthenticatedUser) -> Self {
        let provider = Self::default();
        *provider.user.write().unwrap() = Some(user);
        provider
    }

    /// Creates a provider with a simple verified campus test user.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).unwrap(),
            format!("{}@iima.ac.in", user_id),
            Some(format!("Test User {}", user_id)),
            true,
        );
        Self::with_user(user)
    }

    /// Forces all lookups to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Signs a user in at runtime.
    pub fn sign_in(&self, user: AuthenticatedUser) {
        *self.user.write().unwrap() = Some(user);
    }

    /// Signs the current user out.
    pub fn sign_out(&self) {
        *self.user.write().unwrap() = None;
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }
        Ok(self.user.read().unwrap().clone())
    }
}
