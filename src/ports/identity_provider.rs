//! Identity provider port.
//!
//! Resolves the currently signed-in user, if any. Absence of a session is a
//! normal outcome (`Ok(None)`), not an error: the discovery flow maps it to
//! its `auth_required` phase and issues no further calls.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves the current user from the ambient identity session.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(Some(user))` for a valid signed-in session
/// - Return `Ok(None)` when nobody is signed in (never an `Err`)
/// - Return `AuthError::ServiceUnavailable` for transient provider failures
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Get the currently signed-in user, or `None`.
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn IdentityProvider>>();
    }
}
