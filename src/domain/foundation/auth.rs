//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user as seen by the application.
//! They have **no external dependencies** - any identity provider (Cognito,
//! Zitadel, Auth0) can populate them via the `IdentityProvider` port.
//!
//! # Design Decisions
//!
//! - `AuthenticatedUser` contains only the claims the flow actually uses
//! - `AuthError` is domain-centric, not provider-specific
//! - Absence of a signed-in user is **not** an error: the identity port
//!   returns `Option<AuthenticatedUser>`, and the discovery flow maps `None`
//!   to its `auth_required` phase

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated identity session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if available.
    pub display_name: Option<String>,

    /// Whether the user's email has been verified by the provider.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by an `IdentityProvider` adapter after resolving
    /// the current session.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            email_verified,
        }
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }

    /// Checks whether the user signed in with a verified address on the
    /// given campus domain.
    ///
    /// The platform is campus-exclusive: only institute addresses may join.
    pub fn is_campus_verified(&self, campus_domain: &str) -> bool {
        self.email_verified
            && self
                .email
                .rsplit_once('@')
                .map(|(_, domain)| domain.eq_ignore_ascii_case(campus_domain))
                .unwrap_or(false)
    }
}

/// Authentication errors that can occur while resolving the current user.
///
/// These errors are **domain-centric** - they describe what went wrong from
/// the application's perspective, not the identity provider's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The session token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired session")]
    InvalidSession,

    /// Session is valid but the user no longer exists in the system.
    #[error("User not found")]
    UserNotFound,

    /// The identity service is unavailable (network, config, etc.).
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidSession | AuthError::UserNotFound)
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus_user(email: &str, verified: bool) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            email,
            Some("Test User".to_string()),
            verified,
        )
    }

    #[test]
    fn display_name_or_email_prefers_display_name() {
        let user = campus_user("a@iima.ac.in", true);
        assert_eq!(user.display_name_or_email(), "Test User");
    }

    #[test]
    fn display_name_or_email_falls_back_to_email() {
        let mut user = campus_user("a@iima.ac.in", true);
        user.display_name = None;
        assert_eq!(user.display_name_or_email(), "a@iima.ac.in");
    }

    #[test]
    fn campus_verified_for_matching_domain() {
        let user = campus_user("student@iima.ac.in", true);
        assert!(user.is_campus_verified("iima.ac.in"));
    }

    #[test]
    fn campus_verified_is_case_insensitive_on_domain() {
        let user = campus_user("student@IIMA.AC.IN", true);
        assert!(user.is_campus_verified("iima.ac.in"));
    }

    #[test]
    fn not_campus_verified_for_other_domain() {
        let user = campus_user("student@gmail.com", true);
        assert!(!user.is_campus_verified("iima.ac.in"));
    }

    #[test]
    fn not_campus_verified_when_email_unverified() {
        let user = campus_user("student@iima.ac.in", false);
        assert!(!user.is_campus_verified("iima.ac.in"));
    }

    #[test]
    fn not_campus_verified_for_malformed_email() {
        let user = campus_user("not-an-email", true);
        assert!(!user.is_campus_verified("iima.ac.in"));
    }

    #[test]
    fn invalid_session_requires_reauthentication() {
        assert!(AuthError::InvalidSession.requires_reauthentication());
        assert!(AuthError::UserNotFound.requires_reauthentication());
        assert!(!AuthError::service_unavailable("down").requires_reauthentication());
    }

    #[test]
    fn service_unavailable_is_transient() {
        assert!(AuthError::service_unavailable("down").is_transient());
        assert!(!AuthError::InvalidSession.is_transient());
    }
}
