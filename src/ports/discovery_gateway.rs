//! Discovery gateway port.
//!
//! The discovery core never talks to the network itself; it drives the
//! backend through this port. Adapters decide how the three operations are
//! carried (in-memory for tests and development, REST against the deployed
//! backend).
//!
//! # Contract
//!
//! - `fetch_profiles` returns one batch per call together with the
//!   backend-issued session id. The backend applies the hard filters
//!   (orientation, age range) and shuffles; the core treats the batch as a
//!   read-only snapshot.
//! - `submit_selection` is called once per reviewed profile, strictly in
//!   review order. The controller awaits each call, so implementations never
//!   see two in-flight submissions for one session.
//! - `complete_session` is called exactly once, after the last submission is
//!   acknowledged.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::discovery::{DiscoveryProfile, TraitSelection};
use crate::domain::foundation::{DiscoverySessionId, UserId};

/// Errors surfaced by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The backend could not be reached or failed mid-call.
    #[error("Gateway unreachable: {0}")]
    Unreachable(String),

    /// The backend answered but refused the payload.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The backend answered with a body this client cannot interpret.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Creates an unreachable error with a message.
    pub fn unreachable(message: impl Into<String>) -> Self {
        GatewayError::Unreachable(message.into())
    }

    /// Creates a rejected error with a message.
    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected(message.into())
    }

    /// Creates a malformed response error with a message.
    pub fn malformed(message: impl Into<String>) -> Self {
        GatewayError::MalformedResponse(message.into())
    }
}

/// One fetched batch of blind profiles.
#[derive(Debug, Clone)]
pub struct ProfileBatch {
    /// Backend-issued id for this discovery session.
    pub session_id: DiscoverySessionId,
    /// The profiles to review, already filtered and shuffled.
    pub profiles: Vec<DiscoveryProfile>,
}

/// Backend acknowledgement of one submitted selection.
#[derive(Debug, Clone)]
pub struct SelectionReceipt {
    /// Whether the backend recorded the selection.
    pub accepted: bool,
    /// How many selections the backend now holds for this user.
    pub selections_count: u32,
}

/// Backend acknowledgement of session completion.
#[derive(Debug, Clone)]
pub struct CompletionReceipt {
    /// Whether the backend sealed the session.
    pub accepted: bool,
    /// Human-readable status message.
    pub message: String,
}

/// Port to the discovery backend.
#[async_trait]
pub trait DiscoveryGateway: Send + Sync {
    /// Fetch a fresh batch of profiles for the user.
    ///
    /// # Errors
    ///
    /// - `Unreachable` if the backend cannot be contacted
    /// - `Rejected` if the backend refuses to serve a batch
    async fn fetch_profiles(&self, user_id: &UserId) -> Result<ProfileBatch, GatewayError>;

    /// Relay one confirmed selection.
    ///
    /// # Errors
    ///
    /// - `Unreachable` if the backend cannot be contacted
    /// - `Rejected` if the backend refuses the record
    async fn submit_selection(
        &self,
        session_id: &DiscoverySessionId,
        selection: &TraitSelection,
    ) -> Result<SelectionReceipt, GatewayError>;

    /// Mark the session complete after every profile is reviewed.
    ///
    /// # Errors
    ///
    /// - `Unreachable` if the backend cannot be contacted
    /// - `Rejected` if the backend refuses the completion
    async fn complete_session(
        &self,
        session_id: &DiscoverySessionId,
        user_id: &UserId,
    ) -> Result<CompletionReceipt, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn DiscoveryGateway) {}
    }

    #[test]
    fn gateway_error_displays_reason() {
        let err = GatewayError::unreachable("connection refused");
        assert_eq!(format!("{}", err), "Gateway unreachable: connection refused");
    }
}
