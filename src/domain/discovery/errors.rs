//! Discovery-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, TraitId, ValidationError};

/// Errors raised by the discovery session and its controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// No signed-in user; the flow is parked in `auth_required`.
    AuthRequired,
    /// The operation is not legal in the session's current phase.
    InvalidPhase(String),
    /// Advance was attempted without the exact required selection count.
    SelectionIncomplete { selected: usize, required: usize },
    /// A toggled trait id is not on the current profile's board.
    UnknownTrait(TraitId),
    /// The backend returned no profiles for this user.
    EmptyBatch,
    /// The backend acknowledged the call but refused the payload.
    Rejected(String),
    /// The gateway could not be reached or failed mid-call.
    GatewayUnavailable(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
}

impl DiscoveryError {
    pub fn invalid_phase(message: impl Into<String>) -> Self {
        DiscoveryError::InvalidPhase(message.into())
    }

    pub fn selection_incomplete(selected: usize, required: usize) -> Self {
        DiscoveryError::SelectionIncomplete { selected, required }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        DiscoveryError::Rejected(message.into())
    }

    pub fn gateway_unavailable(message: impl Into<String>) -> Self {
        DiscoveryError::GatewayUnavailable(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DiscoveryError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DiscoveryError::AuthRequired => ErrorCode::AuthRequired,
            DiscoveryError::InvalidPhase(_) => ErrorCode::SessionNotActive,
            DiscoveryError::SelectionIncomplete { .. } => ErrorCode::SelectionIncomplete,
            DiscoveryError::UnknownTrait(_) => ErrorCode::TraitNotFound,
            DiscoveryError::EmptyBatch => ErrorCode::ProfileNotFound,
            DiscoveryError::Rejected(_) => ErrorCode::GatewayError,
            DiscoveryError::GatewayUnavailable(_) => ErrorCode::GatewayError,
            DiscoveryError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DiscoveryError::AuthRequired => "Sign in required to start discovery".to_string(),
            DiscoveryError::InvalidPhase(msg) => format!("Invalid phase: {}", msg),
            DiscoveryError::SelectionIncomplete { selected, required } => format!(
                "Exactly {} traits must be selected to continue, got {}",
                required, selected
            ),
            DiscoveryError::UnknownTrait(id) => {
                format!("Trait '{}' is not on the current profile", id)
            }
            DiscoveryError::EmptyBatch => "No discovery profiles available".to_string(),
            DiscoveryError::Rejected(msg) => format!("Backend rejected the request: {}", msg),
            DiscoveryError::GatewayUnavailable(msg) => format!("Gateway unavailable: {}", msg),
            DiscoveryError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
        }
    }
}

impl std::fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DiscoveryError {}

impl From<ValidationError> for DiscoveryError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::InvalidFormat { field, reason } if field == "state_transition" => {
                DiscoveryError::InvalidPhase(reason.clone())
            }
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => DiscoveryError::ValidationFailed {
                field: field.clone(),
                message: err.to_string(),
            },
        }
    }
}

impl From<DomainError> for DiscoveryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SelectionIncomplete => DiscoveryError::ValidationFailed {
                field: "selected_trait_ids".to_string(),
                message: err.message,
            },
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => DiscoveryError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::InvalidStateTransition | ErrorCode::SessionNotActive
            | ErrorCode::SessionAlreadyComplete => DiscoveryError::InvalidPhase(err.message),
            _ => DiscoveryError::GatewayUnavailable(err.message),
        }
    }
}
