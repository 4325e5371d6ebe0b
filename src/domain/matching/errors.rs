//! Match-specific error types.

use crate::domain::foundation::{ErrorCode, MatchId, UserId};

/// Errors raised by match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Match was not found.
    NotFound(MatchId),
    /// The acting user is not a participant in the match.
    NotParticipant(UserId),
    /// The acting user already asked for the reveal.
    AlreadyRequested(UserId),
    /// Both identities are already revealed.
    AlreadyRevealed,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl MatchError {
    pub fn not_found(id: MatchId) -> Self {
        MatchError::NotFound(id)
    }

    pub fn not_participant(user_id: UserId) -> Self {
        MatchError::NotParticipant(user_id)
    }

    pub fn already_requested(user_id: UserId) -> Self {
        MatchError::AlreadyRequested(user_id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MatchError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MatchError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MatchError::NotFound(_) => ErrorCode::MatchNotFound,
            MatchError::NotParticipant(_) => ErrorCode::Forbidden,
            MatchError::AlreadyRequested(_) => ErrorCode::RevealAlreadyRequested,
            MatchError::AlreadyRevealed => ErrorCode::InvalidStateTransition,
            MatchError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MatchError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MatchError::NotFound(id) => format!("Match not found: {}", id),
            MatchError::NotParticipant(user_id) => {
                format!("User '{}' is not part of this match", user_id)
            }
            MatchError::AlreadyRequested(user_id) => {
                format!("User '{}' already requested the reveal", user_id)
            }
            MatchError::AlreadyRevealed => "Identities are already revealed".to_string(),
            MatchError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MatchError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MatchError {}
