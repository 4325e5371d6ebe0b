//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Masquerade domain.

mod auth;
mod errors;
mod ids;
mod score;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DiscoverySessionId, MatchId, ProfileId, TraitId, UserId};
pub use score::CompatibilityScore;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
