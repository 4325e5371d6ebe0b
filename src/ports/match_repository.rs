//! Match repository port.
//!
//! Defines the contract for storing and retrieving Match aggregates.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MatchId, UserId};
use crate::domain::matching::Match;

/// Repository port for Match aggregate persistence.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Save a new match.
    ///
    /// # Errors
    ///
    /// - `InternalError` on persistence failure
    async fn save(&self, m: &Match) -> Result<(), DomainError>;

    /// Update an existing match.
    ///
    /// # Errors
    ///
    /// - `MatchNotFound` if the match doesn't exist
    async fn update(&self, m: &Match) -> Result<(), DomainError>;

    /// Find a match by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MatchId) -> Result<Option<Match>, DomainError>;

    /// Find all matches involving a user, newest first.
    async fn find_for_user(&self, user_id: &UserId) -> Result<Vec<Match>, DomainError>;
}
