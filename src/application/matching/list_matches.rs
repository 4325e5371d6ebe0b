//! ListMatchesHandler - Query handler for a user's match list.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::matching::{Match, MatchError};
use crate::ports::MatchRepository;

/// Handler returning a user's matches, newest first.
pub struct ListMatchesHandler {
    repository: Arc<dyn MatchRepository>,
}

impl ListMatchesHandler {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<Match>, MatchError> {
        self.repository
            .find_for_user(user_id)
            .await
            .map_err(|e| MatchError::infrastructure(e.to_string()))
    }

    /// Only the matches where both sides already revealed.
    pub async fn handle_revealed(&self, user_id: &UserId) -> Result<Vec<Match>, MatchError> {
        let matches = self.handle(user_id).await?;
        Ok(matches
            .into_iter()
            .filter(|m| m.reveal_state().is_revealed())
            .collect())
    }
}
