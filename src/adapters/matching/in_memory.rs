//! In-memory match repository adapter.
//!
//! Stores Match aggregates in memory. Useful for testing and development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, MatchId, UserId};
use crate::domain::matching::Match;
use crate::ports::MatchRepository;

/// In-memory storage for matches
#[derive(Debug, Clone, Default)]
pub struct InMemoryMatchRepository {
    matches: Arc<RwLock<HashMap<MatchId, Match>>>,
}

impl InMemoryMatchRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.matches.write().await.clear();
    }

    /// Get the number of stored matches
    pub async fn match_count(&self) -> usize {
        self.matches.read().await.len()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn save(&self, m: &Match) -> Result<(), DomainError> {
        self.matches.write().await.insert(*m.id(), m.clone());
        Ok(())
    }

    async fn update(&self, m: &Match) -> Result<(), DomainError> {
        let mut matches = self.matches.write().await;
        if !matches.contains_key(m.id()) {
            return Err(DomainError::new(
                ErrorCode::MatchNotFound,
                format!("Match not found: {}", m.id()),
            ));
        }
        matches.insert(*m.id(), m.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MatchId) -> Result<Option<Match>, DomainError> {
        Ok(self.matches.read().await.get(id).cloned())
    }

    async fn find_for_user(&self, user_id: &UserId) -> Result<Vec<Match>, DomainError> {
        let matches = self.matches.read().await;
        let mut found: Vec<Match> = matches
            .values()
            .filter(|m| m.involves(user_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(found)
    }
}
