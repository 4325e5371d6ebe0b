//! RequestRevealHandler - Command handler for the mutual identity reveal.

use std::sync::Arc;

use crate::domain::foundation::{MatchId, UserId};
use crate::domain::matching::{MatchError, RevealOutcome};
use crate::ports::MatchRepository;

/// Command to request the reveal on one match.
#[derive(Debug, Clone)]
pub struct RequestRevealCommand {
    pub match_id: MatchId,
    pub user_id: UserId,
}

/// Result of a successful reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestRevealResult {
    pub outcome: RevealOutcome,
}

/// Handler for reveal requests.
pub struct RequestRevealHandler {
    repository: Arc<dyn MatchRepository>,
}

impl RequestRevealHandler {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RequestRevealCommand,
    ) -> Result<RequestRevealResult, MatchError> {
        let mut m = self
            .repository
            .find_by_id(&cmd.match_id)
            .await
            .map_err(|e| MatchError::infrastructure(e.to_string()))?
            .ok_or(MatchError::NotFound(cmd.match_id))?;

        let outcome = m.request_reveal(&cmd.user_id)?;

        self.repository
            .update(&m)
            .await
            .map_err(|e| MatchError::infrastructure(e.to_string()))?;

        if outcome == RevealOutcome::MutualReveal {
            tracing::info!(match_id = %cmd.match_id, "mutual reveal unlocked");
        }

        Ok(RequestRevealResult { outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::matching::InMemoryMatchRepository;
    use crate::domain::foundation::CompatibilityScore;
    use crate::domain::matching::{Match, RevealState};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    async fn seeded() -> (RequestRevealHandler, Arc<InMemoryMatchRepository>, MatchId) {
        let repo = Arc::new(InMemoryMatchRepository::new());
        let m = Match::new(
            MatchId::new(),
            user("alice"),
            user("bob"),
            CompatibilityScore::new(87),
        )
        .unwrap();
        repo.save(&m).await.unwrap();
        (RequestRevealHandler::new(repo.clone()), repo, *m.id())
    }

    #[tokio::test]
    async fn first_request_awaits_other_side() {
        let (handler, repo, match_id) = seeded().await;

        let result = handler
            .handle(RequestRevealCommand {
                match_id,
                user_id: user("alice"),
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, RevealOutcome::AwaitingOther);
        let stored = repo.find_by_id(&match_id).await.unwrap().unwrap();
        assert_eq!(stored.reveal_state(), RevealState::Requested);
    }

    #[tokio::test]
    async fn mutual_request_reveals_identities() {
        let (handler, repo, match_id) = seeded().await;

        handler
            .handle(RequestRevealCommand {
                match_id,
                user_id: user("alice"),
            })
            .await
            .unwrap();
        let result = handler
            .handle(RequestRevealCommand {
                match_id,
                user_id: user("bob"),
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, RevealOutcome::MutualReveal);
        let stored = repo.find_by_id(&match_id).await.unwrap().unwrap();
        assert!(stored.reveal_state().is_revealed());
    }

    #[tokio::test]
    async fn duplicate_request_fails_and_leaves_state() {
        let (handler, repo, match_id) = seeded().await;

        handler
            .handle(RequestRevealCommand {
                match_id,
                user_id: user("alice"),
            })
            .await
            .unwrap();
        let result = handler
            .handle(RequestRevealCommand {
                match_id,
                user_id: user("alice"),
            })
            .await;

        assert!(matches!(result, Err(MatchError::AlreadyRequested(_))));
        let stored = repo.find_by_id(&match_id).await.unwrap().unwrap();
        assert_eq!(stored.reveal_state(), RevealState::Requested);
    }

    #[tokio::test]
    async fn outsider_request_is_forbidden() {
        let (handler, _, match_id) = seeded().await;

        let result = handler
            .handle(RequestRevealCommand {
                match_id,
                user_id: user("carol"),
            })
            .await;

        assert!(matches!(result, Err(MatchError::NotParticipant(_))));
    }

    #[tokio::test]
    async fn unknown_match_reports_not_found() {
        let (handler, _, _) = seeded().await;

        let result = handler
            .handle(RequestRevealCommand {
                match_id: MatchId::new(),
                user_id: user("alice"),
            })
            .await;

        assert!(matches!(result, Err(MatchError::NotFound(_))));
    }
}
