//! Match aggregate entity.
//!
//! A match joins two users the backend paired after discovery. The
//! compatibility score arrives with the match and is carried as-is; this
//! crate never computes it. Identity stays hidden until both participants
//! request the reveal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CompatibilityScore, MatchId, StateMachine, Timestamp, UserId,
};

use super::{MatchError, RevealState};

/// Outcome of a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// One side has asked; waiting on the other.
    AwaitingOther,
    /// Both sides asked; identities are now mutually revealed.
    MutualReveal,
}

/// A backend-scored pairing of two users.
///
/// # Invariants
///
/// - the two participants are distinct
/// - `reveal_requests` only ever holds participants, each at most once
/// - `reveal_state` is `Revealed` exactly when both participants requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    participants: [UserId; 2],
    compat_score: CompatibilityScore,
    reveal_state: RevealState,
    reveal_requests: Vec<UserId>,
    chat_started: bool,
    created_at: Timestamp,
}

impl Match {
    /// Create a new hidden match between two distinct users.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if both participants are the same user
    pub fn new(
        id: MatchId,
        first: UserId,
        second: UserId,
        compat_score: CompatibilityScore,
    ) -> Result<Self, MatchError> {
        if first == second {
            return Err(MatchError::validation(
                "participants",
                "a match requires two distinct users",
            ));
        }
        Ok(Self {
            id,
            participants: [first, second],
            compat_score,
            reveal_state: RevealState::Hidden,
            reveal_requests: Vec::with_capacity(2),
            chat_started: false,
            created_at: Timestamp::now(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the match id.
    pub fn id(&self) -> &MatchId {
        &self.id
    }

    /// Returns both participants.
    pub fn participants(&self) -> &[UserId; 2] {
        &self.participants
    }

    /// Returns the backend-assigned compatibility score.
    pub fn compat_score(&self) -> CompatibilityScore {
        self.compat_score
    }

    /// Returns the reveal progress.
    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// Returns true once chat has been opened on this match.
    pub fn chat_started(&self) -> bool {
        self.chat_started
    }

    /// Returns when the match was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks whether the given user is one of the two participants.
    pub fn involves(&self, user_id: &UserId) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// Returns the other participant, if `user_id` is one of the pair.
    pub fn other_participant(&self, user_id: &UserId) -> Option<&UserId> {
        if !self.involves(user_id) {
            return None;
        }
        self.participants.iter().find(|p| *p != user_id)
    }

    /// Checks whether the given participant already asked for the reveal.
    pub fn has_requested_reveal(&self, user_id: &UserId) -> bool {
        self.reveal_requests.iter().any(|r| r == user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record one participant's reveal request.
    ///
    /// The first request marks the match `Requested`; when the second
    /// participant follows, both identities unlock.
    ///
    /// # Errors
    ///
    /// - `NotParticipant` if the user is not part of the match
    /// - `AlreadyRequested` if the user asked before
    /// - `AlreadyRevealed` if the reveal already happened
    pub fn request_reveal(&mut self, user_id: &UserId) -> Result<RevealOutcome, MatchError> {
        if !self.involves(user_id) {
            return Err(MatchError::not_participant(user_id.clone()));
        }
        if self.reveal_state.is_revealed() {
            return Err(MatchError::AlreadyRevealed);
        }
        if self.has_requested_reveal(user_id) {
            return Err(MatchError::already_requested(user_id.clone()));
        }

        self.reveal_requests.push(user_id.clone());
        if self.reveal_requests.len() == 2 {
            self.reveal_state = self
                .reveal_state
                .transition_to(RevealState::Revealed)
                .map_err(|e| MatchError::infrastructure(e.to_string()))?;
            Ok(RevealOutcome::MutualReveal)
        } else {
            self.reveal_state = self
                .reveal_state
                .transition_to(RevealState::Requested)
                .map_err(|e| MatchError::infrastructure(e.to_string()))?;
            Ok(RevealOutcome::AwaitingOther)
        }
    }

    /// Mark the chat as opened. Idempotent.
    pub fn start_chat(&mut self) {
        self.chat_started = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn test_match() -> Match {
        Match::new(
            MatchId::new(),
            user("alice"),
            user("bob"),
            CompatibilityScore::new(87),
        )
        .unwrap()
    }

    #[test]
    fn new_match_is_hidden() {
        let m = test_match();
        assert_eq!(m.reveal_state(), RevealState::Hidden);
        assert!(!m.chat_started());
        assert_eq!(m.compat_score().value(), 87);
    }

    #[test]
    fn new_match_rejects_self_pairing() {
        let result = Match::new(
            MatchId::new(),
            user("alice"),
            user("alice"),
            CompatibilityScore::new(50),
        );
        assert!(result.is_err());
    }

    #[test]
    fn involves_recognises_both_participants() {
        let m = test_match();
        assert!(m.involves(&user("alice")));
        assert!(m.involves(&user("bob")));
        assert!(!m.involves(&user("carol")));
    }

    #[test]
    fn other_participant_returns_the_pair() {
        let m = test_match();
        assert_eq!(m.other_participant(&user("alice")), Some(&user("bob")));
        assert_eq!(m.other_participant(&user("carol")), None);
    }

    #[test]
    fn first_reveal_request_awaits_other() {
        let mut m = test_match();
        let outcome = m.request_reveal(&user("alice")).unwrap();
        assert_eq!(outcome, RevealOutcome::AwaitingOther);
        assert_eq!(m.reveal_state(), RevealState::Requested);
    }

    #[test]
    fn second_reveal_request_unlocks_identities() {
        let mut m = test_match();
        m.request_reveal(&user("alice")).unwrap();
        let outcome = m.request_reveal(&user("bob")).unwrap();
        assert_eq!(outcome, RevealOutcome::MutualReveal);
        assert!(m.reveal_state().is_revealed());
    }

    #[test]
    fn duplicate_reveal_request_is_rejected() {
        let mut m = test_match();
        m.request_reveal(&user("alice")).unwrap();
        let result = m.request_reveal(&user("alice"));
        assert_eq!(result, Err(MatchError::AlreadyRequested(user("alice"))));
        assert_eq!(m.reveal_state(), RevealState::Requested);
    }

    #[test]
    fn outsider_cannot_request_reveal() {
        let mut m = test_match();
        let result = m.request_reveal(&user("carol"));
        assert_eq!(result, Err(MatchError::NotParticipant(user("carol"))));
    }

    #[test]
    fn reveal_after_revealed_is_rejected() {
        let mut m = test_match();
        m.request_reveal(&user("alice")).unwrap();
        m.request_reveal(&user("bob")).unwrap();
        let result = m.request_reveal(&user("alice"));
        assert_eq!(result, Err(MatchError::AlreadyRevealed));
    }

    #[test]
    fn start_chat_is_idempotent() {
        let mut m = test_match();
        m.start_chat();
        m.start_chat();
        assert!(m.chat_started());
    }
}
