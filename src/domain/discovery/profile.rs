//! Blind candidate profiles shown during discovery.
//!
//! A profile deliberately carries no identifying information: age, an
//! optional program label, and a board of short question-answer trait cards.
//! The viewer picks traits from the board without ever seeing who is behind
//! the card.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{DomainError, ProfileId, TraitId};

/// Maximum length for question and answer text on a trait card.
pub const MAX_CARD_TEXT_LENGTH: usize = 120;

/// One selectable attribute of a profile, shown as a short question-answer
/// pair (e.g. "Morning or night person?" / "Night owl").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitQuestion {
    trait_id: TraitId,
    question: String,
    answer: String,
}

impl TraitQuestion {
    /// Create a trait card.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if question or answer is empty or too long
    pub fn new(
        trait_id: TraitId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        let answer = answer.into();
        Self::validate_text("question", &question)?;
        Self::validate_text("answer", &answer)?;
        Ok(Self {
            trait_id,
            question,
            answer,
        })
    }

    /// Returns the trait identifier.
    pub fn trait_id(&self) -> &TraitId {
        &self.trait_id
    }

    /// Returns the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the short answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    fn validate_text(field: &str, text: &str) -> Result<(), DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(field, format!("{} cannot be empty", field)));
        }
        if trimmed.len() > MAX_CARD_TEXT_LENGTH {
            return Err(DomainError::validation(
                field,
                format!("{} must be {} characters or less", field, MAX_CARD_TEXT_LENGTH),
            ));
        }
        Ok(())
    }
}

/// A candidate profile presented during a discovery session.
///
/// # Invariants
///
/// - `trait_questions` has exactly the expected board size
/// - trait ids are unique within the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryProfile {
    id: ProfileId,
    age: u8,
    program: Option<String>,
    trait_questions: Vec<TraitQuestion>,
}

impl DiscoveryProfile {
    /// Create a profile with a full trait board.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the board size differs from `expected_traits`
    ///   or trait ids repeat
    pub fn new(
        id: ProfileId,
        age: u8,
        program: Option<String>,
        trait_questions: Vec<TraitQuestion>,
        expected_traits: usize,
    ) -> Result<Self, DomainError> {
        if trait_questions.len() != expected_traits {
            return Err(DomainError::validation(
                "trait_questions",
                format!(
                    "profile must carry exactly {} trait cards, got {}",
                    expected_traits,
                    trait_questions.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for question in &trait_questions {
            if !seen.insert(question.trait_id().clone()) {
                return Err(DomainError::validation(
                    "trait_questions",
                    format!("duplicate trait id '{}' on profile", question.trait_id()),
                ));
            }
        }

        Ok(Self {
            id,
            age,
            program,
            trait_questions,
        })
    }

    /// Returns the profile id.
    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    /// Returns the candidate's age.
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Returns the program label, if shared (e.g. "PGP 2024-26").
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// Returns the trait board in display order.
    pub fn trait_questions(&self) -> &[TraitQuestion] {
        &self.trait_questions
    }

    /// Returns every trait id on the board, in display order.
    pub fn trait_ids(&self) -> Vec<TraitId> {
        self.trait_questions
            .iter()
            .map(|q| q.trait_id().clone())
            .collect()
    }

    /// Checks whether the board carries the given trait.
    pub fn has_trait(&self, trait_id: &TraitId) -> bool {
        self.trait_questions
            .iter()
            .any(|q| q.trait_id() == trait_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> TraitQuestion {
        TraitQuestion::new(
            TraitId::new(id).unwrap(),
            format!("Question about {}?", id),
            "Answer",
        )
        .unwrap()
    }

    fn cards(n: usize) -> Vec<TraitQuestion> {
        (0..n).map(|i| card(&format!("trait-{}", i))).collect()
    }

    #[test]
    fn trait_question_rejects_empty_question() {
        let result = TraitQuestion::new(TraitId::new("t").unwrap(), "  ", "Answer");
        assert!(result.is_err());
    }

    #[test]
    fn trait_question_rejects_too_long_answer() {
        let long = "x".repeat(MAX_CARD_TEXT_LENGTH + 1);
        let result = TraitQuestion::new(TraitId::new("t").unwrap(), "Question?", long);
        assert!(result.is_err());
    }

    #[test]
    fn profile_accepts_full_board() {
        let profile = DiscoveryProfile::new(
            ProfileId::new("profile-1").unwrap(),
            23,
            Some("PGP 2024-26".to_string()),
            cards(8),
            8,
        )
        .unwrap();
        assert_eq!(profile.trait_questions().len(), 8);
        assert_eq!(profile.age(), 23);
        assert_eq!(profile.program(), Some("PGP 2024-26"));
    }

    #[test]
    fn profile_rejects_short_board() {
        let result = DiscoveryProfile::new(
            ProfileId::new("profile-1").unwrap(),
            23,
            None,
            cards(7),
            8,
        );
        assert!(result.is_err());
    }

    #[test]
    fn profile_rejects_oversized_board() {
        let result = DiscoveryProfile::new(
            ProfileId::new("profile-1").unwrap(),
            23,
            None,
            cards(9),
            8,
        );
        assert!(result.is_err());
    }

    #[test]
    fn profile_rejects_duplicate_trait_ids() {
        let mut board = cards(7);
        board.push(card("trait-0"));
        let result = DiscoveryProfile::new(
            ProfileId::new("profile-1").unwrap(),
            23,
            None,
            board,
            8,
        );
        assert!(result.is_err());
    }

    #[test]
    fn trait_ids_preserve_display_order() {
        let profile = DiscoveryProfile::new(
            ProfileId::new("profile-1").unwrap(),
            22,
            None,
            cards(8),
            8,
        )
        .unwrap();
        let ids = profile.trait_ids();
        assert_eq!(ids[0].as_str(), "trait-0");
        assert_eq!(ids[7].as_str(), "trait-7");
    }

    #[test]
    fn has_trait_finds_board_members_only() {
        let profile = DiscoveryProfile::new(
            ProfileId::new("profile-1").unwrap(),
            22,
            None,
            cards(8),
            8,
        )
        .unwrap();
        assert!(profile.has_trait(&TraitId::new("trait-3").unwrap()));
        assert!(!profile.has_trait(&TraitId::new("elsewhere").unwrap()));
    }
}
