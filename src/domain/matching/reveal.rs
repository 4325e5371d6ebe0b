//! RevealState enum for the mutual identity reveal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Reveal progress on a match.
///
/// Identities stay hidden until **both** participants ask for the reveal:
/// the first request moves the match to `Requested`, the second to
/// `Revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    #[default]
    Hidden,
    Requested,
    Revealed,
}

impl RevealState {
    /// Returns true once both sides have revealed.
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

impl StateMachine for RevealState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RevealState::*;
        matches!((self, target), (Hidden, Requested) | (Requested, Revealed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RevealState::*;
        match self {
            Hidden => vec![Requested],
            Requested => vec![Revealed],
            Revealed => vec![],
        }
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RevealState::Hidden => "Hidden",
            RevealState::Requested => "Requested",
            RevealState::Revealed => "Revealed",
        };
        write!(f, "{}", s)
    }
}
