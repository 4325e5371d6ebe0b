//! DiscoveryPhase enum for tracking the lifecycle of a discovery session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of a discovery session.
///
/// Valid transitions:
/// - CheckingAuth -> AuthRequired (no signed-in user; terminal)
/// - CheckingAuth -> Loading
/// - Loading -> Active (a fetch failure keeps the phase at Loading so the
///   caller may retry)
/// - Active -> Complete (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryPhase {
    #[default]
    CheckingAuth,
    AuthRequired,
    Loading,
    Active,
    Complete,
}

impl DiscoveryPhase {
    /// Returns true if trait toggling and advancing are legal.
    pub fn accepts_selections(&self) -> bool {
        matches!(self, DiscoveryPhase::Active)
    }
}

impl StateMachine for DiscoveryPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DiscoveryPhase::*;
        matches!(
            (self, target),
            (CheckingAuth, AuthRequired) | (CheckingAuth, Loading) | (Loading, Active) | (Active, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DiscoveryPhase::*;
        match self {
            CheckingAuth => vec![AuthRequired, Loading],
            AuthRequired => vec![],
            Loading => vec![Active],
            Active => vec![Complete],
            Complete => vec![],
        }
    }
}

impl fmt::Display for DiscoveryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiscoveryPhase::CheckingAuth => "CheckingAuth",
            DiscoveryPhase::AuthRequired => "AuthRequired",
            DiscoveryPhase::Loading => "Loading",
            DiscoveryPhase::Active => "Active",
            DiscoveryPhase::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
