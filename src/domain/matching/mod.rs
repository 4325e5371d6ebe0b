//! Matching domain - scored pairings and the mutual reveal.
//!
//! Matches arrive from the backend already scored; this module owns the
//! reveal handshake that keeps identities hidden until both sides opt in.

mod aggregate;
mod errors;
mod reveal;

pub use aggregate::{Match, RevealOutcome};
pub use errors::MatchError;
pub use reveal::RevealState;
