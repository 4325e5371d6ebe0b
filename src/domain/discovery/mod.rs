//! Discovery domain - blind profile review.
//!
//! One discovery session walks a user through a fixed batch of anonymous
//! profiles; on each, exactly the required number of traits must be picked
//! before the flow advances. The accumulated selections feed the matching
//! backend.

mod errors;
mod phase;
mod picker;
mod profile;
mod selection;
mod session;

pub use errors::DiscoveryError;
pub use phase::DiscoveryPhase;
pub use picker::{Toggle, TraitPicker};
pub use profile::{DiscoveryProfile, TraitQuestion, MAX_CARD_TEXT_LENGTH};
pub use selection::TraitSelection;
pub use session::{Advance, DiscoverySession};
