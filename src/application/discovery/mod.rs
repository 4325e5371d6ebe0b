//! Discovery application layer.

mod controller;

pub use controller::{AdvanceOutcome, DiscoveryFlow, DiscoveryStats};
