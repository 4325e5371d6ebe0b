//! Application layer - controllers and command handlers.
//!
//! Wires domain aggregates to ports. The discovery controller is stateful
//! (it exclusively owns its session); the matching and user handlers are
//! stateless services over repositories.

pub mod discovery;
pub mod matching;
pub mod user;
