//! Masquerade - Anonymous campus prom matchmaking core.
//!
//! Implements the blind discovery flow: an authenticated student reviews a
//! batch of anonymous profiles, picks exactly two traits per profile, and
//! the accumulated selections feed the matching backend. Matches carry a
//! backend-assigned compatibility score and unlock identities only on
//! mutual reveal.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
