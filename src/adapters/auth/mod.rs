//! Identity adapters.

mod mock;

pub use mock::MockIdentityProvider;
