//! User profile store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;

/// Storage port for member profiles.
#[async_trait]
pub trait UserProfileStore: Send + Sync {
    /// Insert or replace a profile.
    ///
    /// # Errors
    ///
    /// - `InternalError` on persistence failure
    async fn upsert(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Find a profile by its owner.
    ///
    /// Returns `None` if the user has not started onboarding.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn UserProfileStore) {}
    }
}
