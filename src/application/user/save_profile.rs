//! SaveProfileHandler - Command handler for onboarding profile updates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{LifestylePreferences, UserProfile};
use crate::ports::UserProfileStore;

/// Command carrying one onboarding step's worth of profile fields.
///
/// All fields are optional; only provided values are applied.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub user_id: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub mobile_no: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub sexual_orientation: Option<String>,
    pub bio: Option<String>,
    pub tags: Option<Vec<String>>,
    pub lifestyle: Option<LifestylePreferences>,
    /// Attempt to finish onboarding after applying the fields.
    pub complete_onboarding: bool,
}

impl SaveProfileCommand {
    /// An empty command for the given user; set only the fields to change.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            name: None,
            mobile_no: None,
            age: None,
            gender: None,
            sexual_orientation: None,
            bio: None,
            tags: None,
            lifestyle: None,
            complete_onboarding: false,
        }
    }
}

/// Handler for profile creation and updates.
pub struct SaveProfileHandler {
    store: Arc<dyn UserProfileStore>,
}

impl SaveProfileHandler {
    pub fn new(store: Arc<dyn UserProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<UserProfile, DomainError> {
        let mut profile = match self.store.find_by_user(&cmd.user_id).await? {
            Some(profile) => profile,
            None => {
                let email = cmd.email.clone().ok_or_else(|| {
                    DomainError::validation("email", "Email is required to create a profile")
                })?;
                UserProfile::new(cmd.user_id.clone(), email)?
            }
        };

        if let Some(name) = cmd.name {
            profile.set_name(name)?;
        }
        if let Some(mobile_no) = cmd.mobile_no {
            profile.set_mobile_no(mobile_no);
        }
        if let Some(age) = cmd.age {
            profile.set_age(age)?;
        }
        if let Some(gender) = cmd.gender {
            profile.set_gender(gender);
        }
        if let Some(orientation) = cmd.sexual_orientation {
            profile.set_sexual_orientation(orientation);
        }
        if let Some(bio) = cmd.bio {
            profile.set_bio(bio)?;
        }
        if let Some(tags) = cmd.tags {
            profile.set_tags(tags)?;
        }
        if let Some(lifestyle) = cmd.lifestyle {
            profile.set_lifestyle(lifestyle);
        }
        if cmd.complete_onboarding {
            profile.complete_onboarding()?;
            tracing::info!(user_id = %profile.user_id(), "onboarding completed");
        }

        self.store.upsert(&profile).await?;
        Ok(profile)
    }
}
