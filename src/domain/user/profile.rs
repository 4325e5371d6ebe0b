//! User profile aggregate.
//!
//! Profiles are built up during onboarding and drive the hard filters the
//! backend applies when assembling discovery batches. A profile must pass
//! completion checks before its owner may enter discovery.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// Minimum age to use the platform.
pub const MIN_AGE: u8 = 18;

/// Maximum plausible age accepted during onboarding.
pub const MAX_AGE: u8 = 100;

/// Maximum length for the free-text bio.
pub const MAX_BIO_LENGTH: usize = 1000;

/// Maximum number of interest tags.
pub const MAX_TAGS: usize = 10;

/// Lifestyle answers collected during onboarding.
///
/// All fields are optional; they refine matching but do not gate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestylePreferences {
    pub alcohol: Option<String>,
    pub smoking: Option<String>,
    pub food: Option<String>,
    pub favourite_place: Option<String>,
    pub tea_or_coffee: Option<String>,
    pub mountain_or_beach: Option<String>,
}

/// A member's profile, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    user_id: UserId,
    email: String,
    name: Option<String>,
    mobile_no: Option<String>,
    age: Option<u8>,
    gender: Option<String>,
    sexual_orientation: Option<String>,
    bio: Option<String>,
    profile_pic_key: Option<String>,
    tags: Vec<String>,
    lifestyle: LifestylePreferences,
    onboarding_completed: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserProfile {
    /// Create a fresh profile holding only the sign-in email.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the email is blank
    pub fn new(user_id: UserId, email: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(DomainError::validation("email", "Email cannot be empty"));
        }
        let now = Timestamp::now();
        Ok(Self {
            user_id,
            email,
            name: None,
            mobile_no: None,
            age: None,
            gender: None,
            sexual_orientation: None,
            bio: None,
            profile_pic_key: None,
            tags: Vec::new(),
            lifestyle: LifestylePreferences::default(),
            onboarding_completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn sexual_orientation(&self) -> Option<&str> {
        self.sexual_orientation.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn profile_pic_key(&self) -> Option<&str> {
        self.profile_pic_key.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn lifestyle(&self) -> &LifestylePreferences {
        &self.lifestyle
    }

    pub fn onboarding_completed(&self) -> bool {
        self.onboarding_completed
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Name cannot be empty"));
        }
        self.name = Some(name);
        self.touch();
        Ok(())
    }

    /// Set the mobile number.
    pub fn set_mobile_no(&mut self, mobile_no: impl Into<String>) {
        self.mobile_no = Some(mobile_no.into());
        self.touch();
    }

    /// Set the member's age.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if outside the accepted range
    pub fn set_age(&mut self, age: u8) -> Result<(), DomainError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(DomainError::validation(
                "age",
                format!("Age must be between {} and {}", MIN_AGE, MAX_AGE),
            ));
        }
        self.age = Some(age);
        self.touch();
        Ok(())
    }

    /// Set gender identity.
    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.gender = Some(gender.into());
        self.touch();
    }

    /// Set sexual orientation, used for the backend's hard filters.
    pub fn set_sexual_orientation(&mut self, orientation: impl Into<String>) {
        self.sexual_orientation = Some(orientation.into());
        self.touch();
    }

    /// Set the free-text bio.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if over the length cap
    pub fn set_bio(&mut self, bio: impl Into<String>) -> Result<(), DomainError> {
        let bio = bio.into();
        if bio.len() > MAX_BIO_LENGTH {
            return Err(DomainError::validation(
                "bio",
                format!("Bio must be {} characters or less", MAX_BIO_LENGTH),
            ));
        }
        self.bio = Some(bio);
        self.touch();
        Ok(())
    }

    /// Point at the stored profile picture.
    pub fn set_profile_pic_key(&mut self, key: impl Into<String>) {
        self.profile_pic_key = Some(key.into());
        self.touch();
    }

    /// Replace the interest tags.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if over the tag cap or a tag is blank
    pub fn set_tags(&mut self, tags: Vec<String>) -> Result<(), DomainError> {
        if tags.len() > MAX_TAGS {
            return Err(DomainError::validation(
                "tags",
                format!("At most {} tags are allowed", MAX_TAGS),
            ));
        }
        if tags.iter().any(|t| t.trim().is_empty()) {
            return Err(DomainError::validation("tags", "Tags cannot be blank"));
        }
        self.tags = tags;
        self.touch();
        Ok(())
    }

    /// Replace the lifestyle answers.
    pub fn set_lifestyle(&mut self, lifestyle: LifestylePreferences) {
        self.lifestyle = lifestyle;
        self.touch();
    }

    /// Mark onboarding as complete.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` naming the first missing required field
    pub fn complete_onboarding(&mut self) -> Result<(), DomainError> {
        let missing = if self.name.is_none() {
            Some("name")
        } else if self.age.is_none() {
            Some("age")
        } else if self.gender.is_none() {
            Some("gender")
        } else if self.sexual_orientation.is_none() {
            Some("sexual_orientation")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(DomainError::validation(
                field,
                format!("'{}' is required to finish onboarding", field),
            ));
        }

        self.onboarding_completed = true;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> UserProfile {
        UserProfile::new(UserId::new("user-1").unwrap(), "a@iima.ac.in").unwrap()
    }

    fn filled_profile() -> UserProfile {
        let mut profile = test_profile();
        profile.set_name("Alice").unwrap();
        profile.set_age(23).unwrap();
        profile.set_gender("female");
        profile.set_sexual_orientation("straight");
        profile
    }

    #[test]
    fn new_profile_starts_incomplete() {
        let profile = test_profile();
        assert!(!profile.onboarding_completed());
        assert_eq!(profile.email(), "a@iima.ac.in");
    }

    #[test]
    fn new_profile_rejects_blank_email() {
        let result = UserProfile::new(UserId::new("user-1").unwrap(), "  ");
        assert!(result.is_err());
    }

    #[test]
    fn set_age_rejects_minors() {
        let mut profile = test_profile();
        assert!(profile.set_age(17).is_err());
        assert!(profile.set_age(18).is_ok());
    }

    #[test]
    fn set_bio_rejects_over_cap() {
        let mut profile = test_profile();
        let long = "x".repeat(MAX_BIO_LENGTH + 1);
        assert!(profile.set_bio(long).is_err());
    }

    #[test]
    fn set_tags_rejects_too_many() {
        let mut profile = test_profile();
        let tags = (0..MAX_TAGS + 1).map(|i| format!("tag{}", i)).collect();
        assert!(profile.set_tags(tags).is_err());
    }

    #[test]
    fn set_tags_rejects_blank_tag() {
        let mut profile = test_profile();
        assert!(profile.set_tags(vec!["Music".to_string(), " ".to_string()]).is_err());
    }

    #[test]
    fn complete_onboarding_requires_name() {
        let mut profile = test_profile();
        let result = profile.complete_onboarding();
        assert!(result.is_err());
        assert!(!profile.onboarding_completed());
    }

    #[test]
    fn complete_onboarding_requires_orientation() {
        let mut profile = test_profile();
        profile.set_name("Alice").unwrap();
        profile.set_age(23).unwrap();
        profile.set_gender("female");
        assert!(profile.complete_onboarding().is_err());
    }

    #[test]
    fn complete_onboarding_succeeds_with_required_fields() {
        let mut profile = filled_profile();
        profile.complete_onboarding().unwrap();
        assert!(profile.onboarding_completed());
    }

    #[test]
    fn lifestyle_answers_are_optional() {
        let mut profile = filled_profile();
        profile.set_lifestyle(LifestylePreferences {
            tea_or_coffee: Some("Tea".to_string()),
            ..Default::default()
        });
        profile.complete_onboarding().unwrap();
        assert_eq!(profile.lifestyle().tea_or_coffee.as_deref(), Some("Tea"));
    }

    #[test]
    fn mutation_bumps_updated_at() {
        let mut profile = test_profile();
        let before = *profile.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(10));
        profile.set_gender("female");
        assert!(profile.updated_at().is_after(&before));
    }
}
