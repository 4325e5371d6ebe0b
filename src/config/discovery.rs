//! Discovery flow configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Discovery flow configuration.
///
/// The defaults mirror the product design: a batch of 8 profiles, a 4x2
/// board of 8 trait cards each, and exactly 2 picks per profile.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Number of profiles served in one discovery session
    #[serde(default = "default_profiles_per_session")]
    pub profiles_per_session: usize,

    /// Trait cards shown on each profile's board
    #[serde(default = "default_traits_per_profile")]
    pub traits_per_profile: usize,

    /// Exact number of traits a viewer must pick per profile
    #[serde(default = "default_required_selections")]
    pub required_selections: usize,
}

impl DiscoveryConfig {
    /// Validate discovery configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profiles_per_session == 0
            || self.traits_per_profile == 0
            || self.required_selections == 0
        {
            return Err(ValidationError::ZeroDiscoveryCount);
        }
        if self.required_selections > self.traits_per_profile {
            return Err(ValidationError::SelectionsExceedBoard);
        }
        Ok(())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            profiles_per_session: default_profiles_per_session(),
            traits_per_profile: default_traits_per_profile(),
            required_selections: default_required_selections(),
        }
    }
}

fn default_profiles_per_session() -> usize {
    8
}

fn default_traits_per_profile() -> usize {
    8
}

fn default_required_selections() -> usize {
    2
}
