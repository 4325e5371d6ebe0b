//! Campus identity configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Campus verification configuration.
///
/// The platform is campus-exclusive; only verified addresses on the
/// configured institute domain may join.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Email domain that marks a member as campus-verified
    #[serde(default = "default_campus_domain")]
    pub campus_domain: String,
}

impl AuthConfig {
    /// Validate campus identity configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.campus_domain.is_empty() {
            return Err(ValidationError::MissingRequired("CAMPUS_DOMAIN"));
        }
        if !self.campus_domain.contains('.') || self.campus_domain.contains('@') {
            return Err(ValidationError::InvalidCampusDomain);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            campus_domain: default_campus_domain(),
        }
    }
}

fn default_campus_domain() -> String {
    "iima.ac.in".to_string()
}
