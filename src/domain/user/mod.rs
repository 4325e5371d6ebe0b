//! User domain - member profiles and onboarding.

mod profile;

pub use profile::{
    LifestylePreferences, UserProfile, MAX_AGE, MAX_BIO_LENGTH, MAX_TAGS, MIN_AGE,
};
