//! Platform-controlled trait catalog.
//!
//! Traits are defined by the platform, not by users. Profiles reference them
//! by id; the catalog supplies the human-readable labels.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A platform-defined personality or preference trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformTrait {
    pub id: &'static str,
    pub label: &'static str,
}

/// All traits the platform recognises, in display order.
pub const PLATFORM_TRAITS: &[PlatformTrait] = &[
    PlatformTrait { id: "fitness", label: "Fitness-oriented" },
    PlatformTrait { id: "ambitious", label: "Ambitious" },
    PlatformTrait { id: "chill", label: "Chill personality" },
    PlatformTrait { id: "academic", label: "Academically focused" },
    PlatformTrait { id: "social", label: "Social / outgoing" },
    PlatformTrait { id: "introverted", label: "Introverted" },
    PlatformTrait { id: "creative", label: "Creative" },
    PlatformTrait { id: "spiritual", label: "Spiritual" },
    PlatformTrait { id: "career", label: "Career-driven" },
    PlatformTrait { id: "explorer", label: "Explorer / travel-loving" },
    PlatformTrait { id: "foodie", label: "Foodie" },
    PlatformTrait { id: "intellectual", label: "Intellectual" },
    PlatformTrait { id: "humorous", label: "Good sense of humour" },
    PlatformTrait { id: "empathetic", label: "Empathetic" },
    PlatformTrait { id: "independent", label: "Independent" },
];

static LABELS_BY_ID: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PLATFORM_TRAITS.iter().map(|t| (t.id, t.label)).collect());

/// Returns the display label for a trait id, falling back to the raw id for
/// traits the catalog does not know (profile-specific question ids).
pub fn trait_label(id: &str) -> &str {
    LABELS_BY_ID.get(id).copied().unwrap_or(id)
}

/// Checks whether an id belongs to the platform catalog.
pub fn is_platform_trait(id: &str) -> bool {
    LABELS_BY_ID.contains_key(id)
}
