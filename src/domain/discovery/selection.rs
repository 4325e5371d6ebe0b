//! Immutable trait selection records.
//!
//! One record is produced per reviewed profile and relayed to the backend;
//! the accumulated records are what the matching pipeline consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{DomainError, ProfileId, Timestamp, TraitId, UserId};

use super::DiscoveryProfile;

/// A viewer's confirmed trait choice for one profile.
///
/// # Invariants
///
/// - `selected_trait_ids.len()` equals the required selection count
/// - `selected_trait_ids ⊆ all_trait_ids`
/// - `all_trait_ids` is exactly the profile's trait board
/// - records are immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSelection {
    viewer_id: UserId,
    profile_id: ProfileId,
    selected_trait_ids: Vec<TraitId>,
    all_trait_ids: Vec<TraitId>,
    created_at: Timestamp,
}

impl TraitSelection {
    /// Build a selection record for `profile`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `SelectionIncomplete` (as validation) if the count is not exactly
    ///   `required_selections`
    /// - `ValidationFailed` if a selected id repeats or is not on the board
    pub fn new(
        viewer_id: UserId,
        profile: &DiscoveryProfile,
        selected_trait_ids: Vec<TraitId>,
        required_selections: usize,
    ) -> Result<Self, DomainError> {
        if selected_trait_ids.len() != required_selections {
            return Err(DomainError::validation(
                "selected_trait_ids",
                format!(
                    "exactly {} traits must be selected, got {}",
                    required_selections,
                    selected_trait_ids.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for trait_id in &selected_trait_ids {
            if !seen.insert(trait_id.clone()) {
                return Err(DomainError::validation(
                    "selected_trait_ids",
                    format!("trait '{}' selected twice", trait_id),
                ));
            }
            if !profile.has_trait(trait_id) {
                return Err(DomainError::validation(
                    "selected_trait_ids",
                    format!("trait '{}' is not on the profile's board", trait_id),
                ));
            }
        }

        Ok(Self {
            viewer_id,
            profile_id: profile.id().clone(),
            selected_trait_ids,
            all_trait_ids: profile.trait_ids(),
            created_at: Timestamp::now(),
        })
    }

    /// Returns the viewer who made the selection.
    pub fn viewer_id(&self) -> &UserId {
        &self.viewer_id
    }

    /// Returns the reviewed profile's id.
    pub fn profile_id(&self) -> &ProfileId {
        &self.profile_id
    }

    /// Returns the selected trait ids, in pick order.
    pub fn selected_trait_ids(&self) -> &[TraitId] {
        &self.selected_trait_ids
    }

    /// Returns every trait id that was shown on the board.
    pub fn all_trait_ids(&self) -> &[TraitId] {
        &self.all_trait_ids
    }

    /// Returns when the selection was confirmed.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
