//! Discovery session aggregate.
//!
//! One session is one complete pass of a user reviewing a fixed batch of
//! blind profiles. The aggregate owns the phase machine, the profile cursor,
//! the per-profile picker, and the accumulated selection records.
//!
//! # Ownership
//!
//! The session is exclusively owned by one controller instance and mutated
//! only through it; selection records are append-only and immutable once
//! committed.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DiscoverySessionId, StateMachine, Timestamp, TraitId, UserId,
};

use super::{
    DiscoveryError, DiscoveryPhase, DiscoveryProfile, Toggle, TraitPicker, TraitSelection,
};

/// Where the session cursor lands after a committed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// More profiles remain; the cursor moved to the next one.
    NextProfile,
    /// Every profile has been reviewed; the session can be finished.
    BatchExhausted,
}

/// The full run of one user through one discovery batch.
///
/// # Invariants
///
/// - `selections.len() <= profiles.len()`
/// - `completed_at` is set if and only if the phase is `Complete`
/// - the phase is `Complete` only after every profile has a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySession {
    user_id: UserId,
    backend_session_id: Option<DiscoverySessionId>,
    phase: DiscoveryPhase,
    profiles: Vec<DiscoveryProfile>,
    selections: Vec<TraitSelection>,
    current_index: usize,
    picker: TraitPicker,
    required_selections: usize,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl DiscoverySession {
    /// Create a session in the `CheckingAuth` phase.
    pub fn new(user_id: UserId, required_selections: usize) -> Self {
        Self {
            user_id,
            backend_session_id: None,
            phase: DiscoveryPhase::CheckingAuth,
            profiles: Vec::new(),
            selections: Vec::new(),
            current_index: 0,
            picker: TraitPicker::new(required_selections),
            required_selections,
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the reviewing user's id.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the backend-issued session id, once a batch is loaded.
    pub fn backend_session_id(&self) -> Option<&DiscoverySessionId> {
        self.backend_session_id.as_ref()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> DiscoveryPhase {
        self.phase
    }

    /// Returns the fetched profile batch.
    pub fn profiles(&self) -> &[DiscoveryProfile] {
        &self.profiles
    }

    /// Returns committed selections in review order.
    pub fn selections(&self) -> &[TraitSelection] {
        &self.selections
    }

    /// Returns the profile currently under review, if any.
    pub fn current_profile(&self) -> Option<&DiscoveryProfile> {
        self.profiles.get(self.current_index)
    }

    /// Returns the number of profiles already reviewed.
    pub fn profiles_reviewed(&self) -> usize {
        self.selections.len()
    }

    /// Returns the batch size.
    pub fn total_profiles(&self) -> usize {
        self.profiles.len()
    }

    /// Returns the trait ids picked so far on the current profile.
    pub fn picked_trait_ids(&self) -> &[TraitId] {
        self.picker.selected()
    }

    /// True exactly when the current profile has the required pick count.
    pub fn selection_ready(&self) -> bool {
        self.picker.can_confirm()
    }

    /// Returns when the session was created.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when the session completed, if it has.
    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Phase transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Park the session: no signed-in user was found.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if auth checking already concluded
    pub fn mark_auth_required(&mut self) -> Result<(), DiscoveryError> {
        self.transition(DiscoveryPhase::AuthRequired)
    }

    /// Move from auth checking into profile loading.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if auth checking already concluded
    pub fn begin_loading(&mut self) -> Result<(), DiscoveryError> {
        self.transition(DiscoveryPhase::Loading)
    }

    /// Install a fetched batch and start the review.
    ///
    /// A batch shorter than the configured count is accepted; the session
    /// simply runs over what the backend returned. An empty batch is refused
    /// and the session stays in `Loading` so the fetch can be retried.
    ///
    /// # Errors
    ///
    /// - `EmptyBatch` if no profiles were returned
    /// - `InvalidPhase` if the session is not loading
    pub fn activate(
        &mut self,
        backend_session_id: DiscoverySessionId,
        profiles: Vec<DiscoveryProfile>,
    ) -> Result<(), DiscoveryError> {
        if self.phase != DiscoveryPhase::Loading {
            return Err(DiscoveryError::invalid_phase(format!(
                "cannot install a batch while {}",
                self.phase
            )));
        }
        if profiles.is_empty() {
            return Err(DiscoveryError::EmptyBatch);
        }

        self.phase = self.phase.transition_to(DiscoveryPhase::Active)?;
        self.backend_session_id = Some(backend_session_id);
        self.profiles = profiles;
        self.current_index = 0;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip one trait on the current profile's board.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if the session is not active
    /// - `UnknownTrait` if the trait is not on the current board
    pub fn toggle_trait(&mut self, trait_id: TraitId) -> Result<Toggle, DiscoveryError> {
        if !self.phase.accepts_selections() {
            return Err(DiscoveryError::invalid_phase(format!(
                "cannot toggle traits while {}",
                self.phase
            )));
        }
        let profile = self
            .current_profile()
            .ok_or_else(|| DiscoveryError::invalid_phase("no profile under review"))?;
        if !profile.has_trait(&trait_id) {
            return Err(DiscoveryError::UnknownTrait(trait_id));
        }
        Ok(self.picker.toggle(trait_id))
    }

    /// Build the immutable record for the current profile without advancing.
    ///
    /// The record is committed separately once the backend acknowledges it,
    /// so a failed submission leaves the picks intact.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if the session is not active
    /// - `SelectionIncomplete` unless exactly the required count is picked
    pub fn build_selection(&self) -> Result<TraitSelection, DiscoveryError> {
        if !self.phase.accepts_selections() {
            return Err(DiscoveryError::invalid_phase(format!(
                "cannot confirm a selection while {}",
                self.phase
            )));
        }
        if !self.picker.can_confirm() {
            return Err(DiscoveryError::selection_incomplete(
                self.picker.selected_count(),
                self.required_selections,
            ));
        }
        let profile = self
            .current_profile()
            .ok_or_else(|| DiscoveryError::invalid_phase("no profile under review"))?;

        Ok(TraitSelection::new(
            self.user_id.clone(),
            profile,
            self.picker.selected().to_vec(),
            self.required_selections,
        )?)
    }

    /// Append an acknowledged record, clear the picker, and move the cursor.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if the session is not active
    /// - `ValidationFailed` if the record is not for the profile under review
    pub fn commit_selection(
        &mut self,
        selection: TraitSelection,
    ) -> Result<Advance, DiscoveryError> {
        if !self.phase.accepts_selections() {
            return Err(DiscoveryError::invalid_phase(format!(
                "cannot commit a selection while {}",
                self.phase
            )));
        }
        let current = self
            .current_profile()
            .ok_or_else(|| DiscoveryError::invalid_phase("no profile under review"))?;
        if selection.profile_id() != current.id() {
            return Err(DiscoveryError::validation(
                "profile_id",
                format!(
                    "selection is for '{}' but '{}' is under review",
                    selection.profile_id(),
                    current.id()
                ),
            ));
        }

        self.selections.push(selection);
        self.picker.clear();
        self.current_index += 1;

        if self.current_index >= self.profiles.len() {
            Ok(Advance::BatchExhausted)
        } else {
            Ok(Advance::NextProfile)
        }
    }

    /// Seal the session after the completion call has been acknowledged.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if the session is not active or profiles remain
    pub fn finish(&mut self) -> Result<(), DiscoveryError> {
        if self.selections.len() != self.profiles.len() || self.profiles.is_empty() {
            return Err(DiscoveryError::invalid_phase(format!(
                "{} of {} profiles reviewed",
                self.selections.len(),
                self.profiles.len()
            )));
        }
        self.phase = self.phase.transition_to(DiscoveryPhase::Complete)?;
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }

    fn transition(&mut self, target: DiscoveryPhase) -> Result<(), DiscoveryError> {
        self.phase = self.phase.transition_to(target)?;
        Ok(())
    }
}
