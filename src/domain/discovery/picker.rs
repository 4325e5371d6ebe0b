//! Exact-count trait picker.
//!
//! The picker enforces the per-profile selection rule: a viewer must pick
//! exactly the required number of traits, in any order, before advancing.
//! Over-selection is silently capped rather than raised as an error; the
//! only way to change a full selection is to deselect first.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TraitId;

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The trait was added to the selection.
    Added,
    /// The trait was already selected and has been removed.
    Removed,
    /// The selection is at capacity and the trait was not selected; nothing
    /// changed.
    AtCapacity,
}

/// Order-independent selector capped at a required count.
///
/// # Invariants
///
/// - `0 <= selected.len() <= required`
/// - no duplicates in `selected`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitPicker {
    required: usize,
    selected: Vec<TraitId>,
}

impl TraitPicker {
    /// Creates an empty picker requiring exactly `required` selections.
    pub fn new(required: usize) -> Self {
        Self {
            required,
            selected: Vec::with_capacity(required),
        }
    }

    /// Flips the selection state of one trait.
    ///
    /// Selected traits are removed; unselected traits are added while below
    /// the cap. At the cap, toggling an unselected trait is a no-op reported
    /// as [`Toggle::AtCapacity`].
    pub fn toggle(&mut self, trait_id: TraitId) -> Toggle {
        if let Some(pos) = self.selected.iter().position(|t| t == &trait_id) {
            self.selected.remove(pos);
            return Toggle::Removed;
        }
        if self.selected.len() < self.required {
            self.selected.push(trait_id);
            return Toggle::Added;
        }
        Toggle::AtCapacity
    }

    /// True exactly when the required count is met (not merely bounded by it).
    pub fn can_confirm(&self) -> bool {
        self.selected.len() == self.required
    }

    /// Returns the selected trait ids in pick order.
    pub fn selected(&self) -> &[TraitId] {
        &self.selected
    }

    /// Returns the number of currently selected traits.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Returns the required selection count.
    pub fn required(&self) -> usize {
        self.required
    }

    /// Checks whether a trait is currently selected.
    pub fn is_selected(&self, trait_id: &TraitId) -> bool {
        self.selected.iter().any(|t| t == trait_id)
    }

    /// Empties the selection, e.g. when moving to the next profile.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tid(s: &str) -> TraitId {
        TraitId::new(s).unwrap()
    }

    #[test]
    fn empty_picker_cannot_confirm() {
        let picker = TraitPicker::new(2);
        assert!(!picker.can_confirm());
        assert_eq!(picker.selected_count(), 0);
    }

    #[test]
    fn toggle_adds_below_cap() {
        let mut picker = TraitPicker::new(2);
        assert_eq!(picker.toggle(tid("a")), Toggle::Added);
        assert_eq!(picker.toggle(tid("b")), Toggle::Added);
        assert!(picker.can_confirm());
    }

    #[test]
    fn toggle_removes_selected_trait() {
        let mut picker = TraitPicker::new(2);
        picker.toggle(tid("a"));
        assert_eq!(picker.toggle(tid("a")), Toggle::Removed);
        assert_eq!(picker.selected_count(), 0);
    }

    #[test]
    fn third_toggle_at_cap_is_noop() {
        let mut picker = TraitPicker::new(2);
        picker.toggle(tid("a"));
        picker.toggle(tid("b"));
        assert_eq!(picker.toggle(tid("c")), Toggle::AtCapacity);
        assert_eq!(picker.selected(), &[tid("a"), tid("b")]);
    }

    #[test]
    fn partial_selection_cannot_confirm() {
        let mut picker = TraitPicker::new(2);
        picker.toggle(tid("a"));
        assert!(!picker.can_confirm());
    }

    #[test]
    fn deselect_then_reselect_swaps_a_pick() {
        let mut picker = TraitPicker::new(2);
        picker.toggle(tid("a"));
        picker.toggle(tid("b"));
        picker.toggle(tid("a"));
        assert_eq!(picker.toggle(tid("c")), Toggle::Added);
        assert_eq!(picker.selected(), &[tid("b"), tid("c")]);
        assert!(picker.can_confirm());
    }

    #[test]
    fn clear_empties_selection() {
        let mut picker = TraitPicker::new(2);
        picker.toggle(tid("a"));
        picker.toggle(tid("b"));
        picker.clear();
        assert_eq!(picker.selected_count(), 0);
        assert!(!picker.can_confirm());
    }

    #[test]
    fn is_selected_reflects_current_state() {
        let mut picker = TraitPicker::new(2);
        picker.toggle(tid("a"));
        assert!(picker.is_selected(&tid("a")));
        assert!(!picker.is_selected(&tid("b")));
    }

    proptest! {
        /// Any toggle sequence keeps the selection within [0, required] with
        /// no duplicates.
        #[test]
        fn toggle_sequences_never_exceed_cap(
            ids in proptest::collection::vec(0u8..12, 0..64),
            required in 1usize..5,
        ) {
            let mut picker = TraitPicker::new(required);
            for id in ids {
                picker.toggle(tid(&format!("t{}", id)));
                prop_assert!(picker.selected_count() <= required);
                let mut deduped = picker.selected().to_vec();
                deduped.sort();
                deduped.dedup();
                prop_assert_eq!(deduped.len(), picker.selected_count());
            }
        }

        /// Toggling the same id twice in succession, below the cap, restores
        /// the prior selection.
        #[test]
        fn double_toggle_is_reversible(
            prefix in proptest::collection::vec(0u8..12, 0..8),
            probe in 12u8..24,
        ) {
            let mut picker = TraitPicker::new(3);
            for id in prefix {
                picker.toggle(tid(&format!("t{}", id)));
            }
            // Free a slot if the prefix filled the picker.
            if picker.selected_count() == picker.required() {
                let first = picker.selected()[0].clone();
                picker.toggle(first);
            }
            let before = picker.selected().to_vec();
            let probe = tid(&format!("t{}", probe));
            picker.toggle(probe.clone());
            picker.toggle(probe);
            prop_assert_eq!(picker.selected(), before.as_slice());
        }
    }
}
