// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state, partial state patches, and changed-field flags.

use alloc::string::String;

bitflags::bitflags! {
    /// Set of interaction-state fields.
    ///
    /// Produced by [`StatePatch::diff`] to report which fields a committed
    /// transition changed, and used to suppress individual field-level
    /// notifications.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StateFields: u8 {
        /// `is_open` changed.
        const IS_OPEN           = 0b0000_0001;
        /// `highlighted_index` changed.
        const HIGHLIGHTED_INDEX = 0b0000_0010;
        /// `selected_item` changed.
        const SELECTED_ITEM     = 0b0000_0100;
        /// `input_value` changed.
        const INPUT_VALUE       = 0b0000_1000;
        /// `keys_so_far` changed.
        const KEYS_SO_FAR       = 0b0001_0000;
    }
}

/// Interaction state shared by all widget flavors.
///
/// This is the superset of the per-flavor field sets: the select flavor never
/// touches `input_value`, the combobox and classic autocomplete never touch
/// `keys_so_far`. Reducers only ever read this state and return a
/// [`StatePatch`]; the state itself is mutated exclusively by the
/// reconciler (see [`crate::reconcile::commit`]).
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState<T> {
    /// Whether the popup/listbox is visible.
    pub is_open: bool,
    /// Index of the roving-highlighted item, `None` when nothing is
    /// highlighted.
    pub highlighted_index: Option<usize>,
    /// The committed selection.
    pub selected_item: Option<T>,
    /// Free-text value of the input element (combobox and autocomplete
    /// flavors). Empty when the flavor has no input.
    pub input_value: String,
    /// Accumulated type-ahead buffer (select flavor). Cleared on close and by
    /// the externally scheduled clear action.
    pub keys_so_far: String,
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        Self {
            is_open: false,
            highlighted_index: None,
            selected_item: None,
            input_value: String::new(),
            keys_so_far: String::new(),
        }
    }
}

/// A partial state patch.
///
/// `None` means "untouched by this transition"; `Some(v)` means "explicitly
/// set to `v`", which may equal the current value. The distinction matters:
/// reducers return only the fields they touched, controlled props are an
/// overlay of exactly the caller-owned fields, and a user state reducer may
/// override any subset of a proposed transition.
#[derive(Clone, Debug, PartialEq)]
pub struct StatePatch<T> {
    /// New open/closed state, if set.
    pub is_open: Option<bool>,
    /// New highlight, if set (`Some(None)` clears the highlight).
    pub highlighted_index: Option<Option<usize>>,
    /// New selection, if set (`Some(None)` clears the selection).
    pub selected_item: Option<Option<T>>,
    /// New input value, if set.
    pub input_value: Option<String>,
    /// New type-ahead buffer, if set.
    pub keys_so_far: Option<String>,
}

impl<T> Default for StatePatch<T> {
    fn default() -> Self {
        Self {
            is_open: None,
            highlighted_index: None,
            selected_item: None,
            input_value: None,
            keys_so_far: None,
        }
    }
}

impl<T: Clone + PartialEq> StatePatch<T> {
    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_open.is_none()
            && self.highlighted_index.is_none()
            && self.selected_item.is_none()
            && self.input_value.is_none()
            && self.keys_so_far.is_none()
    }

    /// Returns the fields this patch explicitly sets.
    #[must_use]
    pub fn fields(&self) -> StateFields {
        let mut fields = StateFields::empty();
        if self.is_open.is_some() {
            fields |= StateFields::IS_OPEN;
        }
        if self.highlighted_index.is_some() {
            fields |= StateFields::HIGHLIGHTED_INDEX;
        }
        if self.selected_item.is_some() {
            fields |= StateFields::SELECTED_ITEM;
        }
        if self.input_value.is_some() {
            fields |= StateFields::INPUT_VALUE;
        }
        if self.keys_so_far.is_some() {
            fields |= StateFields::KEYS_SO_FAR;
        }
        fields
    }

    /// Applies every set field of this patch onto `state`.
    pub fn apply_to(&self, state: &mut WidgetState<T>) {
        if let Some(is_open) = self.is_open {
            state.is_open = is_open;
        }
        if let Some(highlighted_index) = self.highlighted_index {
            state.highlighted_index = highlighted_index;
        }
        if let Some(selected_item) = &self.selected_item {
            state.selected_item = selected_item.clone();
        }
        if let Some(input_value) = &self.input_value {
            state.input_value = input_value.clone();
        }
        if let Some(keys_so_far) = &self.keys_so_far {
            state.keys_so_far = keys_so_far.clone();
        }
    }

    /// Computes the changed-only patch between two states.
    ///
    /// The returned patch sets exactly the fields whose values differ, which
    /// is the payload shape the change callbacks receive.
    #[must_use]
    pub fn diff(previous: &WidgetState<T>, next: &WidgetState<T>) -> Self {
        let mut patch = Self::default();
        if previous.is_open != next.is_open {
            patch.is_open = Some(next.is_open);
        }
        if previous.highlighted_index != next.highlighted_index {
            patch.highlighted_index = Some(next.highlighted_index);
        }
        if previous.selected_item != next.selected_item {
            patch.selected_item = Some(next.selected_item.clone());
        }
        if previous.input_value != next.input_value {
            patch.input_value = Some(next.input_value.clone());
        }
        if previous.keys_so_far != next.keys_so_far {
            patch.keys_so_far = Some(next.keys_so_far.clone());
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn apply_to_only_touches_set_fields() {
        let mut state: WidgetState<u32> = WidgetState {
            is_open: true,
            highlighted_index: Some(3),
            selected_item: Some(7),
            input_value: "seven".to_string(),
            keys_so_far: String::new(),
        };
        let patch = StatePatch {
            highlighted_index: Some(None),
            ..StatePatch::default()
        };
        patch.apply_to(&mut state);
        assert!(state.is_open);
        assert_eq!(state.highlighted_index, None);
        assert_eq!(state.selected_item, Some(7));
        assert_eq!(state.input_value, "seven");
    }

    #[test]
    fn diff_reports_exactly_the_changed_fields() {
        let previous: WidgetState<u32> = WidgetState::default();
        let mut next = previous.clone();
        next.is_open = true;
        next.selected_item = Some(4);

        let patch = StatePatch::diff(&previous, &next);
        assert_eq!(
            patch.fields(),
            StateFields::IS_OPEN | StateFields::SELECTED_ITEM
        );
        assert_eq!(patch.is_open, Some(true));
        assert_eq!(patch.selected_item, Some(Some(4)));
        assert_eq!(patch.highlighted_index, None);
    }

    #[test]
    fn explicit_set_to_equal_value_is_not_a_diff() {
        // A patch may set a field to its current value; the diff of the
        // resulting states is still empty.
        let previous: WidgetState<u32> = WidgetState::default();
        let mut next = previous.clone();
        let patch = StatePatch {
            is_open: Some(false),
            ..StatePatch::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut next);
        assert!(StatePatch::diff(&previous, &next).is_empty());
    }
}
