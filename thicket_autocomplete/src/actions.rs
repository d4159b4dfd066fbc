// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed action set for the classic autocomplete flavor.
//!
//! This flavor predates the split into per-element action families, so its
//! variants are flatter: one keyboard family for the input, separate button
//! variants, and a catch-all [`AutocompleteAction::Unknown`] for host-authored
//! transitions that do not map to a recognized gesture.

use alloc::string::String;

use thicket_core::state::StatePatch;

/// One recognized user or programmatic event for the autocomplete flavor.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteAction<T> {
    /// Host-authored transition with no recognized gesture.
    Unknown,
    /// Document-level mouse release outside the widget.
    MouseUp,
    /// Document-level touch release outside the widget.
    TouchEnd,
    /// The pointer entered an item.
    ItemMouseEnter(usize),
    /// Arrow-down in the input.
    KeyDownArrowDown,
    /// Arrow-up in the input.
    KeyDownArrowUp,
    /// Escape in the input.
    KeyDownEscape,
    /// Enter in the input.
    KeyDownEnter,
    /// An item was clicked.
    ClickItem(usize),
    /// The input lost focus.
    BlurInput,
    /// The input's text changed.
    ChangeInput(String),
    /// Space pressed on the toggle button.
    KeyDownSpaceButton,
    /// The toggle button was clicked.
    ClickButton,
    /// The toggle button lost focus.
    BlurButton,
    /// The controlled selection was replaced by the host; re-syncs the input
    /// text to the new selection's projection.
    ControlledPropUpdatedSelectedItem,
    /// Programmatic [`toggle_menu`](crate::Autocomplete::toggle_menu).
    FunctionToggleMenu,
    /// Programmatic [`open_menu`](crate::Autocomplete::open_menu).
    FunctionOpenMenu,
    /// Programmatic [`close_menu`](crate::Autocomplete::close_menu).
    FunctionCloseMenu,
    /// Programmatic [`set_highlighted_index`](crate::Autocomplete::set_highlighted_index).
    FunctionSetHighlightedIndex(usize),
    /// Programmatic [`select_item`](crate::Autocomplete::select_item).
    FunctionSelectItem(T),
    /// Programmatic [`select_item_at_index`](crate::Autocomplete::select_item_at_index).
    FunctionSelectItemAtIndex(usize),
    /// Programmatic [`select_highlighted_item`](crate::Autocomplete::select_highlighted_item).
    FunctionSelectHighlightedItem,
    /// Programmatic [`set_input_value`](crate::Autocomplete::set_input_value).
    FunctionSetInputValue(String),
    /// Programmatic [`clear_selection`](crate::Autocomplete::clear_selection).
    FunctionClearSelection,
    /// Programmatic [`set_state`](crate::Autocomplete::set_state): an
    /// arbitrary caller-authored patch.
    FunctionSetState(StatePatch<T>),
    /// Programmatic [`reset`](crate::Autocomplete::reset).
    FunctionReset,
}

impl<T> AutocompleteAction<T> {
    /// Whether this action originates from pointer movement/presses, in
    /// which case highlight changes must not trigger scroll-into-view.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::ItemMouseEnter(_) | Self::ClickItem(_) | Self::ClickButton | Self::MouseUp
        )
    }
}

/// Keys recognized on the input, for event classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutocompleteKey {
    /// Arrow-down.
    ArrowDown,
    /// Arrow-up.
    ArrowUp,
    /// Enter.
    Enter,
    /// Escape.
    Escape,
}
