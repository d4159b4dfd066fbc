// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed action set for the combobox flavor.
//!
//! Focus stays on the text input for the whole interaction, so the keyboard
//! actions all originate there. Every programmatic call carries a `Function`
//! variant so a caller's state reducer can tell manual calls apart from user
//! interaction.

use alloc::string::String;

/// One recognized user or programmatic event for the combobox flavor.
#[derive(Clone, Debug, PartialEq)]
pub enum ComboboxAction<T> {
    /// Arrow-down in the input: opens the menu, or moves the highlight.
    InputKeyDownArrowDown,
    /// Arrow-up in the input: opens the menu, or moves the highlight.
    InputKeyDownArrowUp,
    /// Escape in the input: closes and restores the input text.
    InputKeyDownEscape,
    /// Home in the input while the menu is open.
    InputKeyDownHome,
    /// End in the input while the menu is open.
    InputKeyDownEnd,
    /// Enter in the input: commits the highlighted item.
    InputKeyDownEnter,
    /// The input's text changed.
    InputChange(String),
    /// The input lost focus (including outside-press dismissal).
    InputBlur,
    /// The pointer left the menu.
    MenuMouseLeave,
    /// The pointer moved over an item.
    ItemMouseMove(usize),
    /// An item was clicked (or touch-selected).
    ItemClick(usize),
    /// The toggle button was clicked.
    ToggleButtonClick,
    /// Programmatic [`toggle_menu`](crate::Combobox::toggle_menu).
    FunctionToggleMenu,
    /// Programmatic [`open_menu`](crate::Combobox::open_menu).
    FunctionOpenMenu,
    /// Programmatic [`close_menu`](crate::Combobox::close_menu).
    FunctionCloseMenu,
    /// Programmatic [`set_highlighted_index`](crate::Combobox::set_highlighted_index).
    FunctionSetHighlightedIndex(usize),
    /// Programmatic [`select_item`](crate::Combobox::select_item).
    FunctionSelectItem(T),
    /// Programmatic [`set_input_value`](crate::Combobox::set_input_value).
    FunctionSetInputValue(String),
    /// Programmatic [`reset`](crate::Combobox::reset).
    FunctionReset,
}

impl<T> ComboboxAction<T> {
    /// Whether this action originates from pointer movement/presses, in
    /// which case highlight changes must not trigger scroll-into-view.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::ItemMouseMove(_)
                | Self::ItemClick(_)
                | Self::ToggleButtonClick
                | Self::MenuMouseLeave
        )
    }
}

/// Keys recognized on the input, for event classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKey {
    /// Arrow-down.
    ArrowDown,
    /// Arrow-up.
    ArrowUp,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter.
    Enter,
    /// Escape.
    Escape,
}
