// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed action set for the select flavor.
//!
//! Action variants are origin-precise: an arrow-down from the open menu and
//! an arrow-down from the closed toggle button are distinct actions with
//! distinct transition policies, and every programmatic call carries a
//! `Function` variant so a caller's state reducer can tell manual calls apart
//! from user interaction.

/// One recognized user or programmatic event for the select flavor.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectAction<T> {
    /// Arrow-down inside the open menu.
    MenuKeyDownArrowDown,
    /// Arrow-up inside the open menu.
    MenuKeyDownArrowUp,
    /// Escape inside the open menu.
    MenuKeyDownEscape,
    /// Home inside the open menu.
    MenuKeyDownHome,
    /// End inside the open menu.
    MenuKeyDownEnd,
    /// Enter inside the open menu.
    MenuKeyDownEnter,
    /// A printable character typed inside the open menu (type-ahead).
    MenuKeyDownCharacter(char),
    /// The menu lost focus (including outside-press dismissal).
    MenuBlur,
    /// The pointer left the menu.
    MenuMouseLeave,
    /// The pointer moved over an item.
    ItemMouseMove(usize),
    /// An item was clicked (or touch-selected).
    ItemClick(usize),
    /// A printable character typed on the focused, closed toggle button.
    ToggleButtonKeyDownCharacter(char),
    /// Arrow-down on the closed toggle button.
    ToggleButtonKeyDownArrowDown,
    /// Arrow-up on the closed toggle button.
    ToggleButtonKeyDownArrowUp,
    /// The toggle button was clicked.
    ToggleButtonClick,
    /// Programmatic [`toggle_menu`](crate::Select::toggle_menu).
    FunctionToggleMenu,
    /// Programmatic [`open_menu`](crate::Select::open_menu).
    FunctionOpenMenu,
    /// Programmatic [`close_menu`](crate::Select::close_menu).
    FunctionCloseMenu,
    /// Programmatic [`set_highlighted_index`](crate::Select::set_highlighted_index).
    FunctionSetHighlightedIndex(usize),
    /// Programmatic [`select_item`](crate::Select::select_item).
    FunctionSelectItem(T),
    /// Externally scheduled type-ahead buffer clear.
    FunctionClearKeysSoFar,
    /// Programmatic [`reset`](crate::Select::reset).
    FunctionReset,
}

impl<T> SelectAction<T> {
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

/// Keys recognized on the open menu, for event classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
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
    /// A printable character.
    Character(char),
}

/// Keys recognized on the closed toggle button, for event classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleButtonKey {
    /// Arrow-down.
    ArrowDown,
    /// Arrow-up.
    ArrowUp,
    /// A printable character.
    Character(char),
}
