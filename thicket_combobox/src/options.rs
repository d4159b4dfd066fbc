// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance configuration for the combobox flavor.

use alloc::rc::Rc;
use alloc::string::String;

use thicket_core::a11y::MessageTemplate;
use thicket_core::ids::IdOverrides;
use thicket_core::notify::ChangeCallbacks;
use thicket_core::reconcile::StateReducer;
use thicket_core::state::{StatePatch, WidgetState};

use crate::actions::ComboboxAction;

/// Configuration for one [`Combobox`](crate::Combobox) instance.
///
/// Every state field comes in up to three variants: `initial_*` seeds the
/// state at construction, `default_*` is the value the field returns to on
/// reset/close, and the bare field name (e.g. [`Self::input_value`]) declares
/// the field *controlled* — the caller owns it and the machine never diverges
/// from it.
pub struct ComboboxOptions<T> {
    /// Display projection for items, used to restore the input text after a
    /// selection or dismissal and for accessibility announcements — never for
    /// equality.
    pub item_to_string: Option<Rc<dyn Fn(&T) -> String>>,
    /// Wrap highlight navigation at the list boundaries instead of clamping.
    pub circular_navigation: bool,
    /// Open state at construction.
    pub initial_is_open: Option<bool>,
    /// Open state after reset.
    pub default_is_open: Option<bool>,
    /// Controlled open state.
    pub is_open: Option<bool>,
    /// Highlight at construction.
    pub initial_highlighted_index: Option<usize>,
    /// Highlight applied on open/reset/selection.
    pub default_highlighted_index: Option<usize>,
    /// Controlled highlight (`Some(None)` controls it to "none").
    pub highlighted_index: Option<Option<usize>>,
    /// Selection at construction.
    pub initial_selected_item: Option<T>,
    /// Selection after reset.
    pub default_selected_item: Option<T>,
    /// Controlled selection (`Some(None)` controls it to "empty").
    pub selected_item: Option<Option<T>>,
    /// Input text at construction; falls back to the projection of the
    /// initial selection.
    pub initial_input_value: Option<String>,
    /// Input text after reset.
    pub default_input_value: Option<String>,
    /// Controlled input text.
    pub input_value: Option<String>,
    /// Element-id overrides.
    pub ids: IdOverrides,
    /// Caller-supplied override reducer; may veto or redirect any transition.
    pub state_reducer: Option<StateReducer<T, ComboboxAction<T>>>,
    /// Field-level change callbacks plus the catch-all.
    pub callbacks: ChangeCallbacks<T, ComboboxAction<T>>,
    /// Replaces the default open/close/result-count announcement template.
    pub get_a11y_status_message: Option<MessageTemplate<T>>,
    /// Replaces the default selection announcement template.
    pub get_a11y_selection_message: Option<MessageTemplate<T>>,
}

impl<T> Default for ComboboxOptions<T> {
    fn default() -> Self {
        Self {
            item_to_string: None,
            circular_navigation: false,
            initial_is_open: None,
            default_is_open: None,
            is_open: None,
            initial_highlighted_index: None,
            default_highlighted_index: None,
            highlighted_index: None,
            initial_selected_item: None,
            default_selected_item: None,
            selected_item: None,
            initial_input_value: None,
            default_input_value: None,
            input_value: None,
            ids: IdOverrides::default(),
            state_reducer: None,
            callbacks: ChangeCallbacks::default(),
            get_a11y_status_message: None,
            get_a11y_selection_message: None,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ComboboxOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComboboxOptions")
            .field("circular_navigation", &self.circular_navigation)
            .field("initial_is_open", &self.initial_is_open)
            .field("default_is_open", &self.default_is_open)
            .field("is_open", &self.is_open)
            .field("initial_highlighted_index", &self.initial_highlighted_index)
            .field("default_highlighted_index", &self.default_highlighted_index)
            .field("highlighted_index", &self.highlighted_index)
            .field("initial_selected_item", &self.initial_selected_item)
            .field("default_selected_item", &self.default_selected_item)
            .field("selected_item", &self.selected_item)
            .field("initial_input_value", &self.initial_input_value)
            .field("default_input_value", &self.default_input_value)
            .field("input_value", &self.input_value)
            .field("ids", &self.ids)
            .field("state_reducer", &self.state_reducer.is_some())
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq> ComboboxOptions<T> {
    /// Renders an item through the configured projection.
    #[must_use]
    pub fn project(&self, item: &T) -> String {
        self.item_to_string
            .as_ref()
            .map_or_else(String::new, |project| project(item))
    }

    /// State at construction: `initial_*`, falling back to `default_*`,
    /// falling back to the built-in defaults. With no configured input text
    /// the input starts as the projection of the starting selection.
    #[must_use]
    pub fn initial_state(&self) -> WidgetState<T> {
        let selected_item = self
            .initial_selected_item
            .clone()
            .or_else(|| self.default_selected_item.clone());
        WidgetState {
            is_open: self
                .initial_is_open
                .or(self.default_is_open)
                .unwrap_or(false),
            highlighted_index: self
                .initial_highlighted_index
                .or(self.default_highlighted_index),
            input_value: self
                .initial_input_value
                .clone()
                .or_else(|| self.default_input_value.clone())
                .or_else(|| selected_item.as_ref().map(|item| self.project(item)))
                .unwrap_or_default(),
            selected_item,
            ..WidgetState::default()
        }
    }

    /// The state a reset returns to: `default_*`, falling back to the
    /// built-in defaults.
    #[must_use]
    pub fn default_state(&self) -> WidgetState<T> {
        let selected_item = self.default_selected_item.clone();
        WidgetState {
            is_open: self.default_is_open.unwrap_or(false),
            highlighted_index: self.default_highlighted_index,
            input_value: self
                .default_input_value
                .clone()
                .or_else(|| selected_item.as_ref().map(|item| self.project(item)))
                .unwrap_or_default(),
            selected_item,
            ..WidgetState::default()
        }
    }

    /// The controlled-field overlay for the reconciler.
    #[must_use]
    pub fn controlled(&self) -> StatePatch<T> {
        StatePatch {
            is_open: self.is_open,
            highlighted_index: self.highlighted_index,
            selected_item: self.selected_item.clone(),
            input_value: self.input_value.clone(),
            ..StatePatch::default()
        }
    }
}
