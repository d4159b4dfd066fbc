// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance configuration for the autocomplete flavor.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;

use thicket_core::a11y::MessageTemplate;
use thicket_core::ids::IdOverrides;
use thicket_core::notify::ChangeCallbacks;
use thicket_core::reconcile::StateReducer;
use thicket_core::state::{StatePatch, WidgetState};

use crate::actions::AutocompleteAction;

/// Hook invoked with the committed selection and the full state.
pub type SelectionHook<T> = Box<dyn FnMut(Option<&T>, &WidgetState<T>)>;

/// Configuration for one [`Autocomplete`](crate::Autocomplete) instance.
///
/// Every state field comes in up to three variants: `initial_*` seeds the
/// state at construction, `default_*` is the value the field returns to on
/// reset/close, and the bare field name declares the field *controlled* — the
/// caller owns it and the machine never diverges from it.
pub struct AutocompleteOptions<T> {
    /// Display projection for items, used to restore the input text after a
    /// selection or dismissal and for accessibility announcements — never for
    /// equality.
    pub item_to_string: Option<Rc<dyn Fn(&T) -> String>>,
    /// Distinguishes two selections. Defaults to `PartialEq` difference;
    /// callers with re-created but equivalent item values override this to
    /// keep [`Self::on_change`] quiet across renders.
    pub selected_item_changed: Option<Rc<dyn Fn(&T, &T) -> bool>>,
    /// Wrap highlight navigation at the list boundaries instead of clamping.
    pub circular_navigation: bool,
    /// Overrides the item count inferred from the offered slice; set when
    /// the host renders a windowed subset of a larger collection.
    pub item_count: Option<usize>,
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
    pub state_reducer: Option<StateReducer<T, AutocompleteAction<T>>>,
    /// Field-level change callbacks plus the catch-all.
    pub callbacks: ChangeCallbacks<T, AutocompleteAction<T>>,
    /// Fired on every committed selection, changed or not.
    pub on_select: Option<SelectionHook<T>>,
    /// Fired only when the committed selection differs per
    /// [`Self::selected_item_changed`].
    pub on_change: Option<SelectionHook<T>>,
    /// Fired when an outside press dismisses the open menu, with the state
    /// after the dismissal.
    pub on_outer_click: Option<Box<dyn FnMut(&WidgetState<T>)>>,
    /// Replaces the default open/close/result-count announcement template.
    pub get_a11y_status_message: Option<MessageTemplate<T>>,
    /// Replaces the default selection announcement template.
    pub get_a11y_selection_message: Option<MessageTemplate<T>>,
}

impl<T> Default for AutocompleteOptions<T> {
    fn default() -> Self {
        Self {
            item_to_string: None,
            selected_item_changed: None,
            circular_navigation: false,
            item_count: None,
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
            on_select: None,
            on_change: None,
            on_outer_click: None,
            get_a11y_status_message: None,
            get_a11y_selection_message: None,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for AutocompleteOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutocompleteOptions")
            .field("circular_navigation", &self.circular_navigation)
            .field("item_count", &self.item_count)
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
            .field("on_select", &self.on_select.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_outer_click", &self.on_outer_click.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq> AutocompleteOptions<T> {
    /// Renders an item through the configured projection.
    #[must_use]
    pub fn project(&self, item: &T) -> String {
        self.item_to_string
            .as_ref()
            .map_or_else(String::new, |project| project(item))
    }

    /// Whether two committed selections count as different.
    #[must_use]
    pub fn selection_changed(&self, previous: Option<&T>, next: Option<&T>) -> bool {
        match (previous, next) {
            (Some(previous), Some(next)) => match &self.selected_item_changed {
                Some(changed) => changed(previous, next),
                None => previous != next,
            },
            (None, None) => false,
            _ => true,
        }
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
