// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The autocomplete widget controller.

use alloc::string::String;

use thicket_core::a11y::{self, MessageContext};
use thicket_core::attrs::{Aria, Attributes, EventBindings, ItemOptions, MenuOptions, Role};
use thicket_core::dismiss::{DismissOutcome, DismissState};
use thicket_core::environment::{DocumentListeners, Environment, ListenerSet};
use thicket_core::ids::ElementIds;
use thicket_core::reconcile::{self, Committed};
use thicket_core::registry::{ItemRecord, ItemRegistry};
use thicket_core::state::{StateFields, StatePatch, WidgetState};

use crate::actions::{AutocompleteAction, AutocompleteKey};
use crate::options::AutocompleteOptions;
use crate::reducer;

/// A headless classic autocomplete.
///
/// The input-driven ancestor of [`thicket_combobox`](https://docs.rs/thicket_combobox):
/// one keyboard family on the input, selection hooks (`on_select`,
/// `on_change`) with a pluggable difference predicate, a caller-authored
/// `set_state` escape hatch, and an `item_count` override for windowed
/// collections.
///
/// `N` is the host's node handle type; handles are held only for the current
/// render pass and used exclusively for scroll-into-view.
#[derive(Debug)]
pub struct Autocomplete<T, N> {
    options: AutocompleteOptions<T>,
    state: WidgetState<T>,
    ids: ElementIds,
    registry: ItemRegistry<N>,
    listeners: ListenerSet,
    dismiss: DismissState,
    previous_result_count: usize,
    render_len: usize,
}

impl<T: Clone + PartialEq, N> Autocomplete<T, N> {
    /// Creates a widget with the given configuration.
    #[must_use]
    pub fn new(options: AutocompleteOptions<T>) -> Self {
        let mut state = options.initial_state();
        options.controlled().apply_to(&mut state);
        let ids = ElementIds::new(&options.ids);
        Self {
            options,
            state,
            ids,
            registry: ItemRegistry::default(),
            listeners: ListenerSet::default(),
            dismiss: DismissState::default(),
            previous_result_count: 0,
            render_len: 0,
        }
    }

    /// The current interaction state.
    #[must_use]
    pub fn state(&self) -> &WidgetState<T> {
        &self.state
    }

    /// The widget's configuration.
    #[must_use]
    pub fn options(&self) -> &AutocompleteOptions<T> {
        &self.options
    }

    /// Mutable access to the configuration (swap callbacks, change
    /// controlled fields between renders).
    pub fn options_mut(&mut self) -> &mut AutocompleteOptions<T> {
        &mut self.options
    }

    /// The derived element ids.
    #[must_use]
    pub fn element_ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Declares the full collection size when the host renders a windowed
    /// subset; navigation ranges over the declared count.
    pub fn set_item_count(&mut self, count: usize) {
        self.options.item_count = Some(count);
    }

    /// Reverts to inferring the item count from the offered slice.
    pub fn unset_item_count(&mut self) {
        self.options.item_count = None;
    }

    // --- render pass ---

    /// Starts a render pass, discarding the previous pass's item and node
    /// registrations. `item_count` is the number of items the host will
    /// render this pass.
    pub fn begin_render(&mut self, item_count: usize) {
        self.registry.begin_render();
        self.render_len = item_count;
    }

    /// Ends the render pass and validates its registrations.
    pub fn finish_render(&self) {
        self.registry.finish_render();
    }

    /// Registers the menu element's node handle for this pass.
    pub fn register_menu_node(&mut self, node: N) {
        self.registry.register_menu_node(node);
    }

    /// Registers (or replaces) the node handle of an item already declared
    /// through [`Self::item_props`].
    pub fn register_item_node(&mut self, index: usize, node: N) {
        self.registry.register_item_node(index, node);
    }

    // --- prop getters ---

    /// Attributes for the root (wrapper) element.
    #[must_use]
    pub fn root_props(&self) -> Attributes {
        let mut attrs = Attributes {
            role: Some(Role::Combobox),
            ..Attributes::default()
        };
        attrs.push_aria(Aria::HasPopupListbox);
        attrs.push_aria(Aria::Expanded(self.state.is_open));
        attrs.push_aria(Aria::Owns(self.ids.menu.clone()));
        attrs.push_aria(Aria::LabelledBy(self.ids.label.clone()));
        attrs
    }

    /// Attributes for the label element.
    #[must_use]
    pub fn label_props(&self) -> Attributes {
        Attributes {
            id: Some(self.ids.label.clone()),
            html_for: Some(self.ids.input.clone()),
            ..Attributes::default()
        }
    }

    /// Attributes for the text input.
    #[must_use]
    pub fn input_props(&self) -> Attributes {
        let mut attrs = Attributes {
            id: Some(self.ids.input.clone()),
            autocomplete_off: true,
            events: EventBindings::KEY_DOWN | EventBindings::CHANGE | EventBindings::BLUR,
            ..Attributes::default()
        };
        attrs.push_aria(Aria::AutoCompleteList);
        attrs.push_aria(Aria::Controls(self.ids.menu.clone()));
        attrs.push_aria(Aria::LabelledBy(self.ids.label.clone()));
        let len = self.options.item_count.unwrap_or(self.render_len);
        if self.state.is_open
            && let Some(index) = self.state.highlighted_index
            && index < len
        {
            attrs.push_aria(Aria::ActiveDescendant(self.ids.item(index)));
        }
        attrs
    }

    /// Attributes for the toggle button.
    #[must_use]
    pub fn toggle_button_props(&self) -> Attributes {
        let mut attrs = Attributes {
            id: Some(self.ids.toggle_button.clone()),
            role: Some(Role::Button),
            events: EventBindings::CLICK | EventBindings::KEY_DOWN | EventBindings::BLUR,
            ..Attributes::default()
        };
        attrs.push_aria(Aria::Label(String::from(if self.state.is_open {
            "close menu"
        } else {
            "open menu"
        })));
        attrs.push_aria(Aria::HasPopupListbox);
        attrs.push_aria(Aria::Expanded(self.state.is_open));
        attrs
    }

    /// Attributes for the menu (listbox) element. Taking these props obliges
    /// the host to register the menu node, unless `suppress_ref_error` opts
    /// out for a conditionally rendered menu.
    pub fn menu_props(&mut self, options: &MenuOptions) -> Attributes {
        self.registry.request_menu(options.suppress_ref_error);
        let mut attrs = Attributes {
            id: Some(self.ids.menu.clone()),
            role: Some(Role::Listbox),
            ..Attributes::default()
        };
        match &options.aria_label {
            Some(label) => attrs.push_aria(Aria::Label(label.clone())),
            None => attrs.push_aria(Aria::LabelledBy(self.ids.label.clone())),
        }
        attrs
    }

    /// Attributes for the item at `index`, registering it for this pass.
    pub fn item_props(&mut self, index: usize, options: ItemOptions<N>) -> Attributes {
        let id = self.ids.item(index);
        self.registry.register_item(
            index,
            ItemRecord {
                id: id.clone(),
                disabled: options.disabled,
                node: options.node,
            },
        );
        let mut attrs = Attributes {
            id: Some(id),
            role: Some(Role::Option),
            events: if options.disabled {
                EventBindings::empty()
            } else {
                EventBindings::CLICK | EventBindings::MOUSE_ENTER
            },
            ..Attributes::default()
        };
        attrs.push_aria(Aria::Selected(self.state.highlighted_index == Some(index)));
        attrs
    }

    // --- document listeners ---

    /// The document-level listeners this widget needs while mounted.
    #[must_use]
    pub fn required_listeners(&self) -> DocumentListeners {
        DocumentListeners::all()
    }

    /// Attaches/detaches document listeners so exactly the required set is
    /// subscribed. Idempotent.
    pub fn sync_listeners(&mut self, env: &mut dyn Environment<N>) {
        self.listeners.sync(self.required_listeners(), env);
    }

    /// Detaches all document listeners.
    pub fn unmount(&mut self, env: &mut dyn Environment<N>) {
        self.listeners.detach_all(env);
    }

    // --- event entry points ---

    /// A key pressed in the input.
    pub fn input_key_down(
        &mut self,
        key: AutocompleteKey,
        items: &[T],
        env: &mut dyn Environment<N>,
    ) {
        let action = match key {
            AutocompleteKey::ArrowDown => AutocompleteAction::KeyDownArrowDown,
            AutocompleteKey::ArrowUp => AutocompleteAction::KeyDownArrowUp,
            AutocompleteKey::Enter => AutocompleteAction::KeyDownEnter,
            AutocompleteKey::Escape => AutocompleteAction::KeyDownEscape,
        };
        self.dispatch(action, items, env);
    }

    /// The input's text changed. `items` is the collection already narrowed
    /// by the new text.
    pub fn input_change(&mut self, value: &str, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(
            AutocompleteAction::ChangeInput(String::from(value)),
            items,
            env,
        );
    }

    /// The input lost focus.
    pub fn input_blur(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::BlurInput, items, env);
    }

    /// The item at `index` was clicked.
    pub fn item_click(&mut self, index: usize, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::ClickItem(index), items, env);
    }

    /// The pointer entered the item at `index`.
    pub fn item_mouse_enter(&mut self, index: usize, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::ItemMouseEnter(index), items, env);
    }

    /// The toggle button was clicked.
    pub fn button_click(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::ClickButton, items, env);
    }

    /// Space pressed on the toggle button.
    pub fn button_key_down_space(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::KeyDownSpaceButton, items, env);
    }

    /// The toggle button lost focus.
    pub fn button_blur(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::BlurButton, items, env);
    }

    /// Tells the widget the host replaced the controlled selection, so the
    /// input text re-syncs to the new selection's projection.
    pub fn controlled_selection_updated(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(
            AutocompleteAction::ControlledPropUpdatedSelectedItem,
            items,
            env,
        );
    }

    /// Document-level `mousedown`.
    pub fn document_mouse_down(&mut self) {
        self.dismiss.on_mouse_down();
    }

    /// Document-level `mouseup`; `inside` is whether the event target belongs
    /// to this widget's elements.
    pub fn document_mouse_up(&mut self, inside: bool, items: &[T], env: &mut dyn Environment<N>) {
        if self.dismiss.on_mouse_up(inside) == DismissOutcome::OutsideRelease && self.state.is_open
        {
            self.dispatch(AutocompleteAction::MouseUp, items, env);
        }
    }

    /// Document-level `touchstart`.
    pub fn document_touch_start(&mut self) {
        self.dismiss.on_touch_start();
    }

    /// Document-level `touchmove`.
    pub fn document_touch_move(&mut self) {
        self.dismiss.on_touch_move();
    }

    /// Document-level `touchend`.
    pub fn document_touch_end(&mut self, inside: bool, items: &[T], env: &mut dyn Environment<N>) {
        if self.dismiss.on_touch_end(inside) == DismissOutcome::OutsideRelease
            && self.state.is_open
        {
            self.dispatch(AutocompleteAction::TouchEnd, items, env);
        }
    }

    // --- programmatic actions ---

    /// Toggles the menu.
    pub fn toggle_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::FunctionToggleMenu, items, env);
    }

    /// Opens the menu if closed.
    pub fn open_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::FunctionOpenMenu, items, env);
    }

    /// Closes the menu if open, leaving the input text as typed.
    pub fn close_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::FunctionCloseMenu, items, env);
    }

    /// Moves the highlight to `index` (clamped into the collection).
    pub fn set_highlighted_index(
        &mut self,
        index: usize,
        items: &[T],
        env: &mut dyn Environment<N>,
    ) {
        self.dispatch(
            AutocompleteAction::FunctionSetHighlightedIndex(index),
            items,
            env,
        );
    }

    /// Selects `item`, mirroring its projection into the input.
    pub fn select_item(&mut self, item: T, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::FunctionSelectItem(item), items, env);
    }

    /// Selects the item at `index` from the offered slice.
    pub fn select_item_at_index(
        &mut self,
        index: usize,
        items: &[T],
        env: &mut dyn Environment<N>,
    ) {
        self.dispatch(
            AutocompleteAction::FunctionSelectItemAtIndex(index),
            items,
            env,
        );
    }

    /// Selects the currently highlighted item, if any.
    pub fn select_highlighted_item(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(
            AutocompleteAction::FunctionSelectHighlightedItem,
            items,
            env,
        );
    }

    /// Replaces the input text without opening the menu.
    pub fn set_input_value(&mut self, value: &str, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(
            AutocompleteAction::FunctionSetInputValue(String::from(value)),
            items,
            env,
        );
    }

    /// Clears the selection and the input text.
    pub fn clear_selection(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::FunctionClearSelection, items, env);
    }

    /// Applies a caller-authored patch through the full pipeline (user
    /// reducer, controlled overlay, notification).
    pub fn set_state(&mut self, patch: StatePatch<T>, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::FunctionSetState(patch), items, env);
    }

    /// Resets all state fields to their configured defaults.
    pub fn reset(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(AutocompleteAction::FunctionReset, items, env);
    }

    // --- pipeline ---

    /// Runs one action through the transition pipeline: reduce, commit
    /// (user reducer, then controlled overlay), notify, selection hooks,
    /// announce, scroll.
    pub fn dispatch(
        &mut self,
        action: AutocompleteAction<T>,
        items: &[T],
        env: &mut dyn Environment<N>,
    ) {
        let patch = {
            let registry = &self.registry;
            let disabled = move |index: usize| registry.is_disabled(index);
            reducer::reduce(&self.state, &self.options, items, &disabled, &action)
        };
        let explicit = patch.fields();
        let controlled = self.options.controlled();
        let state_reducer = self.options.state_reducer.clone();
        let committed = reconcile::commit(
            &mut self.state,
            patch,
            &controlled,
            state_reducer.as_ref(),
            &action,
        );

        let selection_committed = explicit.contains(StateFields::SELECTED_ITEM);
        let selection_changed = self.options.selection_changed(
            committed.previous.selected_item.as_ref(),
            self.state.selected_item.as_ref(),
        );
        // The per-field selection callback honors the caller's difference
        // predicate, not just `PartialEq`.
        let suppress = if selection_committed && !selection_changed {
            StateFields::SELECTED_ITEM
        } else {
            StateFields::empty()
        };
        self.options.callbacks.notify(
            &action,
            &committed.changes,
            &self.state,
            committed.fields,
            explicit,
            suppress,
        );
        if selection_committed {
            if let Some(on_select) = &mut self.options.on_select {
                on_select(self.state.selected_item.as_ref(), &self.state);
            }
            if selection_changed
                && let Some(on_change) = &mut self.options.on_change
            {
                on_change(self.state.selected_item.as_ref(), &self.state);
            }
        }
        if matches!(
            action,
            AutocompleteAction::MouseUp | AutocompleteAction::TouchEnd
        ) && committed.previous.is_open
            && let Some(on_outer_click) = &mut self.options.on_outer_click
        {
            on_outer_click(&self.state);
        }

        self.announce(&committed, items, env);

        if committed.fields.contains(StateFields::HIGHLIGHTED_INDEX)
            && self.state.is_open
            && !action.is_pointer()
            && let Some(index) = self.state.highlighted_index
            && let Some(item) = self.registry.node_for(index)
            && let Some(menu) = self.registry.menu_node()
        {
            env.scroll_into_view(item, menu);
        }

        self.previous_result_count = items.len();
    }

    fn announce(&mut self, committed: &Committed<T>, items: &[T], env: &mut dyn Environment<N>) {
        let count_changed = self.state.is_open && items.len() != self.previous_result_count;
        if committed.fields.contains(StateFields::IS_OPEN) || count_changed {
            let message = self.render_message(items, false);
            if !message.is_empty() {
                env.announce(&message);
            }
        }
        if committed.fields.contains(StateFields::SELECTED_ITEM) {
            let message = self.render_message(items, true);
            if !message.is_empty() {
                env.announce(&message);
            }
        }
    }

    fn render_message(&self, items: &[T], selection: bool) -> String {
        let project = |item: &T| self.options.project(item);
        let ctx = MessageContext {
            is_open: self.state.is_open,
            highlighted_index: self.state.highlighted_index,
            highlighted_item: self
                .state
                .highlighted_index
                .and_then(|index| items.get(index)),
            selected_item: self.state.selected_item.as_ref(),
            result_count: self.options.item_count.unwrap_or(items.len()),
            previous_result_count: self.previous_result_count,
            input_value: &self.state.input_value,
            item_to_string: &project,
        };
        if selection {
            match &self.options.get_a11y_selection_message {
                Some(template) => template(&ctx),
                None => a11y::default_selection_message(&ctx),
            }
        } else {
            match &self.options.get_a11y_status_message {
                Some(template) => template(&ctx),
                None => a11y::default_status_message(&ctx),
            }
        }
    }
}
