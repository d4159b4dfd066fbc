// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The combobox widget controller.

use alloc::string::String;

use thicket_core::a11y::{self, MessageContext};
use thicket_core::attrs::{Aria, Attributes, EventBindings, ItemOptions, MenuOptions, Role};
use thicket_core::dismiss::{DismissOutcome, DismissState};
use thicket_core::environment::{DocumentListeners, Environment, ListenerSet};
use thicket_core::ids::ElementIds;
use thicket_core::reconcile::{self, Committed};
use thicket_core::registry::{ItemRecord, ItemRegistry};
use thicket_core::state::{StateFields, WidgetState};

use crate::actions::{ComboboxAction, InputKey};
use crate::options::ComboboxOptions;
use crate::reducer;

/// A headless filterable combobox.
///
/// A text input drives an openable listbox menu. The host owns the filtering:
/// it narrows its item collection from the input text and passes the narrowed
/// slice to every entry point, so the machine only ever reasons about the
/// items currently offered. Focus stays on the input throughout.
///
/// `N` is the host's node handle type; handles are held only for the current
/// render pass and used exclusively for scroll-into-view.
#[derive(Debug)]
pub struct Combobox<T, N> {
    options: ComboboxOptions<T>,
    state: WidgetState<T>,
    ids: ElementIds,
    registry: ItemRegistry<N>,
    listeners: ListenerSet,
    dismiss: DismissState,
    previous_result_count: usize,
    render_len: usize,
}

impl<T: Clone + PartialEq, N> Combobox<T, N> {
    /// Creates a widget with the given configuration.
    #[must_use]
    pub fn new(options: ComboboxOptions<T>) -> Self {
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
    pub fn options(&self) -> &ComboboxOptions<T> {
        &self.options
    }

    /// Mutable access to the configuration (swap callbacks, change
    /// controlled fields between renders).
    pub fn options_mut(&mut self) -> &mut ComboboxOptions<T> {
        &mut self.options
    }

    /// The derived element ids.
    #[must_use]
    pub fn element_ids(&self) -> &ElementIds {
        &self.ids
    }

    // --- render pass ---

    /// Starts a render pass, discarding the previous pass's item and node
    /// registrations. `item_count` is the number of items the host will
    /// render this pass (after filtering).
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

    /// Attributes for the label element.
    #[must_use]
    pub fn label_props(&self) -> Attributes {
        Attributes {
            id: Some(self.ids.label.clone()),
            html_for: Some(self.ids.input.clone()),
            ..Attributes::default()
        }
    }

    /// Attributes for the combobox wrapper element.
    #[must_use]
    pub fn combobox_props(&self) -> Attributes {
        let mut attrs = Attributes {
            role: Some(Role::Combobox),
            ..Attributes::default()
        };
        attrs.push_aria(Aria::HasPopupListbox);
        attrs.push_aria(Aria::Expanded(self.state.is_open));
        attrs.push_aria(Aria::Owns(self.ids.menu.clone()));
        attrs
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
        if self.state.is_open
            && let Some(index) = self.state.highlighted_index
            && index < self.render_len
        {
            attrs.push_aria(Aria::ActiveDescendant(self.ids.item(index)));
        }
        attrs
    }

    /// Attributes for the toggle button. The button is skipped in the tab
    /// order; keyboard users stay on the input.
    #[must_use]
    pub fn toggle_button_props(&self) -> Attributes {
        let mut attrs = Attributes {
            id: Some(self.ids.toggle_button.clone()),
            role: Some(Role::Button),
            tab_index: Some(-1),
            events: EventBindings::CLICK,
            ..Attributes::default()
        };
        attrs.push_aria(Aria::Label(String::from("toggle menu")));
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
            events: EventBindings::MOUSE_LEAVE,
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
                EventBindings::CLICK | EventBindings::MOUSE_MOVE
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
    pub fn input_key_down(&mut self, key: InputKey, items: &[T], env: &mut dyn Environment<N>) {
        let action = match key {
            InputKey::ArrowDown => ComboboxAction::InputKeyDownArrowDown,
            InputKey::ArrowUp => ComboboxAction::InputKeyDownArrowUp,
            InputKey::Home => ComboboxAction::InputKeyDownHome,
            InputKey::End => ComboboxAction::InputKeyDownEnd,
            InputKey::Enter => ComboboxAction::InputKeyDownEnter,
            InputKey::Escape => ComboboxAction::InputKeyDownEscape,
        };
        self.dispatch(action, items, env);
    }

    /// The input's text changed. `items` is the collection already narrowed
    /// by the new text.
    pub fn input_change(&mut self, value: &str, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::InputChange(String::from(value)), items, env);
    }

    /// The input lost focus.
    pub fn input_blur(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::InputBlur, items, env);
    }

    /// The pointer left the menu.
    pub fn menu_mouse_leave(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::MenuMouseLeave, items, env);
    }

    /// The item at `index` was clicked.
    pub fn item_click(&mut self, index: usize, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::ItemClick(index), items, env);
    }

    /// The pointer moved over the item at `index`.
    pub fn item_mouse_move(&mut self, index: usize, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::ItemMouseMove(index), items, env);
    }

    /// The toggle button was clicked.
    pub fn toggle_button_click(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::ToggleButtonClick, items, env);
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
            self.dispatch(ComboboxAction::InputBlur, items, env);
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
            self.dispatch(ComboboxAction::InputBlur, items, env);
        }
    }

    // --- programmatic actions ---

    /// Toggles the menu.
    pub fn toggle_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::FunctionToggleMenu, items, env);
    }

    /// Opens the menu if closed.
    pub fn open_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::FunctionOpenMenu, items, env);
    }

    /// Closes the menu if open, leaving the input text as typed.
    pub fn close_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::FunctionCloseMenu, items, env);
    }

    /// Moves the highlight to `index` (clamped into the collection).
    pub fn set_highlighted_index(
        &mut self,
        index: usize,
        items: &[T],
        env: &mut dyn Environment<N>,
    ) {
        self.dispatch(
            ComboboxAction::FunctionSetHighlightedIndex(index),
            items,
            env,
        );
    }

    /// Selects `item`, mirroring its projection into the input.
    pub fn select_item(&mut self, item: T, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::FunctionSelectItem(item), items, env);
    }

    /// Replaces the input text without opening the menu.
    pub fn set_input_value(&mut self, value: &str, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(
            ComboboxAction::FunctionSetInputValue(String::from(value)),
            items,
            env,
        );
    }

    /// Resets all state fields to their configured defaults.
    pub fn reset(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(ComboboxAction::FunctionReset, items, env);
    }

    // --- pipeline ---

    /// Runs one action through the transition pipeline: reduce, commit
    /// (user reducer, then controlled overlay), notify, announce, scroll.
    pub fn dispatch(
        &mut self,
        action: ComboboxAction<T>,
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

        self.options.callbacks.notify(
            &action,
            &committed.changes,
            &self.state,
            committed.fields,
            explicit,
            StateFields::empty(),
        );

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
        // The filtered result count can change on any keystroke, so the
        // status is re-rendered whenever the open menu's contents shrink or
        // grow, not only on open/close.
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
            result_count: items.len(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use thicket_core::environment::NoEnvironment;

    const FRUIT: [&str; 3] = ["Apple", "Banana", "Cherry"];

    #[derive(Default)]
    struct RecordingEnv {
        announcements: Vec<String>,
    }

    impl Environment<u32> for RecordingEnv {
        fn attach_listener(&mut self, _listener: DocumentListeners) {}
        fn detach_listener(&mut self, _listener: DocumentListeners) {}
        fn announce(&mut self, message: &str) {
            self.announcements.push(message.to_string());
        }
    }

    fn filtered(query: &str) -> Vec<&'static str> {
        FRUIT
            .iter()
            .copied()
            .filter(|item| item.to_lowercase().starts_with(&query.to_lowercase()))
            .collect()
    }

    fn options() -> ComboboxOptions<&'static str> {
        ComboboxOptions {
            item_to_string: Some(Rc::new(|item: &&str| (*item).to_string())),
            ids: thicket_core::ids::IdOverrides {
                id: Some("fruit".to_string()),
                ..thicket_core::ids::IdOverrides::default()
            },
            ..ComboboxOptions::default()
        }
    }

    fn widget() -> Combobox<&'static str, u32> {
        Combobox::new(options())
    }

    #[test]
    fn typing_filters_navigating_and_enter_selects() {
        let mut env = NoEnvironment;
        let mut combobox = widget();
        let items = filtered("b");
        combobox.input_change("b", &items, &mut env);
        assert!(combobox.state().is_open);
        assert_eq!(combobox.state().input_value, "b");

        combobox.input_key_down(InputKey::ArrowDown, &items, &mut env);
        assert_eq!(combobox.state().highlighted_index, Some(0));
        combobox.input_key_down(InputKey::Enter, &items, &mut env);
        assert!(!combobox.state().is_open);
        assert_eq!(combobox.state().selected_item, Some("Banana"));
        assert_eq!(combobox.state().input_value, "Banana");
    }

    #[test]
    fn escape_restores_the_selected_projection() {
        let mut env = NoEnvironment;
        let mut combobox = widget();
        combobox.select_item("Banana", &FRUIT, &mut env);
        let items = filtered("ch");
        combobox.input_change("Ch", &items, &mut env);
        assert_eq!(combobox.state().input_value, "Ch");
        combobox.input_key_down(InputKey::Escape, &items, &mut env);
        assert!(!combobox.state().is_open);
        assert_eq!(combobox.state().input_value, "Banana");
        assert_eq!(combobox.state().selected_item, Some("Banana"));
    }

    #[test]
    fn outside_release_dismisses_like_a_blur() {
        let mut env = NoEnvironment;
        let mut combobox = widget();
        let items = filtered("a");
        combobox.input_change("a", &items, &mut env);
        combobox.document_mouse_down();
        combobox.document_mouse_up(false, &items, &mut env);
        assert!(!combobox.state().is_open);
        assert_eq!(combobox.state().input_value, "");
    }

    #[test]
    fn initial_input_mirrors_the_initial_selection() {
        let combobox: Combobox<&'static str, u32> = Combobox::new(ComboboxOptions {
            initial_selected_item: Some("Cherry"),
            ..options()
        });
        assert_eq!(combobox.state().input_value, "Cherry");
    }

    #[test]
    fn controlled_input_value_never_diverges() {
        let mut env = NoEnvironment;
        let mut combobox: Combobox<&'static str, u32> = Combobox::new(ComboboxOptions {
            input_value: Some("pinned".to_string()),
            ..options()
        });
        combobox.input_change("b", &filtered("b"), &mut env);
        assert_eq!(combobox.state().input_value, "pinned");
        // The menu still opened; only the controlled field was overridden.
        assert!(combobox.state().is_open);
    }

    #[test]
    fn result_count_changes_are_announced_while_open() {
        let mut env = RecordingEnv::default();
        let mut combobox = widget();
        let items = filtered("");
        combobox.input_change("", &items, &mut env);
        let items = filtered("b");
        combobox.input_change("b", &items, &mut env);
        let items = filtered("bx");
        combobox.input_change("bx", &items, &mut env);
        assert_eq!(
            env.announcements,
            [
                "3 results are available, use up and down arrow keys to navigate. \
                 Press Enter key to select."
                    .to_string(),
                "1 result is available, use up and down arrow keys to navigate. \
                 Press Enter key to select."
                    .to_string(),
                "No results are available.".to_string(),
            ]
        );
    }

    #[test]
    fn input_props_expose_the_combobox_wiring() {
        let mut env = NoEnvironment;
        let mut combobox = widget();
        combobox.open_menu(&FRUIT, &mut env);
        combobox.set_highlighted_index(1, &FRUIT, &mut env);
        combobox.begin_render(FRUIT.len());
        let input = combobox.input_props();
        assert_eq!(input.id.as_deref(), Some("fruit-input"));
        assert!(input.autocomplete_off);
        assert!(input.aria.contains(&Aria::AutoCompleteList));
        assert!(input.aria.contains(&Aria::Controls("fruit-menu".to_string())));
        assert!(input
            .aria
            .contains(&Aria::ActiveDescendant("fruit-item-1".to_string())));
        assert!(input
            .events
            .contains(EventBindings::KEY_DOWN | EventBindings::CHANGE | EventBindings::BLUR));

        let wrapper = combobox.combobox_props();
        assert_eq!(wrapper.role, Some(Role::Combobox));
        assert!(wrapper.aria.contains(&Aria::Expanded(true)));
        assert!(wrapper.aria.contains(&Aria::Owns("fruit-menu".to_string())));

        let toggle = combobox.toggle_button_props();
        assert_eq!(toggle.tab_index, Some(-1));
        assert_eq!(toggle.events, EventBindings::CLICK);
        combobox.finish_render();
    }

    #[test]
    fn close_menu_keeps_the_typed_text() {
        let mut env = NoEnvironment;
        let mut combobox = widget();
        let items = filtered("ch");
        combobox.input_change("Ch", &items, &mut env);
        combobox.close_menu(&items, &mut env);
        assert!(!combobox.state().is_open);
        assert_eq!(combobox.state().input_value, "Ch");
    }

    #[test]
    fn reset_returns_to_the_configured_defaults() {
        let mut env = NoEnvironment;
        let mut combobox: Combobox<&'static str, u32> = Combobox::new(ComboboxOptions {
            default_selected_item: Some("Apple"),
            ..options()
        });
        combobox.input_change("b", &filtered("b"), &mut env);
        combobox.input_key_down(InputKey::ArrowDown, &filtered("b"), &mut env);
        combobox.reset(&FRUIT, &mut env);
        assert!(!combobox.state().is_open);
        assert_eq!(combobox.state().selected_item, Some("Apple"));
        assert_eq!(combobox.state().input_value, "Apple");
    }
}
