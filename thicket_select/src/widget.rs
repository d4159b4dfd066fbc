// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The select widget controller.

use alloc::string::String;

use thicket_core::a11y::{self, MessageContext};
use thicket_core::attrs::{Aria, Attributes, EventBindings, ItemOptions, MenuOptions, Role};
use thicket_core::dismiss::{DismissOutcome, DismissState};
use thicket_core::environment::{DocumentListeners, Environment, ListenerSet};
use thicket_core::ids::ElementIds;
use thicket_core::reconcile::{self, Committed};
use thicket_core::registry::{ItemRecord, ItemRegistry};
use thicket_core::state::{StateFields, WidgetState};

use crate::actions::{MenuKey, SelectAction, ToggleButtonKey};
use crate::options::SelectOptions;
use crate::reducer;

/// A headless single-select dropdown.
///
/// The host renders whatever elements it likes, decorates them with the
/// attribute bundles from the prop getters, and forwards the events those
/// bundles name to the matching entry points here. All state transitions run
/// synchronously inside the entry point that caused them.
///
/// `N` is the host's node handle type; handles are held only for the current
/// render pass and used exclusively for scroll-into-view.
#[derive(Debug)]
pub struct Select<T, N> {
    options: SelectOptions<T>,
    state: WidgetState<T>,
    ids: ElementIds,
    registry: ItemRegistry<N>,
    listeners: ListenerSet,
    dismiss: DismissState,
    previous_result_count: usize,
    render_len: usize,
}

impl<T: Clone + PartialEq, N> Select<T, N> {
    /// Creates a widget with the given configuration.
    #[must_use]
    pub fn new(options: SelectOptions<T>) -> Self {
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
    pub fn options(&self) -> &SelectOptions<T> {
        &self.options
    }

    /// Mutable access to the configuration (swap callbacks, change
    /// controlled fields between renders).
    pub fn options_mut(&mut self) -> &mut SelectOptions<T> {
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

    /// Attributes for the label element.
    #[must_use]
    pub fn label_props(&self) -> Attributes {
        Attributes {
            id: Some(self.ids.label.clone()),
            html_for: Some(self.ids.toggle_button.clone()),
            ..Attributes::default()
        }
    }

    /// Attributes for the toggle button.
    #[must_use]
    pub fn toggle_button_props(&self) -> Attributes {
        let mut attrs = Attributes {
            id: Some(self.ids.toggle_button.clone()),
            role: Some(Role::Button),
            events: EventBindings::CLICK | EventBindings::KEY_DOWN,
            ..Attributes::default()
        };
        attrs.push_aria(Aria::HasPopupListbox);
        attrs.push_aria(Aria::Expanded(self.state.is_open));
        attrs.push_aria(Aria::LabelledBy(alloc::format!(
            "{} {}",
            self.ids.label,
            self.ids.toggle_button
        )));
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
            tab_index: Some(-1),
            events: EventBindings::KEY_DOWN | EventBindings::BLUR | EventBindings::MOUSE_LEAVE,
            ..Attributes::default()
        };
        match &options.aria_label {
            Some(label) => attrs.push_aria(Aria::Label(label.clone())),
            None => attrs.push_aria(Aria::LabelledBy(self.ids.label.clone())),
        }
        if self.state.is_open
            && let Some(index) = self.state.highlighted_index
            && index < self.render_len
        {
            attrs.push_aria(Aria::ActiveDescendant(self.ids.item(index)));
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

    /// A key pressed inside the open menu.
    pub fn menu_key_down(&mut self, key: MenuKey, items: &[T], env: &mut dyn Environment<N>) {
        let action = match key {
            MenuKey::ArrowDown => SelectAction::MenuKeyDownArrowDown,
            MenuKey::ArrowUp => SelectAction::MenuKeyDownArrowUp,
            MenuKey::Home => SelectAction::MenuKeyDownHome,
            MenuKey::End => SelectAction::MenuKeyDownEnd,
            MenuKey::Enter => SelectAction::MenuKeyDownEnter,
            MenuKey::Escape => SelectAction::MenuKeyDownEscape,
            MenuKey::Character(c) => SelectAction::MenuKeyDownCharacter(c),
        };
        self.dispatch(action, items, env);
    }

    /// The menu lost focus.
    pub fn menu_blur(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::MenuBlur, items, env);
    }

    /// The pointer left the menu.
    pub fn menu_mouse_leave(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::MenuMouseLeave, items, env);
    }

    /// The item at `index` was clicked.
    pub fn item_click(&mut self, index: usize, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::ItemClick(index), items, env);
    }

    /// The pointer moved over the item at `index`.
    pub fn item_mouse_move(&mut self, index: usize, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::ItemMouseMove(index), items, env);
    }

    /// The toggle button was clicked.
    pub fn toggle_button_click(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::ToggleButtonClick, items, env);
    }

    /// A key pressed on the focused toggle button while the menu is closed.
    pub fn toggle_button_key_down(
        &mut self,
        key: ToggleButtonKey,
        items: &[T],
        env: &mut dyn Environment<N>,
    ) {
        let action = match key {
            ToggleButtonKey::ArrowDown => SelectAction::ToggleButtonKeyDownArrowDown,
            ToggleButtonKey::ArrowUp => SelectAction::ToggleButtonKeyDownArrowUp,
            ToggleButtonKey::Character(c) => SelectAction::ToggleButtonKeyDownCharacter(c),
        };
        self.dispatch(action, items, env);
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
            self.dispatch(SelectAction::MenuBlur, items, env);
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
            self.dispatch(SelectAction::MenuBlur, items, env);
        }
    }

    // --- programmatic actions ---

    /// Toggles the menu.
    pub fn toggle_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::FunctionToggleMenu, items, env);
    }

    /// Opens the menu if closed.
    pub fn open_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::FunctionOpenMenu, items, env);
    }

    /// Closes the menu if open.
    pub fn close_menu(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::FunctionCloseMenu, items, env);
    }

    /// Moves the highlight to `index` (clamped into the collection).
    pub fn set_highlighted_index(
        &mut self,
        index: usize,
        items: &[T],
        env: &mut dyn Environment<N>,
    ) {
        self.dispatch(SelectAction::FunctionSetHighlightedIndex(index), items, env);
    }

    /// Selects `item` without touching the open state or highlight.
    pub fn select_item(&mut self, item: T, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::FunctionSelectItem(item), items, env);
    }

    /// Clears the type-ahead buffer. The core owns no timers; hosts that want
    /// the buffer to expire schedule this call themselves.
    pub fn clear_keys_so_far(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::FunctionClearKeysSoFar, items, env);
    }

    /// Resets all state fields to their configured defaults.
    pub fn reset(&mut self, items: &[T], env: &mut dyn Environment<N>) {
        self.dispatch(SelectAction::FunctionReset, items, env);
    }

    // --- pipeline ---

    /// Runs one action through the transition pipeline: reduce, commit
    /// (user reducer, then controlled overlay), notify, announce, scroll.
    pub fn dispatch(&mut self, action: SelectAction<T>, items: &[T], env: &mut dyn Environment<N>) {
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
        if committed.fields.contains(StateFields::IS_OPEN) {
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
    use core::cell::RefCell;
    use thicket_core::environment::NoEnvironment;
    use thicket_core::state::StatePatch;

    const FRUIT: [&str; 3] = ["Apple", "Banana", "Cherry"];

    #[derive(Default)]
    struct RecordingEnv {
        announcements: Vec<String>,
        scrolled: Vec<(u32, u32)>,
        attached: Vec<DocumentListeners>,
        detached: Vec<DocumentListeners>,
    }

    impl Environment<u32> for RecordingEnv {
        fn attach_listener(&mut self, listener: DocumentListeners) {
            self.attached.push(listener);
        }
        fn detach_listener(&mut self, listener: DocumentListeners) {
            self.detached.push(listener);
        }
        fn announce(&mut self, message: &str) {
            self.announcements.push(message.to_string());
        }
        fn scroll_into_view(&mut self, item: &u32, menu: &u32) {
            self.scrolled.push((*item, *menu));
        }
    }

    fn options() -> SelectOptions<&'static str> {
        SelectOptions {
            item_to_string: Some(Rc::new(|item: &&str| (*item).to_string())),
            ids: thicket_core::ids::IdOverrides {
                id: Some("fruit".to_string()),
                ..thicket_core::ids::IdOverrides::default()
            },
            ..SelectOptions::default()
        }
    }

    fn widget() -> Select<&'static str, u32> {
        Select::new(options())
    }

    #[test]
    fn click_opens_arrow_moves_click_selects_and_closes() {
        let mut env = NoEnvironment;
        let mut select = widget();
        select.toggle_button_click(&FRUIT, &mut env);
        assert!(select.state().is_open);
        select.menu_key_down(MenuKey::ArrowDown, &FRUIT, &mut env);
        assert_eq!(select.state().highlighted_index, Some(0));
        select.menu_key_down(MenuKey::ArrowDown, &FRUIT, &mut env);
        select.item_click(1, &FRUIT, &mut env);
        assert!(!select.state().is_open);
        assert_eq!(select.state().selected_item, Some("Banana"));
        assert_eq!(select.state().highlighted_index, None);
    }

    #[test]
    fn open_close_round_trip_restores_the_closed_shape() {
        let mut env = NoEnvironment;
        let mut select = widget();
        let before = select.state().clone();
        select.open_menu(&FRUIT, &mut env);
        select.menu_key_down(MenuKey::ArrowDown, &FRUIT, &mut env);
        select.close_menu(&FRUIT, &mut env);
        assert_eq!(*select.state(), before);
    }

    #[test]
    fn controlled_is_open_is_never_overridden() {
        let mut env = NoEnvironment;
        let opened: Rc<RefCell<Vec<Option<bool>>>> = Rc::default();
        let mut options = options();
        options.is_open = Some(false);
        let log = opened.clone();
        options.callbacks.on_state_change = Some(alloc::boxed::Box::new(move |change| {
            log.borrow_mut().push(change.changes.is_open);
        }));
        let mut select: Select<&'static str, u32> = Select::new(options);
        select.toggle_button_click(&FRUIT, &mut env);
        assert!(!select.state().is_open);
        // The attempt was still observable through the catch-all.
        assert_eq!(opened.borrow().len(), 1);
    }

    #[test]
    fn controlled_open_menu_survives_navigation_and_escape() {
        let mut env = NoEnvironment;
        let mut options = options();
        options.is_open = Some(true);
        let mut select: Select<&'static str, u32> = Select::new(options);
        select.menu_key_down(MenuKey::ArrowDown, &FRUIT, &mut env);
        select.menu_key_down(MenuKey::ArrowDown, &FRUIT, &mut env);
        assert!(select.state().is_open);
        assert_eq!(select.state().highlighted_index, Some(1));
        select.menu_key_down(MenuKey::Escape, &FRUIT, &mut env);
        assert!(select.state().is_open);
    }

    #[test]
    fn state_reducer_can_keep_the_menu_open_on_selection() {
        let mut env = NoEnvironment;
        let mut options = options();
        options.state_reducer = Some(Rc::new(|_previous, proposal| match proposal.action {
            SelectAction::ItemClick(_) => StatePatch {
                is_open: Some(true),
                ..StatePatch::default()
            },
            _ => StatePatch::default(),
        }));
        let mut select: Select<&'static str, u32> = Select::new(options);
        select.open_menu(&FRUIT, &mut env);
        select.item_click(2, &FRUIT, &mut env);
        assert!(select.state().is_open);
        assert_eq!(select.state().selected_item, Some("Cherry"));
    }

    #[test]
    fn outside_release_closes_but_keeps_the_selection() {
        let mut env = NoEnvironment;
        let mut select = widget();
        select.open_menu(&FRUIT, &mut env);
        select.item_click(0, &FRUIT, &mut env);
        select.open_menu(&FRUIT, &mut env);
        select.document_mouse_down();
        select.document_mouse_up(false, &FRUIT, &mut env);
        assert!(!select.state().is_open);
        assert_eq!(select.state().selected_item, Some("Apple"));
    }

    #[test]
    fn scrolled_touch_does_not_dismiss() {
        let mut env = NoEnvironment;
        let mut select = widget();
        select.open_menu(&FRUIT, &mut env);
        select.document_touch_start();
        select.document_touch_move();
        select.document_touch_end(false, &FRUIT, &mut env);
        assert!(select.state().is_open);
    }

    #[test]
    fn open_and_selection_are_announced() {
        let mut env = RecordingEnv::default();
        let mut select = widget();
        select.toggle_button_click(&FRUIT, &mut env);
        select.item_click(1, &FRUIT, &mut env);
        assert_eq!(
            env.announcements,
            [
                "3 results are available, use up and down arrow keys to navigate. \
                 Press Enter key to select."
                    .to_string(),
                "Banana has been selected.".to_string(),
            ]
        );
    }

    #[test]
    fn keyboard_highlight_scrolls_registered_nodes_into_view() {
        let mut env = RecordingEnv::default();
        let mut select = widget();
        select.begin_render(FRUIT.len());
        select.menu_props(&MenuOptions::default());
        select.register_menu_node(100);
        for index in 0..FRUIT.len() {
            select.item_props(
                index,
                ItemOptions {
                    node: Some(index as u32),
                    ..ItemOptions::default()
                },
            );
        }
        select.finish_render();

        select.toggle_button_key_down(ToggleButtonKey::ArrowDown, &FRUIT, &mut env);
        assert_eq!(env.scrolled, [(0, 100)]);
        // Pointer-driven highlight moves must not scroll.
        select.item_mouse_move(2, &FRUIT, &mut env);
        assert_eq!(env.scrolled.len(), 1);
    }

    #[test]
    fn disabled_registered_items_are_skipped_by_navigation() {
        let mut env = NoEnvironment;
        let mut select = widget();
        select.begin_render(FRUIT.len());
        select.menu_props(&MenuOptions {
            suppress_ref_error: true,
            ..MenuOptions::default()
        });
        for index in 0..FRUIT.len() {
            select.item_props(
                index,
                ItemOptions {
                    disabled: index == 1,
                    ..ItemOptions::default()
                },
            );
        }
        select.finish_render();

        select.open_menu(&FRUIT, &mut env);
        select.set_highlighted_index(0, &FRUIT, &mut env);
        select.menu_key_down(MenuKey::ArrowDown, &FRUIT, &mut env);
        assert_eq!(select.state().highlighted_index, Some(2));
    }

    #[test]
    fn prop_getters_carry_the_wiring() {
        let mut select = widget();
        select.begin_render(FRUIT.len());

        let label = select.label_props();
        assert_eq!(label.id.as_deref(), Some("fruit-label"));
        assert_eq!(label.html_for.as_deref(), Some("fruit-toggle-button"));

        let toggle = select.toggle_button_props();
        assert!(toggle.events.contains(EventBindings::CLICK | EventBindings::KEY_DOWN));
        assert!(toggle.aria.contains(&Aria::Expanded(false)));
        assert!(toggle
            .aria
            .contains(&Aria::LabelledBy("fruit-label fruit-toggle-button".to_string())));

        let menu = select.menu_props(&MenuOptions {
            suppress_ref_error: true,
            ..MenuOptions::default()
        });
        assert_eq!(menu.role, Some(Role::Listbox));
        assert_eq!(menu.tab_index, Some(-1));
        assert!(menu.aria.contains(&Aria::LabelledBy("fruit-label".to_string())));

        let item = select.item_props(1, ItemOptions::default());
        assert_eq!(item.id.as_deref(), Some("fruit-item-1"));
        assert_eq!(item.role, Some(Role::Option));
        assert!(item.aria.contains(&Aria::Selected(false)));
        select.finish_render();
    }

    #[test]
    fn open_menu_with_highlight_exposes_active_descendant() {
        let mut env = NoEnvironment;
        let mut select = widget();
        select.open_menu(&FRUIT, &mut env);
        select.set_highlighted_index(2, &FRUIT, &mut env);
        select.begin_render(FRUIT.len());
        let menu = select.menu_props(&MenuOptions {
            suppress_ref_error: true,
            ..MenuOptions::default()
        });
        assert!(menu
            .aria
            .contains(&Aria::ActiveDescendant("fruit-item-2".to_string())));
        select.finish_render();
    }

    #[test]
    fn listener_sync_and_unmount_are_symmetric() {
        let mut env = RecordingEnv::default();
        let mut select = widget();
        select.sync_listeners(&mut env);
        select.sync_listeners(&mut env);
        assert_eq!(env.attached.len(), 5);
        select.unmount(&mut env);
        assert_eq!(env.detached.len(), 5);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut env = NoEnvironment;
        let mut options = options();
        options.default_selected_item = Some("Apple");
        let mut select: Select<&'static str, u32> = Select::new(options);
        select.open_menu(&FRUIT, &mut env);
        select.item_click(2, &FRUIT, &mut env);
        select.reset(&FRUIT, &mut env);
        let after_first = select.state().clone();
        select.reset(&FRUIT, &mut env);
        assert_eq!(*select.state(), after_first);
        assert_eq!(select.state().selected_item, Some("Apple"));
    }

    #[test]
    fn type_ahead_on_closed_button_then_clear() {
        let mut env = NoEnvironment;
        let mut select = widget();
        select.toggle_button_key_down(ToggleButtonKey::Character('c'), &FRUIT, &mut env);
        assert_eq!(select.state().selected_item, Some("Cherry"));
        assert_eq!(select.state().keys_so_far, "c");
        select.clear_keys_so_far(&FRUIT, &mut env);
        assert_eq!(select.state().keys_so_far, "");
    }
}
