// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification after a committed transition.
//!
//! The dispatcher compares previous and effective state field-by-field (the
//! diff is computed by the reconciler) and fires one callback per changed
//! field of interest, then the catch-all `on_state_change` carrying only the
//! changed fields and the action. Callbacks run synchronously inside the
//! dispatching call; the core never defers them.

use alloc::boxed::Box;

use crate::state::{StateFields, StatePatch, WidgetState};

/// Payload of the catch-all state-change callback.
pub struct StateChange<'a, T, A> {
    /// The action that caused the transition.
    pub action: &'a A,
    /// Changed fields only.
    pub changes: &'a StatePatch<T>,
    /// The effective state after the transition.
    pub state: &'a WidgetState<T>,
}

impl<T: core::fmt::Debug, A: core::fmt::Debug> core::fmt::Debug for StateChange<'_, T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StateChange")
            .field("action", &self.action)
            .field("changes", &self.changes)
            .field("state", &self.state)
            .finish()
    }
}

/// Field-level change callbacks plus the catch-all.
///
/// All callbacks are optional and receive the changed-only [`StatePatch`].
/// There is deliberately no callback for `keys_so_far`; the type-ahead buffer
/// is internal pacing state.
pub struct ChangeCallbacks<T, A> {
    /// Fired when `is_open` changed.
    pub on_is_open_change: Option<Box<dyn FnMut(&StatePatch<T>)>>,
    /// Fired when `highlighted_index` changed.
    pub on_highlighted_index_change: Option<Box<dyn FnMut(&StatePatch<T>)>>,
    /// Fired when `selected_item` changed.
    pub on_selected_item_change: Option<Box<dyn FnMut(&StatePatch<T>)>>,
    /// Fired when `input_value` changed.
    pub on_input_value_change: Option<Box<dyn FnMut(&StatePatch<T>)>>,
    /// Fired after the field-level callbacks for every transition that
    /// explicitly set at least one field, even when the value did not change
    /// (idempotent acceptance is observable through the action).
    pub on_state_change: Option<Box<dyn FnMut(&StateChange<'_, T, A>)>>,
}

impl<T, A> Default for ChangeCallbacks<T, A> {
    fn default() -> Self {
        Self {
            on_is_open_change: None,
            on_highlighted_index_change: None,
            on_selected_item_change: None,
            on_input_value_change: None,
            on_state_change: None,
        }
    }
}

impl<T, A> core::fmt::Debug for ChangeCallbacks<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeCallbacks")
            .field("on_is_open_change", &self.on_is_open_change.is_some())
            .field(
                "on_highlighted_index_change",
                &self.on_highlighted_index_change.is_some(),
            )
            .field(
                "on_selected_item_change",
                &self.on_selected_item_change.is_some(),
            )
            .field(
                "on_input_value_change",
                &self.on_input_value_change.is_some(),
            )
            .field("on_state_change", &self.on_state_change.is_some())
            .finish()
    }
}

impl<T, A> ChangeCallbacks<T, A> {
    /// Fires the callbacks for one committed transition.
    ///
    /// `changed` is the diffed field set; `suppress` removes individual
    /// field-level callbacks from this notification (used by the classic
    /// flavor's `selected_item_changed` guard). The catch-all fires whenever
    /// the transition explicitly set any field, reported via `explicit`.
    pub fn notify(
        &mut self,
        action: &A,
        changes: &StatePatch<T>,
        state: &WidgetState<T>,
        changed: StateFields,
        explicit: StateFields,
        suppress: StateFields,
    ) {
        let fire = changed - suppress;
        if fire.contains(StateFields::HIGHLIGHTED_INDEX)
            && let Some(callback) = &mut self.on_highlighted_index_change
        {
            callback(changes);
        }
        if fire.contains(StateFields::IS_OPEN)
            && let Some(callback) = &mut self.on_is_open_change
        {
            callback(changes);
        }
        if fire.contains(StateFields::SELECTED_ITEM)
            && let Some(callback) = &mut self.on_selected_item_change
        {
            callback(changes);
        }
        if fire.contains(StateFields::INPUT_VALUE)
            && let Some(callback) = &mut self.on_input_value_change
        {
            callback(changes);
        }
        if !explicit.is_empty()
            && let Some(callback) = &mut self.on_state_change
        {
            callback(&StateChange {
                action,
                changes,
                state,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::RefCell;

    #[derive(Debug)]
    enum Action {
        Toggle,
    }

    #[test]
    fn fires_one_callback_per_changed_field() {
        let log: Rc<RefCell<alloc::vec::Vec<&'static str>>> = Rc::default();
        let mut callbacks: ChangeCallbacks<u32, Action> = ChangeCallbacks::default();
        let l = log.clone();
        callbacks.on_is_open_change = Some(Box::new(move |_| l.borrow_mut().push("open")));
        let l = log.clone();
        callbacks.on_selected_item_change = Some(Box::new(move |_| l.borrow_mut().push("select")));
        let l = log.clone();
        callbacks.on_state_change = Some(Box::new(move |_| l.borrow_mut().push("state")));

        let state = WidgetState {
            is_open: true,
            ..WidgetState::<u32>::default()
        };
        let changes = StatePatch {
            is_open: Some(true),
            ..StatePatch::default()
        };
        callbacks.notify(
            &Action::Toggle,
            &changes,
            &state,
            StateFields::IS_OPEN,
            StateFields::IS_OPEN,
            StateFields::empty(),
        );
        assert_eq!(*log.borrow(), ["open", "state"]);
    }

    #[test]
    fn suppressed_fields_skip_only_the_field_callback() {
        let log: Rc<RefCell<alloc::vec::Vec<&'static str>>> = Rc::default();
        let mut callbacks: ChangeCallbacks<u32, Action> = ChangeCallbacks::default();
        let l = log.clone();
        callbacks.on_selected_item_change = Some(Box::new(move |_| l.borrow_mut().push("select")));
        let l = log.clone();
        callbacks.on_state_change = Some(Box::new(move |_| l.borrow_mut().push("state")));

        let state = WidgetState::<u32>::default();
        let changes = StatePatch {
            selected_item: Some(Some(1)),
            ..StatePatch::default()
        };
        callbacks.notify(
            &Action::Toggle,
            &changes,
            &state,
            StateFields::SELECTED_ITEM,
            StateFields::SELECTED_ITEM,
            StateFields::SELECTED_ITEM,
        );
        assert_eq!(*log.borrow(), ["state"]);
    }

    #[test]
    fn explicit_but_unchanged_still_reaches_the_catch_all() {
        let log: Rc<RefCell<alloc::vec::Vec<&'static str>>> = Rc::default();
        let mut callbacks: ChangeCallbacks<u32, Action> = ChangeCallbacks::default();
        let l = log.clone();
        callbacks.on_selected_item_change = Some(Box::new(move |_| l.borrow_mut().push("select")));
        let l = log.clone();
        callbacks.on_state_change = Some(Box::new(move |_| l.borrow_mut().push("state")));

        // Re-selecting an equal item: nothing diffed, but the transition
        // explicitly set the selection.
        let state = WidgetState::<u32>::default();
        callbacks.notify(
            &Action::Toggle,
            &StatePatch::default(),
            &state,
            StateFields::empty(),
            StateFields::SELECTED_ITEM,
            StateFields::empty(),
        );
        assert_eq!(*log.borrow(), ["state"]);
    }
}
