// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled-prop reconciliation.
//!
//! Reducers always compute as if the widget were uncontrolled; control is
//! applied as a late-stage projection here. The ordering is behavior, not an
//! implementation detail:
//!
//! 1. `proposed = previous ⊕ reducer patch`
//! 2. an optional caller-supplied [`StateReducer`] may override any subset of
//!    `proposed`,
//! 3. controlled fields overwrite last, unconditionally.
//!
//! A controlled field whose owner never responds to change notifications
//! therefore freezes that field. That is the contract of "controlled", not a
//! defect.

use alloc::rc::Rc;

use crate::state::{StateFields, StatePatch, WidgetState};

/// The action plus the machine's proposed next state, handed to a
/// caller-supplied state reducer.
pub struct ActionAndChanges<'a, T, A> {
    /// The action that produced this transition.
    pub action: &'a A,
    /// Previous state merged with the machine's proposed patch.
    pub changes: &'a WidgetState<T>,
}

impl<T: core::fmt::Debug, A: core::fmt::Debug> core::fmt::Debug for ActionAndChanges<'_, T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionAndChanges")
            .field("action", &self.action)
            .field("changes", &self.changes)
            .finish()
    }
}

/// Caller-supplied override reducer.
///
/// Invoked with the previous state and the proposed transition; the returned
/// patch overrides any subset of the proposed fields, letting the embedding
/// application veto or redirect a transition (for example, keep the menu open
/// on selection). Returning an empty patch accepts the proposal unchanged.
/// `None` fields in the returned patch are simply not applied; a malformed
/// subset is tolerated, never an error.
pub type StateReducer<T, A> =
    Rc<dyn Fn(&WidgetState<T>, ActionAndChanges<'_, T, A>) -> StatePatch<T>>;

/// Result of committing one transition.
#[derive(Clone, Debug)]
pub struct Committed<T> {
    /// State before the transition.
    pub previous: WidgetState<T>,
    /// Changed-only patch (previous vs. effective), the notification payload.
    pub changes: StatePatch<T>,
    /// Fields that actually changed value.
    pub fields: StateFields,
}

/// Commits a reducer patch onto `state`, applying the user state reducer and
/// the controlled-prop overlay in the documented order.
///
/// `state` becomes the effective state; the returned [`Committed`] carries
/// the previous state and the diff for the notification dispatcher. The
/// transition is synchronous and total: it either fully applies or is fully
/// overridden, never partially failed.
pub fn commit<T: Clone + PartialEq, A>(
    state: &mut WidgetState<T>,
    patch: StatePatch<T>,
    controlled: &StatePatch<T>,
    state_reducer: Option<&StateReducer<T, A>>,
    action: &A,
) -> Committed<T> {
    let previous = state.clone();

    let mut proposed = previous.clone();
    patch.apply_to(&mut proposed);

    if let Some(reducer) = state_reducer {
        let overrides = reducer(
            &previous,
            ActionAndChanges {
                action,
                changes: &proposed,
            },
        );
        overrides.apply_to(&mut proposed);
    }

    // Controlled fields are the single source of truth, applied last.
    controlled.apply_to(&mut proposed);

    let changes = StatePatch::diff(&previous, &proposed);
    let fields = changes.fields();
    *state = proposed;

    Committed {
        previous,
        changes,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Action {
        Open,
    }

    #[test]
    fn patch_then_diff() {
        let mut state: WidgetState<u32> = WidgetState::default();
        let patch = StatePatch {
            is_open: Some(true),
            highlighted_index: Some(Some(2)),
            ..StatePatch::default()
        };
        let committed = commit(&mut state, patch, &StatePatch::default(), None, &Action::Open);
        assert!(state.is_open);
        assert_eq!(state.highlighted_index, Some(2));
        assert_eq!(
            committed.fields,
            StateFields::IS_OPEN | StateFields::HIGHLIGHTED_INDEX
        );
        assert!(!committed.previous.is_open);
    }

    #[test]
    fn state_reducer_overrides_the_proposal() {
        let mut state: WidgetState<u32> = WidgetState::default();
        let patch = StatePatch {
            is_open: Some(true),
            ..StatePatch::default()
        };
        // Veto opening, redirect the highlight instead.
        let reducer: StateReducer<u32, Action> = Rc::new(|_previous, proposal| {
            assert!(proposal.changes.is_open);
            StatePatch {
                is_open: Some(false),
                highlighted_index: Some(Some(1)),
                ..StatePatch::default()
            }
        });
        let committed = commit(
            &mut state,
            patch,
            &StatePatch::default(),
            Some(&reducer),
            &Action::Open,
        );
        assert!(!state.is_open);
        assert_eq!(state.highlighted_index, Some(1));
        assert_eq!(committed.fields, StateFields::HIGHLIGHTED_INDEX);
    }

    #[test]
    fn controlled_fields_win_over_the_state_reducer() {
        let mut state: WidgetState<u32> = WidgetState {
            is_open: true,
            ..WidgetState::default()
        };
        let patch = StatePatch {
            is_open: Some(false),
            ..StatePatch::default()
        };
        // The user reducer agrees with closing, but the caller controls
        // `is_open` to stay true. Controlled is applied last and wins.
        let reducer: StateReducer<u32, Action> = Rc::new(|_, _| StatePatch {
            is_open: Some(false),
            ..StatePatch::default()
        });
        let controlled = StatePatch {
            is_open: Some(true),
            ..StatePatch::default()
        };
        let committed = commit(&mut state, patch, &controlled, Some(&reducer), &Action::Open);
        assert!(state.is_open);
        assert!(committed.fields.is_empty());
    }

    #[test]
    fn untouched_fields_pass_through() {
        let mut state: WidgetState<u32> = WidgetState {
            selected_item: Some(9),
            ..WidgetState::default()
        };
        let committed = commit(
            &mut state,
            StatePatch::default(),
            &StatePatch::default(),
            None,
            &Action::Open,
        );
        assert_eq!(state.selected_item, Some(9));
        assert!(committed.changes.is_empty());
    }
}
