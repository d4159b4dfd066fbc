// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure transition function for the select flavor.
//!
//! `reduce` never performs I/O, never touches nodes, and never invokes
//! callbacks; it maps the current state and one action to the partial patch
//! of fields that action changes. Controlled props and the caller's state
//! reducer are layered on afterwards by the reconciler.

use alloc::string::String;

use thicket_core::navigation::{self, NavContext};
use thicket_core::state::{StatePatch, WidgetState};
use thicket_core::typeahead;

use crate::actions::SelectAction;
use crate::options::SelectOptions;

/// Computes the partial state patch for one action.
pub(crate) fn reduce<T: Clone + PartialEq>(
    state: &WidgetState<T>,
    options: &SelectOptions<T>,
    items: &[T],
    disabled: &dyn Fn(usize) -> bool,
    action: &SelectAction<T>,
) -> StatePatch<T> {
    let ctx = NavContext {
        len: items.len(),
        circular: options.circular_navigation,
        disabled,
    };

    match action {
        SelectAction::MenuKeyDownArrowDown => highlight(navigation::step(
            &ctx,
            state.highlighted_index,
            true,
        )),
        SelectAction::MenuKeyDownArrowUp => highlight(navigation::step(
            &ctx,
            state.highlighted_index,
            false,
        )),
        SelectAction::MenuKeyDownHome => highlight(navigation::first_enabled(&ctx)),
        SelectAction::MenuKeyDownEnd => highlight(navigation::last_enabled(&ctx)),
        SelectAction::MenuKeyDownEnter => match current_item(state, items) {
            Some(item) => select(options, item.clone()),
            None => close(),
        },
        SelectAction::MenuKeyDownEscape | SelectAction::MenuBlur => close(),
        SelectAction::MenuKeyDownCharacter(c) => {
            let keys = buffered(state, *c);
            let matched = typeahead::find_match(
                &keys,
                state.highlighted_index,
                items.len(),
                |index| options.project(&items[index]),
            );
            StatePatch {
                keys_so_far: Some(keys),
                highlighted_index: matched.map(Some),
                ..StatePatch::default()
            }
        }
        SelectAction::MenuMouseLeave => highlight(None),
        SelectAction::ItemMouseMove(index) => {
            if disabled(*index) {
                StatePatch::default()
            } else {
                highlight(navigation::clamp(*index, items.len()))
            }
        }
        SelectAction::ItemClick(index) => match items.get(*index) {
            Some(item) if !disabled(*index) => select(options, item.clone()),
            _ => StatePatch::default(),
        },
        SelectAction::ToggleButtonKeyDownCharacter(c) => {
            // The menu is closed; a type-ahead match changes the selection
            // directly instead of the highlight.
            let keys = buffered(state, *c);
            let start = state
                .selected_item
                .as_ref()
                .and_then(|selected| items.iter().position(|item| item == selected));
            let matched = typeahead::find_match(&keys, start, items.len(), |index| {
                options.project(&items[index])
            });
            StatePatch {
                keys_so_far: Some(keys),
                selected_item: matched.map(|index| Some(items[index].clone())),
                ..StatePatch::default()
            }
        }
        SelectAction::ToggleButtonKeyDownArrowDown => open(state, options, items, &ctx, 1),
        SelectAction::ToggleButtonKeyDownArrowUp => open(state, options, items, &ctx, -1),
        SelectAction::ToggleButtonClick | SelectAction::FunctionToggleMenu => {
            if state.is_open {
                close()
            } else {
                open(state, options, items, &ctx, 0)
            }
        }
        SelectAction::FunctionOpenMenu => {
            if state.is_open {
                StatePatch::default()
            } else {
                open(state, options, items, &ctx, 0)
            }
        }
        SelectAction::FunctionCloseMenu => {
            if state.is_open {
                close()
            } else {
                StatePatch::default()
            }
        }
        SelectAction::FunctionSetHighlightedIndex(index) => {
            highlight(navigation::clamp(*index, items.len()))
        }
        SelectAction::FunctionSelectItem(item) => StatePatch {
            selected_item: Some(Some(item.clone())),
            ..StatePatch::default()
        },
        SelectAction::FunctionClearKeysSoFar => StatePatch {
            keys_so_far: Some(String::new()),
            ..StatePatch::default()
        },
        SelectAction::FunctionReset => reset(options),
    }
}

fn highlight<T: Clone + PartialEq>(index: Option<usize>) -> StatePatch<T> {
    StatePatch {
        highlighted_index: Some(index),
        ..StatePatch::default()
    }
}

fn close<T: Clone + PartialEq>() -> StatePatch<T> {
    StatePatch {
        is_open: Some(false),
        highlighted_index: Some(None),
        keys_so_far: Some(String::new()),
        ..StatePatch::default()
    }
}

fn open<T: Clone + PartialEq>(
    state: &WidgetState<T>,
    options: &SelectOptions<T>,
    items: &[T],
    ctx: &NavContext<'_>,
    offset: i8,
) -> StatePatch<T> {
    StatePatch {
        is_open: Some(true),
        highlighted_index: Some(navigation::on_open(
            ctx,
            options.default_highlighted_index,
            state.selected_item.as_ref(),
            items,
            offset,
        )),
        ..StatePatch::default()
    }
}

/// Selection closes the menu and resets the highlight to its configured
/// default, regardless of the origin of the selecting gesture.
fn select<T: Clone + PartialEq>(options: &SelectOptions<T>, item: T) -> StatePatch<T> {
    StatePatch {
        selected_item: Some(Some(item)),
        is_open: Some(options.default_is_open.unwrap_or(false)),
        highlighted_index: Some(options.default_highlighted_index),
        keys_so_far: Some(String::new()),
        ..StatePatch::default()
    }
}

fn reset<T: Clone + PartialEq>(options: &SelectOptions<T>) -> StatePatch<T> {
    let default = options.default_state();
    StatePatch {
        is_open: Some(default.is_open),
        highlighted_index: Some(default.highlighted_index),
        selected_item: Some(default.selected_item),
        input_value: Some(default.input_value),
        keys_so_far: Some(default.keys_so_far),
    }
}

fn current_item<'a, T>(state: &WidgetState<T>, items: &'a [T]) -> Option<&'a T> {
    items.get(state.highlighted_index?)
}

fn buffered<T>(state: &WidgetState<T>, c: char) -> String {
    let mut keys = state.keys_so_far.clone();
    keys.push(c);
    keys
}
