// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure transition function for the autocomplete flavor.
//!
//! The navigation length can exceed the offered slice when
//! [`AutocompleteOptions::item_count`] declares a windowed collection; item
//! lookups for selection still resolve against the slice, and an index with
//! no backing item commits nothing.

use alloc::string::String;

use thicket_core::navigation::{self, NavContext};
use thicket_core::state::{StatePatch, WidgetState};

use crate::actions::AutocompleteAction;
use crate::options::AutocompleteOptions;

/// Computes the partial state patch for one action.
pub(crate) fn reduce<T: Clone + PartialEq>(
    state: &WidgetState<T>,
    options: &AutocompleteOptions<T>,
    items: &[T],
    disabled: &dyn Fn(usize) -> bool,
    action: &AutocompleteAction<T>,
) -> StatePatch<T> {
    let len = options.item_count.unwrap_or(items.len());
    let ctx = NavContext {
        len,
        circular: options.circular_navigation,
        disabled,
    };

    match action {
        AutocompleteAction::Unknown => StatePatch::default(),
        AutocompleteAction::KeyDownArrowDown => {
            if state.is_open {
                highlight(navigation::step(&ctx, state.highlighted_index, true))
            } else {
                open(state, options, items, &ctx, 1)
            }
        }
        AutocompleteAction::KeyDownArrowUp => {
            if state.is_open {
                highlight(navigation::step(&ctx, state.highlighted_index, false))
            } else {
                open(state, options, items, &ctx, -1)
            }
        }
        AutocompleteAction::KeyDownEscape => {
            if state.is_open {
                dismiss(state, options)
            } else {
                // Escape on a closed widget clears everything.
                StatePatch {
                    selected_item: Some(None),
                    input_value: Some(String::new()),
                    highlighted_index: Some(options.default_highlighted_index),
                    ..StatePatch::default()
                }
            }
        }
        AutocompleteAction::KeyDownEnter => {
            if !state.is_open {
                return StatePatch::default();
            }
            match enabled_item(state, items, disabled) {
                Some(item) => select(options, item.clone()),
                None => StatePatch::default(),
            }
        }
        AutocompleteAction::ChangeInput(value) => StatePatch {
            input_value: Some(value.clone()),
            is_open: Some(true),
            highlighted_index: Some(options.default_highlighted_index),
            ..StatePatch::default()
        },
        AutocompleteAction::BlurInput
        | AutocompleteAction::BlurButton
        | AutocompleteAction::MouseUp
        | AutocompleteAction::TouchEnd => {
            if state.is_open {
                dismiss(state, options)
            } else {
                StatePatch::default()
            }
        }
        AutocompleteAction::ItemMouseEnter(index) => {
            if disabled(*index) {
                StatePatch::default()
            } else {
                highlight(navigation::clamp(*index, len))
            }
        }
        AutocompleteAction::ClickItem(index)
        | AutocompleteAction::FunctionSelectItemAtIndex(index) => match items.get(*index) {
            Some(item) if !disabled(*index) => select(options, item.clone()),
            _ => StatePatch::default(),
        },
        AutocompleteAction::FunctionSelectHighlightedItem => {
            match enabled_item(state, items, disabled) {
                Some(item) => select(options, item.clone()),
                None => StatePatch::default(),
            }
        }
        AutocompleteAction::ClickButton
        | AutocompleteAction::KeyDownSpaceButton
        | AutocompleteAction::FunctionToggleMenu => {
            if state.is_open {
                dismiss(state, options)
            } else {
                open(state, options, items, &ctx, 0)
            }
        }
        AutocompleteAction::ControlledPropUpdatedSelectedItem => {
            // The replacement selection lives in the controlled overlay, not
            // in the previous state.
            let selected = match &options.selected_item {
                Some(controlled) => controlled.as_ref(),
                None => state.selected_item.as_ref(),
            };
            StatePatch {
                input_value: Some(
                    selected.map_or_else(String::new, |item| options.project(item)),
                ),
                ..StatePatch::default()
            }
        }
        AutocompleteAction::FunctionOpenMenu => {
            if state.is_open {
                StatePatch::default()
            } else {
                open(state, options, items, &ctx, 0)
            }
        }
        AutocompleteAction::FunctionCloseMenu => {
            if state.is_open {
                StatePatch {
                    is_open: Some(false),
                    highlighted_index: Some(None),
                    ..StatePatch::default()
                }
            } else {
                StatePatch::default()
            }
        }
        AutocompleteAction::FunctionSetHighlightedIndex(index) => {
            highlight(navigation::clamp(*index, len))
        }
        AutocompleteAction::FunctionSelectItem(item) => select(options, item.clone()),
        AutocompleteAction::FunctionSetInputValue(value) => StatePatch {
            input_value: Some(value.clone()),
            ..StatePatch::default()
        },
        AutocompleteAction::FunctionClearSelection => StatePatch {
            selected_item: Some(None),
            input_value: Some(String::new()),
            is_open: Some(false),
            highlighted_index: Some(options.default_highlighted_index),
            ..StatePatch::default()
        },
        AutocompleteAction::FunctionSetState(patch) => patch.clone(),
        AutocompleteAction::FunctionReset => reset(options),
    }
}

fn highlight<T: Clone + PartialEq>(index: Option<usize>) -> StatePatch<T> {
    StatePatch {
        highlighted_index: Some(index),
        ..StatePatch::default()
    }
}

fn open<T: Clone + PartialEq>(
    state: &WidgetState<T>,
    options: &AutocompleteOptions<T>,
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

/// Closing without committing restores the input text to the projection of
/// the selection (empty with no selection).
fn dismiss<T: Clone + PartialEq>(
    state: &WidgetState<T>,
    options: &AutocompleteOptions<T>,
) -> StatePatch<T> {
    StatePatch {
        is_open: Some(false),
        highlighted_index: Some(options.default_highlighted_index),
        input_value: Some(
            state
                .selected_item
                .as_ref()
                .map_or_else(String::new, |item| options.project(item)),
        ),
        ..StatePatch::default()
    }
}

fn select<T: Clone + PartialEq>(options: &AutocompleteOptions<T>, item: T) -> StatePatch<T> {
    let input_value = options.project(&item);
    StatePatch {
        selected_item: Some(Some(item)),
        is_open: Some(options.default_is_open.unwrap_or(false)),
        highlighted_index: Some(options.default_highlighted_index),
        input_value: Some(input_value),
        ..StatePatch::default()
    }
}

fn reset<T: Clone + PartialEq>(options: &AutocompleteOptions<T>) -> StatePatch<T> {
    let default = options.default_state();
    StatePatch {
        is_open: Some(default.is_open),
        highlighted_index: Some(default.highlighted_index),
        selected_item: Some(default.selected_item),
        input_value: Some(default.input_value),
        keys_so_far: Some(default.keys_so_far),
    }
}

fn enabled_item<'a, T>(
    state: &WidgetState<T>,
    items: &'a [T],
    disabled: &dyn Fn(usize) -> bool,
) -> Option<&'a T> {
    let index = state.highlighted_index?;
    if disabled(index) {
        return None;
    }
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::ToString;

    const FRUIT: [&str; 3] = ["Apple", "Banana", "Cherry"];

    fn options() -> AutocompleteOptions<&'static str> {
        AutocompleteOptions {
            item_to_string: Some(Rc::new(|item: &&str| (*item).to_string())),
            ..AutocompleteOptions::default()
        }
    }

    fn run(
        state: &WidgetState<&'static str>,
        options: &AutocompleteOptions<&'static str>,
        action: AutocompleteAction<&'static str>,
    ) -> StatePatch<&'static str> {
        reduce(state, options, &FRUIT, &|_| false, &action)
    }

    #[test]
    fn arrow_down_opens_then_steps() {
        let options = options();
        let state = WidgetState::default();
        let patch = run(&state, &options, AutocompleteAction::KeyDownArrowDown);
        assert_eq!(patch.is_open, Some(true));
        assert_eq!(patch.highlighted_index, Some(Some(0)));

        let state = WidgetState {
            is_open: true,
            highlighted_index: Some(0),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, AutocompleteAction::KeyDownArrowDown);
        assert_eq!(patch.highlighted_index, Some(Some(1)));
    }

    #[test]
    fn escape_on_the_closed_widget_clears_the_selection() {
        let options = options();
        let state = WidgetState {
            selected_item: Some("Apple"),
            input_value: "Apple".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, AutocompleteAction::KeyDownEscape);
        assert_eq!(patch.selected_item, Some(None));
        assert_eq!(patch.input_value.as_deref(), Some(""));
    }

    #[test]
    fn escape_on_the_open_menu_only_dismisses() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            selected_item: Some("Apple"),
            input_value: "Ban".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, AutocompleteAction::KeyDownEscape);
        assert_eq!(patch.is_open, Some(false));
        assert_eq!(patch.selected_item, None);
        assert_eq!(patch.input_value.as_deref(), Some("Apple"));
    }

    #[test]
    fn outside_mouse_up_restores_the_input() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            input_value: "xyz".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, AutocompleteAction::MouseUp);
        assert_eq!(patch.is_open, Some(false));
        assert_eq!(patch.input_value.as_deref(), Some(""));
    }

    #[test]
    fn item_count_override_extends_navigation_past_the_slice() {
        let options = AutocompleteOptions {
            item_count: Some(10),
            ..options()
        };
        let state = WidgetState {
            is_open: true,
            highlighted_index: Some(2),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, AutocompleteAction::KeyDownArrowDown);
        assert_eq!(patch.highlighted_index, Some(Some(3)));
        // Enter on an index with no backing item commits nothing.
        let state = WidgetState {
            is_open: true,
            highlighted_index: Some(7),
            ..WidgetState::default()
        };
        assert!(run(&state, &options, AutocompleteAction::KeyDownEnter).is_empty());
    }

    #[test]
    fn select_item_at_index_commits_and_mirrors_the_input() {
        let options = options();
        let state = WidgetState::default();
        let patch = run(
            &state,
            &options,
            AutocompleteAction::FunctionSelectItemAtIndex(2),
        );
        assert_eq!(patch.selected_item, Some(Some("Cherry")));
        assert_eq!(patch.input_value.as_deref(), Some("Cherry"));
        assert_eq!(patch.is_open, Some(false));
    }

    #[test]
    fn select_highlighted_item_requires_an_enabled_highlight() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            highlighted_index: Some(1),
            ..WidgetState::default()
        };
        let disabled = |i: usize| i == 1;
        let patch = reduce(
            &state,
            &options,
            &FRUIT,
            &disabled,
            &AutocompleteAction::FunctionSelectHighlightedItem,
        );
        assert!(patch.is_empty());
        let patch = run(
            &state,
            &options,
            AutocompleteAction::FunctionSelectHighlightedItem,
        );
        assert_eq!(patch.selected_item, Some(Some("Banana")));
    }

    #[test]
    fn clear_selection_empties_both_selection_and_input() {
        let options = options();
        let state = WidgetState {
            selected_item: Some("Apple"),
            input_value: "Apple".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, AutocompleteAction::FunctionClearSelection);
        assert_eq!(patch.selected_item, Some(None));
        assert_eq!(patch.input_value.as_deref(), Some(""));
        assert_eq!(patch.is_open, Some(false));
    }

    #[test]
    fn controlled_selection_update_resyncs_the_input() {
        let options = options();
        let state = WidgetState {
            selected_item: Some("Banana"),
            input_value: "Apple".to_string(),
            ..WidgetState::default()
        };
        let patch = run(
            &state,
            &options,
            AutocompleteAction::ControlledPropUpdatedSelectedItem,
        );
        assert_eq!(patch.input_value.as_deref(), Some("Banana"));
    }

    #[test]
    fn set_state_passes_the_caller_patch_through() {
        let options = options();
        let state = WidgetState::default();
        let wanted = StatePatch {
            is_open: Some(true),
            highlighted_index: Some(Some(1)),
            ..StatePatch::default()
        };
        let patch = run(
            &state,
            &options,
            AutocompleteAction::FunctionSetState(wanted.clone()),
        );
        assert_eq!(patch, wanted);
    }

    #[test]
    fn button_gestures_toggle_with_dismiss_semantics() {
        let options = options();
        let closed = WidgetState::default();
        let patch = run(&closed, &options, AutocompleteAction::ClickButton);
        assert_eq!(patch.is_open, Some(true));

        let open = WidgetState {
            is_open: true,
            selected_item: Some("Apple"),
            input_value: "App".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&open, &options, AutocompleteAction::KeyDownSpaceButton);
        assert_eq!(patch.is_open, Some(false));
        assert_eq!(patch.input_value.as_deref(), Some("Apple"));
    }
}
