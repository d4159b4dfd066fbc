// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure transition function for the combobox flavor.
//!
//! Filtering is the host's concern: the machine only ever sees the currently
//! offered `items` slice, already narrowed by the input text. Dismissal
//! (Escape, blur, outside press) restores the input text to the projection of
//! the committed selection, so a half-typed filter never survives the menu.

use alloc::string::String;

use thicket_core::navigation::{self, NavContext};
use thicket_core::state::{StatePatch, WidgetState};

use crate::actions::ComboboxAction;
use crate::options::ComboboxOptions;

/// Computes the partial state patch for one action.
pub(crate) fn reduce<T: Clone + PartialEq>(
    state: &WidgetState<T>,
    options: &ComboboxOptions<T>,
    items: &[T],
    disabled: &dyn Fn(usize) -> bool,
    action: &ComboboxAction<T>,
) -> StatePatch<T> {
    let ctx = NavContext {
        len: items.len(),
        circular: options.circular_navigation,
        disabled,
    };

    match action {
        ComboboxAction::InputKeyDownArrowDown => {
            if state.is_open {
                highlight(navigation::step(&ctx, state.highlighted_index, true))
            } else {
                open(state, options, items, &ctx, 1)
            }
        }
        ComboboxAction::InputKeyDownArrowUp => {
            if state.is_open {
                highlight(navigation::step(&ctx, state.highlighted_index, false))
            } else {
                open(state, options, items, &ctx, -1)
            }
        }
        ComboboxAction::InputKeyDownHome => {
            if state.is_open {
                highlight(navigation::first_enabled(&ctx))
            } else {
                StatePatch::default()
            }
        }
        ComboboxAction::InputKeyDownEnd => {
            if state.is_open {
                highlight(navigation::last_enabled(&ctx))
            } else {
                StatePatch::default()
            }
        }
        ComboboxAction::InputKeyDownEnter => {
            if !state.is_open {
                return StatePatch::default();
            }
            match current_item(state, items) {
                Some(item) => select(options, item.clone()),
                None => dismiss(state, options),
            }
        }
        ComboboxAction::InputKeyDownEscape | ComboboxAction::InputBlur => {
            if state.is_open {
                dismiss(state, options)
            } else {
                StatePatch::default()
            }
        }
        ComboboxAction::InputChange(value) => StatePatch {
            input_value: Some(value.clone()),
            is_open: Some(true),
            highlighted_index: Some(options.default_highlighted_index),
            ..StatePatch::default()
        },
        ComboboxAction::MenuMouseLeave => highlight(None),
        ComboboxAction::ItemMouseMove(index) => {
            if disabled(*index) {
                StatePatch::default()
            } else {
                highlight(navigation::clamp(*index, items.len()))
            }
        }
        ComboboxAction::ItemClick(index) => match items.get(*index) {
            Some(item) if !disabled(*index) => select(options, item.clone()),
            _ => StatePatch::default(),
        },
        ComboboxAction::ToggleButtonClick | ComboboxAction::FunctionToggleMenu => {
            if state.is_open {
                dismiss(state, options)
            } else {
                open(state, options, items, &ctx, 0)
            }
        }
        ComboboxAction::FunctionOpenMenu => {
            if state.is_open {
                StatePatch::default()
            } else {
                open(state, options, items, &ctx, 0)
            }
        }
        ComboboxAction::FunctionCloseMenu => {
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
        ComboboxAction::FunctionSetHighlightedIndex(index) => {
            highlight(navigation::clamp(*index, items.len()))
        }
        ComboboxAction::FunctionSelectItem(item) => StatePatch {
            selected_item: Some(Some(item.clone())),
            input_value: Some(options.project(item)),
            ..StatePatch::default()
        },
        ComboboxAction::FunctionSetInputValue(value) => StatePatch {
            input_value: Some(value.clone()),
            ..StatePatch::default()
        },
        ComboboxAction::FunctionReset => reset(options),
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
    options: &ComboboxOptions<T>,
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
    options: &ComboboxOptions<T>,
) -> StatePatch<T> {
    StatePatch {
        is_open: Some(false),
        highlighted_index: Some(None),
        input_value: Some(
            state
                .selected_item
                .as_ref()
                .map_or_else(String::new, |item| options.project(item)),
        ),
        ..StatePatch::default()
    }
}

/// Committing a selection closes the menu, resets the highlight to its
/// configured default, and mirrors the selection into the input text.
fn select<T: Clone + PartialEq>(options: &ComboboxOptions<T>, item: T) -> StatePatch<T> {
    let input_value = options.project(&item);
    StatePatch {
        selected_item: Some(Some(item)),
        is_open: Some(options.default_is_open.unwrap_or(false)),
        highlighted_index: Some(options.default_highlighted_index),
        input_value: Some(input_value),
        ..StatePatch::default()
    }
}

fn reset<T: Clone + PartialEq>(options: &ComboboxOptions<T>) -> StatePatch<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::ToString;

    const FRUIT: [&str; 3] = ["Apple", "Banana", "Cherry"];

    fn options() -> ComboboxOptions<&'static str> {
        ComboboxOptions {
            item_to_string: Some(Rc::new(|item: &&str| (*item).to_string())),
            ..ComboboxOptions::default()
        }
    }

    fn run(
        state: &WidgetState<&'static str>,
        options: &ComboboxOptions<&'static str>,
        action: ComboboxAction<&'static str>,
    ) -> StatePatch<&'static str> {
        reduce(state, options, &FRUIT, &|_| false, &action)
    }

    #[test]
    fn arrow_down_opens_the_closed_menu_at_the_top() {
        let options = options();
        let state = WidgetState::default();
        let patch = run(&state, &options, ComboboxAction::InputKeyDownArrowDown);
        assert_eq!(patch.is_open, Some(true));
        assert_eq!(patch.highlighted_index, Some(Some(0)));
    }

    #[test]
    fn arrow_up_opens_the_closed_menu_at_the_bottom() {
        let options = options();
        let state = WidgetState::default();
        let patch = run(&state, &options, ComboboxAction::InputKeyDownArrowUp);
        assert_eq!(patch.is_open, Some(true));
        assert_eq!(patch.highlighted_index, Some(Some(2)));
    }

    #[test]
    fn arrows_move_the_highlight_while_open() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            highlighted_index: Some(0),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, ComboboxAction::InputKeyDownArrowDown);
        assert_eq!(patch.highlighted_index, Some(Some(1)));
        assert_eq!(patch.is_open, None);
    }

    #[test]
    fn input_change_opens_and_resets_the_highlight() {
        let options = options();
        let state = WidgetState {
            is_open: false,
            highlighted_index: Some(2),
            ..WidgetState::default()
        };
        let patch = run(
            &state,
            &options,
            ComboboxAction::InputChange("ba".to_string()),
        );
        assert_eq!(patch.input_value.as_deref(), Some("ba"));
        assert_eq!(patch.is_open, Some(true));
        assert_eq!(patch.highlighted_index, Some(None));
    }

    #[test]
    fn enter_commits_the_highlight_and_mirrors_the_input() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            highlighted_index: Some(1),
            input_value: "ba".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, ComboboxAction::InputKeyDownEnter);
        assert_eq!(patch.selected_item, Some(Some("Banana")));
        assert_eq!(patch.is_open, Some(false));
        assert_eq!(patch.input_value.as_deref(), Some("Banana"));
    }

    #[test]
    fn escape_restores_the_projection_of_the_selection() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            highlighted_index: Some(2),
            selected_item: Some("Banana"),
            input_value: "Ch".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, ComboboxAction::InputKeyDownEscape);
        assert_eq!(patch.is_open, Some(false));
        assert_eq!(patch.input_value.as_deref(), Some("Banana"));
        assert_eq!(patch.selected_item, None);
    }

    #[test]
    fn blur_with_no_selection_clears_the_input() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            input_value: "xyz".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, ComboboxAction::InputBlur);
        assert_eq!(patch.input_value.as_deref(), Some(""));
    }

    #[test]
    fn blur_while_closed_is_a_no_op() {
        let options = options();
        let state = WidgetState {
            input_value: "Banana".to_string(),
            selected_item: Some("Banana"),
            ..WidgetState::default()
        };
        assert!(run(&state, &options, ComboboxAction::InputBlur).is_empty());
    }

    #[test]
    fn item_click_selects_and_closes() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            ..WidgetState::default()
        };
        let patch = run(&state, &options, ComboboxAction::ItemClick(2));
        assert_eq!(patch.selected_item, Some(Some("Cherry")));
        assert_eq!(patch.is_open, Some(false));
        assert_eq!(patch.input_value.as_deref(), Some("Cherry"));
    }

    #[test]
    fn disabled_items_are_inert() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            ..WidgetState::default()
        };
        let disabled = |i: usize| i == 2;
        let patch = reduce(
            &state,
            &options,
            &FRUIT,
            &disabled,
            &ComboboxAction::ItemClick(2),
        );
        assert!(patch.is_empty());
    }

    #[test]
    fn toggle_while_open_restores_the_input_like_a_dismissal() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            selected_item: Some("Apple"),
            input_value: "App".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, ComboboxAction::ToggleButtonClick);
        assert_eq!(patch.is_open, Some(false));
        assert_eq!(patch.input_value.as_deref(), Some("Apple"));
    }

    #[test]
    fn set_input_value_touches_only_the_input() {
        let options = options();
        let state = WidgetState::default();
        let patch = run(
            &state,
            &options,
            ComboboxAction::FunctionSetInputValue("plum".to_string()),
        );
        assert_eq!(patch.input_value.as_deref(), Some("plum"));
        assert_eq!(patch.is_open, None);
        assert_eq!(patch.highlighted_index, None);
    }

    #[test]
    fn select_item_mirrors_the_projection_without_closing() {
        let options = options();
        let state = WidgetState {
            is_open: true,
            ..WidgetState::default()
        };
        let patch = run(
            &state,
            &options,
            ComboboxAction::FunctionSelectItem("Apple"),
        );
        assert_eq!(patch.selected_item, Some(Some("Apple")));
        assert_eq!(patch.input_value.as_deref(), Some("Apple"));
        assert_eq!(patch.is_open, None);
    }

    #[test]
    fn reset_restores_the_default_input_text() {
        let options = ComboboxOptions {
            default_selected_item: Some("Cherry"),
            ..options()
        };
        let state = WidgetState {
            is_open: true,
            selected_item: Some("Apple"),
            input_value: "App".to_string(),
            ..WidgetState::default()
        };
        let patch = run(&state, &options, ComboboxAction::FunctionReset);
        assert_eq!(patch.selected_item, Some(Some("Cherry")));
        assert_eq!(patch.input_value.as_deref(), Some("Cherry"));
        assert_eq!(patch.is_open, Some(false));
    }
}
