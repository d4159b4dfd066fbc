// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility status announcements.
//!
//! After open/close and selection transitions the widgets render a
//! human-readable status string and publish it through
//! [`crate::environment::Environment::announce`]. The templates are
//! caller-overridable; the defaults follow the established autocomplete
//! screen-reader phrasing. An empty rendered message is not announced.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;

/// Inputs available to a message template.
pub struct MessageContext<'a, T> {
    /// Whether the menu is open after the transition.
    pub is_open: bool,
    /// The highlighted index after the transition.
    pub highlighted_index: Option<usize>,
    /// The highlighted item, when the index resolves into the collection.
    pub highlighted_item: Option<&'a T>,
    /// The committed selection.
    pub selected_item: Option<&'a T>,
    /// Number of items currently offered.
    pub result_count: usize,
    /// Number of items offered before this transition.
    pub previous_result_count: usize,
    /// Current input value (empty for flavors without an input).
    pub input_value: &'a str,
    /// Display projection for items.
    pub item_to_string: &'a dyn Fn(&T) -> String,
}

impl<T: core::fmt::Debug> core::fmt::Debug for MessageContext<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MessageContext")
            .field("is_open", &self.is_open)
            .field("highlighted_index", &self.highlighted_index)
            .field("selected_item", &self.selected_item)
            .field("result_count", &self.result_count)
            .field("previous_result_count", &self.previous_result_count)
            .field("input_value", &self.input_value)
            .finish_non_exhaustive()
    }
}

/// A caller-overridable message template.
pub type MessageTemplate<T> = Rc<dyn Fn(&MessageContext<'_, T>) -> String>;

/// Default status message for open/close and result-count changes.
#[must_use]
pub fn default_status_message<T>(ctx: &MessageContext<'_, T>) -> String {
    if !ctx.is_open {
        return String::new();
    }
    if ctx.result_count == 0 {
        return String::from("No results are available.");
    }
    if ctx.result_count != ctx.previous_result_count {
        let plural = if ctx.result_count == 1 {
            "result is"
        } else {
            "results are"
        };
        return format!(
            "{} {plural} available, use up and down arrow keys to navigate. \
             Press Enter key to select.",
            ctx.result_count
        );
    }
    String::new()
}

/// Default message announced when a selection is committed.
#[must_use]
pub fn default_selection_message<T>(ctx: &MessageContext<'_, T>) -> String {
    match ctx.selected_item {
        Some(item) => format!("{} has been selected.", (ctx.item_to_string)(item)),
        None => String::new(),
    }
}
