// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable element-id derivation.
//!
//! Every widget instance owns a base id (caller-supplied or drawn from a
//! process-wide counter) from which the per-element ids are derived with
//! well-known suffixes: `{base}-label`, `{base}-menu`, `{base}-toggle-button`,
//! `{base}-input`, and `{base}-item-{index}`. Each derived id can be
//! overridden individually, and item ids can be replaced wholesale with a
//! `get_item_id` hook.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::sync::atomic::{AtomicUsize, Ordering};

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Returns the next widget instance number from the process-wide counter.
#[must_use]
pub fn next_widget_id() -> usize {
    ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Resets the process-wide instance counter.
///
/// Hosts that render the same tree repeatedly (server-side rendering, test
/// harnesses) call this between passes so generated ids stay deterministic.
pub fn reset_id_counter() {
    ID_COUNTER.store(0, Ordering::Relaxed);
}

/// Caller overrides for the derived element ids.
#[derive(Clone, Default)]
pub struct IdOverrides {
    /// Base id; when absent, `thicket-{n}` from the instance counter.
    pub id: Option<String>,
    /// Label element id.
    pub label_id: Option<String>,
    /// Menu (listbox) element id.
    pub menu_id: Option<String>,
    /// Toggle button element id.
    pub toggle_button_id: Option<String>,
    /// Input element id.
    pub input_id: Option<String>,
    /// Replaces the `{base}-item-{index}` derivation for item ids.
    pub get_item_id: Option<Rc<dyn Fn(usize) -> String>>,
}

impl core::fmt::Debug for IdOverrides {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IdOverrides")
            .field("id", &self.id)
            .field("label_id", &self.label_id)
            .field("menu_id", &self.menu_id)
            .field("toggle_button_id", &self.toggle_button_id)
            .field("input_id", &self.input_id)
            .field("get_item_id", &self.get_item_id.is_some())
            .finish()
    }
}

/// Derived element ids for one widget instance.
#[derive(Clone)]
pub struct ElementIds {
    base: String,
    /// Label element id.
    pub label: String,
    /// Menu (listbox) element id.
    pub menu: String,
    /// Toggle button element id.
    pub toggle_button: String,
    /// Input element id.
    pub input: String,
    get_item_id: Option<Rc<dyn Fn(usize) -> String>>,
}

impl core::fmt::Debug for ElementIds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementIds")
            .field("base", &self.base)
            .field("label", &self.label)
            .field("menu", &self.menu)
            .field("toggle_button", &self.toggle_button)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl ElementIds {
    /// Derives the element ids for one widget instance, drawing a fresh base
    /// id from the instance counter when none is supplied.
    #[must_use]
    pub fn new(overrides: &IdOverrides) -> Self {
        let base = overrides
            .id
            .clone()
            .unwrap_or_else(|| format!("thicket-{}", next_widget_id()));
        Self {
            label: overrides
                .label_id
                .clone()
                .unwrap_or_else(|| format!("{base}-label")),
            menu: overrides
                .menu_id
                .clone()
                .unwrap_or_else(|| format!("{base}-menu")),
            toggle_button: overrides
                .toggle_button_id
                .clone()
                .unwrap_or_else(|| format!("{base}-toggle-button")),
            input: overrides
                .input_id
                .clone()
                .unwrap_or_else(|| format!("{base}-input")),
            get_item_id: overrides.get_item_id.clone(),
            base,
        }
    }

    /// The widget's base id.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The id for the item at `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> String {
        match &self.get_item_id {
            Some(get_item_id) => get_item_id(index),
            None => format!("{}-item-{index}", self.base),
        }
    }
}
