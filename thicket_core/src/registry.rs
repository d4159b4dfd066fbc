// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render item registry.
//!
//! Roving focus needs to find the physical node for a highlight change
//! synchronously, and navigation needs per-item disabled flags, so the item
//! prop getters register an index → record association as the host renders.
//! The registry is an arena-per-render structure: `begin_render` discards the
//! previous pass wholesale, and associations never outlive the render that
//! produced them.
//!
//! The registry is also how the widget learns its effective item count when
//! the caller has not declared one: see [`ItemRegistry::inferred_len`].

use hashbrown::HashMap;

/// Record registered for one rendered item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord<N> {
    /// The item element's id.
    pub id: alloc::string::String,
    /// Whether the item is disabled for highlight/selection.
    pub disabled: bool,
    /// Host node handle, when the host supplies one.
    pub node: Option<N>,
}

/// Index → record registry, rebuilt every render pass.
#[derive(Clone, Debug)]
pub struct ItemRegistry<N> {
    entries: HashMap<usize, ItemRecord<N>>,
    menu_node: Option<N>,
    menu_requested: bool,
    suppress_ref_error: bool,
}

impl<N> Default for ItemRegistry<N> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            menu_node: None,
            menu_requested: false,
            suppress_ref_error: false,
        }
    }
}

impl<N> ItemRegistry<N> {
    /// Discards all associations from the previous render pass.
    pub fn begin_render(&mut self) {
        self.entries.clear();
        self.menu_node = None;
        self.menu_requested = false;
        self.suppress_ref_error = false;
    }

    /// Registers the record for `index`, replacing (and warning about) a
    /// duplicate registration within the same pass.
    pub fn register_item(&mut self, index: usize, record: ItemRecord<N>) {
        if self.entries.insert(index, record).is_some() {
            log::warn!("item index {index} registered twice in one render pass");
        }
    }

    /// Attaches a node handle to an already registered item.
    pub fn register_item_node(&mut self, index: usize, node: N) {
        if let Some(record) = self.entries.get_mut(&index) {
            record.node = Some(node);
        } else {
            log::warn!("node registered for unknown item index {index}");
        }
    }

    /// Records that the menu prop getter was taken this pass.
    pub fn request_menu(&mut self, suppress_ref_error: bool) {
        self.menu_requested = true;
        self.suppress_ref_error = suppress_ref_error;
    }

    /// Registers the menu element's node handle.
    pub fn register_menu_node(&mut self, node: N) {
        self.menu_node = Some(node);
    }

    /// The menu node registered this pass, if any.
    #[must_use]
    pub fn menu_node(&self) -> Option<&N> {
        self.menu_node.as_ref()
    }

    /// The node registered for `index`, if any.
    #[must_use]
    pub fn node_for(&self, index: usize) -> Option<&N> {
        self.entries.get(&index)?.node.as_ref()
    }

    /// The element id registered for `index`, if any.
    #[must_use]
    pub fn item_id(&self, index: usize) -> Option<&str> {
        self.entries.get(&index).map(|record| record.id.as_str())
    }

    /// Whether the item at `index` was registered as disabled.
    ///
    /// Unregistered indices are considered enabled; the caller models
    /// disabled state exclusively through the item prop getter.
    #[must_use]
    pub fn is_disabled(&self, index: usize) -> bool {
        self.entries
            .get(&index)
            .is_some_and(|record| record.disabled)
    }

    /// Item count inferred from the registrations of this pass (one past the
    /// highest registered index).
    #[must_use]
    pub fn inferred_len(&self) -> usize {
        self.entries.keys().max().map_or(0, |max| max + 1)
    }

    /// Validates the pass: a menu prop getter that was taken but never
    /// received a node is a configuration misuse (the menu cannot be
    /// measured or scrolled), surfaced as a warning unless suppressed for
    /// intentional conditional rendering.
    pub fn finish_render(&self) {
        if self.menu_requested && self.menu_node.is_none() && !self.suppress_ref_error {
            debug_assert!(
                false,
                "menu props were taken but no menu node was registered; \
                 register a node or set `suppress_ref_error`"
            );
            log::warn!(
                "menu props were taken but no menu node was registered; \
                 register a node or set `suppress_ref_error`"
            );
        }
    }
}
