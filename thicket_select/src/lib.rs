// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Select: a headless single-select dropdown.
//!
//! A toggle button opens a listbox menu; arrow keys move a roving highlight,
//! printable characters type-ahead, and Enter or a click commits the
//! selection and closes the menu. Typing on the focused, closed toggle button
//! selects matches directly without opening.
//!
//! The crate renders nothing. [`Select`] hands the host attribute bundles for
//! its label, toggle button, menu and items, and the host forwards the events
//! those bundles name back into the widget's entry points:
//!
//! ```rust
//! use thicket_core::environment::NoEnvironment;
//! use thicket_select::{MenuKey, Select, SelectOptions};
//!
//! let items = ["Apple", "Banana", "Cherry"];
//! let mut select: Select<&str, ()> = Select::new(SelectOptions::default());
//! let mut env = NoEnvironment;
//!
//! select.toggle_button_click(&items, &mut env);
//! select.menu_key_down(MenuKey::ArrowDown, &items, &mut env);
//! select.menu_key_down(MenuKey::Enter, &items, &mut env);
//! assert_eq!(select.state().selected_item, Some("Apple"));
//! assert!(!select.state().is_open);
//! ```
//!
//! Shared machinery (state patches, controlled-prop reconciliation, change
//! callbacks, ids, the environment contract) lives in [`thicket_core`] and is
//! re-exported where it appears in this crate's API.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod actions;
mod options;
mod reducer;
mod widget;

pub use actions::{MenuKey, SelectAction, ToggleButtonKey};
pub use options::SelectOptions;
pub use widget::Select;

pub use thicket_core::attrs::{Attributes, EventBindings, ItemOptions, MenuOptions};
pub use thicket_core::environment::{DocumentListeners, Environment, NoEnvironment};
pub use thicket_core::state::{StateFields, StatePatch, WidgetState};
