// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Autocomplete: the classic headless autocomplete.
//!
//! The input-driven ancestor of [`thicket_combobox`]: one flat keyboard
//! family on the input, selection hooks ([`AutocompleteOptions::on_select`]
//! fires on every committed selection, [`AutocompleteOptions::on_change`]
//! only when the selection differs per a pluggable predicate), a
//! caller-authored [`Autocomplete::set_state`] escape hatch, and an
//! `item_count` override so navigation can range over a windowed collection
//! larger than the rendered slice.
//!
//! ```rust
//! use thicket_autocomplete::{Autocomplete, AutocompleteKey, AutocompleteOptions};
//! use thicket_core::environment::NoEnvironment;
//! extern crate alloc;
//! use alloc::rc::Rc;
//! use alloc::string::ToString;
//!
//! let mut auto: Autocomplete<&str, ()> = Autocomplete::new(AutocompleteOptions {
//!     item_to_string: Some(Rc::new(|item: &&str| item.to_string())),
//!     ..AutocompleteOptions::default()
//! });
//! let mut env = NoEnvironment;
//!
//! let matches = ["Banana"];
//! auto.input_change("b", &matches, &mut env);
//! auto.input_key_down(AutocompleteKey::ArrowDown, &matches, &mut env);
//! auto.input_key_down(AutocompleteKey::Enter, &matches, &mut env);
//! assert_eq!(auto.state().selected_item, Some("Banana"));
//! ```
//!
//! Shared machinery (state patches, controlled-prop reconciliation, change
//! callbacks, ids, the environment contract) lives in [`thicket_core`] and is
//! re-exported where it appears in this crate's API.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`thicket_combobox`]: https://docs.rs/thicket_combobox

#![no_std]

extern crate alloc;

mod actions;
mod options;
mod reducer;
mod widget;

pub use actions::{AutocompleteAction, AutocompleteKey};
pub use options::{AutocompleteOptions, SelectionHook};
pub use widget::Autocomplete;

pub use thicket_core::attrs::{Attributes, EventBindings, ItemOptions, MenuOptions};
pub use thicket_core::environment::{DocumentListeners, Environment, NoEnvironment};
pub use thicket_core::state::{StateFields, StatePatch, WidgetState};
