// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Combobox: a headless filterable combobox.
//!
//! A text input filters an openable listbox menu. The host owns the
//! filtering — it narrows its item collection from the input text and passes
//! the narrowed slice into every entry point — while [`Combobox`] owns the
//! open state, the roving highlight, the selection, and the input-restore
//! rules: committing a selection mirrors its projection into the input, and
//! dismissing the menu (Escape, blur, outside press) restores the input to
//! the projection of whatever is still selected.
//!
//! ```rust
//! use thicket_combobox::{Combobox, ComboboxOptions, InputKey};
//! use thicket_core::environment::NoEnvironment;
//! extern crate alloc;
//! use alloc::rc::Rc;
//! use alloc::string::ToString;
//!
//! let mut combobox: Combobox<&str, ()> = Combobox::new(ComboboxOptions {
//!     item_to_string: Some(Rc::new(|item: &&str| item.to_string())),
//!     ..ComboboxOptions::default()
//! });
//! let mut env = NoEnvironment;
//!
//! // The host filtered ["Apple", "Banana", "Cherry"] down to the "b" matches.
//! let matches = ["Banana"];
//! combobox.input_change("b", &matches, &mut env);
//! combobox.input_key_down(InputKey::ArrowDown, &matches, &mut env);
//! combobox.input_key_down(InputKey::Enter, &matches, &mut env);
//! assert_eq!(combobox.state().selected_item, Some("Banana"));
//! assert_eq!(combobox.state().input_value, "Banana");
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

pub use actions::{ComboboxAction, InputKey};
pub use options::ComboboxOptions;
pub use widget::Combobox;

pub use thicket_core::attrs::{Attributes, EventBindings, ItemOptions, MenuOptions};
pub use thicket_core::environment::{DocumentListeners, Environment, NoEnvironment};
pub use thicket_core::state::{StateFields, StatePatch, WidgetState};
