// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Core: shared interaction machinery for headless selection widgets.
//!
//! The flavor crates (`thicket_select`, `thicket_combobox`,
//! `thicket_autocomplete`) supply the per-widget action sets and reducers;
//! this crate supplies everything they share:
//!
//! - [`state`]: the interaction state superset ([`WidgetState`]), partial
//!   patches ([`StatePatch`]), and changed-field flags ([`StateFields`]).
//! - [`navigation`]: roving-highlight movement with clamp/wrap boundaries and
//!   disabled-item skipping.
//! - [`typeahead`]: buffered printable-key matching over item projections.
//! - [`reconcile`]: the controlled-prop reconciler — reducer output, then the
//!   caller's [`StateReducer`] override, then controlled fields, in that
//!   order.
//! - [`notify`]: per-field change callbacks plus the catch-all.
//! - [`a11y`]: status-announcement templates.
//! - [`ids`]: element-id derivation and the resettable instance counter.
//! - [`registry`]: the per-render item index ↔ node registry.
//! - [`environment`]: the injected DOM-access capability and idempotent
//!   listener bookkeeping.
//! - [`dismiss`]: outside-click/touch tracking.
//! - [`attrs`]: typed attribute/handler bundles returned by prop getters.
//!
//! ## Transition pipeline
//!
//! Every interaction, DOM-originated or programmatic, flows through the same
//! synchronous pipeline: the event is classified into a flavor action, the
//! flavor's pure reducer proposes a [`StatePatch`], [`reconcile::commit`]
//! overlays the caller's `state_reducer` and controlled props to produce the
//! effective state, and [`notify::ChangeCallbacks`] reports the diff. Each
//! invocation runs to completion before another can begin; the core owns no
//! timers and no threads.
//!
//! ## Minimal example
//!
//! The pieces compose without any widget on top:
//!
//! ```rust
//! use thicket_core::navigation::{NavContext, step};
//! use thicket_core::reconcile::commit;
//! use thicket_core::state::{StatePatch, WidgetState};
//!
//! let mut state: WidgetState<&str> = WidgetState::default();
//! let ctx = NavContext { len: 3, circular: false, disabled: &|_| false };
//!
//! // An arrow-down proposes a highlight move...
//! let patch = StatePatch {
//!     highlighted_index: Some(step(&ctx, state.highlighted_index, true)),
//!     ..StatePatch::default()
//! };
//! // ...and committing it (uncontrolled, no user reducer) applies it.
//! let committed = commit(&mut state, patch, &StatePatch::default(), None, &"arrow-down");
//! assert_eq!(state.highlighted_index, Some(0));
//! assert!(!committed.changes.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod a11y;
pub mod attrs;
pub mod dismiss;
pub mod environment;
pub mod ids;
pub mod navigation;
pub mod notify;
pub mod reconcile;
pub mod registry;
pub mod state;
pub mod typeahead;

pub use reconcile::StateReducer;
pub use state::{StateFields, StatePatch, WidgetState};
