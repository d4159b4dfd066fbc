// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed DOM attribute bundles produced by the prop getters.
//!
//! A prop getter returns an [`Attributes`] value: the element's id, role,
//! ARIA attributes, and an [`EventBindings`] set naming which widget entry
//! points the host must forward the element's events to. The bundle is plain
//! data; rendering it into a real element (and wiring the listed events) is
//! the host's job.
//!
//! Handler merging: when the host has its own handler for a bound event, it
//! runs that handler first and forwards to the widget's entry point second.
//! Suppressing the widget's default for one event is done by simply not
//! forwarding it — there is no hidden channel to re-enable it.

use alloc::string::String;
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Events the host must forward from the element to the widget's
    /// matching entry points.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventBindings: u8 {
        /// `keydown` → the element's `*_key_down` entry point.
        const KEY_DOWN    = 0b0000_0001;
        /// `click` → the element's `*_click` entry point.
        const CLICK       = 0b0000_0010;
        /// `blur` → the element's `*_blur` entry point.
        const BLUR        = 0b0000_0100;
        /// `input`/`change` → the input's `*_change` entry point.
        const CHANGE      = 0b0000_1000;
        /// `mouseleave` → the menu's mouse-leave entry point.
        const MOUSE_LEAVE = 0b0001_0000;
        /// `mousemove` → the item's mouse-move entry point.
        const MOUSE_MOVE  = 0b0010_0000;
        /// `mouseenter` → the item's mouse-enter entry point.
        const MOUSE_ENTER = 0b0100_0000;
    }
}

/// Element role emitted by a prop getter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The popup list.
    Listbox,
    /// An entry in the popup list.
    Option,
    /// The combobox wrapper.
    Combobox,
    /// The toggle button.
    Button,
}

impl Role {
    /// The attribute value for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Listbox => "listbox",
            Self::Option => "option",
            Self::Combobox => "combobox",
            Self::Button => "button",
        }
    }
}

/// A single ARIA attribute with a typed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Aria {
    /// `aria-expanded`.
    Expanded(bool),
    /// `aria-haspopup="listbox"`.
    HasPopupListbox,
    /// `aria-labelledby`.
    LabelledBy(String),
    /// `aria-label`.
    Label(String),
    /// `aria-activedescendant`.
    ActiveDescendant(String),
    /// `aria-selected`.
    Selected(bool),
    /// `aria-controls`.
    Controls(String),
    /// `aria-owns`.
    Owns(String),
    /// `aria-autocomplete="list"`.
    AutoCompleteList,
}

impl Aria {
    /// The attribute name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Expanded(_) => "aria-expanded",
            Self::HasPopupListbox => "aria-haspopup",
            Self::LabelledBy(_) => "aria-labelledby",
            Self::Label(_) => "aria-label",
            Self::ActiveDescendant(_) => "aria-activedescendant",
            Self::Selected(_) => "aria-selected",
            Self::Controls(_) => "aria-controls",
            Self::Owns(_) => "aria-owns",
            Self::AutoCompleteList => "aria-autocomplete",
        }
    }

    /// The attribute value, rendered.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Expanded(value) | Self::Selected(value) => String::from(if *value {
                "true"
            } else {
                "false"
            }),
            Self::HasPopupListbox => String::from("listbox"),
            Self::AutoCompleteList => String::from("list"),
            Self::LabelledBy(id)
            | Self::Label(id)
            | Self::ActiveDescendant(id)
            | Self::Controls(id)
            | Self::Owns(id) => id.clone(),
        }
    }
}

/// Attribute/handler bundle for one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Element id.
    pub id: Option<String>,
    /// Element role.
    pub role: Option<Role>,
    /// `for` attribute (label elements).
    pub html_for: Option<String>,
    /// `tabindex`.
    pub tab_index: Option<i32>,
    /// Emit `autocomplete="off"` (combobox inputs).
    pub autocomplete_off: bool,
    /// ARIA attributes.
    pub aria: SmallVec<[Aria; 6]>,
    /// Events the host must wire to the widget.
    pub events: EventBindings,
}

impl Attributes {
    /// Adds one ARIA attribute.
    pub fn push_aria(&mut self, aria: Aria) {
        self.aria.push(aria);
    }

    /// Iterates the ARIA attributes as rendered `(name, value)` pairs.
    pub fn aria_pairs(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.aria.iter().map(|aria| (aria.name(), aria.value()))
    }
}

/// Options accepted by the menu prop getter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuOptions {
    /// Tolerate a menu that is intentionally not rendered this pass
    /// (conditional rendering); skips the missing-node warning.
    pub suppress_ref_error: bool,
    /// Explicit `aria-label` replacing the `aria-labelledby` reference.
    pub aria_label: Option<String>,
}

/// Options accepted by the item prop getter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemOptions<N> {
    /// Mark the item disabled: skipped by stepwise navigation and inert to
    /// selection.
    pub disabled: bool,
    /// The item's node handle, for roving focus and scroll-into-view.
    pub node: Option<N>,
}

impl<N> Default for ItemOptions<N> {
    fn default() -> Self {
        Self {
            disabled: false,
            node: None,
        }
    }
}
