// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The environment capability contract.
//!
//! The core never touches a real document. Everything that would be a DOM
//! side effect is expressed through [`Environment`]: document-level listener
//! registration for outside-interaction detection, the accessibility live
//! region, and scroll-into-view. Hosts inject an implementation per widget
//! (an iframe's document, a test double, or [`NoEnvironment`] for fully
//! headless use).
//!
//! Listener bookkeeping must be idempotent and symmetric — attach on mount,
//! detach on unmount, detach-before-reattach when the environment changes —
//! which is what [`ListenerSet`] provides.

bitflags::bitflags! {
    /// Document-level listeners a widget needs while mounted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DocumentListeners: u8 {
        /// `mousedown` on the document.
        const MOUSE_DOWN  = 0b0000_0001;
        /// `mouseup` on the document.
        const MOUSE_UP    = 0b0000_0010;
        /// `touchstart` on the document.
        const TOUCH_START = 0b0000_0100;
        /// `touchmove` on the document.
        const TOUCH_MOVE  = 0b0000_1000;
        /// `touchend` on the document.
        const TOUCH_END   = 0b0001_0000;
    }
}

/// DOM-access capability injected by the host.
///
/// `N` is the host's node handle type; the core only stores and passes
/// handles back, it never inspects them.
pub trait Environment<N> {
    /// Subscribes to one document-level event. Called at most once per
    /// listener between detaches.
    fn attach_listener(&mut self, listener: DocumentListeners);

    /// Unsubscribes from one document-level event.
    fn detach_listener(&mut self, listener: DocumentListeners);

    /// Publishes a message to the accessibility live region.
    ///
    /// The live region element and its auto-clear timer are owned by the
    /// environment; an empty message is a no-announcement.
    fn announce(&mut self, message: &str) {
        let _ = message;
    }

    /// Brings the item's node into view within the menu node.
    ///
    /// Called after keyboard-driven highlight changes when both nodes are
    /// registered for the current render. The default does nothing.
    fn scroll_into_view(&mut self, item: &N, menu: &N) {
        let _ = (item, menu);
    }
}

/// Inert environment for tests and fully headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEnvironment;

impl<N> Environment<N> for NoEnvironment {
    fn attach_listener(&mut self, _listener: DocumentListeners) {}
    fn detach_listener(&mut self, _listener: DocumentListeners) {}
}

/// Idempotent, symmetric listener bookkeeping.
///
/// Tracks what is currently attached and issues only the attach/detach deltas
/// needed to reach the wanted set, so repeated syncs never leak or double
/// subscribe.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListenerSet {
    attached: DocumentListeners,
}

impl ListenerSet {
    /// The currently attached listeners.
    #[must_use]
    pub fn attached(&self) -> DocumentListeners {
        self.attached
    }

    /// Attaches/detaches whatever is needed so exactly `want` is subscribed.
    pub fn sync<N>(&mut self, want: DocumentListeners, env: &mut dyn Environment<N>) {
        for listener in (self.attached - want).iter() {
            env.detach_listener(listener);
        }
        for listener in (want - self.attached).iter() {
            env.attach_listener(listener);
        }
        self.attached = want;
    }

    /// Detaches everything (unmount, or environment replacement).
    pub fn detach_all<N>(&mut self, env: &mut dyn Environment<N>) {
        self.sync(DocumentListeners::empty(), env);
    }
}
