// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction (dismissal) tracking.
//!
//! Widgets close when the user releases a press outside of them. The host
//! forwards the document-level events it subscribed to (see
//! [`crate::environment::DocumentListeners`]) together with an
//! "inside the widget" classification of the event target; this state machine
//! turns them into [`DismissOutcome`] values. Touch sequences that scrolled
//! (any `touchmove` between start and end) never dismiss.

/// Outcome of a document-level pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissOutcome {
    /// Nothing to do.
    Ignored,
    /// The press was released outside the widget; close if open.
    OutsideRelease,
}

/// Document-level press tracking for outside-click/touch dismissal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DismissState {
    mouse_down: bool,
    touch_active: bool,
    touch_moved: bool,
}

impl DismissState {
    /// Records a document `mousedown`.
    pub fn on_mouse_down(&mut self) {
        self.mouse_down = true;
    }

    /// Processes a document `mouseup`; `inside` is whether the event target
    /// belongs to the widget's elements.
    pub fn on_mouse_up(&mut self, inside: bool) -> DismissOutcome {
        let was_down = self.mouse_down;
        self.mouse_down = false;
        if was_down && !inside {
            DismissOutcome::OutsideRelease
        } else {
            DismissOutcome::Ignored
        }
    }

    /// Records a document `touchstart`.
    pub fn on_touch_start(&mut self) {
        self.touch_active = true;
        self.touch_moved = false;
    }

    /// Records a document `touchmove`.
    pub fn on_touch_move(&mut self) {
        if self.touch_active {
            self.touch_moved = true;
        }
    }

    /// Processes a document `touchend`.
    pub fn on_touch_end(&mut self, inside: bool) -> DismissOutcome {
        let stationary = self.touch_active && !self.touch_moved;
        self.touch_active = false;
        if stationary && !inside {
            DismissOutcome::OutsideRelease
        } else {
            DismissOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_mouse_release_dismisses() {
        let mut state = DismissState::default();
        state.on_mouse_down();
        assert_eq!(state.on_mouse_up(false), DismissOutcome::OutsideRelease);
        // The press was consumed.
        assert_eq!(state.on_mouse_up(false), DismissOutcome::Ignored);
    }

    #[test]
    fn inside_mouse_release_is_ignored() {
        let mut state = DismissState::default();
        state.on_mouse_down();
        assert_eq!(state.on_mouse_up(true), DismissOutcome::Ignored);
    }

    #[test]
    fn stationary_outside_touch_dismisses() {
        let mut state = DismissState::default();
        state.on_touch_start();
        assert_eq!(state.on_touch_end(false), DismissOutcome::OutsideRelease);
    }

    #[test]
    fn scrolling_touch_never_dismisses() {
        let mut state = DismissState::default();
        state.on_touch_start();
        state.on_touch_move();
        assert_eq!(state.on_touch_end(false), DismissOutcome::Ignored);
    }

    #[test]
    fn touch_move_without_press_is_ignored() {
        let mut state = DismissState::default();
        state.on_touch_move();
        state.on_touch_start();
        assert_eq!(state.on_touch_end(false), DismissOutcome::OutsideRelease);
    }
}
