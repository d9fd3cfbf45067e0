// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility controller: the open/closed state machine.
//!
//! | From   | Event                    | To     |
//! |--------|--------------------------|--------|
//! | Closed | toggle                   | Open   |
//! | Open   | toggle                   | Closed |
//! | Open   | outside interaction      | Closed |
//! | Open   | activation (not disabled)| Closed |
//!
//! Everything else is a no-op. Activation closes first and only then yields the
//! [`ActionEvent`] to report, so a callback never observes an open menu.

use crate::action::{Activatable, ActionEvent};

/// Whether the overlay is shown and interactive.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Visibility {
    /// Hidden; placed off-screen.
    #[default]
    Closed,
    /// Shown at the resolved placement.
    Open,
}

/// Result of feeding an event to the controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transition {
    /// Closed → Open.
    Opened,
    /// Open → Closed.
    Closed,
    /// No state change.
    Unchanged,
}

/// Owns a single menu's [`Visibility`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct VisibilityController {
    state: Visibility,
}

impl VisibilityController {
    /// Create a controller in the `Closed` state.
    pub const fn new() -> Self {
        Self {
            state: Visibility::Closed,
        }
    }

    /// Current state.
    pub fn visibility(&self) -> Visibility {
        self.state
    }

    /// True if open.
    pub fn is_open(&self) -> bool {
        self.state == Visibility::Open
    }

    /// Flip the state unconditionally.
    pub fn toggle(&mut self) -> Transition {
        match self.state {
            Visibility::Closed => {
                self.state = Visibility::Open;
                Transition::Opened
            }
            Visibility::Open => {
                self.state = Visibility::Closed;
                Transition::Closed
            }
        }
    }

    /// Close because of an interaction outside trigger and overlay.
    pub fn outside_interaction(&mut self) -> Transition {
        self.close()
    }

    /// Force the `Closed` state.
    pub fn close(&mut self) -> Transition {
        match self.state {
            Visibility::Open => {
                self.state = Visibility::Closed;
                Transition::Closed
            }
            Visibility::Closed => Transition::Unchanged,
        }
    }

    /// Activate an action.
    ///
    /// Returns the event to report when the menu was open and the action is not
    /// disabled; the controller is already closed by then. Returns `None` and
    /// leaves the state alone otherwise.
    pub fn activate(&mut self, action: &(impl Activatable + ?Sized)) -> Option<ActionEvent> {
        if self.state == Visibility::Closed {
            return None;
        }
        if action.is_disabled() {
            tracing::trace!(id = action.action_id(), "disabled action swallowed");
            return None;
        }
        self.state = Visibility::Closed;
        Some(ActionEvent::for_action(action))
    }
}
