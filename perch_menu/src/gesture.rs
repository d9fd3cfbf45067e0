// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture adapter: one toggle per complete press/release on a trigger.
//!
//! ## Rules
//!
//! - Interaction start captures the gesture and arms the adapter.
//! - Interaction end toggles exactly once, and only if armed.
//! - Moves never toggle; a cancel disarms without toggling.
//!
//! ```
//! use perch_menu::event::PointerKind;
//! use perch_menu::gesture::{GestureAdapter, GestureSignal};
//!
//! let mut g = GestureAdapter::new();
//! // A stray release is swallowed.
//! assert_eq!(g.handle(PointerKind::Up), GestureSignal::Ignored);
//!
//! assert_eq!(g.handle(PointerKind::Down), GestureSignal::Captured);
//! assert_eq!(g.handle(PointerKind::Move), GestureSignal::Tracking);
//! assert_eq!(g.handle(PointerKind::Up), GestureSignal::Toggle);
//! assert!(!g.is_active());
//! ```

use crate::event::PointerKind;

/// What the adapter did with an event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GestureSignal {
    /// A press was captured; the trigger's default press behavior must not run.
    Captured,
    /// Intermediate event of a captured gesture.
    Tracking,
    /// A captured press was released: flip visibility.
    Toggle,
    /// A captured gesture was cancelled without toggling.
    Released,
    /// Not part of a captured gesture.
    Ignored,
}

impl GestureSignal {
    /// True if the event belongs to a captured gesture and must not propagate further.
    pub fn is_captured(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Per-trigger capture guard.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct GestureAdapter {
    active: bool,
}

impl GestureAdapter {
    /// Create an idle adapter.
    pub const fn new() -> Self {
        Self { active: false }
    }

    /// True between a captured start and its end or cancel.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Interaction start: capture and arm.
    pub fn interaction_start(&mut self) -> GestureSignal {
        self.active = true;
        GestureSignal::Captured
    }

    /// Interaction end: toggle if armed, then disarm.
    pub fn interaction_end(&mut self) -> GestureSignal {
        if !self.active {
            tracing::trace!("release without captured press ignored");
            return GestureSignal::Ignored;
        }
        self.active = false;
        GestureSignal::Toggle
    }

    /// Gesture taken away by the platform: disarm without toggling.
    pub fn interaction_cancel(&mut self) -> GestureSignal {
        if !self.active {
            return GestureSignal::Ignored;
        }
        self.active = false;
        GestureSignal::Released
    }

    /// Feed a raw pointer event routed to the trigger.
    pub fn handle(&mut self, kind: PointerKind) -> GestureSignal {
        match kind {
            PointerKind::Down => self.interaction_start(),
            PointerKind::Move if self.active => GestureSignal::Tracking,
            PointerKind::Move => GestureSignal::Ignored,
            PointerKind::Up => self.interaction_end(),
            PointerKind::Cancel => self.interaction_cancel(),
        }
    }
}
