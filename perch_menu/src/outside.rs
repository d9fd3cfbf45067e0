// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction detector.
//!
//! Runs from a global capture listener, so it sees an interaction before any
//! node handler gets a chance to stop it. An interaction counts as inside when
//! either its position or its routed target path falls within the trigger or the
//! overlay. Regions are the ones currently committed by the owning menu.

use kurbo::{Point, Rect};

use crate::visibility::Visibility;

/// An interaction from the global stream.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interaction<'a, K> {
    /// Where the interaction happened, in viewport coordinates.
    pub position: Point,
    /// Root→target path of the routed target; empty if nothing was hit.
    pub target_path: &'a [K],
}

/// Committed regions of one trigger/overlay pair.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Regions {
    /// Trigger bounds, if laid out.
    pub trigger: Option<Rect>,
    /// Overlay rectangle, if placed on screen.
    pub overlay: Option<Rect>,
}

/// Why an interaction was or was not treated as outside.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// The menu is closed; nothing to dismiss.
    Closed,
    /// Inside the trigger; the trigger's own gesture decides.
    InsideTrigger,
    /// Inside the overlay.
    InsideOverlay,
    /// Outside both: dismiss.
    Outside,
}

impl Verdict {
    /// True if the menu should close.
    pub fn is_outside(self) -> bool {
        self == Self::Outside
    }
}

/// Decides whether an interaction dismisses one menu.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutsideDetector<K> {
    trigger: K,
    overlay: K,
}

impl<K: Copy + Eq> OutsideDetector<K> {
    /// Create a detector for the given trigger and overlay nodes.
    pub const fn new(trigger: K, overlay: K) -> Self {
        Self { trigger, overlay }
    }

    /// Classify `interaction` for a menu in state `visibility`.
    pub fn check(
        &self,
        visibility: Visibility,
        interaction: &Interaction<'_, K>,
        regions: &Regions,
    ) -> Verdict {
        if visibility == Visibility::Closed {
            return Verdict::Closed;
        }
        let inside = |node: K, region: Option<Rect>| {
            interaction.target_path.contains(&node)
                || region.is_some_and(|r| r.contains(interaction.position))
        };
        if inside(self.trigger, regions.trigger) {
            Verdict::InsideTrigger
        } else if inside(self.overlay, regions.overlay) {
            Verdict::InsideOverlay
        } else {
            Verdict::Outside
        }
    }
}
