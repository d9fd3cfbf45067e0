// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public placement types: anchoring preference, constants, and the resolved placement.

use kurbo::{Point, Rect, Size};

/// Minimum clearance between an overlay and the viewport edges.
pub const DEFAULT_GAP: f64 = 10.0;

/// Where a hidden or not-yet-measured overlay is parked.
///
/// Far enough outside any viewport that the overlay never becomes a hit target.
pub const OFFSCREEN_ORIGIN: Point = Point::new(-1000.0, -1000.0);

/// Default horizontal alignment of an overlay relative to its trigger.
///
/// Chosen once when the overlay is created; it does not change per interaction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AnchorPreference {
    /// The overlay's left edge hugs the trigger's left edge.
    #[default]
    LeadingAligned,
    /// The overlay's right edge lines up with the trigger's right edge.
    TrailingAligned,
}

impl AnchorPreference {
    /// Build a preference from the "anchored to right" flag used by menu configuration data.
    pub const fn from_anchored_to_right(anchored_to_right: bool) -> Self {
        if anchored_to_right {
            Self::TrailingAligned
        } else {
            Self::LeadingAligned
        }
    }

    /// True for [`AnchorPreference::TrailingAligned`].
    pub const fn is_trailing(self) -> bool {
        matches!(self, Self::TrailingAligned)
    }
}

/// Outcome of placing an overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Placement {
    /// Hidden or not ready: the overlay sits at [`OFFSCREEN_ORIGIN`].
    #[default]
    Offscreen,
    /// On-screen rectangle in viewport coordinates.
    Placed(Rect),
}

impl Placement {
    /// Returns the on-screen rectangle, if placed.
    pub fn placed(self) -> Option<Rect> {
        match self {
            Self::Placed(r) => Some(r),
            Self::Offscreen => None,
        }
    }

    /// True if the overlay has an on-screen rectangle.
    pub fn is_placed(self) -> bool {
        matches!(self, Self::Placed(_))
    }

    /// The overlay's origin; [`OFFSCREEN_ORIGIN`] when not placed.
    pub fn origin(self) -> Point {
        match self {
            Self::Placed(r) => r.origin(),
            Self::Offscreen => OFFSCREEN_ORIGIN,
        }
    }

    /// The rectangle to draw with, given the overlay's natural size.
    ///
    /// Unplaced overlays still get a rectangle so renderers can lay them out,
    /// but it is parked at [`OFFSCREEN_ORIGIN`].
    pub fn rect_or_offscreen(self, natural: Size) -> Rect {
        match self {
            Self::Placed(r) => r,
            Self::Offscreen => Rect::from_origin_size(OFFSCREEN_ORIGIN, natural),
        }
    }
}
