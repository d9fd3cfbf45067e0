// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement capability: how layout results reach the placement algorithm.
//!
//! The resolver never inspects a render tree. Whatever owns layout implements
//! [`Measure`] (or fills in a [`Measurements`] record) and reports `None` for
//! anything not laid out yet.

use kurbo::{Rect, Size};

/// Source of trigger and overlay measurements.
///
/// ```
/// use kurbo::{Rect, Size};
/// use perch_geometry::{AnchorPreference, DEFAULT_GAP, Measure, Placement, resolve_measured};
///
/// struct Laid {
///     button: Rect,
/// }
///
/// impl Measure for Laid {
///     fn trigger_bounds(&self) -> Option<Rect> {
///         Some(self.button)
///     }
///     fn overlay_size(&self) -> Option<Size> {
///         // Content not measured yet.
///         None
///     }
/// }
///
/// let laid = Laid { button: Rect::new(0.0, 0.0, 40.0, 20.0) };
/// let p = resolve_measured(&laid, Size::new(800.0, 600.0), AnchorPreference::default(), DEFAULT_GAP);
/// assert_eq!(p, Placement::Offscreen);
/// ```
pub trait Measure {
    /// Trigger bounds in viewport coordinates, if laid out.
    fn trigger_bounds(&self) -> Option<Rect>;
    /// The overlay's natural (unclamped) content size, if measured.
    fn overlay_size(&self) -> Option<Size>;
}

/// Plain measurement record.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Measurements {
    /// Trigger bounds in viewport coordinates.
    pub trigger: Option<Rect>,
    /// Natural size of the overlay content.
    pub overlay: Option<Size>,
}

impl Measure for Measurements {
    fn trigger_bounds(&self) -> Option<Rect> {
        self.trigger
    }

    fn overlay_size(&self) -> Option<Size> {
        self.overlay
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn trigger_bounds(&self) -> Option<Rect> {
        (**self).trigger_bounds()
    }

    fn overlay_size(&self) -> Option<Size> {
        (**self).overlay_size()
    }
}
