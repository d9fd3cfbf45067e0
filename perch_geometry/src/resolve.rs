// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement algorithm.

use kurbo::{Rect, Size};

use crate::measure::Measure;
use crate::types::{AnchorPreference, Placement};

/// Compute the on-screen rectangle for an overlay anchored to `trigger`.
///
/// Pure: no hidden state, so identical inputs always produce identical output.
/// Negative sizes are treated as zero and the trigger rectangle is normalized.
///
/// The result satisfies, for every input:
/// - `x >= gap` and `y >= gap`;
/// - `x + width <= viewport.width` unless `x == gap`;
/// - `y + height <= viewport.height` unless `y == gap`.
///
/// ```
/// use kurbo::{Rect, Size};
/// use perch_geometry::{AnchorPreference, resolve};
///
/// let trigger = Rect::from_origin_size((100.0, 50.0), (40.0, 40.0));
/// // Too short: flip above the trigger, pinned to the top gap.
/// let r = resolve(
///     trigger,
///     Size::new(200.0, 300.0),
///     Size::new(500.0, 150.0),
///     AnchorPreference::LeadingAligned,
///     10.0,
/// );
/// assert_eq!(r, Rect::from_origin_size((100.0, 10.0), (200.0, 300.0)));
/// ```
pub fn resolve(
    trigger: Rect,
    natural: Size,
    viewport: Size,
    anchor: AnchorPreference,
    gap: f64,
) -> Rect {
    let trigger = trigger.abs();
    let width = natural.width.max(0.0);
    let height = natural.height.max(0.0);
    let viewport_w = viewport.width.max(0.0);
    let viewport_h = viewport.height.max(0.0);

    // Below-left of the trigger, clear of the top/left edges.
    let mut left = trigger.x0.max(gap);
    let mut top = trigger.y1.max(gap);

    if anchor.is_trailing() || left + width > viewport_w {
        let right_edge = (viewport_w - gap).min(trigger.x1);
        left = gap.max(right_edge - width);
    }

    // The flip edge is offset by the trigger's height above its top edge.
    if top + height > viewport_h {
        let bottom_edge = (viewport_h - gap).min(trigger.y0 - trigger.height());
        top = gap.max(bottom_edge - height);
    }

    Rect::from_origin_size((left, top), (width, height))
}

/// Resolve a placement from a measurement provider.
///
/// Returns [`Placement::Offscreen`] when either measurement is unavailable or any
/// input is non-finite, so callers never draw at a bogus location.
pub fn resolve_measured(
    measure: &impl Measure,
    viewport: Size,
    anchor: AnchorPreference,
    gap: f64,
) -> Placement {
    let (Some(trigger), Some(natural)) = (measure.trigger_bounds(), measure.overlay_size()) else {
        return Placement::Offscreen;
    };
    let finite = [
        trigger.x0,
        trigger.y0,
        trigger.x1,
        trigger.y1,
        natural.width,
        natural.height,
        viewport.width,
        viewport.height,
        gap,
    ]
    .iter()
    .all(|v| v.is_finite());
    if !finite {
        return Placement::Offscreen;
    }
    Placement::Placed(resolve(trigger, natural, viewport, anchor, gap))
}
