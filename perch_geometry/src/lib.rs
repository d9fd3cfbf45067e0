// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Geometry: viewport-aware placement for anchored overlays.
//!
//! A popover menu hangs off a trigger element. This crate decides where the
//! overlay goes, given the trigger's bounds, the overlay's natural content size,
//! the viewport size, and an [`AnchorPreference`].
//!
//! - [`resolve`] is a pure function over Kurbo values. Same inputs, same rectangle.
//! - [`resolve_measured`] pulls inputs through a [`Measure`] provider and reports
//!   [`Placement::Offscreen`] while measurements are missing or malformed.
//!
//! ## Placement rules
//!
//! Applied in order, each step may override the previous one:
//!
//! 1. Hang below the trigger with left edges aligned.
//! 2. Keep at least `gap` away from the viewport's left and top edges.
//! 3. If trailing-aligned, or the right side would overflow, align the overlay's
//!    right edge to the trigger's right edge (never past `viewport.width - gap`).
//! 4. If the bottom would overflow, flip above the trigger (never past
//!    `viewport.height - gap`), still keeping `gap` from the top.
//!
//! The output keeps the natural size. Content larger than the viewport is pinned
//! to the `gap` inset rather than shrunk.
//!
//! ## Not a layout engine
//!
//! Nothing here measures content. The rendering layer owns the overlay's size and
//! hands it over through [`Measure`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use perch_geometry::{AnchorPreference, DEFAULT_GAP, resolve};
//!
//! let trigger = Rect::from_origin_size((100.0, 50.0), (40.0, 40.0));
//! let menu = Size::new(200.0, 300.0);
//!
//! // Plenty of room: hang below-left of the trigger.
//! let r = resolve(trigger, menu, Size::new(500.0, 400.0), AnchorPreference::LeadingAligned, DEFAULT_GAP);
//! assert_eq!(r, Rect::from_origin_size((100.0, 90.0), (200.0, 300.0)));
//!
//! // Narrow viewport: the right edge overflows, so the menu slides left until it hits the gap.
//! let r = resolve(trigger, menu, Size::new(250.0, 400.0), AnchorPreference::LeadingAligned, DEFAULT_GAP);
//! assert_eq!(r.origin(), Point::new(10.0, 90.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod measure;
pub mod resolve;
pub mod types;

pub use measure::{Measure, Measurements};
pub use resolve::{resolve, resolve_measured};
pub use types::{AnchorPreference, DEFAULT_GAP, OFFSCREEN_ORIGIN, Placement};
