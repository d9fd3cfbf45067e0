// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Menu: anchored popover menus for pointer-driven UIs.
//!
//! ## Overview
//!
//! A menu is a trigger element plus a floating overlay listing actions. This
//! crate owns the interaction logic, not the drawing:
//!
//! - [`gesture`]: one press/release on the trigger becomes one toggle.
//! - [`visibility`]: the open/closed state machine, including close on
//!   activation and on outside clicks.
//! - [`outside`]: decides whether a click landed outside trigger and overlay.
//! - [`render`]: flattens the action tree into rows and lays them out, which
//!   yields the overlay's natural size.
//! - [`view`]: a single menu, keeping its placement in sync with
//!   [`perch_geometry`] whenever anything it depends on changes.
//! - [`surface`]: hosts menus, hit tests pointer input, routes it through
//!   [`perch_responder`], and manages the outside-click listeners.
//!
//! Everything is synchronous. A click is fully processed, including any
//! action callback, before the next event is looked at.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use perch_menu::{Action, FixedMetrics, MenuConfig, PointerEvent, Surface};
//!
//! let mut surface = Surface::new(Size::new(500.0, 400.0));
//! let menu = surface.add_menu(
//!     MenuConfig::default().title("Menu Title"),
//!     vec![
//!         Action::new("share", "Share Action"),
//!         Action::new("delete", "Delete").destructive(),
//!     ],
//! );
//! surface.set_trigger_bounds(menu, Rect::from_origin_size((100.0, 50.0), (40.0, 40.0)));
//! surface.measure(menu, &FixedMetrics::default());
//!
//! // Press and release on the trigger opens the menu below it.
//! let trigger = Point::new(120.0, 70.0);
//! surface.pointer(PointerEvent::down(trigger));
//! surface.pointer(PointerEvent::up(trigger));
//! let view = surface.menu(menu).unwrap();
//! assert!(view.is_open());
//! assert_eq!(view.overlay_origin(), Point::new(100.0, 90.0));
//!
//! // A click anywhere else closes it again.
//! let away = Point::new(450.0, 350.0);
//! surface.pointer(PointerEvent::down(away));
//! let response = surface.pointer(PointerEvent::up(away));
//! assert_eq!(response.dismissed, vec![menu]);
//! assert_eq!(surface.listener_count(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: floating point support for `no_std` targets.
//! - `serde`: (de)serialize [`Action`] trees and [`MenuConfig`] using the
//!   familiar field names (`titleColor`, `subactions`, `isAnchoredToRight`, ...).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod action;
pub mod event;
pub mod gesture;
pub mod highlight;
pub mod outside;
pub mod render;
pub mod surface;
pub mod view;
pub mod visibility;

pub use action::{Action, ActionAttributes, ActionEvent, ActionState, Activatable};
pub use event::{PointerEvent, PointerKind};
pub use render::{DisplayList, FixedMetrics, RowMetrics};
pub use surface::{MenuId, NodeKey, PointerResponse, Surface};
pub use view::{MenuConfig, MenuView};
pub use visibility::{Transition, Visibility};
