// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as seen by a menu surface.

use kurbo::Point;

/// Kind of pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// Press began (interaction start).
    Down,
    /// Pointer moved, pressed or not.
    Move,
    /// Press released (interaction end). Completes a click.
    Up,
    /// The platform took the gesture away; no click happens.
    Cancel,
}

/// A single pointer event in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Where it happened.
    pub position: Point,
}

impl PointerEvent {
    /// Create an event.
    pub fn new(kind: PointerKind, position: impl Into<Point>) -> Self {
        Self {
            kind,
            position: position.into(),
        }
    }

    /// A press at `position`.
    pub fn down(position: impl Into<Point>) -> Self {
        Self::new(PointerKind::Down, position)
    }

    /// A move to `position`.
    pub fn moved(position: impl Into<Point>) -> Self {
        Self::new(PointerKind::Move, position)
    }

    /// A release at `position`.
    pub fn up(position: impl Into<Point>) -> Self {
        Self::new(PointerKind::Up, position)
    }

    /// A cancelled gesture at `position`.
    pub fn cancel(position: impl Into<Point>) -> Self {
        Self::new(PointerKind::Cancel, position)
    }

    /// True for events that complete a click and so count as an interaction
    /// for outside-dismissal.
    pub fn is_click(&self) -> bool {
        self.kind == PointerKind::Up
    }
}
