// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row highlight: hover and pressed feedback for overlay rows.
//!
//! Rows are flat, so a hover change is at most one leave followed by one enter.
//! A row activates only when the press and the release land on the same row.
//!
//! ```
//! use perch_menu::highlight::{HighlightEvent, RowHighlight};
//!
//! let mut h = RowHighlight::new();
//! assert_eq!(h.hover(Some(0)), vec![HighlightEvent::Enter(0)]);
//! assert_eq!(
//!     h.hover(Some(2)),
//!     vec![HighlightEvent::Leave(0), HighlightEvent::Enter(2)]
//! );
//! h.press(2);
//! assert_eq!(h.release(Some(2)), Some(2));
//! ```

use alloc::vec::Vec;

/// Opacity applied to a row while it is pressed.
pub const PRESSED_OPACITY: f64 = 0.2;

/// A hover transition on a row index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HighlightEvent {
    /// The pointer entered the row.
    Enter(usize),
    /// The pointer left the row.
    Leave(usize),
}

/// Hovered and pressed rows of one overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RowHighlight {
    hovered: Option<usize>,
    pressed: Option<usize>,
}

impl RowHighlight {
    /// Nothing hovered or pressed.
    pub const fn new() -> Self {
        Self {
            hovered: None,
            pressed: None,
        }
    }

    /// Currently hovered row.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Row holding the press, if any.
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// True if `row` is under the pointer.
    pub fn is_hovered(&self, row: usize) -> bool {
        self.hovered == Some(row)
    }

    /// True if `row` holds the press.
    pub fn is_pressed(&self, row: usize) -> bool {
        self.pressed == Some(row)
    }

    /// Opacity to draw `row` with.
    pub fn opacity(&self, row: usize) -> f64 {
        if self.is_pressed(row) {
            PRESSED_OPACITY
        } else {
            1.0
        }
    }

    /// Move the hover to `row` and return the transitions, leave first.
    pub fn hover(&mut self, row: Option<usize>) -> Vec<HighlightEvent> {
        let mut out = Vec::new();
        if self.hovered == row {
            return out;
        }
        if let Some(old) = self.hovered {
            out.push(HighlightEvent::Leave(old));
        }
        if let Some(new) = row {
            out.push(HighlightEvent::Enter(new));
        }
        self.hovered = row;
        out
    }

    /// Start a press on `row`.
    pub fn press(&mut self, row: usize) {
        self.pressed = Some(row);
    }

    /// End the press over `row`. Returns the row to activate when the press
    /// started on the same row.
    pub fn release(&mut self, row: Option<usize>) -> Option<usize> {
        let pressed = self.pressed.take()?;
        (row == Some(pressed)).then_some(pressed)
    }

    /// Drop the press without activating anything.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }

    /// Forget all state, returning the leave for the hovered row if any.
    pub fn clear(&mut self) -> Vec<HighlightEvent> {
        self.pressed = None;
        self.hover(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn hover_same_row_is_silent() {
        let mut h = RowHighlight::new();
        h.hover(Some(1));
        assert!(h.hover(Some(1)).is_empty());
        assert!(h.is_hovered(1));
    }

    #[test]
    fn leaving_all_rows() {
        let mut h = RowHighlight::new();
        h.hover(Some(3));
        assert_eq!(h.hover(None), vec![HighlightEvent::Leave(3)]);
        assert_eq!(h.hovered(), None);
    }

    #[test]
    fn release_elsewhere_does_not_activate() {
        let mut h = RowHighlight::new();
        h.press(0);
        assert_eq!(h.opacity(0), PRESSED_OPACITY);
        assert_eq!(h.release(Some(1)), None);
        assert_eq!(h.pressed(), None);
        assert_eq!(h.opacity(0), 1.0);
    }

    #[test]
    fn release_without_press() {
        let mut h = RowHighlight::new();
        assert_eq!(h.release(Some(0)), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut h = RowHighlight::new();
        h.hover(Some(2));
        h.press(2);
        assert_eq!(h.clear(), vec![HighlightEvent::Leave(2)]);
        assert_eq!(h, RowHighlight::new());
    }

    #[test]
    fn cancel_keeps_hover() {
        let mut h = RowHighlight::new();
        h.hover(Some(2));
        h.press(2);
        h.cancel();
        assert!(!h.is_pressed(2));
        assert!(h.is_hovered(2));
    }
}
