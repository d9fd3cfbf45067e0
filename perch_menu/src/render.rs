// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action tree renderer: display list and overlay layout.
//!
//! [`DisplayList::build`] walks the action tree in order and flattens every
//! visible action into one row. Nested actions become further rows tagged with
//! their depth; a hidden action drops its whole subtree. Disabled rows stay but
//! render muted.
//!
//! [`layout`] stacks the list top to bottom at a fixed width. The resulting
//! size is the overlay's natural size, the input to placement. Text height is
//! a capability of the host, supplied through [`RowMetrics`].
//!
//! ```
//! use perch_menu::action::Action;
//! use perch_menu::render::{layout, ColorRole, DisplayList, FixedMetrics, MENU_WIDTH};
//!
//! let actions = [
//!     Action::new("share", "Share").subaction(Action::new("copy", "Copy link")),
//!     Action::new("delete", "Delete").destructive(),
//!     Action::new("secret", "Secret").hidden(),
//! ];
//! let list = DisplayList::build(&actions, Some("Menu Title"));
//! assert_eq!(list.row_count(), 3);
//! assert_eq!(list.row(1).unwrap().depth, 1);
//! assert_eq!(list.row(2).unwrap().color, ColorRole::Destructive);
//!
//! let l = layout(&list, &FixedMetrics::default(), MENU_WIDTH);
//! assert_eq!(l.size.width, MENU_WIDTH);
//! assert_eq!(l.row_rects.len(), 3);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::action::{Action, ActionState, Activatable};

/// Fixed overlay width.
pub const MENU_WIDTH: f64 = 200.0;
/// Vertical padding above the title text.
pub const TITLE_PADDING_TOP: f64 = 8.0;
/// Vertical padding below the title text.
pub const TITLE_PADDING_BOTTOM: f64 = 6.0;
/// Horizontal padding inside every row.
pub const ROW_PADDING_X: f64 = 10.0;
/// Vertical padding between a row's edge and its content.
pub const ROW_PADDING_Y: f64 = 10.0;
/// Vertical padding on the outer edge of the first and last rows.
pub const ROW_PADDING_EDGE: f64 = 12.0;
/// Thickness of a separator line.
pub const SEPARATOR_HEIGHT: f64 = 1.0;

/// Font size of the title header.
pub const TITLE_FONT_SIZE: f64 = 12.0;
/// Font size of a row label.
pub const LABEL_FONT_SIZE: f64 = 15.0;
/// Font size of a row subtitle.
pub const SUBTITLE_FONT_SIZE: f64 = 13.0;
/// Font size of the icon glyph.
pub const ICON_FONT_SIZE: f64 = 18.0;

/// Which color a label is drawn with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// The action's explicit color.
    Explicit(String),
    /// The theme's destructive color.
    Destructive,
    /// The theme's muted color.
    Disabled,
    /// The theme's text color.
    Default,
}

impl ColorRole {
    /// Label color of `action`: explicit, then destructive, then disabled.
    pub fn of(action: &Action) -> Self {
        if let Some(c) = &action.title_color {
            Self::Explicit(c.clone())
        } else if action.is_destructive() {
            Self::Destructive
        } else if action.is_disabled() {
            Self::Disabled
        } else {
            Self::Default
        }
    }
}

/// One rendered action.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Identifier reported on activation.
    pub id: String,
    /// Label text.
    pub title: String,
    /// Label color.
    pub color: ColorRole,
    /// Secondary line.
    pub subtitle: Option<String>,
    /// Icon reference.
    pub image: Option<String>,
    /// Icon color.
    pub image_color: Option<String>,
    /// Check mark state.
    pub state: ActionState,
    /// Muted and inert.
    pub disabled: bool,
    /// Nesting depth in the action tree; top level is 0.
    pub depth: usize,
}

impl Row {
    fn from_action(action: &Action, depth: usize) -> Self {
        Self {
            id: action.id.clone(),
            title: action.title.clone(),
            color: ColorRole::of(action),
            subtitle: action.subtitle.clone(),
            image: action.image.clone(),
            image_color: action.image_color.clone(),
            state: action.state,
            disabled: action.is_disabled(),
            depth,
        }
    }
}

impl Activatable for Row {
    fn action_id(&self) -> &str {
        &self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A display list entry, top to bottom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MenuItem<'a> {
    /// Non-interactive header.
    Title(&'a str),
    /// Thin rule between entries.
    Separator,
    /// An action row and its index among rows.
    Row(usize, &'a Row),
}

/// Flattened, render-ready menu content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    title: Option<String>,
    rows: Vec<Row>,
}

impl DisplayList {
    /// Flatten `actions` under an optional header.
    pub fn build(actions: &[Action], title: Option<&str>) -> Self {
        let mut rows = Vec::new();
        flatten(actions, 0, &mut rows);
        Self {
            title: title.map(String::from),
            rows,
        }
    }

    /// Header text.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if there is neither a title nor a row.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.rows.is_empty()
    }

    /// Entries in drawing order, separators included.
    pub fn items(&self) -> impl Iterator<Item = MenuItem<'_>> {
        let header = self
            .title
            .as_deref()
            .into_iter()
            .flat_map(|t| [MenuItem::Title(t), MenuItem::Separator]);
        let last = self.rows.len().saturating_sub(1);
        let rows = self.rows.iter().enumerate().flat_map(move |(i, r)| {
            let sep = (i != last).then_some(MenuItem::Separator);
            core::iter::once(MenuItem::Row(i, r)).chain(sep)
        });
        header.chain(rows)
    }
}

fn flatten(actions: &[Action], depth: usize, out: &mut Vec<Row>) {
    for a in actions.iter().filter(|a| !a.is_hidden()) {
        out.push(Row::from_action(a, depth));
        flatten(&a.subactions, depth + 1, out);
    }
}

/// Text measurement supplied by the host.
pub trait RowMetrics {
    /// Height of one line of `text` at `font_size`.
    fn line_height(&self, text: &str, font_size: f64) -> f64;
}

/// Metrics that ignore the text and scale the font size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedMetrics {
    /// Line height as a multiple of the font size.
    pub line_spacing: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self { line_spacing: 1.2 }
    }
}

impl RowMetrics for FixedMetrics {
    fn line_height(&self, _text: &str, font_size: f64) -> f64 {
        font_size * self.line_spacing
    }
}

/// Rects of a laid out display list, relative to the overlay origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayLayout {
    /// One rect per [`MenuItem`], in [`DisplayList::items`] order.
    pub item_rects: Vec<Rect>,
    /// One rect per row, indexed like [`DisplayList::rows`].
    pub row_rects: Vec<Rect>,
    /// Each row's rect minus its padding: where label, subtitle and icon go.
    pub content_rects: Vec<Rect>,
    /// Natural size of the overlay.
    pub size: Size,
}

impl OverlayLayout {
    /// Index of the row under `local`, a point relative to the overlay origin.
    pub fn row_at(&self, local: Point) -> Option<usize> {
        self.row_rects.iter().position(|r| r.contains(local))
    }
}

/// Stack `list` into a column of width `width`.
pub fn layout(list: &DisplayList, metrics: &impl RowMetrics, width: f64) -> OverlayLayout {
    let mut out = OverlayLayout::default();
    let last = list.row_count().saturating_sub(1);
    let mut y = 0.0;
    for item in list.items() {
        let h = match item {
            MenuItem::Title(t) => {
                TITLE_PADDING_TOP + metrics.line_height(t, TITLE_FONT_SIZE) + TITLE_PADDING_BOTTOM
            }
            MenuItem::Separator => SEPARATOR_HEIGHT,
            MenuItem::Row(i, row) => {
                let top = if i == 0 { ROW_PADDING_EDGE } else { ROW_PADDING_Y };
                let bottom = if i == last { ROW_PADDING_EDGE } else { ROW_PADDING_Y };
                let content = row_content_height(row, metrics);
                out.content_rects.push(Rect::new(
                    ROW_PADDING_X,
                    y + top,
                    (width - ROW_PADDING_X).max(ROW_PADDING_X),
                    y + top + content,
                ));
                top + content + bottom
            }
        };
        let rect = Rect::new(0.0, y, width, y + h);
        if matches!(item, MenuItem::Row(..)) {
            out.row_rects.push(rect);
        }
        out.item_rects.push(rect);
        y += h;
    }
    out.size = Size::new(width, y);
    out
}

// Label and subtitle stack on the leading side; the icon sits centered on the
// trailing side.
fn row_content_height(row: &Row, metrics: &impl RowMetrics) -> f64 {
    let mut text = metrics.line_height(&row.title, LABEL_FONT_SIZE);
    if let Some(s) = &row.subtitle {
        text += metrics.line_height(s, SUBTITLE_FONT_SIZE);
    }
    let icon = row
        .image
        .as_deref()
        .map_or(0.0, |i| metrics.line_height(i, ICON_FONT_SIZE));
    text.max(icon)
}
