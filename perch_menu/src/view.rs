// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One trigger/overlay pair: configuration, content, and interaction state.
//!
//! A [`MenuView`] ties the pieces together for a single menu. It keeps the
//! placement fresh: every transition to open, every viewport change, every
//! trigger move and every new measurement recomputes it, and closing parks the
//! overlay off-screen.
//!
//! Hosts that route pointer input themselves drive a view directly. The
//! [`Surface`](crate::surface::Surface) does that for any number of views and
//! also owns their outside-interaction listeners.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size};
use perch_geometry::{AnchorPreference, DEFAULT_GAP, Measure, Placement, resolve_measured};
use perch_responder::listeners::ListenerId;

use crate::action::{Action, ActionEvent};
use crate::gesture::GestureAdapter;
use crate::highlight::RowHighlight;
use crate::render::{DisplayList, MENU_WIDTH, OverlayLayout, RowMetrics, layout};
use crate::visibility::{Transition, Visibility, VisibilityController};

/// Anchoring and header configuration, fixed for the life of a menu.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ConfigRecord", into = "ConfigRecord")
)]
pub struct MenuConfig {
    /// Which trigger edge the overlay aligns to.
    pub anchor: AnchorPreference,
    /// Optional header text.
    pub title: Option<String>,
    /// Minimum distance from the viewport edges.
    pub gap: f64,
    /// Overlay width.
    pub width: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            anchor: AnchorPreference::LeadingAligned,
            title: None,
            gap: DEFAULT_GAP,
            width: MENU_WIDTH,
        }
    }
}

impl MenuConfig {
    /// Set the header text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the anchoring preference.
    pub fn anchor(mut self, anchor: AnchorPreference) -> Self {
        self.anchor = anchor;
        self
    }

    /// Align to the trigger's trailing edge when `right` is true.
    pub fn anchored_to_right(self, right: bool) -> Self {
        self.anchor(AnchorPreference::from_anchored_to_right(right))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigRecord {
    is_anchored_to_right: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    gap: f64,
    width: f64,
}

#[cfg(feature = "serde")]
impl Default for ConfigRecord {
    fn default() -> Self {
        MenuConfig::default().into()
    }
}

#[cfg(feature = "serde")]
impl From<ConfigRecord> for MenuConfig {
    fn from(r: ConfigRecord) -> Self {
        Self {
            anchor: AnchorPreference::from_anchored_to_right(r.is_anchored_to_right),
            title: r.title,
            gap: r.gap,
            width: r.width,
        }
    }
}

#[cfg(feature = "serde")]
impl From<MenuConfig> for ConfigRecord {
    fn from(c: MenuConfig) -> Self {
        Self {
            is_anchored_to_right: c.anchor.is_trailing(),
            title: c.title,
            gap: c.gap,
            width: c.width,
        }
    }
}

type PressCallback = Box<dyn FnMut(&ActionEvent)>;

/// State of a single anchored menu.
pub struct MenuView {
    config: MenuConfig,
    actions: Vec<Action>,
    display: DisplayList,
    layout: Option<OverlayLayout>,
    pub(crate) gesture: GestureAdapter,
    visibility: VisibilityController,
    pub(crate) highlight: RowHighlight,
    trigger: Option<Rect>,
    viewport: Size,
    placement: Placement,
    pub(crate) listener: Option<ListenerId>,
    on_press_action: Option<PressCallback>,
}

impl fmt::Debug for MenuView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuView")
            .field("config", &self.config)
            .field("rows", &self.display.row_count())
            .field("visibility", &self.visibility.visibility())
            .field("trigger", &self.trigger)
            .field("viewport", &self.viewport)
            .field("placement", &self.placement)
            .field("listener", &self.listener)
            .field("on_press_action", &self.on_press_action.is_some())
            .finish_non_exhaustive()
    }
}

impl MenuView {
    /// Create a closed menu over `actions`.
    ///
    /// Nothing is measured yet, so the overlay stays off-screen until
    /// [`measure`](Self::measure) and [`set_trigger_bounds`](Self::set_trigger_bounds)
    /// have both been called.
    pub fn new(config: MenuConfig, actions: Vec<Action>) -> Self {
        let display = DisplayList::build(&actions, config.title.as_deref());
        Self {
            config,
            actions,
            display,
            layout: None,
            gesture: GestureAdapter::new(),
            visibility: VisibilityController::new(),
            highlight: RowHighlight::new(),
            trigger: None,
            viewport: Size::ZERO,
            placement: Placement::Offscreen,
            listener: None,
            on_press_action: None,
        }
    }

    /// Register the action-selection callback.
    pub fn set_on_press_action(&mut self, f: impl FnMut(&ActionEvent) + 'static) {
        self.on_press_action = Some(Box::new(f));
    }

    /// Configuration.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The action tree as supplied.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Replace the action tree.
    ///
    /// The previous layout no longer describes the content, so the overlay is
    /// parked off-screen until the next [`measure`](Self::measure).
    pub fn set_actions(&mut self, actions: Vec<Action>) {
        self.display = DisplayList::build(&actions, self.config.title.as_deref());
        self.actions = actions;
        self.layout = None;
        self.highlight.clear();
        self.reposition();
    }

    /// Flattened content.
    pub fn display_list(&self) -> &DisplayList {
        &self.display
    }

    /// Content layout, once measured.
    pub fn layout(&self) -> Option<&OverlayLayout> {
        self.layout.as_ref()
    }

    /// Lay out the content with `metrics` and refresh the placement.
    pub fn measure(&mut self, metrics: &impl RowMetrics) {
        self.layout = Some(layout(&self.display, metrics, self.config.width));
        self.reposition();
    }

    /// Trigger bounds in viewport coordinates.
    pub fn trigger_bounds(&self) -> Option<Rect> {
        self.trigger
    }

    /// Record where the trigger is and refresh the placement.
    pub fn set_trigger_bounds(&mut self, bounds: Rect) {
        self.trigger = Some(bounds);
        self.reposition();
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Record a new viewport size and refresh the placement.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.reposition();
    }

    /// Current placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The overlay's on-screen rectangle while placed.
    pub fn overlay_rect(&self) -> Option<Rect> {
        self.placement.placed()
    }

    /// Where to draw the overlay; off-screen unless placed.
    pub fn overlay_origin(&self) -> Point {
        self.placement.origin()
    }

    /// The rectangle to draw the overlay in.
    ///
    /// While not placed this is the natural size parked at the off-screen
    /// origin, so content can be laid out before it is shown. An unmeasured
    /// overlay has zero height.
    pub fn frame(&self) -> Rect {
        let natural = self
            .overlay_size()
            .unwrap_or(Size::new(self.config.width, 0.0));
        self.placement.rect_or_offscreen(natural)
    }

    /// Open or closed.
    pub fn visibility(&self) -> Visibility {
        self.visibility.visibility()
    }

    /// True while open.
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Row hover and press state.
    pub fn highlight(&self) -> &RowHighlight {
        &self.highlight
    }

    /// True while subscribed to the global interaction stream.
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Row under `point`, given in viewport coordinates.
    pub fn row_at(&self, point: Point) -> Option<usize> {
        let rect = self.overlay_rect()?;
        let local = point - rect.origin().to_vec2();
        self.layout.as_ref()?.row_at(local)
    }

    /// Flip visibility.
    pub fn toggle(&mut self) -> Transition {
        let t = self.visibility.toggle();
        self.commit(t);
        t
    }

    /// Close because of an interaction outside trigger and overlay.
    pub fn outside_interaction(&mut self) -> Transition {
        let t = self.visibility.outside_interaction();
        self.commit(t);
        t
    }

    /// Close unconditionally.
    pub fn close(&mut self) -> Transition {
        let t = self.visibility.close();
        self.commit(t);
        t
    }

    /// Activate the row at `index`.
    ///
    /// On success the menu is closed and the event to report is returned; hand
    /// it to [`notify`](Self::notify) once any further closing work is done.
    /// Disabled rows, unknown rows, and a closed menu yield `None`.
    pub fn activate_row(&mut self, index: usize) -> Option<ActionEvent> {
        let row = self.display.row(index)?;
        let event = self.visibility.activate(row)?;
        self.commit(Transition::Closed);
        Some(event)
    }

    /// Report an activation to the action-selection callback, if one is set.
    pub fn notify(&mut self, event: &ActionEvent) {
        tracing::debug!(id = %event.id, "action selected");
        if let Some(cb) = self.on_press_action.as_mut() {
            cb(event);
        }
    }

    fn commit(&mut self, t: Transition) {
        match t {
            Transition::Opened => {
                tracing::debug!("menu opened");
                self.reposition();
            }
            Transition::Closed => {
                tracing::debug!("menu closed");
                self.highlight.clear();
                self.reposition();
            }
            Transition::Unchanged => {}
        }
    }

    /// Recompute the placement from the current state.
    pub fn reposition(&mut self) {
        let next = if self.visibility.is_open() {
            resolve_measured(&*self, self.viewport, self.config.anchor, self.config.gap)
        } else {
            Placement::Offscreen
        };
        if next == self.placement {
            return;
        }
        match next {
            Placement::Placed(rect) => tracing::debug!(?rect, "overlay placed"),
            Placement::Offscreen if self.visibility.is_open() => {
                tracing::trace!("overlay not measured; kept off-screen");
            }
            Placement::Offscreen => {}
        }
        self.placement = next;
    }
}

impl Measure for MenuView {
    fn trigger_bounds(&self) -> Option<Rect> {
        self.trigger
    }

    fn overlay_size(&self) -> Option<Size> {
        self.layout.as_ref().map(|l| l.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FixedMetrics;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    struct Unit;

    impl RowMetrics for Unit {
        fn line_height(&self, _text: &str, font_size: f64) -> f64 {
            font_size
        }
    }

    fn view() -> MenuView {
        let mut v = MenuView::new(
            MenuConfig::default(),
            vec![
                Action::new("share", "Share"),
                Action::new("off", "Off").disabled(),
            ],
        );
        v.set_viewport(Size::new(500.0, 400.0));
        v.set_trigger_bounds(Rect::from_origin_size((100.0, 50.0), (40.0, 40.0)));
        v.measure(&Unit);
        v
    }

    #[test]
    fn closed_menu_is_offscreen() {
        let v = view();
        assert_eq!(v.placement(), Placement::Offscreen);
        assert_eq!(v.overlay_origin(), Point::new(-1000.0, -1000.0));
        assert_eq!(v.row_at(Point::new(110.0, 100.0)), None);
    }

    #[test]
    fn opening_places_below_trigger() {
        let mut v = view();
        assert_eq!(v.toggle(), Transition::Opened);
        let r = v.overlay_rect().unwrap();
        assert_eq!(r.origin(), Point::new(100.0, 90.0));
        assert_eq!(r.width(), MENU_WIDTH);
        assert_eq!(v.row_at(Point::new(110.0, 95.0)), Some(0));
    }

    #[test]
    fn viewport_change_while_open_repositions() {
        let mut v = view();
        v.toggle();
        v.set_viewport(Size::new(250.0, 400.0));
        assert_eq!(v.overlay_rect().unwrap().origin(), Point::new(10.0, 90.0));
    }

    #[test]
    fn trigger_move_while_open_repositions() {
        let mut v = view();
        v.toggle();
        v.set_trigger_bounds(Rect::from_origin_size((200.0, 60.0), (40.0, 40.0)));
        assert_eq!(v.overlay_rect().unwrap().origin(), Point::new(200.0, 100.0));
        assert_eq!(v.row_at(Point::new(210.0, 105.0)), Some(0));
    }

    #[test]
    fn frame_is_parked_until_placed() {
        let mut v = view();
        let size = v.layout().unwrap().size;
        assert_eq!(v.frame(), Rect::from_origin_size((-1000.0, -1000.0), size));
        v.toggle();
        assert_eq!(v.frame(), Rect::from_origin_size((100.0, 90.0), size));
        v.close();
        assert_eq!(v.frame().origin(), Point::new(-1000.0, -1000.0));

        let unmeasured = MenuView::new(MenuConfig::default(), vec![Action::new("a", "A")]);
        assert_eq!(unmeasured.frame().size(), Size::new(MENU_WIDTH, 0.0));
    }

    #[test]
    fn unmeasured_stays_offscreen_when_open() {
        let mut v = MenuView::new(MenuConfig::default(), vec![Action::new("a", "A")]);
        v.set_viewport(Size::new(500.0, 400.0));
        v.set_trigger_bounds(Rect::from_origin_size((100.0, 50.0), (40.0, 40.0)));
        v.toggle();
        assert!(v.is_open());
        assert_eq!(v.placement(), Placement::Offscreen);
        v.measure(&FixedMetrics::default());
        assert!(v.placement().is_placed());
    }

    #[test]
    fn new_actions_need_a_new_measurement() {
        let mut v = view();
        v.toggle();
        v.set_actions(vec![Action::new("x", "X")]);
        assert_eq!(v.placement(), Placement::Offscreen);
        v.measure(&Unit);
        assert!(v.placement().is_placed());
        assert_eq!(v.display_list().row_count(), 1);
    }

    #[test]
    fn activation_closes_then_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut v = view();
        let log = seen.clone();
        v.set_on_press_action(move |ev| log.borrow_mut().push(ev.id.clone()));
        v.toggle();

        assert_eq!(v.activate_row(1), None, "disabled row");
        assert!(v.is_open());

        let ev = v.activate_row(0).unwrap();
        assert!(!v.is_open());
        assert_eq!(v.placement(), Placement::Offscreen);
        assert!(seen.borrow().is_empty());
        v.notify(&ev);
        assert_eq!(*seen.borrow(), ["share"]);
    }

    #[test]
    fn closing_clears_highlight() {
        let mut v = view();
        v.toggle();
        v.highlight.hover(Some(0));
        v.highlight.press(0);
        v.outside_interaction();
        assert_eq!(*v.highlight(), RowHighlight::new());
    }

    #[test]
    fn config_defaults() {
        let c = MenuConfig::default();
        assert_eq!(c.anchor, AnchorPreference::LeadingAligned);
        assert_eq!(c.gap, 10.0);
        assert_eq!(c.width, 200.0);
        let c = MenuConfig::default().title("Menu Title").anchored_to_right(true);
        assert!(c.anchor.is_trailing());
        assert_eq!(c.title.as_deref(), Some("Menu Title"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_reads_anchored_to_right() {
        let c: MenuConfig =
            serde_json::from_str(r#"{"isAnchoredToRight": true, "title": "Menu Title"}"#).unwrap();
        assert_eq!(c.anchor, AnchorPreference::TrailingAligned);
        assert_eq!(c.title.as_deref(), Some("Menu Title"));
        assert_eq!(c.gap, DEFAULT_GAP);
        assert_eq!(c.width, MENU_WIDTH);

        let c: MenuConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, MenuConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_writes_camel_case_fields() {
        let c = MenuConfig::default().anchored_to_right(true);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "isAnchoredToRight": true, "gap": 10.0, "width": 200.0 })
        );
        let back: MenuConfig = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
    }
}
