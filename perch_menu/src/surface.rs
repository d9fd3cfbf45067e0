// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface: hosts menus and routes pointer input to them.
//!
//! ## Routing
//!
//! Every pointer event is hit tested against the live triggers and placed
//! overlays. Overlays sit at [`OVERLAY_Z`], above triggers at [`TRIGGER_Z`], and
//! a row's path runs through its overlay. The winning hit is turned into a
//! capture → target → bubble sequence by a [`Router`].
//!
//! Delivery then happens in two stages:
//!
//! 1. Global capture listeners, one per open menu, see every completed click
//!    first and close their menu when the click landed outside it. The set of
//!    listeners is snapshotted before anything else runs, so a menu opened by
//!    this very click is not asked about it.
//! 2. The node chain. A trigger captures the press in the capture phase, keeps
//!    pointer capture until release, and toggles on release. A row activates
//!    when pressed and released in place.
//!
//! ## Listener lifetime
//!
//! A menu holds a listener exactly while open. Every path to closed (toggle,
//! outside click, activation, [`Surface::close`], [`Surface::remove_menu`])
//! hands it back.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use perch_responder::dispatcher;
use perch_responder::listeners::CaptureListeners;
use perch_responder::router::Router;
use perch_responder::types::{
    Dispatch, Outcome, ParentLookup, Phase, ResolvedHit, target_of, target_path,
};

use crate::action::{Action, ActionEvent};
use crate::event::{PointerEvent, PointerKind};
use crate::gesture::GestureSignal;
use crate::highlight::HighlightEvent;
use crate::outside::{Interaction, OutsideDetector, Regions, Verdict};
use crate::render::RowMetrics;
use crate::view::{MenuConfig, MenuView};
use crate::visibility::Transition;

/// Stacking order of triggers.
pub const TRIGGER_Z: i32 = 0;
/// Stacking order of overlays; above every trigger.
pub const OVERLAY_Z: i32 = 10;

/// Handle to a menu hosted by a [`Surface`].
///
/// Generational: a removed menu's handle never aliases a later one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuId(u32, u32);

impl MenuId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Routable node of a hosted menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// The trigger element.
    Trigger(MenuId),
    /// The overlay surface.
    Overlay(MenuId),
    /// A row inside the overlay, by row index.
    Row(MenuId, usize),
}

impl NodeKey {
    /// The menu this node belongs to.
    pub fn menu(self) -> MenuId {
        match self {
            Self::Trigger(m) | Self::Overlay(m) | Self::Row(m, _) => m,
        }
    }
}

/// Rows are children of their overlay; triggers and overlays are roots.
#[derive(Copy, Clone, Debug, Default)]
pub struct Parents;

impl ParentLookup<NodeKey> for Parents {
    fn parent_of(&self, node: &NodeKey) -> Option<NodeKey> {
        match *node {
            NodeKey::Row(m, _) => Some(NodeKey::Overlay(m)),
            NodeKey::Trigger(_) | NodeKey::Overlay(_) => None,
        }
    }
}

/// What a pointer event did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerResponse {
    /// The routed target, if any.
    pub target: Option<NodeKey>,
    /// True if a node consumed the event.
    pub consumed: bool,
    /// Menus closed by an outside click.
    pub dismissed: Vec<MenuId>,
    /// Menus opened or closed by their trigger.
    pub toggled: Vec<(MenuId, Transition)>,
    /// The activated action, if any; already reported to the callback.
    pub activated: Option<(MenuId, ActionEvent)>,
    /// Row hover changes.
    pub hover: Vec<(MenuId, HighlightEvent)>,
}

/// Host for any number of independent menus.
#[derive(Debug)]
pub struct Surface {
    menus: Vec<Option<MenuView>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    listeners: CaptureListeners<MenuId>,
    router: Router<NodeKey, Parents>,
    viewport: Size,
}

impl Surface {
    /// Create an empty surface for a viewport of the given size.
    pub fn new(viewport: Size) -> Self {
        Self {
            menus: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            listeners: CaptureListeners::new(),
            router: Router::new(),
            viewport,
        }
    }

    /// Add a closed menu.
    pub fn add_menu(&mut self, config: MenuConfig, actions: Vec<Action>) -> MenuId {
        let mut view = MenuView::new(config, actions);
        view.set_viewport(self.viewport);
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.menus[idx] = Some(view);
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.menus.push(Some(view));
            self.generations.push(generation);
            (self.menus.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "MenuId uses 32-bit indices."
        )]
        let id = MenuId(idx as u32, generation);
        tracing::debug!(?id, "menu added");
        id
    }

    /// Remove a menu, closing it and releasing its listener.
    ///
    /// Returns the removed view, or `None` for a stale handle.
    pub fn remove_menu(&mut self, id: MenuId) -> Option<MenuView> {
        if !self.is_alive(id) {
            return None;
        }
        let transition = self.view_mut(id)?.close();
        self.sync_listener(id, transition);
        if self.router.captured().is_some_and(|n| n.menu() == id) {
            self.router.capture(None);
        }
        let mut view = self.menus[id.idx()].take()?;
        self.free_list.push(id.idx());
        // Closing already detached an open menu; this catches anything left.
        if let Some(lid) = view.listener.take() {
            self.listeners.unsubscribe(lid);
        }
        tracing::debug!(?id, "menu removed");
        Some(view)
    }

    /// True if `id` refers to a hosted menu.
    pub fn is_alive(&self, id: MenuId) -> bool {
        self.menus.get(id.idx()).is_some_and(Option::is_some)
            && self.generations.get(id.idx()) == Some(&id.1)
    }

    /// Access a hosted menu.
    pub fn menu(&self, id: MenuId) -> Option<&MenuView> {
        if !self.is_alive(id) {
            return None;
        }
        self.menus[id.idx()].as_ref()
    }

    /// Hosted menus with their handles.
    pub fn menus(&self) -> impl Iterator<Item = (MenuId, &MenuView)> {
        self.menus.iter().enumerate().filter_map(|(idx, m)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "MenuId uses 32-bit indices."
            )]
            let id = MenuId(idx as u32, self.generations[idx]);
            m.as_ref().map(|v| (id, v))
        })
    }

    /// Register the action-selection callback of a menu.
    pub fn set_on_press_action(&mut self, id: MenuId, f: impl FnMut(&ActionEvent) + 'static) {
        if let Some(v) = self.view_mut(id) {
            v.set_on_press_action(f);
        }
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport; open menus are placed again.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        for view in self.menus.iter_mut().flatten() {
            view.set_viewport(viewport);
        }
    }

    /// Record where a menu's trigger is laid out.
    pub fn set_trigger_bounds(&mut self, id: MenuId, bounds: Rect) {
        if let Some(v) = self.view_mut(id) {
            v.set_trigger_bounds(bounds);
        }
    }

    /// Lay out a menu's content.
    pub fn measure(&mut self, id: MenuId, metrics: &impl RowMetrics) {
        if let Some(v) = self.view_mut(id) {
            v.measure(metrics);
        }
    }

    /// Replace a menu's actions. Call [`measure`](Self::measure) afterwards.
    pub fn set_actions(&mut self, id: MenuId, actions: Vec<Action>) {
        if let Some(v) = self.view_mut(id) {
            v.set_actions(actions);
        }
    }

    /// Close a menu programmatically.
    pub fn close(&mut self, id: MenuId) {
        if let Some(v) = self.view_mut(id) {
            let t = v.close();
            self.sync_listener(id, t);
        }
    }

    /// Number of live outside-interaction listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The node holding pointer capture.
    pub fn captured(&self) -> Option<NodeKey> {
        self.router.captured()
    }

    /// Hit candidates under `point`.
    pub fn hit_test(&self, point: Point) -> Vec<ResolvedHit<NodeKey>> {
        let mut hits = Vec::new();
        for (id, view) in self.menus() {
            if view.trigger_bounds().is_some_and(|r| r.contains(point)) {
                hits.push(ResolvedHit {
                    node: NodeKey::Trigger(id),
                    path: None,
                    z: TRIGGER_Z,
                });
            }
            if view.overlay_rect().is_some_and(|r| r.contains(point)) {
                let (node, path) = match view.row_at(point) {
                    Some(row) => (
                        NodeKey::Row(id, row),
                        vec![NodeKey::Overlay(id), NodeKey::Row(id, row)],
                    ),
                    None => (NodeKey::Overlay(id), vec![NodeKey::Overlay(id)]),
                };
                hits.push(ResolvedHit {
                    node,
                    path: Some(path),
                    z: OVERLAY_Z,
                });
            }
        }
        hits
    }

    /// Feed one pointer event.
    pub fn pointer(&mut self, event: PointerEvent) -> PointerResponse {
        let hits = self.hit_test(event.position);
        let seq = self.router.route(&hits);
        let path = target_path(&seq);
        let mut response = PointerResponse {
            target: target_of(&seq),
            ..PointerResponse::default()
        };

        self.update_hover(response.target, &mut response);

        if event.is_click() {
            self.deliver_outside(event.position, &path, &mut response);
        }

        let consumed = dispatcher::run(&seq, &mut *self, |d, surface| {
            surface.deliver(d, event.kind, &mut response)
        });
        response.consumed = consumed.is_some();

        if matches!(event.kind, PointerKind::Up | PointerKind::Cancel) {
            for view in self.menus.iter_mut().flatten() {
                view.highlight.cancel();
            }
        }
        response
    }

    fn update_hover(&mut self, target: Option<NodeKey>, response: &mut PointerResponse) {
        let ids: Vec<MenuId> = self.menus().map(|(id, _)| id).collect();
        for id in ids {
            let row = match target {
                Some(NodeKey::Row(m, row)) if m == id => Some(row),
                _ => None,
            };
            let Some(view) = self.view_mut(id) else {
                continue;
            };
            for e in view.highlight.hover(row) {
                tracing::trace!(?id, event = ?e, "row hover");
                response.hover.push((id, e));
            }
        }
    }

    fn deliver_outside(&mut self, position: Point, path: &[NodeKey], response: &mut PointerResponse) {
        for lid in self.listeners.snapshot() {
            let Some(&id) = self.listeners.get(lid) else {
                continue;
            };
            let Some(view) = self.view_mut(id) else {
                continue;
            };
            let detector = OutsideDetector::new(NodeKey::Trigger(id), NodeKey::Overlay(id));
            let interaction = Interaction {
                position,
                target_path: path,
            };
            let regions = Regions {
                trigger: view.trigger_bounds(),
                overlay: view.overlay_rect(),
            };
            match detector.check(view.visibility(), &interaction, &regions) {
                Verdict::Outside => {
                    let t = view.outside_interaction();
                    self.sync_listener(id, t);
                    response.dismissed.push(id);
                }
                Verdict::Closed => tracing::trace!(?id, "outside check on closed menu"),
                Verdict::InsideTrigger | Verdict::InsideOverlay => {}
            }
        }
    }

    fn deliver(
        &mut self,
        d: &Dispatch<NodeKey>,
        kind: PointerKind,
        response: &mut PointerResponse,
    ) -> Outcome {
        match (d.phase, d.node) {
            (Phase::Capture, NodeKey::Trigger(id)) => self.trigger_gesture(id, kind, response),
            (Phase::Target, NodeKey::Row(id, row)) => self.row_press(id, row, kind, response),
            _ => Outcome::Continue,
        }
    }

    fn trigger_gesture(
        &mut self,
        id: MenuId,
        kind: PointerKind,
        response: &mut PointerResponse,
    ) -> Outcome {
        let Some(view) = self.view_mut(id) else {
            return Outcome::Continue;
        };
        match view.gesture.handle(kind) {
            GestureSignal::Captured => {
                self.router.capture(Some(NodeKey::Trigger(id)));
            }
            GestureSignal::Tracking => {}
            GestureSignal::Toggle => {
                let t = view.toggle();
                self.router.capture(None);
                self.sync_listener(id, t);
                response.toggled.push((id, t));
            }
            GestureSignal::Released => {
                self.router.capture(None);
            }
            GestureSignal::Ignored => return Outcome::Continue,
        }
        Outcome::StopAndConsume
    }

    fn row_press(
        &mut self,
        id: MenuId,
        row: usize,
        kind: PointerKind,
        response: &mut PointerResponse,
    ) -> Outcome {
        let Some(view) = self.view_mut(id) else {
            return Outcome::Continue;
        };
        match kind {
            PointerKind::Down => view.highlight.press(row),
            PointerKind::Up => {
                let Some(event) = view
                    .highlight
                    .release(Some(row))
                    .and_then(|r| view.activate_row(r))
                else {
                    return Outcome::StopAndConsume;
                };
                self.sync_listener(id, Transition::Closed);
                if let Some(view) = self.view_mut(id) {
                    view.notify(&event);
                }
                response.activated = Some((id, event));
            }
            PointerKind::Move | PointerKind::Cancel => return Outcome::Continue,
        }
        Outcome::StopAndConsume
    }

    fn sync_listener(&mut self, id: MenuId, t: Transition) {
        let Some(view) = self.view_mut(id) else {
            return;
        };
        match t {
            Transition::Opened => {
                if view.listener.is_some() {
                    return;
                }
                let lid = self.listeners.subscribe(id);
                if let Some(view) = self.view_mut(id) {
                    view.listener = Some(lid);
                }
                tracing::debug!(?id, "outside listener attached");
            }
            Transition::Closed => {
                if let Some(lid) = view.listener.take() {
                    self.listeners.unsubscribe(lid);
                    tracing::debug!(?id, "outside listener detached");
                }
            }
            Transition::Unchanged => {}
        }
    }

    fn view_mut(&mut self, id: MenuId) -> Option<&mut MenuView> {
        if self.generations.get(id.idx()) != Some(&id.1) {
            return None;
        }
        self.menus.get_mut(id.idx())?.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use core::cell::RefCell;

    struct Unit;

    impl RowMetrics for Unit {
        fn line_height(&self, _text: &str, font_size: f64) -> f64 {
            font_size
        }
    }

    const TRIGGER: Point = Point::new(120.0, 70.0);
    const ELSEWHERE: Point = Point::new(10.0, 10.0);
    // Overlay opens at (100, 90); rows span y 90..127, 128..163, 164..201.
    const SHARE: Point = Point::new(150.0, 100.0);
    const DISABLED: Point = Point::new(150.0, 140.0);
    const DELETE: Point = Point::new(150.0, 180.0);

    fn actions() -> Vec<Action> {
        vec![
            Action::new("share", "Share"),
            Action::new("off", "Off").disabled(),
            Action::new("delete", "Delete").destructive(),
        ]
    }

    fn surface() -> (Surface, MenuId) {
        let mut s = Surface::new(Size::new(500.0, 400.0));
        let id = s.add_menu(MenuConfig::default(), actions());
        s.set_trigger_bounds(id, Rect::from_origin_size((100.0, 50.0), (40.0, 40.0)));
        s.measure(id, &Unit);
        (s, id)
    }

    fn click(s: &mut Surface, at: Point) -> PointerResponse {
        s.pointer(PointerEvent::down(at));
        s.pointer(PointerEvent::up(at))
    }

    fn is_open(s: &Surface, id: MenuId) -> bool {
        s.menu(id).is_some_and(MenuView::is_open)
    }

    #[test]
    fn opens_on_release_not_press() {
        let (mut s, id) = surface();
        let r = s.pointer(PointerEvent::down(TRIGGER));
        assert!(r.consumed);
        assert!(!is_open(&s, id));
        assert_eq!(s.captured(), Some(NodeKey::Trigger(id)));

        let r = s.pointer(PointerEvent::up(TRIGGER));
        assert!(is_open(&s, id));
        assert_eq!(r.toggled, vec![(id, Transition::Opened)]);
        assert_eq!(s.captured(), None);
        assert_eq!(s.listener_count(), 1);
    }

    #[test]
    fn opening_click_is_not_an_outside_click() {
        let (mut s, id) = surface();
        let r = click(&mut s, TRIGGER);
        assert!(r.dismissed.is_empty());
        assert!(is_open(&s, id));
        let rect = s.menu(id).and_then(MenuView::overlay_rect).unwrap();
        assert_eq!(rect.origin(), Point::new(100.0, 90.0));
    }

    #[test]
    fn outside_click_closes() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        let r = click(&mut s, ELSEWHERE);
        assert_eq!(r.dismissed, vec![id]);
        assert!(!is_open(&s, id));
        assert_eq!(s.listener_count(), 0);
        assert_eq!(
            s.menu(id).map(MenuView::overlay_origin),
            Some(Point::new(-1000.0, -1000.0))
        );
    }

    #[test]
    fn trigger_click_while_open_closes_once() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        let r = click(&mut s, TRIGGER);
        assert!(r.dismissed.is_empty());
        assert_eq!(r.toggled, vec![(id, Transition::Closed)]);
        assert!(!is_open(&s, id));
        assert_eq!(s.listener_count(), 0);
    }

    #[test]
    fn clicks_inside_overlay_keep_it_open() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        // Separator between the first two rows: overlay, not a row.
        let r = click(&mut s, Point::new(150.0, 127.5));
        assert_eq!(r.target, Some(NodeKey::Overlay(id)));
        assert!(r.dismissed.is_empty());
        assert!(is_open(&s, id));
    }

    #[test]
    fn row_activation_closes_and_reports() {
        let (mut s, id) = surface();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let log = seen.clone();
        s.set_on_press_action(id, move |ev| log.borrow_mut().push(ev.event.clone()));

        click(&mut s, TRIGGER);
        let r = click(&mut s, SHARE);
        let (menu, ev) = r.activated.unwrap();
        assert_eq!(menu, id);
        assert_eq!(ev.id, "share");
        assert!(!is_open(&s, id));
        assert_eq!(s.listener_count(), 0);
        assert_eq!(*seen.borrow(), ["share"]);
    }

    #[test]
    fn disabled_row_is_inert() {
        let (mut s, id) = surface();
        let calls = Rc::new(RefCell::new(0));
        let count = calls.clone();
        s.set_on_press_action(id, move |_| *count.borrow_mut() += 1);

        click(&mut s, TRIGGER);
        let r = click(&mut s, DISABLED);
        assert!(r.consumed);
        assert_eq!(r.activated, None);
        assert!(is_open(&s, id));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn press_and_release_on_different_rows_does_nothing() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        s.pointer(PointerEvent::down(SHARE));
        s.pointer(PointerEvent::moved(DELETE));
        let r = s.pointer(PointerEvent::up(DELETE));
        assert_eq!(r.activated, None);
        assert!(is_open(&s, id));
        assert_eq!(s.menu(id).unwrap().highlight().pressed(), None);
    }

    #[test]
    fn hover_follows_rows() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        let r = s.pointer(PointerEvent::moved(SHARE));
        assert_eq!(r.hover, vec![(id, HighlightEvent::Enter(0))]);
        let r = s.pointer(PointerEvent::moved(DELETE));
        assert_eq!(
            r.hover,
            vec![(id, HighlightEvent::Leave(0)), (id, HighlightEvent::Enter(2))]
        );
        click(&mut s, ELSEWHERE);
        assert_eq!(s.menu(id).unwrap().highlight().hovered(), None);
    }

    #[test]
    fn captured_press_toggles_even_when_released_off_trigger() {
        let (mut s, id) = surface();
        s.pointer(PointerEvent::down(TRIGGER));
        s.pointer(PointerEvent::moved(Point::new(400.0, 300.0)));
        let r = s.pointer(PointerEvent::up(Point::new(400.0, 300.0)));
        assert_eq!(r.target, Some(NodeKey::Trigger(id)));
        assert!(is_open(&s, id));
    }

    #[test]
    fn cancelled_press_does_not_toggle() {
        let (mut s, id) = surface();
        s.pointer(PointerEvent::down(TRIGGER));
        s.pointer(PointerEvent::cancel(TRIGGER));
        assert_eq!(s.captured(), None);
        s.pointer(PointerEvent::up(TRIGGER));
        assert!(!is_open(&s, id));
        assert_eq!(s.listener_count(), 0);
    }

    #[test]
    fn opening_one_menu_closes_another() {
        let (mut s, a) = surface();
        let b = s.add_menu(MenuConfig::default(), actions());
        s.set_trigger_bounds(b, Rect::from_origin_size((400.0, 50.0), (40.0, 40.0)));
        s.measure(b, &Unit);

        click(&mut s, TRIGGER);
        let r = click(&mut s, Point::new(420.0, 70.0));
        assert_eq!(r.dismissed, vec![a]);
        assert!(!is_open(&s, a));
        assert!(is_open(&s, b));
        assert_eq!(s.listener_count(), 1);
        // B is anchored near the right edge and shifted back inside.
        let rect = s.menu(b).and_then(MenuView::overlay_rect).unwrap();
        assert_eq!(rect.x0, 240.0);
    }

    #[test]
    fn no_listener_leaks_over_many_cycles() {
        let (mut s, id) = surface();
        for i in 0..50 {
            click(&mut s, TRIGGER);
            assert_eq!(s.listener_count(), 1);
            match i % 3 {
                0 => click(&mut s, TRIGGER),
                1 => click(&mut s, ELSEWHERE),
                _ => click(&mut s, DELETE),
            };
            assert_eq!(s.listener_count(), 0, "cycle {i}");
            assert!(!is_open(&s, id));
        }
    }

    #[test]
    fn removing_an_open_menu_releases_everything() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        s.pointer(PointerEvent::down(TRIGGER));
        let view = s.remove_menu(id).unwrap();
        assert!(!view.is_open());
        assert!(!view.is_listening());
        assert_eq!(s.listener_count(), 0);
        assert_eq!(s.captured(), None);
        assert!(s.remove_menu(id).is_none());

        // Stale handles are ignored and never alias a new menu.
        let fresh = s.add_menu(MenuConfig::default(), actions());
        assert_ne!(fresh, id);
        s.set_trigger_bounds(id, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(s.menu(id).is_none());
        assert_eq!(s.menu(fresh).unwrap().trigger_bounds(), None);
    }

    #[test]
    fn viewport_change_repositions_open_menus() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        s.set_viewport(Size::new(250.0, 400.0));
        let rect = s.menu(id).and_then(MenuView::overlay_rect).unwrap();
        assert_eq!(rect.origin(), Point::new(10.0, 90.0));
    }

    #[test]
    fn trigger_move_while_open_repositions() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        s.set_trigger_bounds(id, Rect::from_origin_size((200.0, 60.0), (40.0, 40.0)));
        let rect = s.menu(id).and_then(MenuView::overlay_rect).unwrap();
        assert_eq!(rect.origin(), Point::new(200.0, 100.0));

        // The moved trigger is what toggles now.
        let r = click(&mut s, Point::new(220.0, 80.0));
        assert_eq!(r.toggled, vec![(id, Transition::Closed)]);
        assert!(r.dismissed.is_empty());
    }

    #[test]
    fn open_menu_holds_one_listener_until_closed() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        assert!(s.menu(id).unwrap().is_listening());
        assert_eq!(s.listener_count(), 1);

        // Hovering and pressing inside the overlay leaves the subscription alone.
        s.pointer(PointerEvent::moved(SHARE));
        s.pointer(PointerEvent::down(SHARE));
        s.pointer(PointerEvent::cancel(SHARE));
        assert_eq!(s.listener_count(), 1);

        click(&mut s, TRIGGER);
        assert!(!s.menu(id).unwrap().is_listening());
        assert_eq!(s.listener_count(), 0);
    }

    #[test]
    fn programmatic_close_detaches() {
        let (mut s, id) = surface();
        click(&mut s, TRIGGER);
        s.close(id);
        assert!(!is_open(&s, id));
        assert_eq!(s.listener_count(), 0);
    }

    #[test]
    fn rows_are_parented_to_their_overlay() {
        let (_, id) = surface();
        assert_eq!(
            Parents.parent_of(&NodeKey::Row(id, 3)),
            Some(NodeKey::Overlay(id))
        );
        assert_eq!(Parents.parent_of(&NodeKey::Trigger(id)), None);
    }
}
