// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted pointer session against one menu.
//!
//! Loads the menu definition from `demos/data/menu.json`, places the trigger in
//! the middle of the viewport, and plays a few clicks: open, hover, activate,
//! reopen, dismiss by clicking elsewhere, and reopen after a resize.
//!
//! Run:
//! - `cargo run -p perch_demos --example menu_session`
//! - `RUST_LOG=perch_menu=trace cargo run -p perch_demos --example menu_session`

use anyhow::{Context, Result};
use kurbo::{Point, Rect, Size};
use perch_menu::render::MenuItem;
use perch_menu::{Action, FixedMetrics, MenuConfig, MenuId, PointerEvent, PointerResponse, Surface};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    config: MenuConfig,
    actions: Vec<Action>,
}

const TRIGGER: Rect = Rect::new(350.0, 250.0, 450.0, 350.0);

fn click(surface: &mut Surface, at: Point) -> PointerResponse {
    surface.pointer(PointerEvent::down(at));
    surface.pointer(PointerEvent::up(at))
}

fn row_center(surface: &Surface, id: MenuId, row: usize) -> Result<Point> {
    let view = surface.menu(id).context("menu is gone")?;
    let origin = view.overlay_rect().context("menu is not on screen")?.origin();
    let rect = view
        .layout()
        .and_then(|l| l.content_rects.get(row))
        .context("row not laid out")?;
    Ok(rect.center() + origin.to_vec2())
}

fn row_index(surface: &Surface, id: MenuId, action: &str) -> Result<usize> {
    surface
        .menu(id)
        .context("menu is gone")?
        .display_list()
        .rows()
        .iter()
        .position(|r| r.id == action)
        .with_context(|| format!("no visible row for {action:?}"))
}

fn describe(surface: &Surface, id: MenuId) -> Result<()> {
    let view = surface.menu(id).context("menu is gone")?;
    let frame = view.frame();
    println!(
        "  visibility={:?} frame=({:.1}, {:.1}) {:.1}x{:.1}",
        view.visibility(),
        frame.x0,
        frame.y0,
        frame.width(),
        frame.height()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("perch_menu=debug")),
        )
        .init();

    let file: MenuFile = serde_json::from_str(include_str!("../data/menu.json"))
        .context("parsing menu definition")?;

    let mut surface = Surface::new(Size::new(800.0, 600.0));
    let menu = surface.add_menu(file.config, file.actions);
    surface.set_trigger_bounds(menu, TRIGGER);
    surface.measure(menu, &FixedMetrics::default());
    surface.set_on_press_action(menu, |ev| match serde_json::to_string(ev) {
        Ok(json) => println!("  onPressAction {json}"),
        Err(err) => println!("  onPressAction <unprintable: {err}>"),
    });

    let view = surface.menu(menu).context("menu is gone")?;
    println!("Display list:");
    for item in view.display_list().items() {
        match item {
            MenuItem::Title(t) => println!("  [{t}]"),
            MenuItem::Separator => println!("  ----"),
            MenuItem::Row(_, row) => println!(
                "  {}{} ({:?}{})",
                "  ".repeat(row.depth),
                row.title,
                row.color,
                if row.disabled { ", disabled" } else { "" }
            ),
        }
    }

    let trigger = TRIGGER.center();
    println!("Click the trigger:");
    click(&mut surface, trigger);
    describe(&surface, menu)?;

    println!("Hover over the share row:");
    let share = row_center(&surface, menu, row_index(&surface, menu, "share")?)?;
    let r = surface.pointer(PointerEvent::moved(share));
    println!("  hover {:?}", r.hover);

    println!("Click the disabled row:");
    let disabled = row_center(&surface, menu, row_index(&surface, menu, "disabled")?)?;
    let r = click(&mut surface, disabled);
    println!("  activated={:?}", r.activated);
    describe(&surface, menu)?;

    println!("Click the share row:");
    let r = click(&mut surface, share);
    println!("  activated={:?}", r.activated.map(|(_, ev)| ev.id));
    describe(&surface, menu)?;

    println!("Reopen, then click elsewhere:");
    click(&mut surface, trigger);
    let r = click(&mut surface, Point::new(20.0, 20.0));
    println!("  dismissed={}", r.dismissed.len());
    describe(&surface, menu)?;

    println!("Shrink the viewport and reopen:");
    surface.set_viewport(Size::new(500.0, 420.0));
    click(&mut surface, trigger);
    describe(&surface, menu)?;
    println!("  listeners={}", surface.listener_count());

    surface.remove_menu(menu);
    println!("Removed; listeners={}", surface.listener_count());
    Ok(())
}
