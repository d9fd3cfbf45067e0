// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a menu lands for triggers all over the viewport.
//!
//! Prints the resolved origin for a grid of trigger positions, once per anchor
//! preference, so the edge rules are easy to eyeball: overlays hang below the
//! trigger, slide left near the right edge, and flip up near the bottom.
//!
//! Run:
//! - `cargo run -p perch_demos --example placement_grid`

use kurbo::{Rect, Size};
use perch_geometry::{AnchorPreference, DEFAULT_GAP, resolve};

fn main() {
    let viewport = Size::new(600.0, 400.0);
    let natural = Size::new(200.0, 150.0);
    let trigger = Size::new(40.0, 30.0);

    for anchor in [AnchorPreference::LeadingAligned, AnchorPreference::TrailingAligned] {
        println!("{anchor:?} in {}x{}:", viewport.width, viewport.height);
        for y in (0..4).map(|i| f64::from(i) * 120.0) {
            let row: Vec<String> = (0..5)
                .map(|i| f64::from(i) * 140.0)
                .map(|x| {
                    let t = Rect::from_origin_size((x, y), trigger);
                    let r = resolve(t, natural, viewport, anchor, DEFAULT_GAP);
                    format!("({:>3.0},{:>3.0})", r.x0, r.y0)
                })
                .collect();
            println!("  y={y:>3.0}: {}", row.join(" "));
        }
    }

    // The three reference cases for a 40x40 trigger and a 200x300 menu.
    let t = Rect::from_origin_size((100.0, 50.0), (40.0, 40.0));
    let menu = Size::new(200.0, 300.0);
    for vp in [
        Size::new(500.0, 400.0),
        Size::new(250.0, 400.0),
        Size::new(500.0, 150.0),
    ] {
        let r = resolve(t, menu, vp, AnchorPreference::LeadingAligned, DEFAULT_GAP);
        println!(
            "viewport {}x{} -> ({}, {}, {}, {})",
            vp.width,
            vp.height,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
    }
}
