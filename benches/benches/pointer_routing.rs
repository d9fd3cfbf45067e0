// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use perch_menu::{Action, FixedMetrics, MenuConfig, MenuId, PointerEvent, Surface};

fn actions(n: usize) -> Vec<Action> {
    (0..n)
        .map(|i| {
            Action::new(format!("a{i}"), format!("Action {i}"))
                .subtitle("Subtitle")
                .subaction(Action::new(format!("a{i}.0"), "Nested"))
        })
        .collect()
}

// A row of triggers along the top edge, one menu each.
fn surface(menus: usize, rows: usize) -> (Surface, Vec<MenuId>) {
    let mut s = Surface::new(Size::new(1280.0, 800.0));
    let ids = (0..menus)
        .map(|i| {
            let id = s.add_menu(MenuConfig::default(), actions(rows));
            let x = 20.0 + i as f64 * 50.0;
            s.set_trigger_bounds(id, Rect::from_origin_size((x, 20.0), (40.0, 40.0)));
            s.measure(id, &FixedMetrics::default());
            id
        })
        .collect();
    (s, ids)
}

fn trigger_center(i: usize) -> Point {
    Point::new(40.0 + i as f64 * 50.0, 40.0)
}

fn click(s: &mut Surface, at: Point) {
    black_box(s.pointer(PointerEvent::down(at)));
    black_box(s.pointer(PointerEvent::up(at)));
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    for &menus in &[1_usize, 16, 64] {
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("open_close_{menus}_menus"), |b| {
            b.iter_batched(
                || surface(menus, 8).0,
                |mut s| {
                    click(&mut s, trigger_center(0));
                    click(&mut s, trigger_center(0));
                    s
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    for &rows in &[4_usize, 32] {
        let (mut s, ids) = surface(4, rows);
        click(&mut s, trigger_center(0));
        let rect = s
            .menu(ids[0])
            .and_then(|m| m.overlay_rect())
            .unwrap_or_default();
        let points: Vec<Point> = (0..64)
            .map(|i| Point::new(rect.center().x, rect.y0 + rect.height() * f64::from(i) / 64.0))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("sweep_{rows}_rows"), |b| {
            b.iter(|| {
                for &p in &points {
                    black_box(s.pointer(PointerEvent::moved(p)));
                }
            });
        });
    }
    group.finish();
}

fn bench_outside(c: &mut Criterion) {
    let mut group = c.benchmark_group("outside_click");
    for &menus in &[1_usize, 16] {
        group.bench_function(format!("dismiss_{menus}_menus"), |b| {
            b.iter_batched(
                || {
                    let (mut s, _) = surface(menus, 8);
                    click(&mut s, trigger_center(menus - 1));
                    s
                },
                |mut s| {
                    click(&mut s, Point::new(1200.0, 700.0));
                    s
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_toggle, bench_hover, bench_outside);
criterion_main!(benches);
