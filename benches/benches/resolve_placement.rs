// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use perch_geometry::{AnchorPreference, DEFAULT_GAP, Measurements, resolve, resolve_measured};

// Triggers spread over a grid that reaches past the viewport, so every branch
// of the resolver gets exercised.
fn gen_triggers(n: usize, viewport: Size) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    let step_x = viewport.width * 1.2 / n as f64;
    let step_y = viewport.height * 1.2 / n as f64;
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * step_x - 20.0;
            let y0 = y as f64 * step_y - 20.0;
            out.push(Rect::from_origin_size((x0, y0), (40.0, 40.0)));
        }
    }
    out
}

fn bench_resolve(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let natural = Size::new(200.0, 300.0);
    let mut group = c.benchmark_group("resolve");
    for &n in &[8_usize, 32, 128] {
        let triggers = gen_triggers(n, viewport);
        group.throughput(Throughput::Elements(triggers.len() as u64));
        for anchor in [AnchorPreference::LeadingAligned, AnchorPreference::TrailingAligned] {
            let name = format!("{anchor:?}_{n}x{n}");
            group.bench_function(name, |b| {
                b.iter(|| {
                    for &t in &triggers {
                        black_box(resolve(
                            black_box(t),
                            natural,
                            viewport,
                            anchor,
                            DEFAULT_GAP,
                        ));
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_resolve_measured(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let triggers = gen_triggers(32, viewport);
    let ready: Vec<Measurements> = triggers
        .iter()
        .map(|&t| Measurements {
            trigger: Some(t),
            overlay: Some(Size::new(200.0, 300.0)),
        })
        .collect();
    let pending: Vec<Measurements> = triggers
        .iter()
        .map(|&t| Measurements {
            trigger: Some(t),
            overlay: None,
        })
        .collect();

    let mut group = c.benchmark_group("resolve_measured");
    group.throughput(Throughput::Elements(ready.len() as u64));
    for (name, set) in [("ready", &ready), ("pending", &pending)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for m in set {
                    black_box(resolve_measured(
                        black_box(m),
                        viewport,
                        AnchorPreference::LeadingAligned,
                        DEFAULT_GAP,
                    ));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_resolve_measured);
criterion_main!(benches);
