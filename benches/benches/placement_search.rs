// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{
    AnchorSpace, Placement, PlacementOrder, SizeBounds, geometry, offset, resolve_default,
    resolve_sticky,
};

const EXTENT: Size = Size::new(1280.0, 800.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors scattered over the viewport, some hugging its edges.
fn gen_anchors(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let w = 20.0 + rng.next_f64() * 100.0;
            let h = 16.0 + rng.next_f64() * 24.0;
            let x = rng.next_f64() * (EXTENT.width - w);
            let y = rng.next_f64() * (EXTENT.height - h);
            Rect::from_origin_size((x, y), (w, h))
        })
        .collect()
}

fn spaces(anchors: &[Rect]) -> Vec<AnchorSpace> {
    let bounds = geometry::bounding_rect(EXTENT, None);
    anchors
        .iter()
        .map(|a| AnchorSpace::new(*a, bounds, 5.0))
        .collect()
}

fn bench_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("default");
    let spaces = spaces(&gen_anchors(1024));
    for &(name, panel) in &[
        ("small_panel", Size::new(160.0, 60.0)),
        ("tall_panel", Size::new(240.0, 900.0)),
    ] {
        group.throughput(Throughput::Elements((spaces.len() * Placement::ALL.len()) as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for preferred in Placement::ALL {
                    let order = PlacementOrder::fallback_for(preferred);
                    for space in &spaces {
                        black_box(resolve_default(&order, black_box(panel), space));
                    }
                }
            });
        });
    }
    group.finish();
}

fn bench_sticky(c: &mut Criterion) {
    let mut group = c.benchmark_group("sticky");
    let spaces = spaces(&gen_anchors(1024));
    let panel = Size::new(200.0, 320.0);
    let bounds = SizeBounds {
        min_height: Some(120.0),
        min_width: Some(120.0),
        ..Default::default()
    };
    group.throughput(Throughput::Elements((spaces.len() * Placement::ALL.len()) as u64));
    group.bench_function("keep_current", |b| {
        b.iter(|| {
            for current in Placement::ALL {
                let order = PlacementOrder::fallback_for(current);
                for space in &spaces {
                    black_box(resolve_sticky(&order, panel, space, Some(current), &bounds));
                }
            }
        });
    });
    group.finish();
}

fn bench_resolve_and_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_and_position");
    let anchors = gen_anchors(1024);
    let spaces = spaces(&anchors);
    let panel = Size::new(160.0, 60.0);
    let order = PlacementOrder::fallback_for(Placement::BottomStart);
    group.throughput(Throughput::Elements(anchors.len() as u64));
    group.bench_function("bottom_start", |b| {
        b.iter(|| {
            for (anchor, space) in anchors.iter().zip(&spaces) {
                let chosen = resolve_default(&order, panel, space);
                let frame = chosen.placement().axis().grow(panel, space.offset());
                black_box(offset::position_for(chosen.placement(), *anchor, frame, EXTENT));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_default, bench_sticky, bench_resolve_and_position);
criterion_main!(benches);
