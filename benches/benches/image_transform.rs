// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_image_view::{ImageTransform, SurfaceGeometry};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn bound_view() -> ImageTransform<SurfaceGeometry> {
    let native = Size::new(6000.0, 4000.0);
    let mut view = ImageTransform::new(SurfaceGeometry::fitted(CONTAINER, native));
    view.set_image(native);
    view
}

fn wheel_events(n: usize, seed: u64) -> Vec<(f64, Point)> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let delta = rng.range(-240.0, 200.0);
            let pointer = Point::new(rng.range(0.0, CONTAINER.x1), rng.range(0.0, CONTAINER.y1));
            (delta, pointer)
        })
        .collect()
}

fn drag_path(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    let mut pointer = CONTAINER.center();
    (0..n)
        .map(|_| {
            pointer += Vec2::new(rng.range(-30.0, 30.0), rng.range(-30.0, 30.0));
            pointer
        })
        .collect()
}

fn bench_image_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_image_view");
    group.sample_size(50);

    for &n in &[64_usize, 1_024] {
        let wheels = wheel_events(n, 0x1A6E_0000_0000_0001);
        group.bench_function(format!("wheel_burst(n={n})"), |b| {
            b.iter_batched(
                bound_view,
                |mut view| {
                    for &(delta, pointer) in &wheels {
                        view.on_wheel(delta, pointer);
                    }
                    black_box(view.view_transform());
                },
                BatchSize::SmallInput,
            );
        });

        let path = drag_path(n, 0x1A6E_0000_0000_0002);
        group.bench_function(format!("zoomed_drag(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut view = bound_view();
                    view.show_actual_size();
                    view.on_pointer_down(CONTAINER.center());
                    view
                },
                |mut view| {
                    for &pointer in &path {
                        view.on_pointer_move(pointer, true);
                    }
                    view.on_pointer_up();
                    black_box(view.state().position);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("reset_to_fit", |b| {
        let mut view = bound_view();
        b.iter(|| {
            view.on_resize();
            black_box(view.scale_for_actual_size());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_image_transform);
criterion_main!(benches);
