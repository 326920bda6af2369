use cgmath::Vector2;
use criterion::{criterion_group, criterion_main, Criterion};

use carpet::square::Square;
use carpet::QuadSink;

struct NullSink;

impl QuadSink for NullSink {
    fn draw_quad(&mut self, _corners: [Vector2<f32>; 4]) {}
}

pub fn subdivide_five_levels(c: &mut Criterion) {
    c.bench_function("subdivide", |b| {
        b.iter(|| carpet::subdivide(&mut NullSink, Square::unit(), 4))
    });
}

criterion_group!(benches, subdivide_five_levels);
criterion_main!(benches);
