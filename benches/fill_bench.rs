use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use image::Rgba;
use touchup::{
    brush_engine::{
        brush::{BlendMode, Brush},
        stroke::stroke_segment,
    },
    canvas::{flood_fill::FloodFill, raster::Raster},
    utils::{color::Rgb, vector::Vec2},
};

const SIZE: u32 = 1024;

fn bench_flood_fill(c: &mut Criterion) {
    let fill = FloodFill::new(Rgba([0, 0, 0, 255]), 30);
    c.bench_function("flood_fill_1024px", |b| {
        b.iter_batched(
            || Raster::filled(SIZE, SIZE, Rgba([255, 255, 255, 255])),
            |mut raster| fill.fill(&mut raster, Vec2::new(512.0, 512.0)),
            BatchSize::LargeInput,
        )
    });
}

fn bench_stroke_segment(c: &mut Criterion) {
    let brush = Brush::new(20.0, Rgb::BLACK, 0.5, BlendMode::Normal);
    let mut raster = Raster::filled(SIZE, SIZE, Rgba([255, 255, 255, 255]));
    c.bench_function("stroke_segment_diagonal_1024px", |b| {
        b.iter(|| {
            stroke_segment(
                &mut raster,
                &brush,
                Vec2::new(0.0, 0.0),
                Vec2::new(SIZE as f32, SIZE as f32),
            )
        })
    });
}

criterion_group!(benches, bench_flood_fill, bench_stroke_segment);
criterion_main!(benches);
