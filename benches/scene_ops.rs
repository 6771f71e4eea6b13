use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_isocity::core::{to_grid, to_pixel, PlacementGrid};
use tui_isocity::scene::Scene;
use tui_isocity::term::{SceneView, Viewport};
use tui_isocity::types::{GridPos, PixelPos};

fn bench_iso_round_trip(c: &mut Criterion) {
    c.bench_function("iso_round_trip", |b| {
        b.iter(|| {
            let px = to_pixel(black_box(GridPos::new(5, 3)));
            to_grid(black_box(px))
        })
    });
}

fn bench_grid_move(c: &mut Criterion) {
    c.bench_function("grid_move_back_and_forth", |b| {
        let mut grid = PlacementGrid::new(7, 7);
        grid.place(GridPos::new(0, 0), 3);
        b.iter(|| {
            grid.try_move(GridPos::new(0, 0), GridPos::new(6, 6));
            grid.try_move(GridPos::new(6, 6), GridPos::new(0, 0));
        })
    });
}

fn bench_to_grid_snap(c: &mut Criterion) {
    c.bench_function("to_grid_snap", |b| {
        b.iter(|| to_grid(black_box(PixelPos::new(312.7, 481.2))))
    });
}

fn bench_scene_render(c: &mut Criterion) {
    let scene = Scene::new(false);
    let view = SceneView::new();
    c.bench_function("scene_render_120x36", |b| {
        b.iter(|| view.render(black_box(&scene), Viewport::new(120, 36)))
    });
}

criterion_group!(
    benches,
    bench_iso_round_trip,
    bench_grid_move,
    bench_to_grid_snap,
    bench_scene_render
);
criterion_main!(benches);
