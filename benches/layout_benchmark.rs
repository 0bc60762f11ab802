//! Layout benchmark: measure split, resolution, and paint performance.
//!
//! Layout declaration happens once per figure, but resolution and painting
//! run every frame, so those are the paths that matter.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use easel::{Bounds, Cell, ClipMode, Figure, Grid, Matrix, ScreenId, Session};

fn split_grid(c: &mut Criterion) {
    let grid = Grid::new(4, 4).unwrap();

    c.bench_function("split_grid_4x4", |b| {
        b.iter(|| {
            let mut figure = Figure::new();
            figure.split(black_box(&grid).bounds()).unwrap()
        })
    });
}

fn matrix_bounds(c: &mut Criterion) {
    let matrix = Matrix::new(vec![vec![1, 1, 2], vec![3, 4, 2], vec![3, 5, 5]])
        .unwrap()
        .widths(vec![2.0, 1.0, 1.0])
        .unwrap();

    c.bench_function("matrix_bounds_3x3", |b| {
        b.iter(|| black_box(&matrix).bounds())
    });
}

fn resolve_screen(c: &mut Criterion) {
    let mut figure = Figure::new();
    figure.split(Grid::new(4, 4).unwrap().bounds()).unwrap();

    c.bench_function("resolve_screen_80x24", |b| {
        b.iter(|| {
            figure
                .resolve(black_box(ScreenId::new(7)), 80, 24)
                .unwrap()
        })
    });
}

fn bounds_resolve(c: &mut Criterion) {
    let bounds = Bounds::new(0.125, 0.875, 0.25, 0.75).unwrap();

    c.bench_function("bounds_resolve", |b| {
        b.iter(|| black_box(&bounds).resolve(black_box(200), black_box(50)))
    });
}

fn paint_panel(c: &mut Criterion) {
    let mut session = Session::new(200, 50);
    let ids = session.split_grid(&Grid::new(2, 2).unwrap()).unwrap();
    session.activate(ids[0]).unwrap();

    c.bench_function("paint_fill_and_frame", |b| {
        b.iter(|| {
            let mut painter = session.painter(ClipMode::Screen).unwrap();
            painter.fill(black_box(Cell::new('.')));
            painter.frame(easel::Rgb::WHITE, easel::Rgb::BLACK);
        })
    });
}

fn present_frame(c: &mut Criterion) {
    let mut session = Session::new(200, 50);
    let ids = session.split_grid(&Grid::new(2, 2).unwrap()).unwrap();
    session.activate(ids[0]).unwrap();
    session
        .painter(ClipMode::Screen)
        .unwrap()
        .fill(Cell::new('.'));

    c.bench_function("present_200x50", |b| {
        b.iter(|| {
            let mut sink = std::io::sink();
            session.present(&mut sink).unwrap();
        })
    });
}

criterion_group!(
    benches,
    split_grid,
    matrix_bounds,
    resolve_screen,
    bounds_resolve,
    paint_panel,
    present_frame,
);
criterion_main!(benches);
