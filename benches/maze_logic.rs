use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_maze::core::{generate, Grid, MazeConfig, MazeSession};
use tui_maze::engine::Playback;
use tui_maze::term::{Camera, FrameBuffer, MazeView, Viewport};
use tui_maze::types::{Point, Tile};

fn bench_generate(c: &mut Criterion) {
    let mut grid = Grid::new(51, 51, Tile::Road);
    let mut seed = 0u64;

    c.bench_function("generate_51x51", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut rng = StdRng::seed_from_u64(seed);
            generate(black_box(&mut grid), &mut rng).unwrap();
        })
    });
}

fn bench_run_to_goal(c: &mut Criterion) {
    let session = MazeSession::new(MazeConfig::new(51, 51, 12345)).unwrap();
    let limit = session.step_limit();

    c.bench_function("run_to_goal_51x51", |b| {
        b.iter(|| {
            let mut s = session.clone();
            black_box(s.run_to_goal(limit).unwrap());
        })
    });
}

fn bench_step(c: &mut Criterion) {
    let mut session = MazeSession::new(MazeConfig::new(101, 101, 7)).unwrap();

    c.bench_function("agent_step", |b| {
        b.iter(|| {
            if session.is_goal_reached() {
                session.regenerate(session.seed()).unwrap();
            }
            black_box(session.step().unwrap());
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let playback = Playback::new(MazeSession::new(MazeConfig::new(51, 51, 1)).unwrap());
    let camera = Camera::at(Point::new(1, 1));
    let view = MazeView::new();
    let viewport = Viewport::new(160, 48);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_frame_160x48", |b| {
        b.iter(|| {
            view.render_into(black_box(&playback), &camera, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_run_to_goal,
    bench_step,
    bench_render_frame
);
criterion_main!(benches);
