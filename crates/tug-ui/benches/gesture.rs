use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tug_testing::PullRobot;

const MOVE_COUNTS: &[u32] = &[16, 64, 256];

fn bench_drag_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_tracking");
    for &moves in MOVE_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter(|| {
                let mut robot = PullRobot::new();
                robot.scrolled_to_top(true);
                robot.press_and_move(black_box(300.0), black_box(500.0), moves);
                black_box(robot.controller.pulled_down_y())
            })
        });
    }
    group.finish();
}

fn bench_full_pull_cycle(c: &mut Criterion) {
    c.bench_function("full_pull_cycle", |b| {
        b.iter(|| {
            let mut robot = PullRobot::new();
            robot.scrolled_to_top(true);
            robot.drag(black_box(300.0), black_box(400.0));
            robot.settle();
            robot.controller.set_refreshing(false, true);
            robot.settle();
            black_box(robot.controller.is_refreshing())
        })
    });
}

criterion_group!(benches, bench_drag_tracking, bench_full_pull_cycle);
criterion_main!(benches);
