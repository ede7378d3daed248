//! # Rover Benchmark

use criterion::{criterion_group, criterion_main, Criterion};

use rov_lib::{grid::Grid, rover_ctrl::{Command, Rover}};

fn rover_benchmark(c: &mut Criterion) {
    // ---- Build a large jagged grid with a sprinkling of obstacles ----

    let rows: Vec<Vec<bool>> = (0..200)
        .map(|r| (0..(150 + r % 50)).map(|c| r % 7 == 3 && c % 11 == 5).collect())
        .collect();
    let grid = Grid::new(rows).unwrap();

    // A long batch, obstacles may cut it short which is fine for timing
    let tokens: Vec<&str> = ["F", "F", "C", "B", "A", "F", "C", "C", "F", "A"]
        .iter()
        .cycle()
        .take(10_000)
        .copied()
        .collect();
    let commands: Vec<Command> = tokens.iter().map(|t| t.parse().unwrap()).collect();

    c.bench_function("Rover::send_commands", |b| {
        b.iter(|| {
            let mut rover = Rover::new(&grid, 0, 0, "N", false).unwrap();
            let _ = rover.send_commands(Some(&tokens));
            rover.get_position()
        })
    });

    c.bench_function("Rover::send_command_list", |b| {
        b.iter(|| {
            let mut rover = Rover::new(&grid, 0, 0, "N", false).unwrap();
            let _ = rover.send_command_list(&commands);
            rover.get_position()
        })
    });
}

criterion_group!(benches, rover_benchmark);
criterion_main!(benches);
