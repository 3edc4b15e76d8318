use aoc2025_day_7::{part1, part2, Grid, Manifold};

fn main() {
    divan::main();
}

const INPUT: &str = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............";

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(INPUT)).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(INPUT)).unwrap();
}

#[divan::bench]
fn timelines_only(bencher: divan::Bencher) {
    let grid = Grid::parse(INPUT).unwrap();
    bencher.bench_local(|| {
        Manifold::new(divan::black_box(&grid))
            .timelines_from(1, grid.start_column())
            .unwrap()
    });
}
