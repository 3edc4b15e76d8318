pub mod error;
pub mod grid;
pub mod input;
pub mod manifold;
pub mod part1;
pub mod part2;

pub use error::ManifoldError;
pub use grid::Grid;
pub use input::read_lines;
pub use manifold::Manifold;
pub use part1::solve_part_a;
pub use part2::solve_part_b;
