use miette::*;

use crate::error::ManifoldError;
use crate::grid::Grid;

/// Counts how many splitters the beam activates on its way down.
#[tracing::instrument(skip_all, fields(rows = lines.len()))]
pub fn solve_part_a<S: AsRef<str>>(lines: &[S]) -> Result<u64, ManifoldError> {
    // The sweep overwrites cells, so it runs on a grid we own.
    let mut grid = Grid::from_lines(lines)?;
    let splits = grid.sweep_splits();
    tracing::trace!("beam trail:\n{grid}");
    Ok(splits)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let lines: Vec<&str> = input.lines().collect();
    let splits = solve_part_a(&lines)?;
    Ok(splits.to_string())
}
