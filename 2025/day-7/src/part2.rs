use miette::*;

use crate::error::ManifoldError;
use crate::grid::Grid;
use crate::manifold::Manifold;

/// Counts every timeline the single source particle can end up in.
#[tracing::instrument(skip_all, fields(rows = lines.len()))]
pub fn solve_part_b<S: AsRef<str>>(lines: &[S]) -> Result<u64, ManifoldError> {
    let grid = Grid::from_lines(lines)?;
    let mut manifold = Manifold::new(&grid);

    // The source row only emits; counting starts right below it.
    let timelines = manifold.timelines_from(1, grid.start_column())?;
    tracing::debug!(memoized = manifold.visited(), timelines, "counted timelines");
    Ok(timelines)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let lines: Vec<&str> = input.lines().collect();
    let timelines = solve_part_b(&lines)?;
    Ok(timelines.to_string())
}
