use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Everything that can stop a manifold solver before it produces an answer.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifoldError {
    #[error("failed to read input from {}", path.display())]
    #[diagnostic(
        code(day7::io),
        help("check that the input file exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the manifold diagram is empty")]
    #[diagnostic(code(day7::empty_grid))]
    EmptyGrid,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    #[diagnostic(
        code(day7::malformed_grid),
        help("every row of the diagram must have the same width")
    )]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no start position 'S' found in the first row")]
    #[diagnostic(
        code(day7::start_not_found),
        help("the beam source 'S' must appear in row 0")
    )]
    StartNotFound,

    #[error("found two start positions in the first row, at columns {first} and {second}")]
    #[diagnostic(code(day7::ambiguous_start))]
    AmbiguousStart { first: usize, second: usize },

    #[error("cell at row {row}, column {column} was read before its count was computed")]
    #[diagnostic(code(day7::unresolved_cell))]
    UnresolvedCell { row: usize, column: isize },

    #[error("timeline count overflowed at row {row}, column {column}")]
    #[diagnostic(code(day7::timeline_overflow))]
    TimelineOverflow { row: usize, column: usize },
}
