use std::fmt;

use itertools::Itertools;

use crate::error::ManifoldError;

pub const START: u8 = b'S';
pub const BEAM: u8 = b'|';
pub const SPLITTER: u8 = b'^';
pub const EMPTY: u8 = b'.';

/// How a single cell of the diagram behaves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Empty,
    Beam,
    Splitter,
    /// Anything else; blocks the beam.
    Inert,
}

impl From<u8> for Tile {
    fn from(byte: u8) -> Self {
        match byte {
            EMPTY => Tile::Empty,
            BEAM => Tile::Beam,
            SPLITTER => Tile::Splitter,
            _ => Tile::Inert,
        }
    }
}

/// The manifold diagram, row-major, with the source already turned into a beam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    pub(crate) cells: Vec<u8>,
    start: usize,
}

impl Grid {
    /// Builds a grid from the lines of a diagram.
    ///
    /// Trailing blank lines are ignored. Every other row must be as wide as the
    /// first one, and the first row must hold exactly one `S`, which is
    /// rewritten to `|` in the returned grid. The input lines are left alone.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, ManifoldError> {
        let rows: Vec<&[u8]> = lines.iter().map(|l| l.as_ref().as_bytes()).collect();
        let height = rows
            .iter()
            .rposition(|row| !row.is_empty())
            .map(|last| last + 1)
            .ok_or(ManifoldError::EmptyGrid)?;
        let rows = &rows[..height];

        let width = rows[0].len();
        if let Some((row, found)) = rows.iter().find_position(|r| r.len() != width) {
            return Err(ManifoldError::MalformedGrid {
                row,
                expected: width,
                found: found.len(),
            });
        }

        let mut starts = rows[0].iter().positions(|&b| b == START);
        let start = starts.next().ok_or(ManifoldError::StartNotFound)?;
        if let Some(second) = starts.next() {
            return Err(ManifoldError::AmbiguousStart {
                first: start,
                second,
            });
        }

        let mut cells = rows.concat();
        cells[start] = BEAM;

        tracing::debug!(width, height, start, "loaded manifold");

        Ok(Grid {
            width,
            height,
            cells,
            start,
        })
    }

    pub fn parse(input: &str) -> Result<Self, ManifoldError> {
        Self::from_lines(&input.lines().collect::<Vec<_>>())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Column of the converted `S` in row 0.
    pub fn start_column(&self) -> usize {
        self.start
    }

    /// Raw byte at (`row`, `col`), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.get(row, col).map(Tile::from)
    }

    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
