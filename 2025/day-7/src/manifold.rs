use crate::error::ManifoldError;
use crate::grid::{Grid, Tile, BEAM};

impl Grid {
    /// Pushes the beam down the grid one row at a time, using the cells
    /// themselves as beam state, and returns how many splitters fired.
    ///
    /// Column 0 is never evaluated: a splitter there never fires, and an empty
    /// cell there never picks up the beam from above.
    pub fn sweep_splits(&mut self) -> u64 {
        let mut splits = 0;

        for row in 1..self.height() {
            for col in 1..self.width() {
                let here = self.index(row, col);
                let above = self.index(row - 1, col);

                match Tile::from(self.cells[here]) {
                    // Whatever sits above flows down, inert symbols included.
                    Tile::Empty => self.cells[here] = self.cells[above],
                    Tile::Splitter if self.cells[above] == BEAM => {
                        // col >= 1, so the left neighbour always exists
                        self.cells[here - 1] = BEAM;
                        if col + 1 < self.width() {
                            self.cells[here + 1] = BEAM;
                        }
                        splits += 1;
                    }
                    _ => {}
                }
            }
        }

        splits
    }
}

/// One entry of the memo table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub tile: u8,
    pub visited: bool,
    /// Timelines that leave the bottom of the grid starting from this cell.
    /// Only meaningful once `visited` is set.
    pub timelines: u64,
}

/// The grid together with a per-cell memo of how many timelines each cell
/// leads to.
#[derive(Debug)]
pub struct Manifold {
    width: usize,
    height: usize,
    cells: Vec<Annotation>,
}

#[derive(Clone, Copy, Debug)]
enum Frame {
    Enter(usize, isize),
    Exit(usize, usize),
}

/// Column offsets, one row down, that a timeline continues into.
fn branches(tile: u8) -> &'static [isize] {
    match Tile::from(tile) {
        Tile::Empty => &[0],
        Tile::Splitter => &[-1, 1],
        Tile::Beam | Tile::Inert => &[],
    }
}

impl Manifold {
    pub fn new(grid: &Grid) -> Self {
        let cells = grid
            .cells
            .iter()
            .map(|&tile| Annotation {
                tile,
                visited: false,
                timelines: 0,
            })
            .collect();

        Manifold {
            width: grid.width(),
            height: grid.height(),
            cells,
        }
    }

    pub fn annotation(&self, row: usize, col: usize) -> Option<&Annotation> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col)
    }

    /// How many cells have a memoized count.
    pub fn visited(&self) -> usize {
        self.cells.iter().filter(|a| a.visited).count()
    }

    /// Already-known count for (`row`, `col`): 1 below the last row, 0 off
    /// either side, the memo if the cell was visited, `None` otherwise.
    fn known(&self, row: usize, col: isize) -> Option<u64> {
        if row >= self.height {
            return Some(1);
        }
        if col < 0 || col as usize >= self.width {
            return Some(0);
        }
        let cell = &self.cells[row * self.width + col as usize];
        cell.visited.then_some(cell.timelines)
    }

    /// Like [`Manifold::known`], but a cell that has not been computed yet is
    /// an error instead of `None`.
    fn resolved(&self, row: usize, col: isize) -> Result<u64, ManifoldError> {
        self.known(row, col)
            .ok_or(ManifoldError::UnresolvedCell { row, column: col })
    }

    /// Counts the distinct timelines that leave the bottom of the manifold
    /// when a beam enters at (`row`, `col`).
    ///
    /// Walks the cells depth first on an explicit stack, so tall grids cannot
    /// overflow the call stack. Every cell is computed at most once and its
    /// count is reused by any later query on the same manifold.
    pub fn timelines_from(&mut self, row: usize, col: usize) -> Result<u64, ManifoldError> {
        let root = col as isize;
        let mut stack = vec![Frame::Enter(row, root)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(row, col) => {
                    if self.known(row, col).is_some() {
                        continue;
                    }
                    let col = col as usize;
                    stack.push(Frame::Exit(row, col));

                    let tile = self.cells[row * self.width + col].tile;
                    for &dx in branches(tile) {
                        let next = col as isize + dx;
                        if self.known(row + 1, next).is_none() {
                            stack.push(Frame::Enter(row + 1, next));
                        }
                    }
                }
                Frame::Exit(row, col) => {
                    let idx = row * self.width + col;
                    debug_assert!(!self.cells[idx].visited, "memo entries are write-once");

                    let mut timelines: u64 = 0;
                    for &dx in branches(self.cells[idx].tile) {
                        let below = self.resolved(row + 1, col as isize + dx)?;
                        timelines = timelines
                            .checked_add(below)
                            .ok_or(ManifoldError::TimelineOverflow { row, column: col })?;
                    }

                    let cell = &mut self.cells[idx];
                    cell.timelines = timelines;
                    cell.visited = true;
                }
            }
        }

        self.resolved(row, root)
    }
}
