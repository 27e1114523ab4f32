//! Board module - manages the puzzle grid
//!
//! The board is a 4x4 grid where each cell is empty or holds a black or white
//! stone. Uses a flat array for cache locality and zero allocation.
//! Storage is row-major: index = row * BOARD_WIDTH + col. Row 0 is the far
//! edge of the board; the renderer flips rows when it places stones on screen.
//!
//! The slide and eliminate operations both work on "lanes": a row or column
//! traversed from the edge the stones move toward (the leading edge). The four
//! slide directions are mirror images of each other, so a single compaction
//! walks every lane instead of four hand-unrolled loops.

use crate::types::{
    Axis, Cell, Direction, GameError, Piece, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH,
};

/// One row or column, addressed from its leading edge.
#[derive(Debug, Clone, Copy)]
struct Lane {
    start: usize,
    step: isize,
    len: usize,
}

impl Lane {
    /// Flat cell index of the `pos`-th slot counting from the leading edge.
    #[inline(always)]
    fn index(&self, pos: usize) -> usize {
        (self.start as isize + self.step * pos as isize) as usize
    }
}

/// The puzzle board - 4x4 grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col), validating bounds
    #[inline(always)]
    fn index(row: usize, col: usize) -> Result<usize, GameError> {
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(row * BOARD_WIDTH + col)
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        let idx = Self::index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Clear the entire board to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Count stones of one color
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&c| c == Some(piece)).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable cells, for the generator's row-major fill
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Lane traversal for one direction. `line` indexes rows for horizontal
    /// directions and columns for vertical ones; position 0 is the leading
    /// edge (the edge stones slide toward).
    fn lane(dir: Direction, line: usize) -> Lane {
        match dir {
            Direction::Left => Lane {
                start: line * BOARD_WIDTH,
                step: 1,
                len: BOARD_WIDTH,
            },
            Direction::Right => Lane {
                start: line * BOARD_WIDTH + (BOARD_WIDTH - 1),
                step: -1,
                len: BOARD_WIDTH,
            },
            Direction::Up => Lane {
                start: line,
                step: BOARD_WIDTH as isize,
                len: BOARD_HEIGHT,
            },
            Direction::Down => Lane {
                start: (BOARD_HEIGHT - 1) * BOARD_WIDTH + line,
                step: -(BOARD_WIDTH as isize),
                len: BOARD_HEIGHT,
            },
        }
    }

    /// Number of independent lanes for a direction
    fn lane_count(dir: Direction) -> usize {
        match dir.axis() {
            Axis::Horizontal => BOARD_HEIGHT,
            Axis::Vertical => BOARD_WIDTH,
        }
    }

    /// Compact every lane toward the given direction's edge.
    ///
    /// Gaps close up and the relative order of stones in each lane is
    /// preserved; no stone is created, destroyed, or recolored. Applying the
    /// same direction twice is a no-op the second time.
    pub fn slide(&mut self, dir: Direction) {
        for line in 0..Self::lane_count(dir) {
            let lane = Self::lane(dir, line);

            // First empty slot nearest the leading edge; a full lane is
            // already compacted.
            let Some(mut head) = (0..lane.len).find(|&pos| self.cells[lane.index(pos)].is_none())
            else {
                continue;
            };

            for pos in head + 1..lane.len {
                let idx = lane.index(pos);
                if self.cells[idx].is_some() && self.cells[lane.index(head)].is_none() {
                    self.cells.swap(lane.index(head), idx);
                    head += 1;
                }
            }
        }
    }

    /// The "powerful slide": clear later same-colored repeats in every lane.
    ///
    /// Each lane is scanned once from its leading edge (left for horizontal,
    /// top for vertical - which of the two opposite keys was pressed does not
    /// matter). The most recently seen color is the anchor: a stone matching
    /// the anchor is removed and the anchor keeps pointing at the earlier
    /// occurrence, so third and later repeats are removed too. A stone of the
    /// other color becomes the new anchor; empty cells leave it untouched.
    pub fn eliminate(&mut self, axis: Axis) {
        let dir = match axis {
            Axis::Horizontal => Direction::Left,
            Axis::Vertical => Direction::Up,
        };

        for line in 0..Self::lane_count(dir) {
            let lane = Self::lane(dir, line);
            let mut anchor: Cell = None;

            for pos in 0..lane.len {
                let idx = lane.index(pos);
                match self.cells[idx] {
                    Some(piece) if anchor == Some(piece) => self.cells[idx] = None,
                    Some(piece) => anchor = Some(piece),
                    None => {}
                }
            }
        }
    }

    /// Create from a 2D array for testing (row-major, row 0 = far edge)
    #[cfg(test)]
    pub fn from_rows(rows: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT]) -> Self {
        let mut board = Self::new();
        for (row, cols) in rows.iter().enumerate() {
            for (col, &cell) in cols.iter().enumerate() {
                board.cells[row * BOARD_WIDTH + col] = cell;
            }
        }
        board
    }

    /// Convert to a 2D array for test assertions
    #[cfg(test)]
    pub fn to_rows(&self) -> [[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
        let mut rows = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                rows[row][col] = self.cells[row * BOARD_WIDTH + col];
            }
        }
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
