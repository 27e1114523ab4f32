//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::error::Error;
use std::fmt;

/// Board dimensions
pub const BOARD_WIDTH: usize = 4;
pub const BOARD_HEIGHT: usize = 4;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Fixed update cadence of the main loop (milliseconds)
pub const TICK_MS: u32 = 16;

/// Whole-board redraws the generator may attempt before giving up.
///
/// A 4x4 draw misses one of the two colors with probability ~0.3%, so the cap
/// is unreachable for any non-degenerate board size.
pub const GENERATION_RETRY_LIMIT: u32 = 32;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Black,
    White,
}

impl Piece {
    /// The opposing color
    pub fn opponent(&self) -> Self {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by a stone)
pub type Cell = Option<Piece>;

/// Cardinal slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The axis this direction moves along
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }
}

/// Scan axis for the duplicate-eliminating slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Game outcome, derived from the board each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Slide(Direction),
    PowerfulSlide(Axis),
    Reset,
}

/// Renderer-facing stone coordinates.
///
/// `x` is the column; `y` counts up from the edge opposite grid row 0,
/// i.e. `y = BOARD_HEIGHT - 1 - row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Errors surfaced by the board engine.
///
/// Both variants are invariant violations rather than expected runtime
/// events; callers treat them as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Cell access outside `[0, BOARD_HEIGHT) x [0, BOARD_WIDTH)`
    OutOfRange { row: usize, col: usize },
    /// The generator's resample loop hit its retry cap
    GenerationExhausted { attempts: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfRange { row, col } => write!(
                f,
                "cell ({row}, {col}) is outside the {BOARD_HEIGHT}x{BOARD_WIDTH} board"
            ),
            GameError::GenerationExhausted { attempts } => write!(
                f,
                "no valid board after {attempts} generation attempts"
            ),
        }
    }
}

impl Error for GameError {}
