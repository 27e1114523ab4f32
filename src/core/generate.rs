//! Board generation - seeded random population with rejection resampling
//!
//! Every cell gets one draw from a uniform 3-way distribution
//! (empty / black / white), filled in row-major order. A board missing either
//! color is unplayable, so the whole draw is discarded and retried. The retry
//! loop is capped; hitting the cap means the configuration is degenerate and
//! is reported as [`GameError::GenerationExhausted`].

use crate::core::{Board, SimpleRng};
use crate::types::{Cell, GameError, Piece, GENERATION_RETRY_LIMIT};

/// Fill `board` from `rng`, redrawing until both colors are present.
///
/// Returns the number of attempts used (1 when the first draw is valid).
pub fn populate(board: &mut Board, rng: &mut SimpleRng) -> Result<u32, GameError> {
    populate_with(board, || match rng.next_range(3) {
        0 => None,
        1 => Some(Piece::Black),
        _ => Some(Piece::White),
    })
}

/// Fill `board` from an arbitrary cell source, redrawing until valid.
///
/// The source is consulted once per cell per attempt, in row-major order.
/// Split out from [`populate`] so tests can script the draw sequence and
/// reach the retry and exhaustion paths deterministically.
pub fn populate_with(
    board: &mut Board,
    mut draw: impl FnMut() -> Cell,
) -> Result<u32, GameError> {
    for attempt in 1..=GENERATION_RETRY_LIMIT {
        for cell in board.cells_mut() {
            *cell = draw();
        }
        if board.count(Piece::Black) > 0 && board.count(Piece::White) > 0 {
            return Ok(attempt);
        }
    }
    Err(GameError::GenerationExhausted {
        attempts: GENERATION_RETRY_LIMIT,
    })
}
