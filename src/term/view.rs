//! GameView: maps `core::GameState` into terminal lines.
//!
//! This module is pure (no I/O). It draws the board from the renderer-facing
//! stone position lists, not from the grid directly, so the coordinate
//! convention (y counts up from the bottom edge) is exercised here the same
//! way a graphical front-end would use it.

use crate::core::GameState;
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

const BLACK_GLYPH: char = '\u{25cf}'; // ●
const WHITE_GLYPH: char = '\u{25cb}'; // ○
const EMPTY_GLYPH: char = '\u{00b7}'; // ·

/// Renders the board, a status line, and the key legend.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state as displayable lines, top to bottom.
    pub fn render(&self, state: &GameState) -> Vec<String> {
        let mut grid = [[EMPTY_GLYPH; BOARD_WIDTH]; BOARD_HEIGHT];
        place(&mut grid, state.black_stones(), BLACK_GLYPH);
        place(&mut grid, state.white_stones(), WHITE_GLYPH);

        let mut lines = Vec::with_capacity(BOARD_HEIGHT + 4);
        lines.push(format!("┌{}┐", "─".repeat(BOARD_WIDTH * 2 + 1)));
        for screen_row in grid.iter() {
            let mut line = String::from("│ ");
            for &glyph in screen_row.iter() {
                line.push(glyph);
                line.push(' ');
            }
            line.push('│');
            lines.push(line);
        }
        lines.push(format!("└{}┘", "─".repeat(BOARD_WIDTH * 2 + 1)));

        if state.won() {
            lines.push("You win! Press r for a new board.".to_string());
        } else {
            lines.push(format!(
                "black: {}  white: {}",
                state.black_stones().len(),
                state.white_stones().len()
            ));
        }
        lines.push("arrows: slide   shift+arrows: eliminate   r: new board   q: quit".to_string());

        lines
    }
}

/// Stamp stones into the screen grid. Stone y counts up from the bottom, so
/// the top screen row shows y = BOARD_HEIGHT - 1.
fn place(grid: &mut [[char; BOARD_WIDTH]; BOARD_HEIGHT], stones: &[Position], glyph: char) {
    for pos in stones {
        grid[BOARD_HEIGHT - 1 - pos.y][pos.x] = glyph;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn rendered(state: &mut GameState) -> Vec<String> {
        state.tick(16);
        GameView.render(state)
    }

    #[test]
    fn test_render_has_frame_and_legend() {
        let mut state = GameState::new(12345).unwrap();
        let lines = rendered(&mut state);

        assert_eq!(lines.len(), BOARD_HEIGHT + 4);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[BOARD_HEIGHT + 1].starts_with('└'));
        assert!(lines.last().unwrap().contains("q: quit"));
    }

    #[test]
    fn test_render_places_stones_with_row_flip() {
        let mut state = GameState::new(1).unwrap();
        state.board_mut().clear();
        // Board row 0 is the far edge; it must appear on the top board line.
        state.board_mut().set(0, 0, Some(Piece::Black)).unwrap();
        state.board_mut().set(3, 3, Some(Piece::White)).unwrap();

        let lines = rendered(&mut state);
        let top: Vec<char> = lines[1].chars().collect();
        let bottom: Vec<char> = lines[BOARD_HEIGHT].chars().collect();

        // Line layout: '│', ' ', then glyph/space pairs per column.
        assert_eq!(top[2], BLACK_GLYPH);
        assert_eq!(bottom[2 + 3 * 2], WHITE_GLYPH);
    }

    #[test]
    fn test_render_win_banner() {
        let mut state = GameState::new(1).unwrap();
        state.board_mut().clear();
        state.board_mut().set(1, 1, Some(Piece::Black)).unwrap();
        state.board_mut().set(2, 2, Some(Piece::White)).unwrap();

        let lines = rendered(&mut state);
        assert!(lines.iter().any(|l| l.contains("You win")));
    }

    #[test]
    fn test_render_counts_while_in_progress() {
        let mut state = GameState::new(1).unwrap();
        state.board_mut().clear();
        state.board_mut().set(0, 0, Some(Piece::Black)).unwrap();
        state.board_mut().set(0, 1, Some(Piece::Black)).unwrap();
        state.board_mut().set(1, 0, Some(Piece::White)).unwrap();

        let lines = rendered(&mut state);
        assert!(lines.iter().any(|l| l.contains("black: 2") && l.contains("white: 1")));
    }
}
