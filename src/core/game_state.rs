//! Game state module - owns the board and drives the session lifecycle
//!
//! Ties the core components together: board, RNG, and generation. Commands
//! from the input layer mutate the board through [`GameState::apply_action`];
//! a per-frame `tick` resynchronizes the renderer-facing stone lists from the
//! board and evaluates the win condition. The board is the single source of
//! truth; the stone lists are derived every tick and never written back.

use arrayvec::ArrayVec;

use crate::core::{generate, Board, SimpleRng};
use crate::types::{
    GameAction, GameError, Outcome, Piece, Position, BOARD_HEIGHT, BOARD_SIZE,
};

/// Complete game state for one puzzle session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    /// Black stone positions, rebuilt from the board each tick.
    black: ArrayVec<Position, BOARD_SIZE>,
    /// White stone positions, rebuilt from the board each tick.
    white: ArrayVec<Position, BOARD_SIZE>,
    outcome: Outcome,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Draw attempts the generator needed for the current board.
    generation_attempts: u32,
}

impl GameState {
    /// Create a new session with the given RNG seed and generate the first
    /// board. Fails only if generation exhausts its retry cap.
    pub fn new(seed: u32) -> Result<Self, GameError> {
        let mut state = Self {
            board: Board::new(),
            rng: SimpleRng::new(seed),
            black: ArrayVec::new(),
            white: ArrayVec::new(),
            outcome: Outcome::InProgress,
            episode_id: 0,
            generation_attempts: 0,
        };
        state.regenerate()?;
        Ok(state)
    }

    /// Create a session over a predetermined board position.
    ///
    /// The seed still controls boards produced by later resets. Useful for
    /// setting up puzzles and in tests; once constructed, the board mutates
    /// only through [`GameState::apply_action`].
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut state = Self {
            board,
            rng: SimpleRng::new(seed),
            black: ArrayVec::new(),
            white: ArrayVec::new(),
            outcome: Outcome::InProgress,
            episode_id: 0,
            generation_attempts: 0,
        };
        state.sync_stone_lists();
        state
    }

    /// Replace the board with a freshly generated one
    fn regenerate(&mut self) -> Result<(), GameError> {
        self.generation_attempts = generate::populate(&mut self.board, &mut self.rng)?;
        self.outcome = Outcome::InProgress;
        self.sync_stone_lists();
        Ok(())
    }

    /// Apply a command from the input layer.
    ///
    /// Slides are total; only `Reset` can fail (exhausted generation).
    pub fn apply_action(&mut self, action: GameAction) -> Result<(), GameError> {
        match action {
            GameAction::Slide(dir) => {
                self.board.slide(dir);
                Ok(())
            }
            GameAction::PowerfulSlide(axis) => {
                self.board.eliminate(axis);
                Ok(())
            }
            GameAction::Reset => {
                self.episode_id = self.episode_id.wrapping_add(1);
                self.regenerate()
            }
        }
    }

    /// Per-frame update: rebuild the stone lists and evaluate the win
    /// condition. Elapsed time is part of the driver contract but nothing
    /// here is time-based. Returns true when the outcome changed.
    pub fn tick(&mut self, _elapsed_ms: u32) -> bool {
        self.sync_stone_lists();
        let next = if self.black.len() == 1 && self.white.len() == 1 {
            Outcome::Win
        } else {
            Outcome::InProgress
        };
        let changed = next != self.outcome;
        self.outcome = next;
        changed
    }

    /// Rebuild both position lists from the board in row-major scan order.
    ///
    /// Renderer convention: x is the column, y counts up from the edge
    /// opposite row 0 (`y = BOARD_HEIGHT - 1 - row`).
    fn sync_stone_lists(&mut self) {
        self.black.clear();
        self.white.clear();
        for (idx, cell) in self.board.cells().iter().enumerate() {
            let (row, col) = (idx / self.board.width(), idx % self.board.width());
            let pos = Position {
                x: col,
                y: BOARD_HEIGHT - 1 - row,
            };
            match cell {
                Some(Piece::Black) => self.black.push(pos),
                Some(Piece::White) => self.white.push(pos),
                None => {}
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn black_stones(&self) -> &[Position] {
        &self.black
    }

    pub fn white_stones(&self) -> &[Position] {
        &self.white
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn won(&self) -> bool {
        self.outcome == Outcome::Win
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn generation_attempts(&self) -> u32 {
        self.generation_attempts
    }

    /// Current RNG state (seed for reproducing the upcoming boards)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
