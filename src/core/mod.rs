//! Core module - pure game logic with no external I/O
//!
//! Grid state, slide/elimination, board generation, and the win evaluator.
//! Nothing in here touches the terminal.

pub mod board;
pub mod game_state;
pub mod generate;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use rng::SimpleRng;
