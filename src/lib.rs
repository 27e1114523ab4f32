//! Sliding-stones puzzle for the terminal.
//!
//! The board engine lives in [`core`]; [`input`] maps key events to game
//! actions, and [`term`] renders the board with crossterm. The binary in
//! `main.rs` wires the three together in a fixed-cadence event loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
