//! Terminal front-end: a pure view over the game state plus a small
//! crossterm screen wrapper that flushes rendered lines.

pub mod screen;
pub mod view;

pub use screen::Screen;
pub use view::GameView;
