//! End-to-end flows through the public command surface: key events to
//! actions, actions to board mutations, ticks to win evaluation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_stones::core::{Board, GameState};
use tui_stones::input::handle_key_event;
use tui_stones::term::GameView;
use tui_stones::types::{
    Axis, Direction, GameAction, Outcome, Piece, Position, BOARD_HEIGHT, TICK_MS,
};

#[test]
fn test_session_lifecycle() {
    let mut game = GameState::new(12345).unwrap();
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.episode_id(), 0);

    game.tick(TICK_MS);
    assert_eq!(game.black_stones().len(), game.board().count(Piece::Black));
    assert_eq!(game.white_stones().len(), game.board().count(Piece::White));

    game.apply_action(GameAction::Reset).unwrap();
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_key_events_drive_the_board() {
    // A lone black stone off the top edge of its column, a white one beside it.
    let mut board = Board::new();
    board.set(2, 0, Some(Piece::Black)).unwrap();
    board.set(3, 1, Some(Piece::White)).unwrap();
    let mut game = GameState::with_board(board, 7);

    let action = handle_key_event(KeyEvent::from(KeyCode::Up)).unwrap();
    assert_eq!(action, GameAction::Slide(Direction::Up));
    game.apply_action(action).unwrap();

    assert_eq!(game.board().get(0, 0), Ok(Some(Piece::Black)));
    assert_eq!(game.board().get(0, 1), Ok(Some(Piece::White)));
}

#[test]
fn test_scripted_play_to_win() {
    // Two black stones in row 0, one white in row 1. A horizontal powerful
    // slide removes the duplicate black; the next tick flags the win.
    let mut board = Board::new();
    board.set(0, 0, Some(Piece::Black)).unwrap();
    board.set(0, 2, Some(Piece::Black)).unwrap();
    board.set(1, 1, Some(Piece::White)).unwrap();
    let mut game = GameState::with_board(board, 1);

    game.tick(TICK_MS);
    assert_eq!(game.outcome(), Outcome::InProgress);

    let action = handle_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT)).unwrap();
    assert_eq!(action, GameAction::PowerfulSlide(Axis::Horizontal));
    game.apply_action(action).unwrap();

    assert!(game.tick(TICK_MS), "outcome should flip to Win");
    assert_eq!(game.outcome(), Outcome::Win);
    assert_eq!(
        game.black_stones(),
        &[Position {
            x: 0,
            y: BOARD_HEIGHT - 1
        }]
    );
    assert_eq!(
        game.white_stones(),
        &[Position {
            x: 1,
            y: BOARD_HEIGHT - 2
        }]
    );

    // The view shows the banner, and reset starts a fresh episode.
    let lines = GameView.render(&game);
    assert!(lines.iter().any(|l| l.contains("You win")));

    game.apply_action(GameAction::Reset).unwrap();
    game.tick(TICK_MS);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(game.board().count(Piece::Black) >= 1);
    assert!(game.board().count(Piece::White) >= 1);
}

#[test]
fn test_stone_lists_stable_without_mutation() {
    let mut game = GameState::new(555).unwrap();
    game.tick(TICK_MS);
    let black: Vec<_> = game.black_stones().to_vec();
    let white: Vec<_> = game.white_stones().to_vec();

    for _ in 0..10 {
        game.tick(TICK_MS);
        assert_eq!(game.black_stones(), black.as_slice());
        assert_eq!(game.white_stones(), white.as_slice());
    }
}

#[test]
fn test_slides_keep_stone_counts() {
    // Ordinary slides never change stone counts, no matter the input order.
    let mut game = GameState::new(31337).unwrap();
    let black = game.board().count(Piece::Black);
    let white = game.board().count(Piece::White);

    for code in [
        KeyCode::Left,
        KeyCode::Down,
        KeyCode::Right,
        KeyCode::Up,
        KeyCode::Left,
        KeyCode::Up,
    ] {
        let action = handle_key_event(KeyEvent::from(code)).unwrap();
        game.apply_action(action).unwrap();
        game.tick(TICK_MS);
        assert_eq!(game.board().count(Piece::Black), black);
        assert_eq!(game.board().count(Piece::White), white);
    }
}
