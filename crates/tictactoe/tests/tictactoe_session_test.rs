//! Tests for the game session lifecycle.

use tictactoe::{Board, Cell, GameSession, Marker, MoveError, MoveOutcome, Phase};

fn play(session: &mut GameSession, moves: &[usize]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|&index| session.make_move(index).expect("index in range"))
        .collect()
}

#[test]
fn test_first_player_is_x() {
    let mut session = GameSession::new();
    session.start("A", "B");

    let player = session.current_player().expect("started");
    assert_eq!(player.name(), "A");
    assert_eq!(*player.marker(), Marker::X);
    assert_eq!(session.phase(), Phase::InProgress);
}

#[test]
fn test_top_row_wins_for_first_player() {
    let mut session = GameSession::new();
    session.start("A", "B");

    let outcomes = play(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(
        outcomes,
        vec![
            MoveOutcome::Continue("B".into()),
            MoveOutcome::Continue("A".into()),
            MoveOutcome::Continue("B".into()),
            MoveOutcome::Continue("A".into()),
            MoveOutcome::Win("A".into()),
        ]
    );
    assert!(session.is_game_over());
    assert_eq!(session.winning_triple(), Some([0, 1, 2]));
}

#[test]
fn test_full_board_without_triple_is_tie() {
    let mut session = GameSession::new();
    session.start("A", "B");

    // X: 0, 4, 5, 6, 7 / O: 1, 2, 3, 8
    let outcomes = play(&mut session, &[0, 1, 4, 8, 5, 3, 6, 2, 7]);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Tie));
    assert!(outcomes[..8].iter().all(|o| matches!(o, MoveOutcome::Continue(_))));
    assert!(session.board().is_full());
    assert_eq!(session.phase(), Phase::Tie);
}

#[test]
fn test_full_board_with_triple_is_win_not_tie() {
    let mut session = GameSession::new();
    session.start("A", "B");

    // X: 0, 4, 5, 7, 8 / O: 1, 2, 3, 6; the last mark fills the board and
    // completes the 0-4-8 diagonal.
    let outcomes = play(&mut session, &[0, 1, 4, 2, 5, 3, 7, 6, 8]);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Win("A".into())));
    assert!(session.board().is_full());
    assert_eq!(session.phase(), Phase::Won);
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let mut session = GameSession::new();
    session.start("A", "B");
    play(&mut session, &[4]);

    let before = session.clone();
    for _ in 0..3 {
        assert_eq!(session.make_move(4), Ok(MoveOutcome::Rejected));
    }
    assert_eq!(session, before);
    assert_eq!(session.board().get(4), Some(Cell::X));
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut session = GameSession::new();
    session.start("A", "B");
    play(&mut session, &[0, 3, 1, 4, 2]);

    let board = session.board().clone();
    for index in board.empty_indices() {
        assert_eq!(session.make_move(index), Ok(MoveOutcome::Rejected));
    }
    assert_eq!(session.board(), &board);
}

#[test]
fn test_moves_after_tie_are_rejected() {
    let mut session = GameSession::new();
    session.start("A", "B");
    play(&mut session, &[0, 1, 4, 8, 5, 3, 6, 2, 7]);

    for index in 0..9 {
        assert_eq!(session.make_move(index), Ok(MoveOutcome::Rejected));
    }
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let mut session = GameSession::new();
    session.start("A", "B");

    assert_eq!(session.make_move(9), Err(MoveError::InvalidIndex(9)));
    assert_eq!(session.make_move(usize::MAX), Err(MoveError::InvalidIndex(usize::MAX)));
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.current_player().unwrap().name(), "A");
}

#[test]
fn test_restart_after_terminal_resets_everything() {
    let mut session = GameSession::new();
    session.start("A", "B");
    play(&mut session, &[0, 3, 1, 4, 2]);
    assert!(session.is_game_over());

    session.start("C", "D");
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.phase(), Phase::InProgress);
    assert!(session.moves().is_empty());
    assert!(session.winner().is_none());

    let player = session.current_player().unwrap();
    assert_eq!(player.name(), "C");
    assert_eq!(*player.marker(), Marker::X);
    assert_eq!(session.make_move(0), Ok(MoveOutcome::Continue("D".into())));
}

#[test]
fn test_restart_mid_game() {
    let mut session = GameSession::new();
    session.start("A", "B");
    play(&mut session, &[0, 1, 2]);

    session.start("A", "B");
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.current_player().unwrap().name(), "A");
}

#[test]
fn test_sessions_are_independent() {
    let mut first = GameSession::new();
    let mut second = GameSession::new();
    first.start("A", "B");
    second.start("C", "D");

    first.make_move(0).unwrap();
    assert_eq!(second.board(), &Board::new());
    assert_eq!(second.make_move(0), Ok(MoveOutcome::Continue("D".into())));
}

#[test]
fn test_session_serializes_board_cells() {
    let mut session = GameSession::new();
    session.start("A", "B");
    session.make_move(4).unwrap();

    let json = serde_json::to_value(session.board()).unwrap();
    assert_eq!(json["cells"][4], "X");
    assert_eq!(json["cells"][0], "Empty");
}
