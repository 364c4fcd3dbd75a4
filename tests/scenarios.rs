//! End-to-end checks of the observable core behaviour through the public API.

use pseudo_chess::chess_errors::ChessError;
use pseudo_chess::game_state::board::Board;
use pseudo_chess::game_state::chess_types::{Color, Piece, PieceKind, Square};
use pseudo_chess::game_state::game_state::GameState;
use pseudo_chess::move_generation::move_generator::{generate_moves, MoveSet};
use pseudo_chess::utils::algebraic::{algebraic_to_square, square_to_algebraic};

fn set(squares: &[(u8, u8)]) -> MoveSet {
    squares.iter().map(|&(r, f)| Square::new(r, f)).collect()
}

#[test]
fn king_pawn_opening_scenario() {
    let mut game = GameState::new_game();
    game.apply_move(Square::new(6, 4), Square::new(4, 4)).unwrap();

    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.history().len(), 1);
    assert_eq!(
        game.board().get(Square::new(4, 4)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(game.board().get(Square::new(6, 4)), None);

    game.undo();
    assert_eq!(game.turn(), Color::White);
    assert!(game.history().is_empty());
    assert_eq!(game.board(), &Board::starting());
}

#[test]
fn starting_e_pawn_destinations() {
    let mut board = Board::starting();
    assert_eq!(generate_moves(&board, Square::new(6, 4)), set(&[(5, 4), (4, 4)]));

    for blocker in [Color::White, Color::Black] {
        board.set(Square::new(5, 4), Some(Piece::new(blocker, PieceKind::Bishop)));
        assert!(!generate_moves(&board, Square::new(6, 4)).contains(&Square::new(4, 4)));
    }
}

#[test]
fn lone_rook_on_d4_sees_fourteen_squares_and_blockers_truncate() {
    let d4 = Square::new(4, 3);
    let rook = Piece::new(Color::White, PieceKind::Rook);
    let mut board = Board::empty();
    board.set(d4, Some(rook));
    assert_eq!(generate_moves(&board, d4).len(), 14);

    // Opposing blocker on the file toward row 0: included, ray stops there.
    board.set(Square::new(1, 3), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    let moves = generate_moves(&board, d4);
    assert!(moves.contains(&Square::new(1, 3)));
    assert!(!moves.contains(&Square::new(0, 3)));
    assert_eq!(moves.len(), 13);

    // Own blocker on the rank toward file 0: excluded along with everything past it.
    board.set(Square::new(4, 1), Some(Piece::new(Color::White, PieceKind::Knight)));
    let moves = generate_moves(&board, d4);
    assert!(moves.contains(&Square::new(4, 2)));
    assert!(!moves.contains(&Square::new(4, 1)));
    assert!(!moves.contains(&Square::new(4, 0)));
    assert_eq!(moves.len(), 11);
}

#[test]
fn empty_origin_has_no_destinations() {
    assert!(generate_moves(&Board::empty(), Square::new(0, 0)).is_empty());
    assert!(generate_moves(&Board::starting(), Square::new(3, 3)).is_empty());
}

#[test]
fn promotion_then_undo() {
    let mut board = Board::empty();
    board.set(Square::new(1, 6), Some(Piece::new(Color::White, PieceKind::Pawn)));
    let mut game = GameState::from_board(board.clone(), Color::White);

    game.apply_move(Square::new(1, 6), Square::new(0, 6)).unwrap();
    assert_eq!(
        game.board().get(Square::new(0, 6)).map(|p| p.kind),
        Some(PieceKind::Queen)
    );

    game.undo();
    assert_eq!(
        game.board().get(Square::new(1, 6)).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );
    assert_eq!(game.board(), &board);
}

#[test]
fn undo_with_empty_history_is_a_silent_no_op() {
    // Policy: the plain undo ignores an empty history; try_undo reports it.
    let mut game = GameState::new_game();
    assert_eq!(game.undo(), None);
    assert_eq!(game, GameState::new_game());
    assert_eq!(game.try_undo(), Err(ChessError::EmptyHistoryUndo));
}

#[test]
fn notation_round_trip_and_errors() {
    for sq in Square::all() {
        assert_eq!(algebraic_to_square(&square_to_algebraic(sq)), Ok(sq));
    }
    assert_eq!(square_to_algebraic(Square::new(0, 0)), "a8");
    assert!(matches!(
        algebraic_to_square("z9"),
        Err(ChessError::InvalidNotation(_))
    ));
}

#[test]
fn long_game_undoes_back_to_start() {
    let moves = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "b5"),
        ("a7", "a6"),
        ("b5", "c6"),
        ("d7", "c6"),
        ("f3", "e5"),
        ("d8", "d4"),
        ("e5", "f7"),
        ("d4", "e4"),
    ];
    let mut game = GameState::new_game();
    let mut snapshots = vec![game.clone()];
    for (from, to) in moves {
        let from = algebraic_to_square(from).unwrap();
        let to = algebraic_to_square(to).unwrap();
        assert!(game.moves_from(from).contains(&to), "{from}{to}");
        game.apply_checked_move(from, to).unwrap();
        snapshots.push(game.clone());
    }
    assert_eq!(game.history().iter().filter(|r| r.is_capture()).count(), 5);

    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        game.undo();
        assert_eq!(game, expected);
    }
    assert_eq!(game, GameState::new_game());
}
