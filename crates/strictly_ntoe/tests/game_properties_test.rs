//! Behavioural properties of the engine across all board sizes.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_ntoe::{
    Board, BoardSize, GameState, GameStatus, Move, MoveError, Player, Square, generate_lines,
};
use strum::IntoEnumIterator;

/// Every player who owns a complete line on `board`.
fn line_owners(board: &Board) -> HashSet<Player> {
    generate_lines(board.size())
        .iter()
        .filter_map(|line| {
            let owner = match board.get(line.indices()[0])? {
                Square::Occupied(p) => p,
                Square::Empty => return None,
            };
            line.indices()
                .iter()
                .all(|&i| board.get(i) == Some(Square::Occupied(owner)))
                .then_some(owner)
        })
        .collect()
}

fn random_game(size: BoardSize, rng: &mut StdRng) -> Vec<GameState> {
    let mut states = vec![GameState::new(size)];
    loop {
        let game = states.last().cloned().unwrap_or_default();
        let legal = game.legal_moves();
        if legal.is_empty() {
            return states;
        }
        let index = legal[rng.random_range(0..legal.len())];
        states.push(game.apply_move(index));
    }
}

#[test]
fn test_lines_have_expected_shape_for_every_size() {
    for size in BoardSize::iter() {
        let n = size.side();
        let lines = generate_lines(size);
        assert_eq!(lines.len(), 2 * n + 2);
        for line in &lines {
            let unique: HashSet<_> = line.indices().iter().copied().collect();
            assert_eq!(unique.len(), n);
            assert!(unique.iter().all(|&i| i < n * n));
        }
    }
}

#[test]
fn test_reachable_boards_never_have_two_winners() {
    let mut rng = StdRng::seed_from_u64(2024);
    for size in BoardSize::iter() {
        for _ in 0..200 {
            for state in random_game(size, &mut rng) {
                let owners = line_owners(state.board());
                assert!(owners.len() <= 1, "two winners on {}", state.board().display());
                match state.status() {
                    GameStatus::Won(p) => assert_eq!(owners, HashSet::from([p])),
                    _ => assert!(owners.is_empty()),
                }
            }
        }
    }
}

#[test]
fn test_move_then_undo_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for size in BoardSize::iter() {
        for _ in 0..50 {
            for state in random_game(size, &mut rng) {
                for index in state.legal_moves() {
                    let next = state.clone().apply_move(index);
                    if next.is_over() {
                        continue;
                    }
                    assert_eq!(next.undo_move(), state);
                }
            }
        }
    }
}

#[test]
fn test_illegal_moves_change_nothing() {
    let game = GameState::replay(BoardSize::Four, &[5, 6]).unwrap();
    assert_eq!(game.clone().apply_move(5), game);
    assert_eq!(game.clone().apply_move(16), game);

    let won = GameState::replay(BoardSize::Three, &[0, 3, 1, 4, 2]).unwrap();
    for index in 0..9 {
        assert_eq!(won.clone().apply_move(index), won);
    }
    assert_eq!(won.clone().undo_move(), won);
}

#[test]
fn test_undo_on_fresh_game_is_noop() {
    let game = GameState::new(BoardSize::Three);
    assert_eq!(game.clone().undo_move(), game);
}

#[test]
fn test_top_row_win_example() {
    let game = GameState::new(BoardSize::Three)
        .apply_move(0)
        .apply_move(3)
        .apply_move(1)
        .apply_move(4)
        .apply_move(2);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(game.is_over());
}

#[test]
fn test_column_completed_mid_sequence_stops_the_game() {
    // X:0 O:1 X:3 O:2 X:6 completes column 0, so the rest is rejected.
    let result = GameState::replay(BoardSize::Three, &[0, 1, 3, 2, 6, 5, 4, 7, 8]);
    assert_eq!(result, Err(MoveError::GameOver));

    let game = GameState::replay(BoardSize::Three, &[0, 1, 3, 2, 6]).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.clone().apply_move(5), game);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let game = GameState::replay(BoardSize::Three, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.move_count(), 9);
}

#[test]
fn test_four_by_four_anti_diagonal() {
    let mut board = Board::new(BoardSize::Four);
    for i in [3, 6, 9, 12] {
        board.set(i, Square::Occupied(Player::O)).unwrap();
    }
    assert_eq!(
        strictly_ntoe::evaluate(&board, &generate_lines(BoardSize::Four)),
        Some(strictly_ntoe::Outcome::Winner(Player::O))
    );

    // X: 3, 6, 9, 12 with O elsewhere, played through the game.
    let game = GameState::replay(BoardSize::Four, &[3, 0, 6, 1, 9, 2, 12]).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_history_records_moves_in_order() {
    let game = GameState::replay(BoardSize::Five, &[12, 0, 24]).unwrap();
    assert_eq!(
        game.history(),
        &[
            Move::new(12, Player::X),
            Move::new(0, Player::O),
            Move::new(24, Player::X)
        ]
    );
    let encoded: Vec<_> = game.history().iter().map(Move::encoding).collect();
    assert_eq!(encoded, vec![(12, 1), (0, -1), (24, 1)]);
}
