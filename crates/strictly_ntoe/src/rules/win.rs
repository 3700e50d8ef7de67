//! Win detection logic.

use super::super::{Board, Line, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans `lines` in order and returns the owner of the first line whose
/// squares all hold the same player. On boards not reachable by legal play
/// several lines may be complete at once; the earliest one wins.
#[instrument(skip(board, lines))]
pub fn check_winner(board: &Board, lines: &[Line]) -> Option<Player> {
    lines.iter().find_map(|line| line_owner(board, line))
}

fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let (first, rest) = line.indices().split_first()?;
    match board.get(*first)? {
        Square::Occupied(player)
            if rest
                .iter()
                .all(|&i| board.get(i) == Some(Square::Occupied(player))) =>
        {
            Some(player)
        }
        _ => None,
    }
}
