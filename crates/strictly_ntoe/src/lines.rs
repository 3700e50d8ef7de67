//! Winning line generation for an N×N board.
//!
//! A line is a full side-length run: every row, every column, and the two
//! corner-to-corner diagonals. Shorter diagonals never count, so the set of
//! lines for size N always has exactly 2N + 2 members.

use super::types::BoardSize;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which run of the board a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row `r`, counted from the top.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `c`, counted from the left.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// One candidate winning run of cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Line {
    /// Which run this is.
    kind: LineKind,
    /// Cell indices in board order.
    indices: Vec<usize>,
}

impl Line {
    fn new(kind: LineKind, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            kind,
            indices: indices.into_iter().collect(),
        }
    }
}

/// Generates every winning line for a board of the given size.
///
/// Lines come out rows first, then columns, then the main and anti diagonal.
/// Outcome evaluation relies on this order when reporting the first match.
#[instrument]
pub fn generate_lines(size: BoardSize) -> Vec<Line> {
    let n = size.side();
    let mut lines = Vec::with_capacity(2 * n + 2);

    for r in 0..n {
        lines.push(Line::new(LineKind::Row(r), (0..n).map(|k| r * n + k)));
    }

    for c in 0..n {
        lines.push(Line::new(LineKind::Column(c), (0..n).map(|k| c + k * n)));
    }

    lines.push(Line::new(LineKind::MainDiagonal, (0..n).map(|k| k * (n + 1))));
    lines.push(Line::new(
        LineKind::AntiDiagonal,
        (0..n).map(|k| (k + 1) * (n - 1)),
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_line_count_and_shape() {
        for size in BoardSize::iter() {
            let n = size.side();
            let lines = generate_lines(size);
            assert_eq!(lines.len(), 2 * n + 2);

            for line in &lines {
                assert_eq!(line.indices().len(), n);
                let unique: HashSet<_> = line.indices().iter().collect();
                assert_eq!(unique.len(), n, "{} repeats an index", line.kind());
                assert!(line.indices().iter().all(|&i| i < size.cells()));
            }

            let distinct: HashSet<_> = lines.iter().map(|l| l.indices().clone()).collect();
            assert_eq!(distinct.len(), lines.len());
        }
    }

    #[test]
    fn test_classic_three_by_three() {
        let lines: Vec<Vec<usize>> = generate_lines(BoardSize::Three)
            .into_iter()
            .map(|l| l.indices().clone())
            .collect();
        assert_eq!(
            lines,
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_four_by_four_diagonals() {
        let lines = generate_lines(BoardSize::Four);
        let main = &lines[8];
        let anti = &lines[9];
        assert_eq!(main.kind(), &LineKind::MainDiagonal);
        assert_eq!(main.indices(), &vec![0, 5, 10, 15]);
        assert_eq!(anti.kind(), &LineKind::AntiDiagonal);
        assert_eq!(anti.indices(), &vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_five_by_five_order() {
        let lines = generate_lines(BoardSize::Five);
        assert_eq!(lines[0].kind(), &LineKind::Row(0));
        assert_eq!(lines[4].indices(), &vec![20, 21, 22, 23, 24]);
        assert_eq!(lines[5].kind(), &LineKind::Column(0));
        assert_eq!(lines[9].indices(), &vec![4, 9, 14, 19, 24]);
        assert_eq!(lines[11].indices(), &vec![4, 8, 12, 16, 20]);
    }
}
