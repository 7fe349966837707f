//! Board classification.

use derive_more::{Display, IsVariant};
use ninefold_core::{Cursor, Grid, House};

/// Classification of a grid, recomputed from its candidate sets on demand.
///
/// This closed three-way result is the engine's whole error taxonomy:
/// logically bad boards classify as [`Error`](Status::Error), they never
/// panic or return a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum Status {
    /// Every cell is fixed and no house violates the digit-count rule.
    #[display("solved")]
    Solved,
    /// At least one cell is still undetermined; no contradiction found.
    #[display("unsolved")]
    Unsolved,
    /// Some cell has no remaining candidates, or a fully fixed board has a
    /// digit occurring three or more times in one house.
    #[display("error")]
    Error,
}

/// Classifies a grid as solved, unsolved, or contradictory.
///
/// The passes run in order:
///
/// 1. any cell with an empty candidate set is a contradiction;
/// 2. any cell with more than one candidate leaves the board unsolved;
/// 3. on a fully fixed board, each row, column, and box is checked for a
///    digit occurring **three or more** times.
///
/// Exactly two occurrences of a digit in a house are tolerated: such a
/// board classifies as [`Status::Solved`]. This looser-than-sudoku rule is
/// long-standing observable behavior and is kept deliberately; tests pin
/// it.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::{Status, evaluate};
///
/// assert_eq!(evaluate(&Grid::new()), Status::Unsolved);
/// ```
#[must_use]
pub fn evaluate(grid: &Grid) -> Status {
    let mut cursor = Cursor::new();
    loop {
        if grid.candidates(cursor.pos()).is_empty() {
            return Status::Error;
        }
        if !cursor.advance() {
            break;
        }
    }

    let mut cursor = Cursor::new();
    loop {
        if grid.candidates(cursor.pos()).len() > 1 {
            return Status::Unsolved;
        }
        if !cursor.advance() {
            break;
        }
    }

    for house in House::ALL {
        let mut tally = [0u8; 9];
        for pos in house.positions() {
            if let Some(digit) = grid.digit(pos) {
                tally[usize::from(digit.value()) - 1] += 1;
            }
        }
        if tally.iter().any(|&count| count > 2) {
            return Status::Error;
        }
    }

    Status::Solved
}
