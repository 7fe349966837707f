//! Iterative backtracking trial search.

use ninefold_core::{Candidates, Cursor, Digit, Grid, House, Position};

use crate::status::Status;

/// Chooses which digit of a trial pool to try next.
///
/// The trial search is one state machine shared by the solver and the
/// puzzle generator; only the order in which candidates are tried differs.
/// Implementations must return a digit contained in `pool`, or `None` when
/// `pool` is empty.
pub trait TrialOrder {
    /// Picks the next digit to try from `pool`.
    fn next_trial(&mut self, pool: Candidates) -> Option<Digit>;
}

/// Deterministic trial order: always the highest remaining digit.
///
/// Two searches over the same grid with this order visit identical
/// assignments, which keeps the solver reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastRemaining;

impl TrialOrder for LastRemaining {
    fn next_trial(&mut self, pool: Candidates) -> Option<Digit> {
        pool.iter().last()
    }
}

/// Returns whether the fixed digit at `pos` also appears fixed elsewhere
/// in the same row, column, or box.
///
/// `false` for cells that are not fixed. Shared by the trial search and
/// the puzzle generator.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
/// use ninefold_solver::collides;
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), Digit::new(9));
/// grid.set(Position::new(0, 7), Digit::new(9));
///
/// assert!(collides(&grid, Position::new(0, 0)));
/// assert!(!collides(&grid, Position::new(1, 1)));
/// ```
#[must_use]
pub fn collides(grid: &Grid, pos: Position) -> bool {
    let Some(digit) = grid.digit(pos) else {
        return false;
    };

    let mut cursor = Cursor::at(Position::new(pos.row(), 0));
    loop {
        let peer = cursor.pos();
        if peer != pos && grid.digit(peer) == Some(digit) {
            return true;
        }
        if !cursor.advance_in_row() {
            break;
        }
    }

    let mut cursor = Cursor::at(Position::new(0, pos.col()));
    loop {
        let peer = cursor.pos();
        if peer != pos && grid.digit(peer) == Some(digit) {
            return true;
        }
        if !cursor.advance_in_column() {
            break;
        }
    }

    for peer in House::box_of(pos).positions() {
        if peer != pos && grid.digit(peer) == Some(digit) {
            return true;
        }
    }

    false
}

/// Depth-first trial-and-undo assignment over the traversal order.
///
/// The search snapshots the grid at entry; cells that are fixed in the
/// snapshot are never reassigned. Every other cell carries a trial pool,
/// initialized from its snapshot candidate set. The search walks the
/// cursor forward, assigning one pool digit at a time and rejecting
/// assignments that [collide](collides); when a pool runs dry the cell and
/// its pool are reset to the full open set and the cursor retreats.
/// Walking off the far end yields [`Status::Solved`] with the grid fully
/// assigned; retreating past the first cell yields [`Status::Error`],
/// meaning no assignment exists.
///
/// The state machine is iterative — the cursor plus a direction flag *is*
/// the call stack — so memory use stays constant no matter how deep the
/// search runs. There is no depth or time bound.
pub fn trial_search(grid: &mut Grid, order: &mut impl TrialOrder) -> Status {
    let frozen = grid.clone();
    let mut pools: [Candidates; 81] =
        std::array::from_fn(|i| frozen.candidates(Position::ALL[i]));

    let mut cursor = Cursor::new();
    let mut forward = true;

    loop {
        let pos = cursor.pos();

        if frozen.digit(pos).is_some() {
            let moved = if forward {
                cursor.advance()
            } else {
                cursor.retreat()
            };
            if !moved {
                return if forward { Status::Solved } else { Status::Error };
            }
            continue;
        }

        let pool = &mut pools[pos.index()];
        if let Some(digit) = order.next_trial(*pool) {
            pool.remove(digit);
            grid.set(pos, Some(digit));
            if !collides(grid, pos) {
                forward = true;
                if !cursor.advance() {
                    return Status::Solved;
                }
            }
            // On collision the same cell is retried with the next digit.
        } else {
            grid.set(pos, None);
            *pool = Candidates::FULL;
            forward = false;
            if !cursor.retreat() {
                return Status::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use ninefold_core::Digit::*;

    use crate::status::evaluate;

    use super::*;

    #[test]
    fn test_collides_ignores_undetermined_cells() {
        let grid = Grid::new();
        assert!(!collides(&grid, Position::new(4, 4)));
    }

    #[test]
    fn test_collides_in_row_column_and_box() {
        let mut grid = Grid::new();
        grid.set(Position::new(2, 2), Some(D4));

        let mut row = grid.clone();
        row.set(Position::new(2, 7), Some(D4));
        assert!(collides(&row, Position::new(2, 2)));

        let mut column = grid.clone();
        column.set(Position::new(6, 2), Some(D4));
        assert!(collides(&column, Position::new(2, 2)));

        let mut in_box = grid.clone();
        in_box.set(Position::new(0, 1), Some(D4));
        assert!(collides(&in_box, Position::new(2, 2)));
    }

    #[test]
    fn test_no_collision_for_distinct_digits() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(D1));
        grid.set(Position::new(0, 1), Some(D2));
        grid.set(Position::new(1, 1), Some(D3));
        assert!(!collides(&grid, Position::new(0, 0)));
        assert!(!collides(&grid, Position::new(0, 1)));
        assert!(!collides(&grid, Position::new(1, 1)));
    }

    #[test]
    fn test_search_fills_an_empty_grid() {
        let mut grid = Grid::new();
        assert_eq!(trial_search(&mut grid, &mut LastRemaining), Status::Solved);
        assert_eq!(evaluate(&grid), Status::Solved);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut first = Grid::new();
        let mut second = Grid::new();
        trial_search(&mut first, &mut LastRemaining);
        trial_search(&mut second, &mut LastRemaining);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_preserves_frozen_cells() {
        let mut grid = Grid::from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
            ",
        )
        .unwrap();
        let givens = grid.clone();

        assert_eq!(trial_search(&mut grid, &mut LastRemaining), Status::Solved);
        assert_eq!(evaluate(&grid), Status::Solved);
        for pos in Position::ALL {
            if let Some(digit) = givens.digit(pos) {
                assert_eq!(grid.digit(pos), Some(digit));
            } else {
                assert!(grid.digit(pos).is_some());
            }
        }
    }

    #[test]
    fn test_search_reports_unsolvable_grid() {
        // Row 0 holds 1-8 in its first eight cells and the 9 is blocked
        // by the box below, so (0, 8) has no legal digit.
        let mut grid = Grid::new();
        for (col, digit) in (0..).zip([D1, D2, D3, D4, D5, D6, D7, D8]) {
            grid.set(Position::new(0, col), Some(digit));
        }
        grid.set(Position::new(1, 7), Some(D9));

        assert_eq!(trial_search(&mut grid, &mut LastRemaining), Status::Error);
    }

    #[test]
    fn test_search_on_already_complete_grid() {
        let mut grid = Grid::new();
        trial_search(&mut grid, &mut LastRemaining);
        let complete = grid.clone();

        // Every cell is frozen; the search just walks across and succeeds.
        assert_eq!(trial_search(&mut grid, &mut LastRemaining), Status::Solved);
        assert_eq!(grid, complete);
    }
}
