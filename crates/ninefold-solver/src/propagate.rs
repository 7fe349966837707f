//! Candidate elimination around a fixed cell.

use ninefold_core::{Grid, House, Position};

/// Removes the digit of a fixed cell from all of its peers.
///
/// A no-op returning `false` unless the cell at `pos` is fixed (candidate
/// set length 1). Otherwise the fixed digit is removed from every *other*
/// cell of the same row, the same column, and the same box, as three
/// independent scans; cells in the intersections are visited more than
/// once, which is harmless. Returns whether any candidate set shrank.
///
/// Elimination may leave a peer with a single candidate (newly fixed) or
/// with none (a contradiction). Neither is handled here: the solve loop
/// reacts to newly fixed cells, and [`evaluate`](crate::evaluate) reports
/// contradictions.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
/// use ninefold_solver::propagate_fixed;
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), Digit::new(5));
///
/// assert!(propagate_fixed(&mut grid, Position::new(0, 0)));
/// assert!(!grid.candidates(Position::new(0, 8)).contains(Digit::D5));
/// assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
/// assert!(!grid.candidates(Position::new(2, 2)).contains(Digit::D5));
///
/// // Idempotent: a second pass finds nothing left to remove.
/// assert!(!propagate_fixed(&mut grid, Position::new(0, 0)));
/// ```
pub fn propagate_fixed(grid: &mut Grid, pos: Position) -> bool {
    let Some(digit) = grid.digit(pos) else {
        return false;
    };

    let mut changed = false;
    for house in [
        House::row_of(pos),
        House::column_of(pos),
        House::box_of(pos),
    ] {
        for peer in house.positions() {
            if peer != pos {
                changed |= grid.remove_candidate(peer, digit);
            }
        }
    }
    changed
}
