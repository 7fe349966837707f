//! Per-house lone-candidate deduction.
//!
//! For a single house, a digit that appears as a candidate in exactly one
//! *undetermined* cell must go there. The three house kinds are swept
//! independently; no pass cross-references another house kind.

use ninefold_core::{Digit, Grid, House, Position};

/// Sweeps all nine rows; returns whether any cell was fixed.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, House, Position};
/// use ninefold_solver::fix_lone_candidates_in_rows;
///
/// let mut grid = Grid::new();
/// // Digit 4 remains possible only at (5, 7) within row 5.
/// for pos in (House::Row { row: 5 }).positions() {
///     if pos.col() != 7 {
///         grid.remove_candidate(pos, Digit::D4);
///     }
/// }
///
/// assert!(fix_lone_candidates_in_rows(&mut grid));
/// assert_eq!(grid.digit(Position::new(5, 7)), Some(Digit::D4));
/// ```
pub fn fix_lone_candidates_in_rows(grid: &mut Grid) -> bool {
    fix_lone_candidates(grid, &House::ROWS)
}

/// Sweeps all nine columns; returns whether any cell was fixed.
pub fn fix_lone_candidates_in_columns(grid: &mut Grid) -> bool {
    fix_lone_candidates(grid, &House::COLUMNS)
}

/// Sweeps all nine boxes; returns whether any cell was fixed.
pub fn fix_lone_candidates_in_boxes(grid: &mut Grid) -> bool {
    fix_lone_candidates(grid, &House::BOXES)
}

/// Tallies candidates across the undetermined cells of each house and
/// fixes every digit whose tally is exactly one at the position where it
/// was last seen.
///
/// Cells that are already fixed do not participate in the tally at all;
/// the deduction is blind to them.
fn fix_lone_candidates(grid: &mut Grid, houses: &[House; 9]) -> bool {
    let mut changed = false;
    for house in houses {
        let mut tally = [0u8; 9];
        let mut last_seen = [Position::FIRST; 9];
        for pos in house.positions() {
            let cell = grid.candidates(pos);
            if cell.len() == 1 {
                continue;
            }
            for digit in cell {
                let i = usize::from(digit.value()) - 1;
                tally[i] += 1;
                last_seen[i] = pos;
            }
        }
        for digit in Digit::ALL {
            let i = usize::from(digit.value()) - 1;
            if tally[i] == 1 {
                grid.set(last_seen[i], Some(digit));
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use ninefold_core::Digit::*;

    use super::*;

    #[test]
    fn test_no_change_on_fully_open_grid() {
        // Every digit is possible in all nine cells of every house.
        let mut grid = Grid::new();
        assert!(!fix_lone_candidates_in_rows(&mut grid));
        assert!(!fix_lone_candidates_in_columns(&mut grid));
        assert!(!fix_lone_candidates_in_boxes(&mut grid));
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_fixes_lone_candidate_in_row() {
        let mut grid = Grid::new();
        for pos in (House::Row { row: 0 }).positions() {
            if pos.col() != 3 {
                grid.remove_candidate(pos, D5);
            }
        }

        assert!(fix_lone_candidates_in_rows(&mut grid));
        assert_eq!(grid.digit(Position::new(0, 3)), Some(D5));
    }

    #[test]
    fn test_fixes_lone_candidate_in_column() {
        let mut grid = Grid::new();
        for pos in (House::Column { col: 5 }).positions() {
            if pos.row() != 4 {
                grid.remove_candidate(pos, D7);
            }
        }

        assert!(fix_lone_candidates_in_columns(&mut grid));
        assert_eq!(grid.digit(Position::new(4, 5)), Some(D7));
    }

    #[test]
    fn test_fixes_lone_candidate_in_box() {
        let mut grid = Grid::new();
        for pos in (House::Box { index: 4 }).positions() {
            if pos != Position::new(4, 4) {
                grid.remove_candidate(pos, D9);
            }
        }

        assert!(fix_lone_candidates_in_boxes(&mut grid));
        assert_eq!(grid.digit(Position::new(4, 4)), Some(D9));
    }

    #[test]
    fn test_row_sweep_ignores_other_house_kinds() {
        // The digit is lone within a column, not within any row; the row
        // sweep must not fix it.
        let mut grid = Grid::new();
        for pos in (House::Column { col: 2 }).positions() {
            if pos.row() != 6 {
                grid.remove_candidate(pos, D1);
            }
        }

        assert!(!fix_lone_candidates_in_rows(&mut grid));
        assert_eq!(grid.digit(Position::new(6, 2)), None);
    }

    #[test]
    fn test_overwrites_other_candidates_of_the_target_cell() {
        let mut grid = Grid::new();
        for pos in (House::Row { row: 2 }).positions() {
            if pos.col() != 0 {
                grid.remove_candidate(pos, D8);
            }
        }
        // The target cell keeps a crowded candidate set until the sweep
        // overwrites it with the singleton.
        assert_eq!(grid.candidates(Position::new(2, 0)).len(), 9);

        assert!(fix_lone_candidates_in_rows(&mut grid));
        assert_eq!(grid.digit(Position::new(2, 0)), Some(D8));
    }

    #[test]
    fn test_fixed_cells_do_not_participate() {
        // Digit 3 is already placed in the row, and also appears as a
        // candidate in exactly one undetermined cell. The sweep only sees
        // the undetermined cells, so it fixes the digit again.
        let mut grid = Grid::new();
        grid.set(Position::new(1, 0), Some(D3));
        for pos in (House::Row { row: 1 }).positions() {
            if pos.col() > 1 {
                grid.remove_candidate(pos, D3);
            }
        }

        assert!(fix_lone_candidates_in_rows(&mut grid));
        assert_eq!(grid.digit(Position::new(1, 1)), Some(D3));
    }

    #[test]
    fn test_multiple_houses_in_one_sweep() {
        let mut grid = Grid::new();
        for pos in (House::Row { row: 0 }).positions() {
            if pos.col() != 0 {
                grid.remove_candidate(pos, D2);
            }
        }
        for pos in (House::Row { row: 8 }).positions() {
            if pos.col() != 8 {
                grid.remove_candidate(pos, D6);
            }
        }

        assert!(fix_lone_candidates_in_rows(&mut grid));
        assert_eq!(grid.digit(Position::new(0, 0)), Some(D2));
        assert_eq!(grid.digit(Position::new(8, 8)), Some(D6));
    }
}
