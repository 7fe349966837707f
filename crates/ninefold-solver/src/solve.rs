//! The driving solve loop.

use log::debug;
use ninefold_core::{Cursor, Grid};

use crate::{
    backtrack::{LastRemaining, trial_search},
    lone_candidate::{
        fix_lone_candidates_in_boxes, fix_lone_candidates_in_columns, fix_lone_candidates_in_rows,
    },
    propagate::propagate_fixed,
    status::{Status, evaluate},
};

/// Whether [`solve`] may fall back to the backtracking trial search when
/// deduction stalls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BruteForce {
    /// Hand over to the trial search after deduction stalls.
    Enabled,
    /// Stop at deduction; a stalled board stays [`Status::Unsolved`].
    Disabled,
}

/// Per-solve bookkeeping of which fixed cells have been propagated.
///
/// Local to each [`solve`] call; nothing about it survives the call.
struct Propagated {
    cells: [bool; 81],
    count: usize,
}

impl Propagated {
    fn new() -> Self {
        Self {
            cells: [false; 81],
            count: 0,
        }
    }

    fn all_done(&self) -> bool {
        self.count == 81
    }
}

/// Solves the grid in place as far as the requested machinery allows.
///
/// Alternates two deductions to a fixpoint: every newly fixed cell is
/// propagated through [`propagate_fixed`], and the per-house
/// lone-candidate sweeps (rows, then columns, then boxes) each trigger
/// another propagation round when they fix something. When the fixpoint
/// stalls short of a full board and brute force is
/// [enabled](BruteForce::Enabled), the backtracking
/// [trial search](trial_search) finishes the job.
///
/// Returns the final [`Status`]. A grid that already evaluates to
/// [`Status::Solved`] or [`Status::Error`] is returned unchanged.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use ninefold_core::Grid;
/// use ninefold_solver::{BruteForce, Status, solve};
///
/// let mut grid = Grid::from_str(
///     "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
///     ",
/// )?;
/// assert_eq!(solve(&mut grid, BruteForce::Enabled), Status::Solved);
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
pub fn solve(grid: &mut Grid, brute_force: BruteForce) -> Status {
    let status = evaluate(grid);
    if status != Status::Unsolved {
        return status;
    }

    let mut propagated = Propagated::new();
    while propagate_new_singles(grid, &mut propagated) {}

    loop {
        if propagated.all_done() {
            break;
        }
        let mut change = false;
        if fix_lone_candidates_in_rows(grid) {
            change = true;
            while propagate_new_singles(grid, &mut propagated) {}
        }
        if fix_lone_candidates_in_columns(grid) {
            change = true;
            while propagate_new_singles(grid, &mut propagated) {}
        }
        if fix_lone_candidates_in_boxes(grid) {
            change = true;
            while propagate_new_singles(grid, &mut propagated) {}
        }
        if !change {
            break;
        }
    }

    let status = evaluate(grid);
    if status != Status::Unsolved {
        return status;
    }

    match brute_force {
        BruteForce::Enabled => {
            debug!(
                "deduction stalled with {} cells propagated; starting trial search",
                propagated.count
            );
            let status = trial_search(grid, &mut LastRemaining);
            debug!("trial search finished: {status}");
            status
        }
        BruteForce::Disabled => Status::Unsolved,
    }
}

/// One sweep over the board in traversal order: every not-yet-propagated
/// cell whose candidate set has collapsed to a singleton is marked and
/// propagated. Returns whether any candidate set shrank.
fn propagate_new_singles(grid: &mut Grid, propagated: &mut Propagated) -> bool {
    let mut changed = false;
    let mut cursor = Cursor::new();
    loop {
        let pos = cursor.pos();
        if !propagated.cells[pos.index()] && grid.candidates(pos).len() == 1 {
            propagated.cells[pos.index()] = true;
            propagated.count += 1;
            changed |= propagate_fixed(grid, pos);
        }
        if !cursor.advance() {
            break;
        }
    }
    changed
}

/// Reports whether the grid can be solved, without touching it.
///
/// Runs [`solve`] with brute force enabled on a private copy and returns
/// the resulting status; the caller's grid is never mutated.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::{Status, is_solvable};
///
/// let grid = Grid::new();
/// assert_eq!(is_solvable(&grid), Status::Solved);
/// // The probe left the grid untouched.
/// assert_eq!(grid, Grid::new());
/// ```
#[must_use]
pub fn is_solvable(grid: &Grid) -> Status {
    let mut copy = grid.clone();
    solve(&mut copy, BruteForce::Enabled)
}
