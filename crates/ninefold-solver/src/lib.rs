//! Solving engine for the ninefold sudoku crates.
//!
//! The solver works on a [`Grid`](ninefold_core::Grid) of candidate sets
//! and combines three mechanisms:
//!
//! 1. **Elimination** ([`propagate_fixed`]): a fixed cell removes its digit
//!    from every peer sharing a row, column, or box.
//! 2. **Lone-candidate deduction** ([`fix_lone_candidates_in_rows`] and
//!    friends): per house, a digit possible in exactly one undetermined
//!    cell is fixed there.
//! 3. **Backtracking trial search** ([`trial_search`]): an iterative
//!    depth-first assignment over the traversal order, used when deduction
//!    stalls and as the core of puzzle generation.
//!
//! [`evaluate`] classifies a grid as [`Status::Solved`],
//! [`Status::Unsolved`], or [`Status::Error`]; [`solve`] drives the three
//! mechanisms to a fixpoint, and [`is_solvable`] answers the same question
//! non-destructively on a copy.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Grid;
//! use ninefold_solver::{BruteForce, Status, solve};
//!
//! let mut grid = Grid::new();
//!
//! // Deduction alone cannot decide anything on an empty board...
//! assert_eq!(solve(&mut grid, BruteForce::Disabled), Status::Unsolved);
//!
//! // ...but the trial search fills it completely.
//! assert_eq!(solve(&mut grid, BruteForce::Enabled), Status::Solved);
//! ```

pub use self::{
    backtrack::{LastRemaining, TrialOrder, collides, trial_search},
    lone_candidate::{
        fix_lone_candidates_in_boxes, fix_lone_candidates_in_columns, fix_lone_candidates_in_rows,
    },
    propagate::propagate_fixed,
    solve::{BruteForce, is_solvable, solve},
    status::{Status, evaluate},
};

mod backtrack;
mod lone_candidate;
mod propagate;
mod solve;
mod status;
