//! Core data structures for the ninefold sudoku engine.
//!
//! This crate provides the board model shared by the solver, generator, and
//! I/O crates:
//!
//! - [`Digit`]: type-safe sudoku digits 1-9
//! - [`Candidates`]: the set of digits still possible at one cell
//! - [`Position`]: a (row, column) board coordinate
//! - [`Cursor`]: the canonical row-major traversal over all 81 cells
//! - [`House`]: a row, column, or 3×3 box
//! - [`Grid`]: 81 candidate sets addressed by position
//!
//! A cell is *fixed* when its candidate set has exactly one member,
//! *contradictory* when it has none, and *undetermined* otherwise. A fresh
//! grid is fully open: every cell holds all nine digits.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! assert_eq!(grid.candidates(Position::new(0, 0)).len(), 9);
//!
//! // Fix a cell, then clear it again.
//! grid.set(Position::new(4, 4), Digit::new(5));
//! assert_eq!(grid.digit(Position::new(4, 4)), Digit::new(5));
//! grid.set(Position::new(4, 4), None);
//! assert_eq!(grid.digit(Position::new(4, 4)), None);
//! ```

pub mod candidates;
pub mod cursor;
pub mod digit;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    candidates::Candidates,
    cursor::Cursor,
    digit::Digit,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
};
