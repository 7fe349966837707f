//! The board: 81 candidate sets addressed by position.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{candidates::Candidates, digit::Digit, position::Position};

/// A 9×9 board of candidate sets.
///
/// Every engine component mutates the grid in place through an exclusive
/// reference. `Grid` is a value type: cloning copies all 81 candidate sets
/// independently, which is what non-destructive solvability checks and
/// backtracking snapshots rely on.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// let pos = Position::new(2, 3);
///
/// // A fresh grid is fully open.
/// assert_eq!(grid.candidates(pos).len(), 9);
/// assert_eq!(grid.digit(pos), None);
///
/// // Fixing overwrites the candidate set with a singleton.
/// grid.set(pos, Digit::new(8));
/// assert_eq!(grid.digit(pos), Digit::new(8));
///
/// // Clearing restores the full open set.
/// grid.set(pos, None);
/// assert_eq!(grid.candidates(pos).len(), 9);
/// ```
///
/// # Grid literals
///
/// Grids can be parsed from strings: digits fix cells, `.`, `_`, and `0`
/// leave them open, whitespace is ignored.
///
/// ```
/// use std::str::FromStr as _;
///
/// use ninefold_core::{Digit, Grid, Position};
///
/// let grid = Grid::from_str(
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
/// assert_eq!(grid.digit(Position::new(0, 0)), Digit::new(5));
/// assert_eq!(grid.digit(Position::new(0, 2)), None);
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Candidates; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a fully open grid: every cell holds all nine digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Candidates::FULL; 81],
        }
    }

    /// Returns the candidate set at `pos`.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> Candidates {
        self.cells[pos.index()]
    }

    /// Fixes or clears the cell at `pos`.
    ///
    /// `Some(digit)` overwrites the candidate set with the singleton;
    /// `None` resets the cell to the full open set. Clearing is the only
    /// "unset" operation the board offers.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = match digit {
            Some(digit) => Candidates::only(digit),
            None => Candidates::FULL,
        };
    }

    /// Returns the fixed digit at `pos`, or `None` if the cell is not
    /// fixed (candidate set length ≠ 1).
    #[must_use]
    pub fn digit(&self, pos: Position) -> Option<Digit> {
        self.candidates(pos).as_single()
    }

    /// Removes `digit` from the candidate set at `pos`; returns `true` if
    /// the set shrank.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.index()].remove(digit)
    }
}

impl Index<Position> for Grid {
    type Output = Candidates;

    fn index(&self, pos: Position) -> &Candidates {
        &self.cells[pos.index()]
    }
}

impl Display for Grid {
    /// Renders nine rows of digits with `.` for non-fixed cells, grouped
    /// in threes. This is a human-readable view; the interchange format
    /// lives in the I/O crate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..9 {
            for col in 0u8..9 {
                match self.digit(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('.')?,
                }
                if col == 2 || col == 5 {
                    f.write_char(' ')?;
                }
            }
            if row < 8 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

/// Error parsing a grid literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseGridError {
    /// The literal contains a character that is neither a digit, an
    /// open-cell marker (`.`, `_`, `0`), nor whitespace.
    #[display("unexpected character {ch:?} in grid literal")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// The literal does not describe exactly 81 cells.
    #[display("grid literal has {count} cells, expected 81")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            match ch {
                '1'..='9' => {
                    if count < 81 {
                        let digit = ch
                            .to_digit(10)
                            .and_then(|value| u8::try_from(value).ok())
                            .and_then(Digit::new);
                        grid.set(Position::ALL[count], digit);
                    }
                    count += 1;
                }
                '.' | '_' | '0' => count += 1,
                _ => return Err(ParseGridError::UnexpectedCharacter { ch }),
            }
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}
