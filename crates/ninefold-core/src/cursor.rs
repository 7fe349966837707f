//! Row-major traversal over the board.

use crate::position::Position;

/// A traversal cursor over the 81 cells in canonical row-major order.
///
/// Every scan in the engine enumerates cells through this cursor (or
/// through [`Position::ALL`], which has the identical order), so that
/// deduction, backtracking, and the text format all agree on cell order.
///
/// The stepping methods return whether a further position exists; on
/// `false` the cursor is left unchanged. The successor of the last cell of
/// a row is the first cell of the next row, and symmetrically for
/// [`retreat`](Self::retreat).
///
/// # Examples
///
/// ```
/// use ninefold_core::{Cursor, Position};
///
/// let mut cursor = Cursor::new();
/// assert_eq!(cursor.pos(), Position::new(0, 0));
///
/// // Wraps from the end of a row onto the next one.
/// let mut cursor = Cursor::at(Position::new(0, 8));
/// assert!(cursor.advance());
/// assert_eq!(cursor.pos(), Position::new(1, 0));
///
/// // No successor past the last cell.
/// let mut cursor = Cursor::at(Position::new(8, 8));
/// assert!(!cursor.advance());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Creates a cursor at the top-left cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos: Position::FIRST,
        }
    }

    /// Creates a cursor at an arbitrary position.
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self { pos }
    }

    /// Returns the current position.
    #[must_use]
    pub const fn pos(self) -> Position {
        self.pos
    }

    /// Steps to the row-major successor; `false` at the last cell.
    pub fn advance(&mut self) -> bool {
        if self.pos == Position::LAST {
            return false;
        }
        self.pos = if self.pos.col() == 8 {
            Position::new(self.pos.row() + 1, 0)
        } else {
            Position::new(self.pos.row(), self.pos.col() + 1)
        };
        true
    }

    /// Steps to the row-major predecessor; `false` at the first cell.
    pub fn retreat(&mut self) -> bool {
        if self.pos == Position::FIRST {
            return false;
        }
        self.pos = if self.pos.col() == 0 {
            Position::new(self.pos.row() - 1, 8)
        } else {
            Position::new(self.pos.row(), self.pos.col() - 1)
        };
        true
    }

    /// Steps one column right within the current row; `false` in column 8.
    pub fn advance_in_row(&mut self) -> bool {
        if self.pos.col() == 8 {
            return false;
        }
        self.pos = Position::new(self.pos.row(), self.pos.col() + 1);
        true
    }

    /// Steps one row down within the current column; `false` in row 8.
    pub fn advance_in_column(&mut self) -> bool {
        if self.pos.row() == 8 {
            return false;
        }
        self.pos = Position::new(self.pos.row() + 1, self.pos.col());
        true
    }
}
