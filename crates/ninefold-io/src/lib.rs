//! Flat text interchange format for ninefold grids.
//!
//! A grid is written row-major, one token per cell: fixed cells as their
//! digit, anything else as `X`. A space separates cells within a 3-cell
//! sub-block, a tab follows each sub-block (the third tab terminates the
//! row), and a blank line follows every third row:
//!
//! ```text
//! 5 3 4	6 7 8	9 1 2
//! 6 7 2	1 9 5	3 4 8
//! 1 9 8	3 4 2	5 6 7
//!
//! 8 5 9	7 6 1	4 2 3
//! ...
//! ```
//!
//! Reading is deliberately permissive: whitespace and control characters
//! are skipped, a digit fixes the current cell, and any other character
//! (including `X`) leaves the cell open — either way the reader moves on
//! to the next cell slot. Reading never fails on malformed content, only
//! on inaccessible files.

use std::{fs, io, path::Path};

use derive_more::{Display, Error, From};
use ninefold_core::{Cursor, Digit, Grid};

/// Failure to access a grid file.
///
/// Distinct from the solver's board classification: file trouble is an
/// error value, a bad board is just a board.
#[derive(Debug, Display, Error, From)]
#[display("grid file access failed: {source}")]
pub struct FileError {
    source: io::Error,
}

/// Renders a grid in the interchange format.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_io::to_text;
///
/// let text = to_text(&Grid::new());
/// assert!(text.starts_with("X X X\tX X X\tX X X\t\n"));
/// ```
#[must_use]
pub fn to_text(grid: &Grid) -> String {
    let mut out = String::new();
    let mut cursor = Cursor::new();
    loop {
        let pos = cursor.pos();
        match grid.digit(pos) {
            Some(digit) => out.push(char::from(b'0' + digit.value())),
            None => out.push('X'),
        }
        if (pos.col() + 1) % 3 == 0 {
            out.push('\t');
        } else {
            out.push(' ');
        }
        if pos.col() == 8 {
            out.push('\n');
            if (pos.row() + 1) % 3 == 0 {
                out.push('\n');
            }
        }
        if !cursor.advance() {
            break;
        }
    }
    out
}

/// Reads a grid from text, starting from a fresh fully open board.
///
/// Consumes the input character by character. Whitespace and control
/// characters are skipped without consuming a cell slot; `1`-`9` fixes the
/// current cell; any other character leaves the cell open; both advance to
/// the next slot in row-major order. Parsing stops when the input runs out
/// or all 81 slots are filled, whichever comes first.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
/// use ninefold_io::parse_text;
///
/// let grid = parse_text("5 X 3");
/// assert_eq!(grid.digit(Position::new(0, 0)), Digit::new(5));
/// assert_eq!(grid.digit(Position::new(0, 1)), None);
/// assert_eq!(grid.digit(Position::new(0, 2)), Digit::new(3));
/// ```
#[must_use]
pub fn parse_text(input: &str) -> Grid {
    let mut grid = Grid::new();
    let mut cursor = Cursor::new();
    for ch in input.chars() {
        if ch.is_whitespace() || ch.is_control() {
            continue;
        }
        let digit = ch
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .and_then(Digit::new);
        if digit.is_some() {
            grid.set(cursor.pos(), digit);
        }
        if !cursor.advance() {
            break;
        }
    }
    grid
}

/// Loads a grid from a file.
///
/// File content is decoded leniently (invalid UTF-8 degrades to
/// replacement characters, which read as open cells); only an
/// inaccessible file is an error.
///
/// # Errors
///
/// Returns [`FileError`] when the file cannot be opened or read.
pub fn read_file<P>(path: P) -> Result<Grid, FileError>
where
    P: AsRef<Path>,
{
    let bytes = fs::read(path)?;
    Ok(parse_text(&String::from_utf8_lossy(&bytes)))
}

/// Saves a grid to a file in the interchange format.
///
/// # Errors
///
/// Returns [`FileError`] when the file cannot be created or written.
pub fn write_file<P>(path: P, grid: &Grid) -> Result<(), FileError>
where
    P: AsRef<Path>,
{
    fs::write(path, to_text(grid))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use ninefold_core::{Candidates, Position};
    use ninefold_solver::{Status, evaluate};

    use super::*;

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_to_text_open_grid() {
        let row = "X X X\tX X X\tX X X\t\n";
        let band = format!("{row}{row}{row}\n");
        let expected = band.repeat(3);
        assert_eq!(to_text(&Grid::new()), expected);
    }

    #[test]
    fn test_to_text_solved_grid_first_row() {
        let grid = Grid::from_str(SOLVED).unwrap();
        let text = to_text(&grid);
        assert!(text.starts_with("5 3 4\t6 7 8\t9 1 2\t\n"));
    }

    #[test]
    fn test_to_text_blank_line_after_each_band() {
        let text = to_text(&Grid::new());
        let lines: Vec<_> = text.lines().collect();
        // Rows at 0-2, 4-6, 8-10; blank lines at 3, 7, and 11.
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[3], "");
        assert_eq!(lines[7], "");
        assert_eq!(lines[11], "");
    }

    #[test]
    fn test_parse_text_digits_fix_cells() {
        let grid = parse_text("123456789");
        for col in 0u8..9 {
            assert_eq!(grid.digit(Position::new(0, col)), Digit::new(col + 1));
        }
    }

    #[test]
    fn test_parse_text_mixed_tokens() {
        let grid = parse_text("5 X 3\t- ? 7");
        assert_eq!(grid.digit(Position::new(0, 0)), Digit::new(5));
        assert_eq!(grid.candidates(Position::new(0, 1)), Candidates::FULL);
        assert_eq!(grid.digit(Position::new(0, 2)), Digit::new(3));
        assert_eq!(grid.candidates(Position::new(0, 3)), Candidates::FULL);
        assert_eq!(grid.candidates(Position::new(0, 4)), Candidates::FULL);
        assert_eq!(grid.digit(Position::new(0, 5)), Digit::new(7));
        // Nothing consumed a slot beyond the six tokens.
        assert_eq!(grid.candidates(Position::new(0, 6)), Candidates::FULL);
    }

    #[test]
    fn test_parse_text_whitespace_does_not_consume_slots() {
        let spaced = parse_text("  1\n\n\t 2 \r\n3");
        assert_eq!(spaced.digit(Position::new(0, 0)), Digit::new(1));
        assert_eq!(spaced.digit(Position::new(0, 1)), Digit::new(2));
        assert_eq!(spaced.digit(Position::new(0, 2)), Digit::new(3));
    }

    #[test]
    fn test_parse_text_zero_leaves_cell_open() {
        let grid = parse_text("0 5");
        assert_eq!(grid.candidates(Position::new(0, 0)), Candidates::FULL);
        assert_eq!(grid.digit(Position::new(0, 1)), Digit::new(5));
    }

    #[test]
    fn test_parse_text_stops_after_81_slots() {
        // 81 X tokens followed by digits: the digits must be ignored.
        let mut input = "X".repeat(81);
        input.push_str("123");
        let grid = parse_text(&input);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_parse_text_partial_input_leaves_rest_open() {
        let grid = parse_text("9");
        assert_eq!(grid.digit(Position::new(0, 0)), Digit::new(9));
        for pos in Position::ALL.into_iter().skip(1) {
            assert_eq!(grid.candidates(pos), Candidates::FULL);
        }
    }

    #[test]
    fn test_text_round_trip_preserves_fixed_cells() {
        let mut grid = Grid::from_str(SOLVED).unwrap();
        grid.set(Position::new(0, 0), None);
        grid.set(Position::new(8, 8), None);

        let restored = parse_text(&to_text(&grid));
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_file_round_trip_of_solved_grid() {
        let grid = Grid::from_str(SOLVED).unwrap();
        let path = std::env::temp_dir().join("ninefold-io-round-trip.txt");

        write_file(&path, &grid).unwrap();
        let restored = read_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(evaluate(&restored), Status::Solved);
        for pos in Position::ALL {
            assert_eq!(restored.digit(pos), grid.digit(pos));
        }
    }

    #[test]
    fn test_read_file_missing_is_an_error() {
        let path = std::env::temp_dir().join("ninefold-io-does-not-exist.txt");
        let result = read_file(&path);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("grid file access failed"));
    }
}
