//! Board coordinates with explicit bounds.
//!
//! Rows are addressed by letters A–J, columns by numbers 1–10. A `Coord`
//! can only hold an in-bounds position, so everything downstream of input
//! parsing can index boards without further range checks.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Errors for a coordinate given as a row letter plus a column number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Row letter outside A–J.
    Letter(char),
    /// Column number outside 1–10.
    Number(u8),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Letter(ch) => {
                write!(f, "Letter '{}' is invalid - must be a letter from A-J", ch)
            }
            CoordError::Number(n) => {
                write!(f, "Number {} is invalid - must be an integer from 1-10", n)
            }
        }
    }
}

/// An in-bounds board position. Row and column are both in [0, 9].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Construct from zero-based indices; `None` if either is out of range.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Construct from a row letter (A–J) and a one-based column number
    /// (1–10). Both fields are checked and all violations are returned
    /// together.
    pub fn from_letter_number(letter: char, number: u8) -> Result<Self, Vec<CoordError>> {
        let mut errors = Vec::new();
        let letter = letter.to_ascii_uppercase();
        if !('A'..='J').contains(&letter) {
            errors.push(CoordError::Letter(letter));
        }
        if !(1..=BOARD_SIZE).contains(&number) {
            errors.push(CoordError::Number(number));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Coord {
            row: letter as u8 - b'A',
            col: number - 1,
        })
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Zero-based column index.
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row letter A–J.
    pub fn row_letter(&self) -> char {
        (b'A' + self.row) as char
    }

    /// One-based column number 1–10.
    pub fn col_number(&self) -> u8 {
        self.col + 1
    }

    /// The position offset by (dr, dc); `None` if it leaves the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Every board position, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }

    /// The in-bounds Moore neighborhood (up to 8 surrounding cells).
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        const DELTAS: [(i8, i8); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        let origin = *self;
        DELTAS
            .into_iter()
            .filter_map(move |(dr, dc)| origin.offset(dr, dc))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col_number())
    }
}

/// Direction a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward increasing column.
    Right,
    /// Toward decreasing column.
    Left,
    /// Toward increasing row.
    Down,
    /// Toward decreasing row.
    Up,
}

impl Direction {
    /// Parse from the placement-code letter. Case-insensitive.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(Direction::Right),
            'L' => Some(Direction::Left),
            'D' => Some(Direction::Down),
            'U' => Some(Direction::Up),
            _ => None,
        }
    }

    /// Per-step (row, col) delta.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }
}
