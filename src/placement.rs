//! Ship placement: input parsing, the placement validator, and the
//! per-player placement session.
//!
//! A placement code packs length, origin, and direction into a short
//! string such as `5A1R` or `4B10D`. Validation happens in two stages,
//! mirroring the command flow: first the code's fields (ship length
//! available, row letter, column number, direction letter), then the
//! geometry (bounds, overlap, adjacency). Within a stage every violation
//! is reported, not just the first.

use core::fmt;

use crate::board::{ShipBoard, ShipCell};
use crate::coord::{Coord, CoordError, Direction};
use crate::ship::{Fleet, ShipDef};

/// One reason a placement code or the placement itself was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementViolation {
    /// No remaining ship has the requested length.
    UnavailableLength(u8),
    /// Row letter or column number out of range.
    Coord(CoordError),
    /// Direction letter is not one of R, L, U, D.
    Direction(char),
    /// Some ship cell would fall outside the board.
    OutOfBounds,
    /// Some ship cell is already occupied.
    OverlapsShip,
    /// Some ship cell touches another ship, diagonals included.
    TouchesShip,
}

impl fmt::Display for PlacementViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementViolation::UnavailableLength(len) => {
                write!(f, "No remaining ship has length {}", len)
            }
            PlacementViolation::Coord(e) => write!(f, "{}", e),
            PlacementViolation::Direction(ch) => write!(
                f,
                "Direction '{}' is invalid - must be R (right), L (left), U (up), or D (down)",
                ch
            ),
            PlacementViolation::OutOfBounds => write!(f, "Ship would be placed out of bounds"),
            PlacementViolation::OverlapsShip => write!(f, "Ship would overlap another ship"),
            PlacementViolation::TouchesShip => {
                write!(f, "Ship must be at least one tile away from other ships")
            }
        }
    }
}

/// Errors from parsing or applying a placement code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Input does not have the code shape at all.
    Malformed(&'static str),
    /// Well-formed input refused for one or more reasons.
    Rejected(Vec<PlacementViolation>),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Malformed(msg) => write!(f, "{}", msg),
            PlacementError::Rejected(violations) => {
                for (i, v) in violations.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
        }
    }
}

/// A parsed placement code: ship length, origin cell, direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCode {
    pub length: u8,
    pub origin: Coord,
    pub direction: Direction,
}

/// A line of input during the placement phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementCommand {
    Place(PlacementCode),
    /// Clear the board and restore the full fleet.
    Reset,
    /// Leave the game.
    Quit,
}

const MALFORMED_LENGTH: &str = "Invalid format. Code must be 4-5 characters long (e.g. 5A1R or 4B10D)";
const MALFORMED_SHAPE: &str =
    "Invalid format. Code must be length + letter + number + direction (e.g. 5A1R or 4B10D)";

/// Parse one line of placement input.
///
/// Recognizes the reset token `x` and the quit token `xxx` before
/// attempting to read a code. The remaining fleet is consulted so an
/// unavailable ship length is reported together with the other field
/// violations.
pub fn parse_placement(input: &str, fleet: &Fleet) -> Result<PlacementCommand, PlacementError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("x") {
        return Ok(PlacementCommand::Reset);
    }
    if input.eq_ignore_ascii_case("xxx") {
        return Ok(PlacementCommand::Quit);
    }

    let chars: Vec<char> = input.chars().collect();
    if !(4..=5).contains(&chars.len()) {
        return Err(PlacementError::Malformed(MALFORMED_LENGTH));
    }

    let length = match chars[0].to_digit(10) {
        Some(d) => d as u8,
        None => return Err(PlacementError::Malformed(MALFORMED_SHAPE)),
    };
    let letter = chars[1];
    let number = match parse_number(&chars[2..chars.len() - 1]) {
        Some(n) => n,
        None => return Err(PlacementError::Malformed(MALFORMED_SHAPE)),
    };
    let dir_ch = chars[chars.len() - 1];

    let mut violations = Vec::new();
    if !fleet.has_length(length) {
        violations.push(PlacementViolation::UnavailableLength(length));
    }
    let origin = match Coord::from_letter_number(letter, number) {
        Ok(origin) => Some(origin),
        Err(errors) => {
            violations.extend(errors.into_iter().map(PlacementViolation::Coord));
            None
        }
    };
    let direction = match Direction::from_char(dir_ch) {
        Some(direction) => Some(direction),
        None => {
            violations.push(PlacementViolation::Direction(dir_ch));
            None
        }
    };
    if !violations.is_empty() {
        return Err(PlacementError::Rejected(violations));
    }

    // Both are present when no violation was recorded.
    match (origin, direction) {
        (Some(origin), Some(direction)) => Ok(PlacementCommand::Place(PlacementCode {
            length,
            origin,
            direction,
        })),
        _ => Err(PlacementError::Malformed(MALFORMED_SHAPE)),
    }
}

fn parse_number(digits: &[char]) -> Option<u8> {
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    let mut number: u8 = 0;
    for ch in digits {
        number = number.checked_mul(10)?.checked_add(ch.to_digit(10)? as u8)?;
    }
    Some(number)
}

/// The cells a code would occupy, and whether any fell off the board.
/// In-bounds cells are still returned when some are not, so adjacency
/// can be reported alongside the bounds violation.
fn project(code: &PlacementCode) -> (Vec<Coord>, bool) {
    let (dr, dc) = code.direction.delta();
    let mut cells = Vec::with_capacity(code.length as usize);
    let mut out_of_bounds = false;
    for i in 0..code.length as i8 {
        match code.origin.offset(dr * i, dc * i) {
            Some(cell) => cells.push(cell),
            None => out_of_bounds = true,
        }
    }
    (cells, out_of_bounds)
}

/// Report from a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStatus {
    /// Ship placed; more remain.
    ShipPlaced(ShipDef),
    /// Ship placed and the fleet is complete; confirmation is pending.
    FleetComplete(ShipDef),
}

/// A player's in-progress placement: the board being built and the ships
/// still to put on it. Owned by the turn state machine; reset replaces
/// the whole session rather than patching pieces of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementSession {
    board: ShipBoard,
    fleet: Fleet,
}

impl PlacementSession {
    /// Start with an empty board and the full fleet.
    pub fn new() -> Self {
        PlacementSession {
            board: ShipBoard::new(),
            fleet: Fleet::new(),
        }
    }

    /// The board as placed so far.
    pub fn board(&self) -> &ShipBoard {
        &self.board
    }

    /// The ships still to place.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Discard all placements and restore the full fleet.
    pub fn reset(&mut self) {
        *self = PlacementSession::new();
    }

    /// Consume the session, yielding the finished board.
    pub fn into_board(self) -> ShipBoard {
        self.board
    }

    /// Validate a code against this session's board and, if legal, mark
    /// the ship's cells and remove it from the fleet. On failure the
    /// session is left untouched and every violation is reported.
    pub fn place(&mut self, code: &PlacementCode) -> Result<PlacementStatus, PlacementError> {
        let mut violations = Vec::new();
        if !self.fleet.has_length(code.length) {
            violations.push(PlacementViolation::UnavailableLength(code.length));
        }

        let (cells, out_of_bounds) = project(code);
        if out_of_bounds {
            violations.push(PlacementViolation::OutOfBounds);
        }
        if cells.iter().any(|&c| self.board.get(c) == ShipCell::Ship) {
            violations.push(PlacementViolation::OverlapsShip);
        }
        let touches = cells.iter().any(|cell| {
            cell.neighbors()
                .any(|n| self.board.get(n) == ShipCell::Ship && !cells.contains(&n))
        });
        if touches {
            violations.push(PlacementViolation::TouchesShip);
        }
        if !violations.is_empty() {
            return Err(PlacementError::Rejected(violations));
        }

        let def = match self.fleet.take_length(code.length) {
            Some(def) => def,
            // Unreachable after the has_length check, kept total.
            None => {
                return Err(PlacementError::Rejected(vec![
                    PlacementViolation::UnavailableLength(code.length),
                ]))
            }
        };
        for &cell in &cells {
            self.board.set(cell, ShipCell::Ship);
        }
        if self.fleet.is_empty() {
            Ok(PlacementStatus::FleetComplete(def))
        } else {
            Ok(PlacementStatus::ShipPlaced(def))
        }
    }
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new()
    }
}
