//! Attack input parsing and shot resolution.

use core::fmt;

use crate::board::{AttackCell, ShipBoard, ShipCell};
use crate::coord::{Coord, CoordError};
use crate::player::PlayerState;

/// Errors from parsing or resolving an attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// Input does not have the coordinate shape at all.
    Malformed(&'static str),
    /// Row letter or column number out of range.
    Rejected(Vec<CoordError>),
    /// The cell was already attacked; marks are immutable.
    AlreadyAttacked(Coord),
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::Malformed(msg) => write!(f, "{}", msg),
            AttackError::Rejected(errors) => {
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
            AttackError::AlreadyAttacked(coord) => {
                write!(f, "{} was already attacked - choose an empty tile", coord)
            }
        }
    }
}

/// A line of input during the battle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleCommand {
    Fire(Coord),
    /// Persist the game and stop playing.
    Save,
    /// Leave the game without saving.
    Quit,
}

const MALFORMED_LENGTH: &str =
    "Invalid format. Coordinate must be 2-3 characters long (e.g. A5 or B10)";
const MALFORMED_SHAPE: &str = "Invalid format. Coordinate must be letter + number (e.g. A5 or B10)";

/// Parse one line of battle input.
///
/// Recognizes the save token `save` and the quit token `xxx` before
/// attempting to read a coordinate.
pub fn parse_attack(input: &str) -> Result<BattleCommand, AttackError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("save") {
        return Ok(BattleCommand::Save);
    }
    if input.eq_ignore_ascii_case("xxx") {
        return Ok(BattleCommand::Quit);
    }

    let chars: Vec<char> = input.chars().collect();
    if !(2..=3).contains(&chars.len()) {
        return Err(AttackError::Malformed(MALFORMED_LENGTH));
    }
    let letter = chars[0];
    let mut number: u8 = 0;
    for ch in &chars[1..] {
        let digit = match ch.to_digit(10) {
            Some(d) => d as u8,
            None => return Err(AttackError::Malformed(MALFORMED_SHAPE)),
        };
        number = number * 10 + digit;
    }
    match Coord::from_letter_number(letter, number) {
        Ok(coord) => Ok(BattleCommand::Fire(coord)),
        Err(errors) => Err(AttackError::Rejected(errors)),
    }
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Miss,
    Hit,
    /// The hit brought the attacker's tally to the victory threshold.
    Victory,
}

/// Resolve a shot at `target` against the defender's ship board.
///
/// Rejects a cell the attacker already marked, leaving all state
/// untouched. Otherwise marks the attacker's attack board, bumps the hit
/// tally on a hit, and reports victory once the tally reaches
/// `victory_threshold`.
pub fn resolve_shot(
    attacker: &mut PlayerState,
    defender_board: &ShipBoard,
    target: Coord,
    victory_threshold: u32,
) -> Result<ShotResult, AttackError> {
    if attacker.attack_board().get(target) != AttackCell::Empty {
        return Err(AttackError::AlreadyAttacked(target));
    }
    match defender_board.get(target) {
        ShipCell::Empty => {
            attacker.attack_board_mut().set(target, AttackCell::Miss);
            Ok(ShotResult::Miss)
        }
        ShipCell::Ship => {
            attacker.attack_board_mut().set(target, AttackCell::Hit);
            attacker.record_hit();
            if attacker.hits() >= victory_threshold {
                Ok(ShotResult::Victory)
            } else {
                Ok(ShotResult::Hit)
            }
        }
    }
}
