//! On-disk persistence: the snapshot record, grid codecs, and the save
//! store.
//!
//! The save is a single JSON document holding both players' boards as
//! 10×10 character grids (`-` water, `■` ship on ship boards; `-`
//! unattacked, `X` hit, `●` miss on attack boards), both hit tallies,
//! and whose turn is active. A missing file means no saved game; an
//! unreadable or unparsable file is a load error.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{AttackBoard, AttackCell, ShipBoard, ShipCell};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Default save location, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "battleship_save.json";

/// A 10×10 grid of cell characters as stored on disk.
pub type CellGrid = [[char; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Flat serialized form of the full game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current_player: u8,
    pub p1_hits: u32,
    pub p2_hits: u32,
    pub p1_board: CellGrid,
    pub p2_board: CellGrid,
    pub p1_att_board: CellGrid,
    pub p2_att_board: CellGrid,
}

/// A parsed save that does not describe a legal game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// `current_player` is not 1 or 2.
    UnknownPlayer(u8),
    /// A grid holds a character outside the cell vocabulary.
    UnknownCell(char),
    /// A hit tally disagrees with the hits marked on the attack board.
    HitCountMismatch { player: u8, recorded: u32, marked: u32 },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::UnknownPlayer(n) => {
                write!(f, "current_player must be 1 or 2, found {}", n)
            }
            SnapshotError::UnknownCell(ch) => {
                write!(f, "unknown board character '{}'", ch)
            }
            SnapshotError::HitCountMismatch {
                player,
                recorded,
                marked,
            } => write!(
                f,
                "player {} hit count {} disagrees with {} hits on the attack board",
                player, recorded, marked
            ),
        }
    }
}

/// Encode a ship board as save-format characters.
pub fn encode_ship_board(board: &ShipBoard) -> CellGrid {
    let mut grid = [[ShipCell::Empty.glyph(); BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for coord in Coord::all() {
        grid[coord.row()][coord.col()] = board.get(coord).glyph();
    }
    grid
}

/// Decode a ship board from save-format characters.
pub fn decode_ship_board(grid: &CellGrid) -> Result<ShipBoard, SnapshotError> {
    let mut board = ShipBoard::new();
    for coord in Coord::all() {
        let ch = grid[coord.row()][coord.col()];
        match ShipCell::from_glyph(ch) {
            Some(cell) => board.set(coord, cell),
            None => return Err(SnapshotError::UnknownCell(ch)),
        }
    }
    Ok(board)
}

/// Encode an attack board as save-format characters.
pub fn encode_attack_board(board: &AttackBoard) -> CellGrid {
    let mut grid = [[AttackCell::Empty.glyph(); BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for coord in Coord::all() {
        grid[coord.row()][coord.col()] = board.get(coord).glyph();
    }
    grid
}

/// Decode an attack board from save-format characters.
pub fn decode_attack_board(grid: &CellGrid) -> Result<AttackBoard, SnapshotError> {
    let mut board = AttackBoard::new();
    for coord in Coord::all() {
        let ch = grid[coord.row()][coord.col()];
        match AttackCell::from_glyph(ch) {
            Some(cell) => board.set(coord, cell),
            None => return Err(SnapshotError::UnknownCell(ch)),
        }
    }
    Ok(board)
}

/// Errors from reading or writing the save file.
#[derive(Debug)]
pub enum SaveError {
    Io(io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "save file I/O error: {}", e),
            SaveError::Format(e) => write!(f, "save file format error: {}", e),
        }
    }
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Format(e)
    }
}

/// The single save slot. Saving overwrites any previous save.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SaveStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a save is present on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the snapshot, replacing any existing save.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SaveError> {
        let text = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Read the snapshot. `Ok(None)` when no save exists.
    pub fn load(&self) -> Result<Option<Snapshot>, SaveError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SaveError::Io(e)),
        };
        let snapshot = serde_json::from_str(&text)?;
        Ok(Some(snapshot))
    }
}
