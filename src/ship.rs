//! Ship definitions and the per-player remaining-fleet tracker.

use core::fmt;

use crate::config::{FLEET, NUM_SHIPS};

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: u8,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: u8) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn length(&self) -> u8 {
        self.length
    }
}

impl fmt::Display for ShipDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.length)
    }
}

/// The ships a player still has to place.
///
/// Backed by the standard fleet configuration; entries are removed by
/// length, first match first. Lengths in the standard fleet are unique,
/// so removal is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    pending: [bool; NUM_SHIPS],
}

impl Fleet {
    /// A fleet with every ship still to place.
    pub fn new() -> Self {
        Fleet {
            pending: [true; NUM_SHIPS],
        }
    }

    /// True once every ship has been placed.
    pub fn is_empty(&self) -> bool {
        self.pending.iter().all(|p| !p)
    }

    /// Whether a ship of this length is still waiting to be placed.
    pub fn has_length(&self, length: u8) -> bool {
        self.iter().any(|def| def.length() == length)
    }

    /// Remove and return the first pending ship of the given length.
    pub fn take_length(&mut self, length: u8) -> Option<ShipDef> {
        for (i, def) in FLEET.iter().enumerate() {
            if self.pending[i] && def.length() == length {
                self.pending[i] = false;
                return Some(*def);
            }
        }
        None
    }

    /// Pending ships, in fleet order.
    pub fn iter(&self) -> impl Iterator<Item = ShipDef> + '_ {
        FLEET
            .iter()
            .enumerate()
            .filter(|(i, _)| self.pending[*i])
            .map(|(_, def)| *def)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
