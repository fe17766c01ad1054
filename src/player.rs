//! Player identity and per-player game state.

use core::fmt;

use crate::board::{AttackBoard, ShipBoard};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Zero-based index for state arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The 1|2 marker used by the save format.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// From the save format's 1|2 marker.
    pub fn from_number(n: u8) -> Option<PlayerId> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A player's boards and hit tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    id: PlayerId,
    ship_board: ShipBoard,
    attack_board: AttackBoard,
    hits: u32,
}

impl PlayerState {
    /// Fresh state: empty boards, no hits.
    pub fn new(id: PlayerId) -> Self {
        PlayerState {
            id,
            ship_board: ShipBoard::new(),
            attack_board: AttackBoard::new(),
            hits: 0,
        }
    }

    /// Rebuild from persisted parts.
    pub fn from_parts(id: PlayerId, ship_board: ShipBoard, attack_board: AttackBoard, hits: u32) -> Self {
        PlayerState {
            id,
            ship_board,
            attack_board,
            hits,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's own ship placements.
    pub fn ship_board(&self) -> &ShipBoard {
        &self.ship_board
    }

    /// The player's record of attacks on the opponent.
    pub fn attack_board(&self) -> &AttackBoard {
        &self.attack_board
    }

    /// Number of successful hits scored so far.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub(crate) fn set_ship_board(&mut self, board: ShipBoard) {
        self.ship_board = board;
    }

    pub(crate) fn attack_board_mut(&mut self) -> &mut AttackBoard {
        &mut self.attack_board
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }
}
