//! The turn state machine. Owns both players' state, sequences the
//! placement and battle phases, and is the only writer of game state.
//!
//! The engine never touches a terminal: it consumes input lines and
//! returns typed replies, and it reports terminal phases (`Won`, `Quit`)
//! instead of exiting the process. The interactive driver lives in the
//! binary.

use crate::combat::{self, AttackError, BattleCommand, ShotResult};
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::placement::{self, PlacementCommand, PlacementError, PlacementSession, PlacementStatus};
use crate::player::{PlayerId, PlayerState};
use crate::save::{self, Snapshot, SnapshotError};
use crate::ship::ShipDef;

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The named player is placing ships.
    Placing(PlayerId),
    /// The named player is to attack.
    Battle(PlayerId),
    /// The named player has won. Terminal.
    Won(PlayerId),
    /// The game was abandoned. Terminal.
    Quit,
}

/// Reply to a line of placement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementReply {
    /// Ship placed; more remain.
    Placed(ShipDef),
    /// Final ship placed; the board awaits confirmation.
    FleetComplete(ShipDef),
    /// Board cleared and fleet restored.
    Reset,
    /// The player quit.
    Quit,
}

/// Reply to a line of battle input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleReply {
    /// A shot was resolved.
    Shot { target: Coord, result: ShotResult },
    /// The player asked to save. The game state is unchanged; the caller
    /// persists the snapshot and ends the session once that succeeds.
    SaveRequested(Box<Snapshot>),
    /// The player quit without saving.
    Quit,
}

/// The full game: configuration, phase, both players, and (during the
/// placement phases) the active placement session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    phase: Phase,
    session: PlacementSession,
    players: [PlayerState; 2],
}

impl Game {
    /// A fresh game: player 1 starts placing onto an empty board.
    pub fn new(config: GameConfig) -> Self {
        Game {
            config,
            phase: Phase::Placing(PlayerId::One),
            session: PlacementSession::new(),
            players: [
                PlayerState::new(PlayerId::One),
                PlayerState::new(PlayerId::Two),
            ],
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A player's state.
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// The active placement session (meaningful during `Placing` phases).
    pub fn session(&self) -> &PlacementSession {
        &self.session
    }

    /// Abandon the game from any phase.
    pub fn quit(&mut self) {
        self.phase = Phase::Quit;
    }

    /// Feed one line of placement input to the current placing player.
    ///
    /// Recoverable errors leave the game unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the game is not in a `Placing` phase.
    pub fn handle_placement(&mut self, input: &str) -> Result<PlacementReply, PlacementError> {
        match self.phase {
            Phase::Placing(_) => {}
            _ => panic!("placement input outside a placement phase"),
        }
        match placement::parse_placement(input, self.session.fleet())? {
            PlacementCommand::Quit => {
                self.phase = Phase::Quit;
                Ok(PlacementReply::Quit)
            }
            PlacementCommand::Reset => {
                self.session.reset();
                Ok(PlacementReply::Reset)
            }
            PlacementCommand::Place(code) => match self.session.place(&code)? {
                PlacementStatus::ShipPlaced(def) => Ok(PlacementReply::Placed(def)),
                PlacementStatus::FleetComplete(def) => Ok(PlacementReply::FleetComplete(def)),
            },
        }
    }

    /// Settle the completed-board confirmation. Accepting freezes the
    /// board and hands control to the next phase; declining restarts the
    /// player's placement from an empty board.
    ///
    /// # Panics
    ///
    /// Panics if the game is not in a `Placing` phase with a complete
    /// fleet.
    pub fn confirm_placement(&mut self, accept: bool) {
        let player = match self.phase {
            Phase::Placing(p) => p,
            _ => panic!("placement confirmation outside a placement phase"),
        };
        debug_assert!(self.session.fleet().is_empty());
        if !accept {
            self.session.reset();
            return;
        }
        let done = core::mem::replace(&mut self.session, PlacementSession::new());
        self.players[player.index()].set_ship_board(done.into_board());
        self.phase = match player {
            PlayerId::One => Phase::Placing(PlayerId::Two),
            PlayerId::Two => Phase::Battle(PlayerId::One),
        };
    }

    /// Feed one line of battle input to the current attacker.
    ///
    /// Recoverable errors leave the game unchanged; a completed shot
    /// passes the turn, or ends the game on victory.
    ///
    /// # Panics
    ///
    /// Panics if the game is not in a `Battle` phase.
    pub fn handle_battle(&mut self, input: &str) -> Result<BattleReply, AttackError> {
        let attacker = match self.phase {
            Phase::Battle(p) => p,
            _ => panic!("battle input outside a battle phase"),
        };
        match combat::parse_attack(input)? {
            BattleCommand::Quit => {
                self.phase = Phase::Quit;
                Ok(BattleReply::Quit)
            }
            BattleCommand::Save => Ok(BattleReply::SaveRequested(Box::new(self.snapshot()))),
            BattleCommand::Fire(target) => {
                let defender_board = *self.players[attacker.opponent().index()].ship_board();
                let result = combat::resolve_shot(
                    &mut self.players[attacker.index()],
                    &defender_board,
                    target,
                    self.config.victory_threshold,
                )?;
                self.phase = match result {
                    ShotResult::Victory => Phase::Won(attacker),
                    ShotResult::Hit | ShotResult::Miss => Phase::Battle(attacker.opponent()),
                };
                Ok(BattleReply::Shot { target, result })
            }
        }
    }

    /// Capture the full state as a flat snapshot. The current-player
    /// marker records whose battle turn is active.
    pub fn snapshot(&self) -> Snapshot {
        let current = match self.phase {
            Phase::Battle(p) | Phase::Won(p) => p,
            Phase::Placing(_) | Phase::Quit => PlayerId::One,
        };
        let p1 = &self.players[PlayerId::One.index()];
        let p2 = &self.players[PlayerId::Two.index()];
        Snapshot {
            current_player: current.number(),
            p1_hits: p1.hits(),
            p2_hits: p2.hits(),
            p1_board: save::encode_ship_board(p1.ship_board()),
            p2_board: save::encode_ship_board(p2.ship_board()),
            p1_att_board: save::encode_attack_board(p1.attack_board()),
            p2_att_board: save::encode_attack_board(p2.attack_board()),
        }
    }

    /// Rebuild a game from a snapshot, resuming in the battle phase of
    /// the recorded current player. The snapshot is validated: grids
    /// must use the cell vocabulary and each hit tally must match its
    /// attack board.
    pub fn from_snapshot(snapshot: &Snapshot, config: GameConfig) -> Result<Game, SnapshotError> {
        let current = PlayerId::from_number(snapshot.current_player)
            .ok_or(SnapshotError::UnknownPlayer(snapshot.current_player))?;

        let p1_ship = save::decode_ship_board(&snapshot.p1_board)?;
        let p2_ship = save::decode_ship_board(&snapshot.p2_board)?;
        let p1_att = save::decode_attack_board(&snapshot.p1_att_board)?;
        let p2_att = save::decode_attack_board(&snapshot.p2_att_board)?;

        for (number, att, recorded) in [
            (1u8, &p1_att, snapshot.p1_hits),
            (2u8, &p2_att, snapshot.p2_hits),
        ] {
            if att.hit_cells() != recorded {
                return Err(SnapshotError::HitCountMismatch {
                    player: number,
                    recorded,
                    marked: att.hit_cells(),
                });
            }
        }

        Ok(Game {
            config,
            phase: Phase::Battle(current),
            session: PlacementSession::new(),
            players: [
                PlayerState::from_parts(PlayerId::One, p1_ship, p1_att, snapshot.p1_hits),
                PlayerState::from_parts(PlayerId::Two, p2_ship, p2_att, snapshot.p2_hits),
            ],
        })
    }
}
