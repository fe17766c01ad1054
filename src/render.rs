//! Plain-text rendering of boards and fleet listings.
//!
//! Pure presentation: everything here reads engine state and produces a
//! `String` for the driver to print. Rows are labeled with their letters
//! on the left and the column numbers run beneath the grid.

use std::fmt::Write as _;

use crate::board::{AttackBoard, ShipBoard};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::ship::Fleet;

fn render_grid(cell_at: impl Fn(Coord) -> char) -> String {
    let mut out = String::new();
    let mut row = None;
    for coord in Coord::all() {
        if row != Some(coord.row()) {
            if row.is_some() {
                out.push('\n');
            }
            row = Some(coord.row());
            out.push(coord.row_letter());
        }
        out.push(' ');
        out.push(cell_at(coord));
    }
    out.push('\n');
    out.push(' ');
    for n in 1..=BOARD_SIZE {
        let _ = write!(out, " {}", n);
    }
    out.push('\n');
    out
}

/// A player's own board: ships and water.
pub fn render_ship_board(board: &ShipBoard) -> String {
    render_grid(|coord| board.get(coord).glyph())
}

/// A player's attack record: hits, misses, unattacked water.
pub fn render_attack_board(board: &AttackBoard) -> String {
    render_grid(|coord| board.get(coord).glyph())
}

/// The ships a player still has to place, one per line.
pub fn render_fleet(fleet: &Fleet) -> String {
    let mut out = String::from("Available ships:\n");
    for def in fleet.iter() {
        let _ = writeln!(out, "{}", def);
    }
    out
}
