/*
game.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexfore.

Hexfore is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexfore is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexfore. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the status of a round in progress.
//!
//! [`Game`] is a state machine over the player's turn: roll the die, pick a
//! destination (or putt, or spend a mulligan for a re-roll), move, repeat
//! until the ball is in the hole. Every invalid action is a silent no-op:
//! rolling with moves already pending, moving to a cell that is not a legal
//! destination, spending a mulligan with none left. Once `game_over` is
//! set the state is terminal and every action is inert.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::course::{Course, TerrainType};
use crate::hex::CubeCoord;
use crate::moves::{self, SinkCheck};

/// Mulligans a player starts the round with.
const STARTING_MULLIGANS: u32 = 6;

/// One applied move, reported back so the scoring engine can evaluate the
/// shot without re-deriving the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cell the shot was taken from.
    pub from: CubeCoord,

    /// Cell the ball ended on (the hole itself on an overshoot sink).
    pub to: CubeCoord,

    /// Whether this shot ended the round.
    pub game_over: bool,

    /// Whether the ball sank by overshooting the hole by one.
    pub overshoot: bool,
}

/// Manage the status of the round in progress.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Game {
    /// Cell the ball currently sits on.
    pub position: CubeCoord,

    /// Strokes played so far. Only ever increases.
    pub strokes: u32,

    /// Mulligans still available.
    pub mulligans_left: u32,

    /// The pending roll, if any.
    pub last_roll: Option<i32>,

    /// Roll values invalidated by mulligans this turn. A re-roll never
    /// reproduces a blocked value; the set clears on every move.
    pub blocked_rolls: Vec<i32>,

    /// Legal destinations for the pending roll or putt. Recomputed from
    /// scratch on every roll, never patched incrementally.
    pub valid_moves: Vec<CubeCoord>,

    /// Whether the ball is in the hole (or the round is otherwise over).
    pub game_over: bool,

    /// Whether the pending destination set came from a putt.
    pub is_putting: bool,
}

impl Game {
    /// Create the turn state for a fresh round on `course`.
    pub fn new(course: &Course) -> Self {
        Self {
            position: course.start,
            strokes: 0,
            mulligans_left: STARTING_MULLIGANS,
            last_roll: None,
            blocked_rolls: Vec::new(),
            valid_moves: Vec::new(),
            game_over: false,
            is_putting: false,
        }
    }

    /// Reinitialize the round from `course` (new map or restart).
    pub fn reset(&mut self, course: &Course) {
        *self = Self::new(course);
    }

    /// The die modifier granted by the terrain under the ball.
    fn terrain_modifier(&self, course: &Course) -> i32 {
        match course.terrain(&self.position) {
            Some(TerrainType::Tee) => 1,
            Some(TerrainType::Sand) => -1,
            _ => 0,
        }
    }

    /// Roll the die and compute the legal destinations.
    ///
    /// No-op while a destination set is pending or the round is over. The
    /// base d6 takes the terrain modifier (tee +1, sand -1, clamped to at
    /// least 1) and redraws while the result is a mulligan-blocked value.
    pub fn roll_dice<R: Rng + ?Sized>(&mut self, course: &Course, rng: &mut R) {
        if self.game_over || !self.valid_moves.is_empty() {
            return;
        }

        let modifier: i32 = self.terrain_modifier(course);
        let mut roll: i32 = (rng.random_range(1..=6) + modifier).max(1);
        while self.blocked_rolls.contains(&roll) {
            roll = (rng.random_range(1..=6) + modifier).max(1);
        }

        debug!("rolled {roll} (modifier {modifier}) at {}", self.position);
        self.last_roll = Some(roll);
        self.valid_moves = moves::calculate_valid_moves(&self.position, roll, course);
    }

    /// Line up a putt: legal destinations become the adjacent cells.
    ///
    /// No-op while a destination set is pending or the round is over.
    pub fn take_putt(&mut self, course: &Course) {
        if self.game_over || !self.valid_moves.is_empty() {
            return;
        }
        self.is_putting = true;
        self.valid_moves = moves::calculate_valid_moves(&self.position, 1, course);
    }

    /// Abort a lined-up putt and clear the destination set.
    pub fn cancel_putt(&mut self) {
        if self.game_over {
            return;
        }
        self.is_putting = false;
        self.valid_moves.clear();
    }

    /// Whether `coord` is one of the pending legal destinations.
    pub fn is_valid_move(&self, coord: &CubeCoord) -> bool {
        self.valid_moves.contains(coord)
    }

    /// Play the pending shot to `coord`.
    ///
    /// Return None (and change nothing) unless `coord` is a legal
    /// destination. On an overshoot sink the ball advances to the hole
    /// itself rather than the clicked cell. Every pending-turn field
    /// clears; the stroke counts.
    pub fn move_to_hex(&mut self, coord: CubeCoord, course: &Course) -> Option<MoveOutcome> {
        if self.game_over || !self.is_valid_move(&coord) {
            return None;
        }

        let check: SinkCheck =
            moves::check_game_over(&coord, self.last_roll, &self.position, &course.end);
        let from: CubeCoord = self.position;
        let to: CubeCoord = if check.overshoot { course.end } else { coord };

        debug!(
            "stroke {}: {from} -> {to} (game over: {})",
            self.strokes + 1,
            check.game_over
        );

        self.position = to;
        self.strokes += 1;
        self.valid_moves.clear();
        self.last_roll = None;
        self.blocked_rolls.clear();
        self.is_putting = false;
        self.game_over = check.game_over;

        Some(MoveOutcome {
            from,
            to,
            game_over: check.game_over,
            overshoot: check.overshoot,
        })
    }

    /// Spend a mulligan: discard the pending roll and block its value for
    /// this turn's re-rolls.
    ///
    /// No-op with no mulligans left, no pending roll, or a finished round.
    pub fn use_mulligan(&mut self) {
        if self.mulligans_left == 0 || self.game_over {
            return;
        }
        let Some(roll) = self.last_roll else {
            return;
        };

        debug!("mulligan: blocking roll {roll}");
        self.mulligans_left -= 1;
        self.blocked_rolls.push(roll);
        self.valid_moves.clear();
        self.last_roll = None;
    }

    /// Grant one extra mulligan (the ExtraMulligan bonus payoff).
    pub fn grant_mulligan(&mut self) {
        self.mulligans_left += 1;
    }
}
