/*
session.rs

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

//! Tie a course, its turn state, and its score together into one round.
//!
//! [`Round`] owns the only mutable copy of each part and sequences the
//! cross-component effects a single move entails: scoring the shot,
//! flipping collected bonus cells to used on the course, and granting the
//! extra mulligan. The rules and scoring engines stay unaware of each
//! other.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::course::{BonusKind, Course};
use crate::game::{Game, MoveOutcome};
use crate::hex::CubeCoord;
use crate::scoring::{ScoreState, ShotScore};

/// A round of dice golf in progress.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Round {
    /// The course being played. The round owns the bonus `used` flags.
    pub course: Course,

    /// Turn state: ball position, pending roll, mulligans.
    pub game: Game,

    /// Score state: totals, multiplier, shot history.
    pub score: ScoreState,
}

impl Round {
    /// Start a round on `course`.
    pub fn new(course: Course) -> Self {
        let game: Game = Game::new(&course);
        let score: ScoreState = ScoreState::new(&course);
        Self {
            course,
            game,
            score,
        }
    }

    /// Roll the die for the next shot.
    pub fn roll_dice<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.game.roll_dice(&self.course, rng);
    }

    /// Line up a putt instead of rolling.
    pub fn take_putt(&mut self) {
        self.game.take_putt(&self.course);
    }

    /// Abort a lined-up putt.
    pub fn cancel_putt(&mut self) {
        self.game.cancel_putt();
    }

    /// Spend a mulligan on the pending roll.
    pub fn use_mulligan(&mut self) {
        self.game.use_mulligan();
    }

    /// Play the pending shot to `coord` and score it.
    ///
    /// Return None when the move is illegal, or when the shot ceiling is
    /// reached: in the latter case the round is forced over and the shot
    /// goes unscored. Collected bonus cells flip to used on the course; a
    /// collected extra-mulligan bonus credits the game state immediately.
    pub fn move_to(&mut self, coord: CubeCoord) -> Option<ShotScore> {
        let outcome: MoveOutcome = self.game.move_to_hex(coord, &self.course)?;

        let Some(shot) = self.score.record_shot(
            &self.course,
            &outcome.from,
            &outcome.to,
            outcome.game_over,
            self.game.strokes,
            self.game.mulligans_left,
        ) else {
            debug!("out of shots after stroke {}", self.game.strokes);
            self.game.game_over = true;
            return None;
        };

        for cell in &shot.bonuses_collected {
            if self.course.mark_bonus_used(cell) == Some(BonusKind::ExtraMulligan) {
                self.game.grant_mulligan();
            }
        }
        Some(shot)
    }

    /// Whether the round is over.
    pub fn is_over(&self) -> bool {
        self.game.game_over
    }

    /// The final score of the round. Before the round is over this is a
    /// preview of ending it on the current stroke count.
    pub fn final_score(&self) -> f64 {
        if self.game.game_over {
            self.score.total_score
        } else {
            self.score
                .calculate_final_score(self.game.strokes, self.game.mulligans_left)
        }
    }
}
