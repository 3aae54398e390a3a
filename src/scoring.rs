/*
scoring.rs

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

//! Score the shots of a round.
//!
//! The scoring engine never touches the course or the turn state: it reads
//! the course to evaluate a shot and records the result in its own
//! [`ScoreState`]. Bonus cells are only *reported* as collected; flipping
//! the `used` flag on the course, and granting the extra mulligan, is the
//! caller's job.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::course::{Bonus, BonusKind, Course, TerrainType};
use crate::hex::{CubeCoord, line_hexes};

/// Points granted per unspent mulligan at the end of the round.
const MULLIGAN_BONUS: f64 = 200.0;

/// Evaluation of a single recorded shot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShotScore {
    /// Raw points for the shot, before the multiplier.
    pub points: f64,

    /// Bonus cells collected by landing on them with this shot.
    pub bonuses_collected: Vec<CubeCoord>,

    /// Multiplier applied to this shot's points.
    pub multiplier: f64,

    /// Whether the shot was a skill shot (water carry or long holing putt).
    pub is_skill_shot: bool,
}

/// Accumulated score of a round.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoreState {
    /// Running total, including the end-of-round adjustment once the
    /// game-over shot has been recorded.
    pub total_score: f64,

    /// Multiplier the next shot starts from.
    pub current_multiplier: f64,

    /// Every recorded shot, in order.
    pub shot_history: Vec<ShotScore>,

    /// Bonus cells already collected this round.
    pub collected_bonuses: HashSet<CubeCoord>,

    /// Consecutive skill shots so far.
    pub skill_shot_streak: u32,

    /// How far past par the round currently is. Never negative.
    pub strokes_over_par: i32,

    /// Target stroke count for the course.
    pub par: i32,
}

impl ScoreState {
    /// Create the score state for a round on `course`, deriving par from
    /// the tee-to-hole distance.
    pub fn new(course: &Course) -> Self {
        Self {
            total_score: 0.0,
            current_multiplier: 1.0,
            shot_history: Vec::new(),
            collected_bonuses: HashSet::new(),
            skill_shot_streak: 0,
            strokes_over_par: 0,
            par: Self::par(course),
        }
    }

    /// Target stroke count: one stroke per four cells of tee-to-hole
    /// distance, plus two.
    pub fn par(course: &Course) -> i32 {
        course.start.distance(&course.end) / 4 + 2
    }

    /// Hard ceiling on strokes for the round.
    pub fn max_shots(&self) -> u32 {
        (self.par + 6) as u32
    }

    /// End-of-round stroke adjustment: a reward for finishing at or under
    /// par, a penalty per stroke over.
    fn par_bonus(&self, strokes: u32) -> f64 {
        let over: i32 = strokes as i32 - self.par;
        if over <= 0 {
            2000.0 + f64::from(-over) * 1000.0
        } else {
            -500.0 * f64::from(over)
        }
    }

    /// Evaluate a shot without recording it.
    fn calculate_shot_score(
        &self,
        course: &Course,
        from: &CubeCoord,
        to: &CubeCoord,
        is_game_over_shot: bool,
        current_strokes: u32,
    ) -> ShotScore {
        let mut shot: ShotScore = ShotScore {
            points: 0.0,
            bonuses_collected: Vec::new(),
            multiplier: self.current_multiplier,
            is_skill_shot: false,
        };

        // Base reward shrinks as the round drags past par, floor 25
        let over_par: i32 = (current_strokes as i32 - self.par).max(0);
        shot.points += (100.0 - 25.0 * f64::from(over_par)).max(25.0);

        // Water carry: the straight flight crosses a water cell
        let crosses_water: bool = line_hexes(from, to)
            .iter()
            .any(|hex| course.terrain(hex) == Some(TerrainType::Water));
        if crosses_water {
            shot.points += 250.0;
            shot.is_skill_shot = true;
        }

        // Long holing shot
        if is_game_over_shot {
            let distance: i32 = from.distance(to);
            if distance >= 3 {
                shot.points += f64::from(distance) * 100.0;
                shot.is_skill_shot = true;
            }
        }

        // Bonus on the destination cell, once per round per cell
        if let Some(bonus) = course.bonuses.get(to) {
            if !bonus.used && !self.collected_bonuses.contains(to) {
                self.apply_bonus(bonus, &mut shot);
                shot.bonuses_collected.push(*to);
            }
        }

        shot
    }

    /// Fold a collected bonus into `shot`. The extra mulligan is not
    /// resolved here: the mulligan count lives in the game state.
    fn apply_bonus(&self, bonus: &Bonus, shot: &mut ShotScore) {
        match bonus.kind {
            BonusKind::Multiplier2x => shot.multiplier = 2.0,
            BonusKind::Multiplier3x => shot.multiplier = 3.0,
            BonusKind::Points500 => shot.points += 500.0,
            BonusKind::ExtraMulligan => {}
        }
    }

    /// Record a shot from `from` to `to`.
    ///
    /// Return None, with no state change, once `current_strokes` reaches
    /// the shot ceiling: the caller must treat that as "out of shots".
    /// On the game-ending shot the end-of-round adjustment (unspent
    /// mulligans plus the par bonus or penalty) folds into the total once.
    pub fn record_shot(
        &mut self,
        course: &Course,
        from: &CubeCoord,
        to: &CubeCoord,
        is_game_over_shot: bool,
        current_strokes: u32,
        mulligans_left: u32,
    ) -> Option<ShotScore> {
        if current_strokes >= self.max_shots() {
            return None;
        }

        let shot: ShotScore =
            self.calculate_shot_score(course, from, to, is_game_over_shot, current_strokes);

        let streak: u32 = if shot.is_skill_shot {
            self.skill_shot_streak + 1
        } else {
            0
        };
        let streak_bonus: f64 = (f64::from(streak) * 0.1).min(0.5);

        debug!(
            "shot {from} -> {to}: {} x {} (streak {streak})",
            shot.points, shot.multiplier
        );

        self.total_score += shot.points * shot.multiplier;
        self.current_multiplier = (shot.multiplier + streak_bonus).max(1.0);
        self.skill_shot_streak = streak;
        self.strokes_over_par = (current_strokes as i32 - self.par).max(0);
        self.collected_bonuses.extend(&shot.bonuses_collected);

        if is_game_over_shot {
            self.total_score +=
                f64::from(mulligans_left) * MULLIGAN_BONUS + self.par_bonus(current_strokes);
        }

        self.shot_history.push(shot.clone());
        Some(shot)
    }

    /// Preview the final score for a round ending now: the running total
    /// plus the end-of-round adjustment. Pure; `record_shot` applies the
    /// same adjustment for real on the game-over shot.
    pub fn calculate_final_score(&self, strokes: u32, mulligans_left: u32) -> f64 {
        self.total_score + f64::from(mulligans_left) * MULLIGAN_BONUS + self.par_bonus(strokes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::TerrainType;
    use std::collections::HashMap;

    /// A straight four-cell hole with two water cells off the line and
    /// two bonus cells on it. Par 3.
    fn scoring_course() -> Course {
        let cells: [(i32, i32, i32, TerrainType); 7] = [
            (0, 0, 0, TerrainType::Tee),
            (1, 0, -1, TerrainType::Fairway),
            (2, 0, -2, TerrainType::Fairway),
            (3, 0, -3, TerrainType::Fairway),
            (4, 0, -4, TerrainType::Hole),
            (2, -1, -1, TerrainType::Water),
            (2, 1, -3, TerrainType::Water),
        ];
        let mut grid: HashMap<CubeCoord, TerrainType> = HashMap::new();
        for (q, r, s, terrain) in cells {
            grid.insert(CubeCoord::new(q, r, s), terrain);
        }

        let mut bonuses: HashMap<CubeCoord, Bonus> = HashMap::new();
        bonuses.insert(
            CubeCoord::new(1, 0, -1),
            Bonus {
                kind: BonusKind::Points500,
                value: 500.0,
                used: false,
            },
        );
        bonuses.insert(
            CubeCoord::new(2, 0, -2),
            Bonus {
                kind: BonusKind::Multiplier2x,
                value: 2.0,
                used: false,
            },
        );

        Course {
            grid,
            bonuses,
            start: CubeCoord::new(0, 0, 0),
            end: CubeCoord::new(4, 0, -4),
            seed: 1,
        }
    }

    #[test]
    fn par_derives_from_the_hole_length() {
        let course: Course = scoring_course();
        assert_eq!(ScoreState::par(&course), 3);

        let state: ScoreState = ScoreState::new(&course);
        assert_eq!(state.par, 3);
        assert_eq!(state.max_shots(), 9);
        // Repeated calls are pure
        assert_eq!(ScoreState::par(&course), ScoreState::par(&course));
    }

    #[test]
    fn plain_shot_scores_the_base_points() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);

        let shot: ShotScore = state
            .record_shot(
                &course,
                &CubeCoord::new(0, 0, 0),
                &CubeCoord::new(3, 0, -3),
                false,
                1,
                6,
            )
            .unwrap();

        assert_eq!(shot.points, 100.0);
        assert_eq!(shot.multiplier, 1.0);
        assert!(!shot.is_skill_shot);
        assert!(shot.bonuses_collected.is_empty());
        assert_eq!(state.total_score, 100.0);
        assert_eq!(state.skill_shot_streak, 0);
    }

    #[test]
    fn base_points_decay_past_par_with_a_floor() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);
        let from: CubeCoord = CubeCoord::new(0, 0, 0);
        let to: CubeCoord = CubeCoord::new(3, 0, -3);

        // One over par: 75
        let shot: ShotScore = state.record_shot(&course, &from, &to, false, 4, 6).unwrap();
        assert_eq!(shot.points, 75.0);
        // Far past par the base bottoms out at 25
        let shot: ShotScore = state.record_shot(&course, &from, &to, false, 8, 6).unwrap();
        assert_eq!(shot.points, 25.0);
    }

    #[test]
    fn water_carry_is_a_skill_shot() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);

        // The flight from (2,-2,0) to (3,0,-3) passes over the water at
        // (2,-1,-1); the destination cell holds no bonus
        let shot: ShotScore = state
            .record_shot(
                &course,
                &CubeCoord::new(2, -2, 0),
                &CubeCoord::new(3, 0, -3),
                false,
                1,
                6,
            )
            .unwrap();

        assert_eq!(shot.points, 350.0);
        assert!(shot.is_skill_shot);
        assert_eq!(state.skill_shot_streak, 1);
    }

    #[test]
    fn long_holing_shot_earns_the_distance_bonus() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);

        let shot: ShotScore = state
            .record_shot(&course, &course.start, &course.end, true, 1, 6)
            .unwrap();

        // 100 base + 4 * 100 distance
        assert_eq!(shot.points, 500.0);
        assert!(shot.is_skill_shot);
    }

    #[test]
    fn short_holing_shot_is_not_a_skill_shot() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);

        let shot: ShotScore = state
            .record_shot(&course, &CubeCoord::new(3, 0, -3), &course.end, true, 3, 0)
            .unwrap();
        assert!(!shot.is_skill_shot);
        assert_eq!(shot.points, 100.0);
    }

    #[test]
    fn points_bonus_adds_flat_points() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);
        let target: CubeCoord = CubeCoord::new(1, 0, -1);

        let shot: ShotScore = state
            .record_shot(&course, &course.start, &target, false, 1, 6)
            .unwrap();

        assert_eq!(shot.points, 600.0);
        assert_eq!(shot.multiplier, 1.0);
        assert_eq!(shot.bonuses_collected, vec![target]);
        assert!(state.collected_bonuses.contains(&target));
    }

    #[test]
    fn multiplier_bonus_persists_across_shots() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);
        let target: CubeCoord = CubeCoord::new(2, 0, -2);

        let shot: ShotScore = state
            .record_shot(&course, &course.start, &target, false, 1, 6)
            .unwrap();
        assert_eq!(shot.multiplier, 2.0);
        assert_eq!(state.total_score, 200.0);
        assert_eq!(state.current_multiplier, 2.0);

        // The next plain shot still scores at 2x
        let shot: ShotScore = state
            .record_shot(&course, &target, &CubeCoord::new(3, 0, -3), false, 2, 6)
            .unwrap();
        assert_eq!(shot.multiplier, 2.0);
        assert_eq!(state.total_score, 400.0);
        assert!(state.current_multiplier >= 2.0);
    }

    #[test]
    fn a_bonus_cell_is_collected_only_once() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);
        let target: CubeCoord = CubeCoord::new(1, 0, -1);

        state
            .record_shot(&course, &course.start, &target, false, 1, 6)
            .unwrap();
        let shot: ShotScore = state
            .record_shot(&course, &CubeCoord::new(2, 0, -2), &target, false, 2, 6)
            .unwrap();

        assert_eq!(shot.points, 100.0);
        assert!(shot.bonuses_collected.is_empty());
    }

    #[test]
    fn skill_streak_stacks_onto_the_multiplier() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);
        // Both shots carry the water at (2,-1,-1); the destination holds
        // no bonus
        let from: CubeCoord = CubeCoord::new(2, -2, 0);
        let to: CubeCoord = CubeCoord::new(3, 0, -3);

        let first: ShotScore = state.record_shot(&course, &from, &to, false, 1, 6).unwrap();
        assert_eq!(first.multiplier, 1.0);
        assert_eq!(state.skill_shot_streak, 1);
        assert!((state.current_multiplier - 1.1).abs() < 1e-9);

        let second: ShotScore = state.record_shot(&course, &from, &to, false, 2, 6).unwrap();
        assert!((second.multiplier - 1.1).abs() < 1e-9);
        assert_eq!(state.skill_shot_streak, 2);
        assert!((state.current_multiplier - 1.3).abs() < 1e-9);

        // A plain shot resets the streak, the multiplier floor is 1
        state
            .record_shot(
                &course,
                &course.start,
                &CubeCoord::new(3, 0, -3),
                false,
                3,
                6,
            )
            .unwrap();
        assert_eq!(state.skill_shot_streak, 0);
    }

    #[test]
    fn shot_ceiling_returns_none_without_state_change() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);
        state.total_score = 1234.0;

        let result: Option<ShotScore> = state.record_shot(
            &course,
            &course.start,
            &CubeCoord::new(1, 0, -1),
            false,
            9,
            6,
        );

        assert!(result.is_none());
        assert_eq!(state.total_score, 1234.0);
        assert!(state.shot_history.is_empty());
    }

    #[test]
    fn game_over_shot_folds_the_final_adjustment_once() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);

        // Hole out on stroke 2 with 4 mulligans left: 500 shot points,
        // 800 mulligan bonus, 2000 + 1000 for one under par
        state
            .record_shot(&course, &course.start, &course.end, true, 2, 4)
            .unwrap();
        assert_eq!(state.total_score, 500.0 + 800.0 + 3000.0);
    }

    #[test]
    fn final_score_preview_is_pure() {
        let course: Course = scoring_course();
        let mut state: ScoreState = ScoreState::new(&course);
        state.total_score = 1000.0;

        // At par with 2 mulligans: + 400 + 2000
        assert_eq!(state.calculate_final_score(3, 2), 3400.0);
        assert_eq!(state.calculate_final_score(3, 2), 3400.0);
        assert_eq!(state.total_score, 1000.0);
        // Two over par: - 1000, no mulligans
        assert_eq!(state.calculate_final_score(5, 0), 0.0);
        // Two under par: + 4000
        assert_eq!(state.calculate_final_score(1, 0), 5000.0);
    }
}
