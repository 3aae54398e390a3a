/*
course.rs

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

//! Course data model: terrain, bonuses, and the generated [`Course`].
//!
//! A [`Course`] is produced once by the [`crate::generator`] module and is
//! immutable afterwards, with a single exception: the `used` flag of a
//! [`Bonus`] flips to `true` when the ball lands on it. The course is
//! replaced wholesale when the player asks for a new map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

use crate::hex::CubeCoord;

/// Radius of the hex grid: every cell satisfies `max(|q|,|r|,|s|) <= GRID_SIZE`.
pub const GRID_SIZE: i32 = 8;

/// Terrain of a single cell.
///
/// The numeric values are the cell codes of the original course data and
/// allow compact grids to be rebuilt with [`TerrainType::from_repr`].
#[derive(
    Serialize, Deserialize, Display, FromRepr, Debug, Clone, Copy, PartialEq, Eq,
)]
#[repr(u8)]
pub enum TerrainType {
    Empty = 0,
    /// Shots from the fairway fly over trees.
    Fairway = 1,
    Rough = 2,
    /// Shooting out of sand costs one pip on the die.
    Sand = 3,
    /// Never landable; crossing it in flight is a skill shot.
    Water = 4,
    /// Never landable; blocks the flight path of non-fairway shots.
    Trees = 5,
    /// Starting cell; grants one extra pip on the die.
    Tee = 6,
    Hole = 7,
    Green = 8,
}

/// Kind of a collectible bonus cell.
#[derive(Serialize, Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusKind {
    Multiplier2x,
    Multiplier3x,
    Points500,
    ExtraMulligan,
}

/// A collectible placed on a cell during generation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bonus {
    /// What the bonus grants when collected.
    pub kind: BonusKind,

    /// Payload of the bonus (multiplier factor, points, or mulligan count).
    pub value: f64,

    /// Whether the bonus has already been collected. Set at most once.
    pub used: bool,
}

/// A generated course: the terrain grid, the bonus cells, and the tee/hole
/// placement, all reproducible from `seed`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    /// Terrain by cell. Keys satisfy `q + r + s = 0` and stay within
    /// [`GRID_SIZE`].
    pub grid: HashMap<CubeCoord, TerrainType>,

    /// Bonus cells keyed by coordinate.
    pub bonuses: HashMap<CubeCoord, Bonus>,

    /// Tee cell. `grid[start]` is always [`TerrainType::Tee`].
    pub start: CubeCoord,

    /// Hole cell. `grid[end]` is always [`TerrainType::Hole`].
    pub end: CubeCoord,

    /// Seed the course was generated from.
    pub seed: u64,
}

impl Course {
    /// Return the terrain at `coord`, or None outside the grid.
    pub fn terrain(&self, coord: &CubeCoord) -> Option<TerrainType> {
        self.grid.get(coord).copied()
    }

    /// Whether `coord` is a cell of this course.
    pub fn contains(&self, coord: &CubeCoord) -> bool {
        self.grid.contains_key(coord)
    }

    /// Mark the bonus at `coord` as collected and return its kind.
    ///
    /// Return None when there is no bonus there or it was already used.
    /// This is the only mutation a course accepts after generation.
    pub fn mark_bonus_used(&mut self, coord: &CubeCoord) -> Option<BonusKind> {
        match self.bonuses.get_mut(coord) {
            Some(bonus) if !bonus.used => {
                bonus.used = true;
                Some(bonus.kind)
            }
            _ => None,
        }
    }
}
