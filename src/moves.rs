/*
moves.rs

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

//! Pure move rules: legal destinations, tree blocking, and hole-out
//! detection.
//!
//! Everything here is a function of the course and the shot parameters;
//! the mutable turn state lives in [`crate::game`].

use crate::course::{Course, TerrainType};
use crate::hex::{CubeCoord, line_hexes};

/// Result of the hole-out check for a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkCheck {
    /// Whether the move ends the game.
    pub game_over: bool,

    /// Whether the ball sank by overshooting the hole by exactly one cell.
    pub overshoot: bool,
}

/// Whether the straight flight from `start` to `end` crosses a tree cell.
///
/// Shots from the fairway fly over trees. The endpoints themselves never
/// block: the shooter stands on `start`, and tree cells are not landable
/// anyway.
fn is_path_blocked_by_trees(
    start: &CubeCoord,
    end: &CubeCoord,
    course: &Course,
    on_fairway: bool,
) -> bool {
    if on_fairway {
        return false;
    }
    let path: Vec<CubeCoord> = line_hexes(start, end);
    path[1..path.len().saturating_sub(1)]
        .iter()
        .any(|hex| course.terrain(hex) == Some(TerrainType::Trees))
}

/// Compute the legal destinations from `position` for a roll of `distance`.
///
/// Candidates are every cell at exactly `distance` plus the six adjacent
/// cells (the short chip is always on offer). A candidate is rejected when
/// it is off-grid, water, or trees, or when the flight path crosses trees
/// and the shooter is not on the fairway. Putting reuses this function
/// with `distance = 1`.
pub fn calculate_valid_moves(
    position: &CubeCoord,
    distance: i32,
    course: &Course,
) -> Vec<CubeCoord> {
    let on_fairway: bool = course.terrain(position) == Some(TerrainType::Fairway);
    let mut valid_moves: Vec<CubeCoord> = Vec::new();

    for dq in -distance..=distance {
        for dr in -distance..=distance {
            let ds: i32 = -(dq + dr);
            let offset: i32 = dq.abs().max(dr.abs()).max(ds.abs());
            if offset != distance && offset != 1 {
                continue;
            }

            let coord: CubeCoord =
                CubeCoord::new(position.q + dq, position.r + dr, position.s + ds);
            match course.terrain(&coord) {
                None | Some(TerrainType::Water) | Some(TerrainType::Trees) => continue,
                Some(_) => {}
            }
            if is_path_blocked_by_trees(position, &coord, course, on_fairway) {
                continue;
            }
            valid_moves.push(coord);
        }
    }
    valid_moves
}

/// Decide whether landing on `new_position` ends the game.
///
/// Landing exactly on the hole always does. Landing one cell past it sinks
/// the ball too ("overshoot sink"), but only when the roll was one more
/// than the distance to the hole before the move: the excess pip carries
/// the ball in. A putt taken without a roll passes `None` and can never
/// overshoot.
pub fn check_game_over(
    new_position: &CubeCoord,
    roll: Option<i32>,
    player_position: &CubeCoord,
    end: &CubeCoord,
) -> SinkCheck {
    if new_position.distance(end) == 0 {
        return SinkCheck {
            game_over: true,
            overshoot: false,
        };
    }

    let overshoot: bool = roll.is_some_and(|distance| {
        new_position.distance(end) == 1 && player_position.distance(end) == distance - 1
    });
    SinkCheck {
        game_over: overshoot,
        overshoot,
    }
}

/// Fixed 37-cell course used by the rules and scoring tests: a fairway
/// origin ringed by rough, with one tree cell, one water cell, and a green
/// around the hole.
#[cfg(test)]
pub(crate) fn test_course() -> Course {
    use std::collections::HashMap;

    // (q, r, terrain code) triples, terrain codes as in the course data
    let cells: [(i32, i32, u8); 37] = [
        (0, 0, 1),
        (-1, 0, 2),
        (-1, 1, 2),
        (0, -1, 2),
        (0, 1, 2),
        (1, -1, 8),
        (1, 0, 2),
        (-2, 0, 2),
        (-2, 1, 2),
        (-2, 2, 2),
        (-1, -1, 5),
        (-1, 2, 2),
        (0, -2, 2),
        (0, 2, 2),
        (1, -2, 8),
        (1, 1, 4),
        (2, -2, 7),
        (2, -1, 8),
        (2, 0, 2),
        (-3, 0, 2),
        (-3, 1, 2),
        (-3, 2, 2),
        (-3, 3, 2),
        (-2, -1, 2),
        (-2, 3, 2),
        (-1, -2, 2),
        (-1, 3, 2),
        (0, -3, 2),
        (0, 3, 2),
        (1, -3, 2),
        (1, 2, 2),
        (2, -3, 8),
        (2, 1, 2),
        (3, -3, 8),
        (3, -2, 8),
        (3, -1, 2),
        (3, 0, 2),
    ];

    let mut grid: HashMap<CubeCoord, TerrainType> = HashMap::new();
    for (q, r, code) in cells {
        grid.insert(
            CubeCoord::from_axial(q, r),
            TerrainType::from_repr(code).unwrap(),
        );
    }

    Course {
        grid,
        bonuses: HashMap::new(),
        start: CubeCoord::new(0, 0, 0),
        end: CubeCoord::new(2, -1, -1),
        seed: 12345,
    }
}
