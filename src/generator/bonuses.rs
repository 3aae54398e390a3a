/*
bonuses.rs

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

//! Scatter bonus cells over the playable terrain.

use std::collections::HashMap;

use log::debug;

use crate::course::{Bonus, BonusKind, TerrainType};
use crate::hex::CubeCoord;
use crate::noise::hash_random;

/// How many of each bonus kind a course carries, with the kind's payload.
const BONUS_TABLE: [(BonusKind, f64, usize); 4] = [
    (BonusKind::Multiplier2x, 2.0, 2),
    (BonusKind::Multiplier3x, 3.0, 1),
    (BonusKind::Points500, 500.0, 3),
    (BonusKind::ExtraMulligan, 1.0, 1),
];

/// Draw the bonus cells, without replacement, from the fairway and rough
/// cells of `grid`. Every bonus starts unused.
pub fn place(grid: &HashMap<CubeCoord, TerrainType>, seed: f64) -> HashMap<CubeCoord, Bonus> {
    // Sorted candidates keep the seeded index draws reproducible
    let mut candidates: Vec<CubeCoord> = grid
        .iter()
        .filter(|(_, t)| matches!(**t, TerrainType::Fairway | TerrainType::Rough))
        .map(|(c, _)| *c)
        .collect();
    candidates.sort();

    let mut bonuses: HashMap<CubeCoord, Bonus> = HashMap::new();
    for (type_index, (kind, value, count)) in BONUS_TABLE.iter().enumerate() {
        for i in 0..*count {
            if candidates.is_empty() {
                break;
            }
            let index: usize = (hash_random(i as f64, type_index as f64 + 10.0, seed)
                * candidates.len() as f64)
                .floor() as usize;
            let cell: CubeCoord = candidates.remove(index);

            debug!("bonus {kind} at {cell}");
            bonuses.insert(
                cell,
                Bonus {
                    kind: *kind,
                    value: *value,
                    used: false,
                },
            );
        }
    }
    bonuses
}
