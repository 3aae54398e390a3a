/*
features.rs

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

//! Grow the green around the hole and blend hazards over the rough.

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use crate::course::TerrainType;
use crate::hex::CubeCoord;
use crate::noise::{hash_random, smooth_noise};

/// Hex radius of the green around the hole.
const GREEN_RADIUS: i32 = 2;

/// Minimum blended influence a hazard feature needs to repaint a cell.
const INFLUENCE_THRESHOLD: f64 = 0.3;

/// Turn the cells around `end` into the green.
///
/// Breadth-first flood fill with an explicit queue and a visited set (no
/// recursion, so the stack depth is bounded on larger grids). Cells within
/// radius 1 always join; cells at radius 2 join only when the seeded noise
/// clears 0.3, which leaves the green edge irregular instead of circular.
pub fn grow_green(grid: &mut HashMap<CubeCoord, TerrainType>, end: &CubeCoord, seed: f64) {
    let mut queue: VecDeque<CubeCoord> = VecDeque::from([*end]);
    let mut visited: HashSet<CubeCoord> = HashSet::new();

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        let dist: i32 = current.distance(end);
        if dist > GREEN_RADIUS || !grid.contains_key(&current) {
            continue;
        }

        let green_noise: f64 =
            smooth_noise(f64::from(current.q), f64::from(current.r), seed + 1000.0);
        if dist <= 1 || green_noise > 0.3 {
            grid.insert(current, TerrainType::Green);
        }
        if dist < GREEN_RADIUS {
            queue.extend(current.neighbors());
        }
    }
}

/// A hazard feature center with its terrain and reach.
#[derive(Debug)]
struct Feature {
    center: CubeCoord,
    terrain: TerrainType,
    size: i32,
}

/// Cube-manhattan distance: the sum of the absolute component differences.
fn manhattan(a: &CubeCoord, b: &CubeCoord) -> i32 {
    (a.q - b.q).abs() + (a.r - b.r).abs() + (a.s - b.s).abs()
}

/// Blend tree, sand, and water features over the remaining rough cells.
///
/// 3 to 6 feature centers are drawn from the rough cells; each center gets
/// a terrain picked from position noise and a radius of 2 to 4. A rough
/// cell is then repainted to the feature with the highest noise-scaled
/// influence, provided that influence clears [`INFLUENCE_THRESHOLD`]. The
/// blend is a soft, noise-textured Voronoi: features overlap, and their
/// boundaries are ragged rather than nearest-center hard edges.
pub fn apply_hazards(grid: &mut HashMap<CubeCoord, TerrainType>, seed: f64) {
    // Candidate cells sorted by coordinate so seeded index draws are
    // reproducible; map iteration order is not.
    let mut rough: Vec<CubeCoord> = grid
        .iter()
        .filter(|(_, t)| **t == TerrainType::Rough)
        .map(|(c, _)| *c)
        .collect();
    rough.sort();

    let num_features: usize = 3 + (hash_random(0.0, 0.0, seed) * 4.0).floor() as usize;
    let mut features: Vec<Feature> = Vec::with_capacity(num_features);

    for i in 0..num_features {
        let index: usize =
            (hash_random(i as f64, 0.0, seed) * rough.len() as f64).floor() as usize;
        let Some(center) = rough.get(index).copied() else {
            continue;
        };

        let position_noise: f64 = smooth_noise(
            f64::from(center.q) / 3.0,
            f64::from(center.r) / 3.0,
            seed + i as f64,
        );
        let terrain: TerrainType = if position_noise < 0.4 {
            TerrainType::Trees
        } else if position_noise < 0.7 {
            TerrainType::Sand
        } else {
            TerrainType::Water
        };
        let size: i32 = 2 + (hash_random(i as f64, 1.0, seed) * 3.0).floor() as i32;

        debug!("hazard feature {terrain} at {center}, size {size}");
        features.push(Feature {
            center,
            terrain,
            size,
        });
    }

    for cell in rough {
        let mut max_influence: f64 = 0.0;
        let mut selected: TerrainType = TerrainType::Rough;

        for feature in &features {
            let dist: i32 = manhattan(&cell, &feature.center);
            let influence: f64 =
                (1.0 - f64::from(dist) / f64::from(feature.size * 2)).max(0.0);
            let noise_influence: f64 = influence
                * (0.7
                    + 0.3
                        * smooth_noise(
                            f64::from(cell.q) / 2.0 + f64::from(feature.center.q),
                            f64::from(cell.r) / 2.0 + f64::from(feature.center.r),
                            seed,
                        ));

            if noise_influence > max_influence {
                max_influence = noise_influence;
                selected = feature.terrain;
            }
        }

        if max_influence > INFLUENCE_THRESHOLD {
            grid.insert(cell, selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rough_grid(radius: i32) -> HashMap<CubeCoord, TerrainType> {
        let mut grid: HashMap<CubeCoord, TerrainType> = HashMap::new();
        for q in -radius..=radius {
            for r in -radius..=radius {
                if (q + r).abs() <= radius {
                    grid.insert(CubeCoord::from_axial(q, r), TerrainType::Rough);
                }
            }
        }
        grid
    }

    #[test]
    fn green_covers_the_hole_and_its_ring() {
        let mut grid = rough_grid(8);
        let end: CubeCoord = CubeCoord::new(1, -5, 4);
        grow_green(&mut grid, &end, 777.0);

        assert_eq!(grid.get(&end), Some(&TerrainType::Green));
        for neighbor in end.neighbors() {
            assert_eq!(grid.get(&neighbor), Some(&TerrainType::Green));
        }
    }

    #[test]
    fn green_never_reaches_past_radius_two() {
        let mut grid = rough_grid(8);
        let end: CubeCoord = CubeCoord::new(0, -5, 5);
        grow_green(&mut grid, &end, 31415.0);

        for (coord, terrain) in &grid {
            if *terrain == TerrainType::Green {
                assert!(coord.distance(&end) <= GREEN_RADIUS);
            }
        }
    }

    #[test]
    fn green_clips_at_the_grid_edge() {
        let mut grid = rough_grid(2);
        let end: CubeCoord = CubeCoord::new(0, -2, 2);
        grow_green(&mut grid, &end, 99.0);
        // Nothing outside the grid was inserted
        assert!(grid.keys().all(|c| c.q.abs().max(c.r.abs()).max(c.s.abs()) <= 2));
    }

    #[test]
    fn hazards_only_repaint_rough() {
        let mut grid = rough_grid(8);
        let kept: CubeCoord = CubeCoord::new(0, 0, 0);
        grid.insert(kept, TerrainType::Fairway);
        apply_hazards(&mut grid, 2024.0);

        assert_eq!(grid.get(&kept), Some(&TerrainType::Fairway));
        for terrain in grid.values() {
            assert!(matches!(
                terrain,
                TerrainType::Rough
                    | TerrainType::Fairway
                    | TerrainType::Trees
                    | TerrainType::Sand
                    | TerrainType::Water
            ));
        }
    }

    #[test]
    fn hazards_are_reproducible() {
        let mut a = rough_grid(8);
        let mut b = rough_grid(8);
        apply_hazards(&mut a, 5150.0);
        apply_hazards(&mut b, 5150.0);
        assert_eq!(a, b);
    }
}
