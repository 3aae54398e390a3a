/*
generator.rs

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

//! Generate a golf course from a seed.
//!
//! Generation is a single pass over a fixed seed, with no failure mode and
//! no retries: the pipeline is total over every seed, and the same seed
//! always yields a bit-identical [`Course`]. Every random draw routes
//! through the seeded hash functions in [`crate::noise`]; nothing reads
//! ambient randomness.
//!
//! The pipeline, in order:
//!
//! 1. Allocate every cell within [`GRID_SIZE`] as rough.
//! 2. Place the tee near the southern edge and draw the hole inside the
//!    top third of the map ([`layout::start_and_end`]).
//! 3. Shape the hole with 6 to 8 laterally perturbed waypoints
//!    ([`layout::control_points`]).
//! 4. Carve the fairway along the Bezier curve through the waypoints,
//!    skipping noise-selected gap ranges that force carries, and widening
//!    it at landing zones ([`fairway::carve`]).
//! 5. Flood-fill an irregular green around the hole
//!    ([`features::grow_green`]).
//! 6. Blend tree, sand, and water features over the remaining rough
//!    ([`features::apply_hazards`]).
//! 7. Scatter the bonus cells over fairway and rough
//!    ([`bonuses::place`]).
//! 8. Force the start cell to tee and the end cell to hole. This step is
//!    strictly last so no other pass can overwrite them.

use std::collections::HashMap;

use log::debug;

use crate::course::{Course, GRID_SIZE, TerrainType};
use crate::hex::CubeCoord;

pub mod bonuses;
pub mod fairway;
pub mod features;
pub mod layout;

/// Generate a course from `seed` on the default [`GRID_SIZE`] grid.
pub fn generate_course(seed: u64) -> Course {
    generate_course_sized(seed, GRID_SIZE)
}

/// Generate a course from `seed` on a hex grid of the given radius.
pub fn generate_course_sized(seed: u64, grid_size: i32) -> Course {
    let fseed: f64 = seed as f64;

    // Every cell starts as rough
    let mut grid: HashMap<CubeCoord, TerrainType> = HashMap::new();
    for q in -grid_size..=grid_size {
        for r in -grid_size..=grid_size {
            let s: i32 = -q - r;
            if s.abs() <= grid_size {
                grid.insert(CubeCoord::new(q, r, s), TerrainType::Rough);
            }
        }
    }

    let (start, end) = layout::start_and_end(fseed, grid_size);
    debug!("start = {start}  end = {end}  seed = {seed}");

    let control_points: Vec<CubeCoord> = layout::control_points(&start, &end, fseed);
    fairway::carve(&mut grid, &control_points, fseed);
    features::grow_green(&mut grid, &end, fseed);
    features::apply_hazards(&mut grid, fseed);
    let bonuses = bonuses::place(&grid, fseed);

    // Tee and hole override whatever the hazard and bonus passes left there
    grid.insert(start, TerrainType::Tee);
    grid.insert(end, TerrainType::Hole);

    Course {
        grid,
        bonuses,
        start,
        end,
        seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::BonusKind;

    #[test]
    fn same_seed_reproduces_the_course() {
        let a: Course = generate_course(20250101);
        let b: Course = generate_course(20250101);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a: Course = generate_course(1);
        let b: Course = generate_course(2);
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn grid_keys_satisfy_cube_invariant() {
        let course: Course = generate_course(424242);
        for coord in course.grid.keys() {
            assert_eq!(coord.q + coord.r + coord.s, 0);
            assert!(coord.q.abs().max(coord.r.abs()).max(coord.s.abs()) <= GRID_SIZE);
        }
    }

    #[test]
    fn tee_and_hole_are_always_placed_last() {
        for seed in [0, 7, 999, 20251231, u64::from(u32::MAX)] {
            let course: Course = generate_course(seed);
            assert_eq!(course.terrain(&course.start), Some(TerrainType::Tee));
            assert_eq!(course.terrain(&course.end), Some(TerrainType::Hole));
        }
    }

    #[test]
    fn hole_stays_inside_the_top_third() {
        for seed in 0..50 {
            let course: Course = generate_course(seed);
            let end: CubeCoord = course.end;
            assert!(course.contains(&end), "hole at {end} is off-grid");
            assert!(end.q.abs() <= GRID_SIZE / 2 - 2);
            assert!(end.r >= -GRID_SIZE + 2);
            assert!(end.r <= -GRID_SIZE + (f64::from(GRID_SIZE) * 0.33) as i32);
        }
    }

    #[test]
    fn bonus_counts_match_the_defaults() {
        let course: Course = generate_course(13371337);
        let count = |kind: BonusKind| {
            course
                .bonuses
                .values()
                .filter(|b| b.kind == kind && !b.used)
                .count()
        };
        assert_eq!(count(BonusKind::Multiplier2x), 2);
        assert_eq!(count(BonusKind::Multiplier3x), 1);
        assert_eq!(count(BonusKind::Points500), 3);
        assert_eq!(count(BonusKind::ExtraMulligan), 1);
        assert_eq!(course.bonuses.len(), 7);
    }

    #[test]
    fn generation_is_total_on_small_grids() {
        for grid_size in 1..=4 {
            let course: Course = generate_course_sized(77, grid_size);
            assert_eq!(course.terrain(&course.start), Some(TerrainType::Tee));
            assert_eq!(course.terrain(&course.end), Some(TerrainType::Hole));
        }
    }
}
