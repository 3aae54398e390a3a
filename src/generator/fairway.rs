/*
fairway.rs

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

//! Carve the fairway along the waypoint curve.
//!
//! The curve parameter `t` is first split into segments: sub-ranges where
//! the smooth noise exceeds the gap threshold are dropped, which cuts
//! deliberate gaps into the fairway and forces carries. Only the kept
//! segments are carved.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::course::TerrainType;
use crate::hex::{self, CubeCoord};
use crate::noise::smooth_noise;

/// Noise level above which the curve runs through a gap.
const GAP_THRESHOLD: f64 = 0.85;

/// Noise level above which the fairway widens beyond the curve.
const WIDTH_VARIATION_THRESHOLD: f64 = 0.7;

/// Noise level a neighbor cell must clear to join a widened section.
const NEIGHBOR_THRESHOLD: f64 = 0.3;

/// A kept sub-range of the curve parameter.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: f64,
    end: f64,
}

/// Split `t` in `[0, 1]` into the fairway segments to carve.
///
/// Gaps only open in the interior of the curve (`0.15 < t < 0.85`), so the
/// stretches next to the tee and the hole always carry fairway.
fn segments(seed: f64) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Segment = Segment {
        start: 0.0,
        end: 0.0,
    };
    let mut in_gap: bool = false;

    for i in 0..=100 {
        let t: f64 = f64::from(i) / 100.0;
        let should_gap: bool =
            smooth_noise(t * 10.0, 0.0, seed) > GAP_THRESHOLD && t > 0.15 && t < 0.85;

        if should_gap && !in_gap {
            current.end = t;
            segments.push(current);
            in_gap = true;
        } else if !should_gap && in_gap {
            current.start = t;
            in_gap = false;
        }
    }
    if !in_gap {
        current.end = 1.0;
        segments.push(current);
    }

    debug!("fairway segments = {segments:?}");
    segments
}

/// Carve the fairway into `grid` along the Bezier curve through
/// `control_points`.
///
/// Cells on the curve become fairway. Near a waypoint (a landing zone) or
/// where the width-variation noise fires, qualifying neighbor cells join
/// too, which gives the strip an organic, uneven width.
pub fn carve(
    grid: &mut HashMap<CubeCoord, TerrainType>,
    control_points: &[CubeCoord],
    seed: f64,
) {
    let mut processed: HashSet<CubeCoord> = HashSet::new();

    for segment in segments(seed) {
        let mut t: f64 = segment.start;
        while t <= segment.end {
            let cell: CubeCoord = hex::round_to_cell(hex::bezier_point(control_points, t));

            if grid.contains_key(&cell) {
                let landing_zone: bool = control_points
                    .iter()
                    .any(|cp| (cp.q - cell.q).abs() + (cp.r - cell.r).abs() < 2);
                let width_variation: bool =
                    smooth_noise(t * 5.0, 0.0, seed) > WIDTH_VARIATION_THRESHOLD;

                grid.insert(cell, TerrainType::Fairway);
                processed.insert(cell);

                if landing_zone || width_variation {
                    for neighbor in cell.neighbors() {
                        if grid.contains_key(&neighbor)
                            && !processed.contains(&neighbor)
                            && smooth_noise(
                                f64::from(neighbor.q) / 2.0,
                                f64::from(neighbor.r) / 2.0,
                                seed,
                            ) > NEIGHBOR_THRESHOLD
                        {
                            grid.insert(neighbor, TerrainType::Fairway);
                            processed.insert(neighbor);
                        }
                    }
                }
            }
            t += 0.01;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_cover_both_curve_ends() {
        for seed in [0.0, 1.0, 20250101.0, 987654.0] {
            let segs: Vec<Segment> = segments(seed);
            assert!(!segs.is_empty());
            assert_eq!(segs[0].start, 0.0);
            assert_eq!(segs.last().unwrap().end, 1.0);
            for s in &segs {
                assert!(s.start <= s.end);
            }
        }
    }

    #[test]
    fn gaps_only_open_in_the_interior() {
        for seed in 0..200 {
            let segs: Vec<Segment> = segments(f64::from(seed));
            for s in &segs {
                if s.start > 0.0 {
                    assert!(s.start > 0.15, "gap closed at t = {}", s.start);
                }
                if s.end < 1.0 {
                    assert!(s.end < 0.85, "gap opened at t = {}", s.end);
                }
            }
        }
    }

    #[test]
    fn carving_marks_fairway_between_tee_and_hole() {
        let mut grid: HashMap<CubeCoord, TerrainType> = HashMap::new();
        for q in -8..=8i32 {
            for r in -8..=8i32 {
                if (q + r).abs() <= 8 {
                    grid.insert(CubeCoord::from_axial(q, r), TerrainType::Rough);
                }
            }
        }
        let points: Vec<CubeCoord> = vec![
            CubeCoord::new(0, 7, -7),
            CubeCoord::new(1, 3, -4),
            CubeCoord::new(-1, 0, 1),
            CubeCoord::new(0, -6, 6),
        ];
        carve(&mut grid, &points, 42.0);

        let fairway_cells: usize = grid
            .values()
            .filter(|t| **t == TerrainType::Fairway)
            .count();
        assert!(fairway_cells > 0);
        // The curve endpoints always survive segmentation
        assert_eq!(grid.get(&points[0]), Some(&TerrainType::Fairway));
    }
}
