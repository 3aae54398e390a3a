/*
layout.rs

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

//! Place the tee and the hole, and shape the hole with waypoints.

use std::f64::consts::PI;

use log::debug;

use crate::hex::CubeCoord;
use crate::noise::hash_random;

/// Margin, in cells, that keeps the hole away from the map edge.
const EDGE_BUFFER: i32 = 2;

/// Clamp an axial `(q, r)` pair onto the hex grid of the given radius.
///
/// Only reachable on degenerate grid sizes where the hole draw ranges
/// invert; generation must stay total there too.
fn clamp_to_grid(q: i32, r: i32, grid_size: i32) -> CubeCoord {
    let q: i32 = q.clamp(-grid_size, grid_size);
    let mut r: i32 = r.clamp(-grid_size, grid_size);
    let s: i32 = -q - r;
    if s > grid_size {
        r += s - grid_size;
    } else if s < -grid_size {
        r += s + grid_size;
    }
    CubeCoord::from_axial(q, r)
}

/// Place the tee near the bottom center and draw the hole inside the top
/// third of the map, inset by [`EDGE_BUFFER`].
pub fn start_and_end(seed: f64, grid_size: i32) -> (CubeCoord, CubeCoord) {
    let start: CubeCoord = CubeCoord::new(0, grid_size - 1, -(grid_size - 1));

    let top_third: i32 = (f64::from(grid_size) * 0.33).floor() as i32;
    let min_q: i32 = -(grid_size / 2) + EDGE_BUFFER;
    let max_q: i32 = grid_size / 2 - EDGE_BUFFER;
    let min_r: i32 = -grid_size + EDGE_BUFFER;
    let max_r: i32 = -grid_size + top_third;

    let q_span: i32 = (max_q - min_q + 1).max(1);
    let r_span: i32 = (max_r - min_r + 1).max(1);
    let q: i32 = min_q + (hash_random(0.0, 1.0, seed) * f64::from(q_span)).floor() as i32;
    let r: i32 = min_r + (hash_random(1.0, 1.0, seed) * f64::from(r_span)).floor() as i32;

    (start, clamp_to_grid(q, r, grid_size))
}

/// Generate the waypoints of the hole, from the tee to the hole.
///
/// The waypoint count (6 to 8) is seed-dependent. Each interior point is
/// offset laterally by a sine-weighted seeded perturbation, strongest in
/// the middle of the path and tapering at both ends, so the fairway never
/// runs in a straight line.
pub fn control_points(start: &CubeCoord, end: &CubeCoord, seed: f64) -> Vec<CubeCoord> {
    let num_points: i32 = 6 + (hash_random(0.0, 2.0, seed) * 3.0).floor() as i32;
    let mut points: Vec<CubeCoord> = Vec::with_capacity(num_points as usize);
    points.push(*start);

    for i in 1..num_points - 1 {
        let progress: f64 = f64::from(i) / f64::from(num_points - 1);
        let base_r: f64 = f64::from(start.r) + f64::from(end.r - start.r) * progress;

        let lateral_variation: f64 = (progress * PI).sin() * 2.5;
        let lateral_random: f64 = hash_random(f64::from(i), 2.0, seed) - 0.5;

        let q: i32 = (f64::from(start.q)
            + f64::from(end.q - start.q) * progress
            + lateral_random * lateral_variation)
            .floor() as i32;
        let r: i32 = (base_r + (hash_random(f64::from(i), 3.0, seed) - 0.5)).floor() as i32;

        points.push(CubeCoord::from_axial(q, r));
    }
    points.push(*end);

    debug!("control points = {points:?}");
    points
}
