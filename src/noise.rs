/*
noise.rs

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

//! Seeded pseudo-random and smooth-noise functions.
//!
//! Every random draw during course generation goes through these pure
//! functions keyed by `(x, y, seed)`, so that the same seed always
//! reproduces the same course. Two players loading the daily seed must see
//! an identical layout; there is no hidden generator state anywhere in the
//! pipeline.

/// Deterministic hash in `[0, 1)` for the slot `(x, y)` under `seed`.
pub fn hash_random(x: f64, y: f64, seed: f64) -> f64 {
    let dot: f64 = (x * 12.9898 + y * 78.233 + seed).sin() * 43758.5453;
    dot - dot.floor()
}

/// Spatially coherent noise in `[0, 1)`: bilinear interpolation of
/// [`hash_random`] at the four lattice points around `(x, y)`, eased with
/// the smoothstep polynomial `3t² - 2t³` on each fractional coordinate.
pub fn smooth_noise(x: f64, y: f64, seed: f64) -> f64 {
    let x0: f64 = x.floor();
    let y0: f64 = y.floor();
    let x1: f64 = x0 + 1.0;
    let y1: f64 = y0 + 1.0;

    let xf: f64 = x - x0;
    let yf: f64 = y - y0;

    let v00: f64 = hash_random(x0, y0, seed);
    let v10: f64 = hash_random(x1, y0, seed);
    let v01: f64 = hash_random(x0, y1, seed);
    let v11: f64 = hash_random(x1, y1, seed);

    let sx: f64 = xf * xf * (3.0 - 2.0 * xf);
    let sy: f64 = yf * yf * (3.0 - 2.0 * yf);

    let vx0: f64 = v00 * (1.0 - sx) + v10 * sx;
    let vx1: f64 = v01 * (1.0 - sx) + v11 * sx;
    vx0 * (1.0 - sy) + vx1 * sy
}
