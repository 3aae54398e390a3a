/*
hex.rs

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

//! Cube coordinates and hex geometry.
//!
//! Cells are identified by [`CubeCoord`], an integer triple `(q, r, s)` with
//! the invariant `q + r + s = 0`. The module provides the geometric
//! primitives that the generator and the rules engine share: neighbor
//! enumeration, hex distance, straight-line interpolation (used for
//! line-of-sight checks), and Bezier evaluation (used for fairway shaping).

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

/// The six axial directions, in the order the original course data uses.
const DIRECTIONS: [(i32, i32, i32); 6] = [
    (1, -1, 0),
    (1, 0, -1),
    (0, 1, -1),
    (-1, 1, 0),
    (-1, 0, 1),
    (0, -1, 1),
];

/// Cube coordinate of a hex cell.
///
/// The canonical string form is `"q,r,s"`. That string is also the serde
/// representation, so coordinate-keyed maps serialize as plain JSON objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeCoord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl CubeCoord {
    /// Create a coordinate from its three components.
    pub fn new(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    /// Create a coordinate from `q` and `r`, deriving `s = -q - r`.
    pub fn from_axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Return the six adjacent coordinates.
    pub fn neighbors(&self) -> [CubeCoord; 6] {
        DIRECTIONS.map(|(dq, dr, ds)| CubeCoord::new(self.q + dq, self.r + dr, self.s + ds))
    }

    /// Hex distance to `other`: the largest absolute component difference.
    pub fn distance(&self, other: &CubeCoord) -> i32 {
        (self.q - other.q)
            .abs()
            .max((self.r - other.r).abs())
            .max((self.s - other.s).abs())
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q, self.r, self.s)
    }
}

impl FromStr for CubeCoord {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split(',').map(str::trim).map(i32::from_str);
        let mut next = || -> Result<i32, String> {
            parts
                .next()
                .ok_or_else(|| format!("not a cube coordinate: {value}"))?
                .map_err(|e| format!("not a cube coordinate: {value}: {e}"))
        };
        let q: i32 = next()?;
        let r: i32 = next()?;
        let s: i32 = next()?;
        Ok(Self { q, r, s })
    }
}

impl Serialize for CubeCoord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CubeCoord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CoordVisitor;

        impl Visitor<'_> for CoordVisitor {
            type Value = CubeCoord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a \"q,r,s\" cube coordinate string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<CubeCoord, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(CoordVisitor)
    }
}

/// Round half toward positive infinity.
///
/// The interpolation below hits exact `.5` midpoints on even-length lines,
/// and the tie direction decides which cell the line passes through.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Return the cells along the straight line from `start` to `end`,
/// inclusive of both endpoints. The result holds `distance + 1` cells.
///
/// Each step interpolates the cube components as reals and rounds them
/// independently; the component with the largest rounding error is then
/// recomputed from the other two so that `q + r + s = 0` holds.
pub fn line_hexes(start: &CubeCoord, end: &CubeCoord) -> Vec<CubeCoord> {
    let n: i32 = start.distance(end);
    let mut results: Vec<CubeCoord> = Vec::with_capacity(n as usize + 1);

    for i in 0..=n {
        let t: f64 = if n == 0 { 0.0 } else { f64::from(i) / f64::from(n) };
        let fq: f64 = f64::from(start.q) + f64::from(end.q - start.q) * t;
        let fr: f64 = f64::from(start.r) + f64::from(end.r - start.r) * t;
        let fs: f64 = f64::from(start.s) + f64::from(end.s - start.s) * t;

        let q: i32 = round_half_up(fq) as i32;
        let r: i32 = round_half_up(fr) as i32;
        let s: i32 = round_half_up(fs) as i32;

        let q_diff: f64 = (f64::from(q) - fq).abs();
        let r_diff: f64 = (f64::from(r) - fr).abs();
        let s_diff: f64 = (f64::from(s) - fs).abs();

        // Rebuild the component that rounded the worst from the other two
        if q_diff > r_diff && q_diff > s_diff {
            results.push(CubeCoord::new(-r - s, r, s));
        } else if r_diff > s_diff {
            results.push(CubeCoord::new(q, -q - s, s));
        } else {
            results.push(CubeCoord::new(q, r, -q - r));
        }
    }
    results
}

/// Evaluate the Bezier curve defined by `points` at `t` in `[0, 1]` by
/// repeated linear interpolation (de Casteljau), treating the cube
/// components as continuous reals.
///
/// The result is fractional; callers round it to a grid cell with
/// [`round_to_cell`].
pub fn bezier_point(points: &[CubeCoord], t: f64) -> (f64, f64, f64) {
    let mut work: Vec<(f64, f64, f64)> = points
        .iter()
        .map(|p| (f64::from(p.q), f64::from(p.r), f64::from(p.s)))
        .collect();

    while work.len() > 1 {
        for i in 0..work.len() - 1 {
            let (q0, r0, s0) = work[i];
            let (q1, r1, s1) = work[i + 1];
            work[i] = (
                q0 * (1.0 - t) + q1 * t,
                r0 * (1.0 - t) + r1 * t,
                s0 * (1.0 - t) + s1 * t,
            );
        }
        work.pop();
    }
    work[0]
}

/// Round a fractional cube point to the nearest cell, deriving `s` from the
/// rounded `q` and `r`.
pub fn round_to_cell(point: (f64, f64, f64)) -> CubeCoord {
    let q: i32 = round_half_up(point.0) as i32;
    let r: i32 = round_half_up(point.1) as i32;
    CubeCoord::from_axial(q, r)
}
