/*
lib.rs

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

//! Seeded hex golf: a procedural course generator and a turn-based dice
//! golf rules and scoring engine.
//!
//! The same seed always generates the same course, so a date-derived seed
//! gives everyone the same daily hole. A round is played by rolling a die,
//! picking one of the legal destinations, and repeating until the ball is
//! in the hole; the scoring engine rewards skill shots, bonus cells, and
//! finishing under par.

pub mod cli_options;
pub mod course;
pub mod game;
pub mod generator;
pub mod hex;
pub mod moves;
pub mod noise;
pub mod scoring;
pub mod session;
