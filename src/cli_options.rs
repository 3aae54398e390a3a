/*
cli_options.rs

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

//! Process command-line options.
//!
//! The binary inspects generated courses and replays rounds without a UI.
//! It prints a course summary by default and can dump the full course as
//! JSON or play a round with a greedy bot.
//!
//! # Examples
//!
//! Summarize today's daily course:
//!
//! ```text
//! $ hexfore --daily
//! seed 20260823, par 4
//! tee 0,7,-7 -> hole 1,-7,6
//!  Fairway   38
//!    Rough  119
//!     Sand   13
//!    Water   21
//!    Trees   17
//!      Tee    1
//!     Hole    1
//!    Green    7
//! bonuses: 7
//! ```
//!
//! Let the bot play a fixed seed:
//!
//! ```text
//! $ hexfore --seed 42 --simulate
//! stroke 1: rolled 5, 0,7,-7 -> 1,2,-3 (100 x 1)
//! ...
//! round over: 5 strokes (par 4), final score 4350
//! ```

use clap::Parser;
use chrono::Datelike;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

use crate::course::{Course, TerrainType};
use crate::generator;
use crate::hex::CubeCoord;
use crate::scoring::ScoreState;
use crate::session::Round;

const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain\n\
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>";

/// Generate and play seeded hex golf courses.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Seed of the course to generate
    #[arg(short, long, conflicts_with = "daily")]
    seed: Option<u64>,

    /// Use today's daily seed
    #[arg(long, default_value_t = false)]
    daily: bool,

    /// Dump the course as JSON instead of a summary
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Play the course with a greedy bot and print each shot
    #[arg(long, default_value_t = false)]
    simulate: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// The conventional daily seed: the calendar date packed as an integer.
fn daily_seed() -> u64 {
    let today: chrono::NaiveDate = chrono::Local::now().date_naive();
    today.year() as u64 * 10000 + u64::from(today.month()) * 100 + u64::from(today.day())
}

/// Print the terrain histogram and the key figures of `course`.
fn print_summary(course: &Course) {
    println!(
        "seed {}, par {}",
        course.seed,
        ScoreState::par(course)
    );
    println!("tee {} -> hole {}", course.start, course.end);
    for code in 0..=8u8 {
        let Some(terrain) = TerrainType::from_repr(code) else {
            continue;
        };
        let count: usize = course.grid.values().filter(|t| **t == terrain).count();
        if count > 0 {
            println!("{terrain:>8} {count:4}");
        }
    }
    println!("bonuses: {}", course.bonuses.len());
}

/// Play `course` to the end with a greedy bot: always move to the legal
/// destination closest to the hole, spend a mulligan when a roll offers
/// nothing.
fn simulate(course: Course) {
    let seed: u64 = course.seed;
    let mut round: Round = Round::new(course);
    let mut rng: StdRng = StdRng::seed_from_u64(seed);

    while !round.is_over() {
        round.roll_dice(&mut rng);
        let roll: i32 = match round.game.last_roll {
            Some(roll) => roll,
            None => break,
        };

        if round.game.valid_moves.is_empty() {
            if round.game.mulligans_left > 0 {
                debug!("no destination for a {roll}, taking a mulligan");
                round.use_mulligan();
                continue;
            }
            println!("stuck: no legal destination for a {roll} and no mulligan left");
            break;
        }

        let end: CubeCoord = round.course.end;
        let target: CubeCoord = match round
            .game
            .valid_moves
            .iter()
            .min_by_key(|m| m.distance(&end))
        {
            Some(target) => *target,
            None => break,
        };

        let from: CubeCoord = round.game.position;
        match round.move_to(target) {
            Some(shot) => println!(
                "stroke {}: rolled {roll}, {from} -> {target} ({} x {})",
                round.game.strokes, shot.points, shot.multiplier
            ),
            None => println!("stroke {}: out of shots", round.game.strokes),
        }
    }

    println!(
        "round over: {} strokes (par {}), final score {}",
        round.game.strokes,
        round.score.par,
        round.final_score()
    );
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let seed: u64 = if let Some(seed) = args.seed {
        seed
    } else if args.daily {
        daily_seed()
    } else {
        rand::rng().random_range(0..100_000_000)
    };

    let course: Course = generator::generate_course(seed);

    if args.json {
        match serde_json::to_string_pretty(&course) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Cannot serialize the course: {err}");
                return 1;
            }
        }
    } else {
        print_summary(&course);
    }

    if args.simulate {
        simulate(course);
    }
    0
}
