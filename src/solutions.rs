//! Solutions for Advent of Code 2015.
//!
//! Every day is a plain function from the raw puzzle input to its two answers, so all of
//! them fit the [`Solver`] signature and can live in one static table.

use anyhow::Result;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;

pub use day01::day1;
pub use day02::day2;
pub use day03::day3;
pub use day04::day4;
pub use day05::day5;
pub use day06::day6;
pub use day07::{day7, Circuit, Gate, Operand};

/// Maps a puzzle input to the answers of part 1 and part 2.
pub type Solver = fn(&str) -> Result<(i64, i64)>;
