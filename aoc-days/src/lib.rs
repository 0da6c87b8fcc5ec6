//! Advent of Code 2022 puzzle days
//!
//! Each module declares one day as an `aoc_harness::Puzzle` with an explicit
//! part table and submits itself as a `DayPlugin`, so linking this crate is
//! enough to make every day visible to a registry built with
//! `register_all_plugins`.

pub mod days;
