//! Day 1: Calorie Counting

use anyhow::Context;
use aoc_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError, parts};
use itertools::Itertools;

pub struct Day1;

impl Puzzle for Day1 {
    const NAME: &'static str = "Day1";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day1 }
}

/// Sum each blank-line-separated group of integers.
fn group_sums(input: &str) -> Result<Vec<u64>, ParseError> {
    input
        .split("\n\n")
        .map(|group| {
            group
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| -> Result<u64, anyhow::Error> {
                    line.trim()
                        .parse()
                        .with_context(|| format!("bad calorie count {:?}", line))
                })
                .sum::<Result<u64, anyhow::Error>>()
        })
        .collect::<Result<Vec<u64>, _>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// The largest group sum.
fn part_1(input: &str) -> Result<Answer, SolveError> {
    group_sums(input)?
        .into_iter()
        .max()
        .map(Answer::from)
        .ok_or_else(|| SolveError::NoAnswer("no calorie groups".into()))
}

/// The sum of the three largest group sums.
fn part_2(input: &str) -> Result<Answer, SolveError> {
    let top_three: u64 = group_sums(input)?.into_iter().k_largest(3).sum();
    Ok(top_three.into())
}
