//! Day 3: Rucksack Reorganization

use aoc_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError, parts};
use itertools::Itertools;

pub struct Day3;

impl Puzzle for Day3 {
    const NAME: &'static str = "Day3";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day3 }
}

/// Item priority: a-z map to 1-26, A-Z to 27-52.
fn priority(item: u8) -> Result<i64, SolveError> {
    match item {
        b'a'..=b'z' => Ok(i64::from(item - b'a') + 1),
        b'A'..=b'Z' => Ok(i64::from(item - b'A') + 27),
        other => Err(ParseError::InvalidFormat(format!(
            "item {:?} has no priority",
            other as char
        ))
        .into()),
    }
}

/// Sum the priority of the one item type found in both halves of each line.
fn part_1(input: &str) -> Result<Answer, SolveError> {
    let mut total = 0;
    for line in input.lines() {
        let (front, back) = line.as_bytes().split_at(line.len() / 2);
        let shared = front
            .iter()
            .copied()
            .find(|item| back.contains(item))
            .ok_or_else(|| ParseError::MissingData(format!("no shared item in {:?}", line)))?;
        total += priority(shared)?;
    }
    Ok(total.into())
}

/// Sum the priority of the badge item common to each group of three lines.
fn part_2(input: &str) -> Result<Answer, SolveError> {
    let mut total = 0;
    for (first, second, third) in input.lines().tuples() {
        let badge = first
            .bytes()
            .find(|item| second.as_bytes().contains(item) && third.as_bytes().contains(item))
            .ok_or_else(|| {
                ParseError::MissingData(format!("no badge in group starting {:?}", first))
            })?;
        total += priority(badge)?;
    }
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        vJrwpWtwJgWrhcsFMMfFFhFp
        jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
        PmmdzqPrVvPwwTWBwg
        wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
        ttgJtRGJQctTZtZT
        CrZsJsPPZsGzwwsLwLmpwMDw
    "};

    #[test]
    fn priorities() {
        assert_eq!(priority(b'a').unwrap(), 1);
        assert_eq!(priority(b'z').unwrap(), 26);
        assert_eq!(priority(b'A').unwrap(), 27);
        assert_eq!(priority(b'Z').unwrap(), 52);
        assert!(priority(b'?').is_err());
    }

    #[test]
    fn shared_item_priorities() {
        assert_eq!(part_1(EXAMPLE).unwrap(), Answer::Num(157));
    }

    #[test]
    fn badge_priorities() {
        assert_eq!(part_2(EXAMPLE).unwrap(), Answer::Num(70));
    }

    #[test]
    fn missing_shared_item_is_an_error() {
        assert!(part_1("abcd").is_err());
    }
}
