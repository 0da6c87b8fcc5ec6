//! Day 4: Camp Cleanup

use aoc_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError, parts};

pub struct Day4;

impl Puzzle for Day4 {
    const NAME: &'static str = "Day4";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day4 }
}

type Span = (u32, u32);

fn span(s: &str) -> Result<Span, ParseError> {
    let bad_span = || ParseError::InvalidFormat(format!("bad section range {:?}", s));
    let (start, end) = s.split_once('-').ok_or_else(bad_span)?;
    Ok((
        start.parse().map_err(|_| bad_span())?,
        end.parse().map_err(|_| bad_span())?,
    ))
}

fn assignments(input: &str) -> Result<Vec<(Span, Span)>, ParseError> {
    input
        .lines()
        .map(|line| {
            let (first, second) = line
                .split_once(',')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad pair {:?}", line)))?;
            Ok((span(first)?, span(second)?))
        })
        .collect()
}

fn contains(outer: Span, inner: Span) -> bool {
    outer.0 <= inner.0 && outer.1 >= inner.1
}

fn overlaps(a: Span, b: Span) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Count pairs where one range fully contains the other.
fn part_1(input: &str) -> Result<Answer, SolveError> {
    let count = assignments(input)?
        .into_iter()
        .filter(|&(a, b)| contains(a, b) || contains(b, a))
        .count();
    Ok(count.into())
}

/// Count pairs whose ranges overlap at all.
fn part_2(input: &str) -> Result<Answer, SolveError> {
    let count = assignments(input)?
        .into_iter()
        .filter(|&(a, b)| overlaps(a, b))
        .count();
    Ok(count.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        2-4,6-8
        2-3,4-5
        5-7,7-9
        2-8,3-7
        6-6,4-6
        2-6,4-8
    "};

    #[test]
    fn containment() {
        assert!(contains((2, 8), (3, 7)));
        assert!(contains((4, 6), (6, 6)));
        assert!(!contains((5, 7), (7, 9)));
    }

    #[test]
    fn counts_contained_pairs() {
        assert_eq!(part_1(EXAMPLE).unwrap(), Answer::Num(2));
    }

    #[test]
    fn counts_overlapping_pairs() {
        assert_eq!(part_2(EXAMPLE).unwrap(), Answer::Num(4));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(assignments("1-2").is_err());
        assert!(assignments("1-2,3").is_err());
        assert!(assignments("a-2,3-4").is_err());
    }
}
