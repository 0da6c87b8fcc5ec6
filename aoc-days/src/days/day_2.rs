//! Day 2: Rock Paper Scissors

use aoc_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError, parts};

pub struct Day2;

impl Puzzle for Day2 {
    const NAME: &'static str = "Day2";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day2 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn score(self) -> i64 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }

    /// The shape this one defeats.
    fn defeats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// The shape this one is defeated by.
    fn defeated_by(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
}

/// Parse rounds into the opponent's shape and the raw second column; part 1
/// and part 2 disagree on what the second column means.
fn rounds(input: &str) -> Result<Vec<(Shape, char)>, ParseError> {
    input
        .lines()
        .map(|line| {
            let bad_round = || ParseError::InvalidFormat(format!("bad round {:?}", line));
            let (opponent, second) = line.split_once(' ').ok_or_else(bad_round)?;
            let opponent = match opponent {
                "A" => Shape::Rock,
                "B" => Shape::Paper,
                "C" => Shape::Scissors,
                _ => return Err(bad_round()),
            };
            let second = match second {
                "X" => 'X',
                "Y" => 'Y',
                "Z" => 'Z',
                _ => return Err(bad_round()),
            };
            Ok((opponent, second))
        })
        .collect()
}

/// Shape value plus the outcome bonus of 6 for a win and 3 for a draw.
fn round_score(opponent: Shape, response: Shape) -> i64 {
    let bonus = if response == opponent {
        3
    } else if response.defeats() == opponent {
        6
    } else {
        0
    };
    response.score() + bonus
}

/// The second column is the response shape.
fn part_1(input: &str) -> Result<Answer, SolveError> {
    let total: i64 = rounds(input)?
        .into_iter()
        .map(|(opponent, second)| {
            let response = match second {
                'X' => Shape::Rock,
                'Y' => Shape::Paper,
                _ => Shape::Scissors,
            };
            round_score(opponent, response)
        })
        .sum();
    Ok(total.into())
}

/// The second column is the desired outcome: lose, draw, or win.
fn part_2(input: &str) -> Result<Answer, SolveError> {
    let total: i64 = rounds(input)?
        .into_iter()
        .map(|(opponent, second)| {
            let response = match second {
                'X' => opponent.defeats(),
                'Y' => opponent,
                _ => opponent.defeated_by(),
            };
            round_score(opponent, response)
        })
        .sum();
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "A Y\nB X\nC Z";

    #[test]
    fn scores_single_rounds() {
        // Paper beats rock: 2 for the shape, 6 for the win.
        assert_eq!(round_score(Shape::Rock, Shape::Paper), 8);
        // Rock loses to paper: 1 for the shape, no bonus.
        assert_eq!(round_score(Shape::Paper, Shape::Rock), 1);
        // Draw on scissors: 3 for the shape, 3 for the draw.
        assert_eq!(round_score(Shape::Scissors, Shape::Scissors), 6);
    }

    #[test]
    fn response_column_total() {
        assert_eq!(part_1(EXAMPLE).unwrap(), Answer::Num(15));
    }

    #[test]
    fn outcome_column_total() {
        assert_eq!(part_2(EXAMPLE).unwrap(), Answer::Num(12));
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(rounds("A Q").is_err());
        assert!(rounds("AY").is_err());
    }
}
