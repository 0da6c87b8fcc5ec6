//! Day 5: Supply Stacks

use anyhow::{Context, anyhow};
use aoc_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError, parts};
use regex::Regex;
use std::sync::LazyLock;

pub struct Day5;

impl Puzzle for Day5 {
    const NAME: &'static str = "Day5";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day5 }
}

static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^move (?P<amount>\d+) from (?P<from>\d+) to (?P<to>\d+)$").unwrap()
});

struct Instruction {
    amount: usize,
    /// 0-based stack indexes
    from: usize,
    to: usize,
}

struct Procedure {
    /// Stacks bottom to top, indexed by label minus one
    stacks: Vec<Vec<char>>,
    moves: Vec<Instruction>,
}

fn parse(input: &str) -> Result<Procedure, ParseError> {
    try_parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

fn try_parse(input: &str) -> Result<Procedure, anyhow::Error> {
    let (drawing, procedure) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("no blank line between drawing and moves"))?;

    let mut rows: Vec<&str> = drawing.lines().collect();
    let labels = rows.pop().ok_or_else(|| anyhow!("empty crate drawing"))?;

    let mut stacks = Vec::new();
    for (index, label) in labels.split_whitespace().enumerate() {
        let expected = (index + 1).to_string();
        if label != expected {
            return Err(anyhow!("stack label {:?} where {} expected", label, expected));
        }
        // The label's column is where this stack's crate letters sit.
        let column = labels.find(label).unwrap_or_default();
        let stack: Vec<char> = rows
            .iter()
            .rev()
            .filter_map(|row| row.as_bytes().get(column).copied())
            .filter(|&b| b != b' ')
            .map(char::from)
            .collect();
        stacks.push(stack);
    }

    let moves = procedure
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let captures = MOVE_RE
                .captures(line.trim_end())
                .with_context(|| format!("bad instruction {:?}", line))?;
            let parse_stack = |name: &str| -> Result<usize, anyhow::Error> {
                let label: usize = captures[name].parse()?;
                label
                    .checked_sub(1)
                    .filter(|&index| index < stacks.len())
                    .ok_or_else(|| anyhow!("no stack {} in {:?}", label, line))
            };
            Ok(Instruction {
                amount: captures["amount"].parse()?,
                from: parse_stack("from")?,
                to: parse_stack("to")?,
            })
        })
        .collect::<Result<Vec<_>, anyhow::Error>>()?;

    Ok(Procedure { stacks, moves })
}

fn rearrange(input: &str, one_at_a_time: bool) -> Result<Answer, SolveError> {
    let Procedure { mut stacks, moves } = parse(input)?;

    for mv in &moves {
        let split = stacks[mv.from].len().checked_sub(mv.amount).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "cannot move {} crates from stack {}",
                mv.amount,
                mv.from + 1
            ))
        })?;
        let mut moved = stacks[mv.from].split_off(split);
        if one_at_a_time {
            moved.reverse();
        }
        stacks[mv.to].extend(moved);
    }

    let tops = stacks
        .iter()
        .enumerate()
        .map(|(index, stack)| {
            stack.last().copied().ok_or_else(|| {
                ParseError::MissingData(format!("stack {} ends empty", index + 1))
            })
        })
        .collect::<Result<String, _>>()?;
    Ok(tops.into())
}

/// The crane moves crates one at a time, reversing their order.
fn part_1(input: &str) -> Result<Answer, SolveError> {
    rearrange(input, true)
}

/// The upgraded crane moves whole blocks, keeping their order.
fn part_2(input: &str) -> Result<Answer, SolveError> {
    rearrange(input, false)
}
