//! Day 8: Treetop Tree House

use aoc_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError, parts};

pub struct Day8;

impl Puzzle for Day8 {
    const NAME: &'static str = "Day8";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day8 }
}

fn grid(input: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.bytes()
                .map(|b| {
                    if b.is_ascii_digit() {
                        Ok(b - b'0')
                    } else {
                        Err(ParseError::InvalidFormat(format!(
                            "bad tree height {:?}",
                            b as char
                        )))
                    }
                })
                .collect()
        })
        .collect()
}

/// Look away from a tree along one direction: the viewing distance (number
/// of trees seen, including a blocking one) and whether the view reaches
/// the grid edge.
fn look(height: u8, trees: impl Iterator<Item = u8>) -> (usize, bool) {
    let mut distance = 0;
    for tree in trees {
        distance += 1;
        if tree >= height {
            return (distance, false);
        }
    }
    (distance, true)
}

/// Count trees visible from outside the grid along at least one axis.
fn part_1(input: &str) -> Result<Answer, SolveError> {
    let grid = grid(input)?;
    let mut visible = 0;
    for (row, line) in grid.iter().enumerate() {
        for (col, &height) in line.iter().enumerate() {
            let up = look(height, (0..row).rev().map(|r| grid[r][col]));
            let down = look(height, (row + 1..grid.len()).map(|r| grid[r][col]));
            let left = look(height, line[..col].iter().rev().copied());
            let right = look(height, line[col + 1..].iter().copied());
            if up.1 || down.1 || left.1 || right.1 {
                visible += 1;
            }
        }
    }
    Ok(visible.into())
}

/// Best scenic score: the product of the four viewing distances.
fn part_2(input: &str) -> Result<Answer, SolveError> {
    let grid = grid(input)?;
    let mut best = 0usize;
    for (row, line) in grid.iter().enumerate() {
        for (col, &height) in line.iter().enumerate() {
            let up = look(height, (0..row).rev().map(|r| grid[r][col]));
            let down = look(height, (row + 1..grid.len()).map(|r| grid[r][col]));
            let left = look(height, line[..col].iter().rev().copied());
            let right = look(height, line[col + 1..].iter().copied());
            best = best.max(up.0 * down.0 * left.0 * right.0);
        }
    }
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        30373
        25512
        65332
        33549
        35390
    "};

    #[test]
    fn looks_along_a_line() {
        // Blocked by an equal tree after two steps.
        assert_eq!(look(5, [3, 5, 3].into_iter()), (2, false));
        // Clear to the edge.
        assert_eq!(look(5, [3, 4, 2].into_iter()), (3, true));
        // An edge tree sees nothing in this direction.
        assert_eq!(look(5, std::iter::empty()), (0, true));
    }

    #[test]
    fn counts_visible_trees() {
        assert_eq!(part_1(EXAMPLE).unwrap(), Answer::Num(21));
    }

    #[test]
    fn best_scenic_score() {
        assert_eq!(part_2(EXAMPLE).unwrap(), Answer::Num(8));
    }

    #[test]
    fn rejects_non_digit_heights() {
        assert!(grid("12a").is_err());
    }
}
