//! Day 6: Tuning Trouble

use aoc_harness::{Answer, PartSpec, Puzzle, SolveError, parts};

pub struct Day6;

impl Puzzle for Day6 {
    const NAME: &'static str = "Day6";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day6 }
}

const START_OF_PACKET_LEN: usize = 4;
const START_OF_MESSAGE_LEN: usize = 14;

fn all_distinct(window: &[u8]) -> bool {
    let mut seen = [false; 256];
    window
        .iter()
        .all(|&b| !std::mem::replace(&mut seen[b as usize], true))
}

/// 1-indexed position of the end of the first window whose characters are
/// all distinct.
fn find_marker(signal: &str, window: usize) -> Result<Answer, SolveError> {
    signal
        .trim_end()
        .as_bytes()
        .windows(window)
        .position(all_distinct)
        .map(|start| Answer::from(start + window))
        .ok_or_else(|| SolveError::NoAnswer(format!("no window of {} distinct characters", window)))
}

fn part_1(input: &str) -> Result<Answer, SolveError> {
    find_marker(input, START_OF_PACKET_LEN)
}

fn part_2(input: &str) -> Result<Answer, SolveError> {
    find_marker(input, START_OF_MESSAGE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_packet_markers() {
        assert_eq!(part_1("mjqjpqmgbljsphdztnvjfqwrcgsmlb").unwrap(), Answer::Num(7));
        assert_eq!(part_1("bvwbjplbgvbhsrlpgdmjqwftvncz").unwrap(), Answer::Num(5));
        assert_eq!(part_1("nppdvjthqldpwncqszvftbrmjlhg").unwrap(), Answer::Num(6));
        assert_eq!(part_1("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg").unwrap(), Answer::Num(10));
        assert_eq!(part_1("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw").unwrap(), Answer::Num(11));
    }

    #[test]
    fn start_of_message_markers() {
        assert_eq!(part_2("mjqjpqmgbljsphdztnvjfqwrcgsmlb").unwrap(), Answer::Num(19));
        assert_eq!(part_2("bvwbjplbgvbhsrlpgdmjqwftvncz").unwrap(), Answer::Num(23));
    }

    #[test]
    fn signal_without_marker() {
        assert!(matches!(
            part_1("aabbaabb").unwrap_err(),
            SolveError::NoAnswer(_)
        ));
    }
}
