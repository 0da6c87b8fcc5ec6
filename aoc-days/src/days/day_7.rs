//! Day 7: No Space Left On Device

use aoc_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError, parts};

pub struct Day7;

impl Puzzle for Day7 {
    const NAME: &'static str = "Day7";
    const PARTS: &'static [PartSpec] = parts![1 => part_1, 2 => part_2];
}

aoc_harness::inventory::submit! {
    aoc_harness::DayPlugin { day: &Day7 }
}

const DISK_SPACE: u64 = 70_000_000;
const UPDATE_SPACE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

/// Handle of the root directory in the arena.
const ROOT: usize = 0;

#[derive(Default)]
struct DirNode {
    parent: Option<usize>,
    /// Combined size of the files listed directly in this directory.
    file_sizes: u64,
    subdirs: Vec<(String, usize)>,
}

/// Directory tree as an arena of nodes indexed by handle, built fresh for
/// every run. Handle 0 is the root.
struct DirTree {
    nodes: Vec<DirNode>,
}

impl DirTree {
    fn new() -> Self {
        Self {
            nodes: vec![DirNode::default()],
        }
    }

    /// Find or create the named child directory, returning its handle.
    fn child(&mut self, dir: usize, name: &str) -> usize {
        if let Some(&(_, handle)) = self.nodes[dir].subdirs.iter().find(|(n, _)| n == name) {
            return handle;
        }
        let handle = self.nodes.len();
        self.nodes.push(DirNode {
            parent: Some(dir),
            ..DirNode::default()
        });
        self.nodes[dir].subdirs.push((name.to_string(), handle));
        handle
    }

    /// Total size of every directory, indexed by handle.
    ///
    /// A child's handle is always greater than its parent's, so a single
    /// reverse pass accumulates sizes bottom-up.
    fn total_sizes(&self) -> Vec<u64> {
        let mut totals: Vec<u64> = self.nodes.iter().map(|node| node.file_sizes).collect();
        for handle in (1..self.nodes.len()).rev() {
            if let Some(parent) = self.nodes[handle].parent {
                totals[parent] += totals[handle];
            }
        }
        totals
    }
}

fn parse(input: &str) -> Result<DirTree, ParseError> {
    let mut tree = DirTree::new();
    let mut cwd = ROOT;
    for line in input.lines() {
        if let Some(command) = line.strip_prefix("$ ") {
            if command == "ls" {
                continue;
            }
            let Some(target) = command.strip_prefix("cd ") else {
                return Err(ParseError::InvalidFormat(format!(
                    "unknown command {:?}",
                    command
                )));
            };
            cwd = match target {
                "/" => ROOT,
                ".." => tree.nodes[cwd].parent.unwrap_or(ROOT),
                name => tree.child(cwd, name),
            };
        } else if let Some(name) = line.strip_prefix("dir ") {
            tree.child(cwd, name);
        } else {
            let (size, _name) = line
                .split_once(' ')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad listing {:?}", line)))?;
            let size: u64 = size.parse().map_err(|_| {
                ParseError::InvalidFormat(format!("bad file size in {:?}", line))
            })?;
            tree.nodes[cwd].file_sizes += size;
        }
    }
    Ok(tree)
}

/// Sum of the total sizes of the small directories.
fn part_1(input: &str) -> Result<Answer, SolveError> {
    let totals = parse(input)?.total_sizes();
    let total: u64 = totals.iter().filter(|&&size| size < SMALL_DIR_LIMIT).sum();
    Ok(total.into())
}

/// Size of the smallest directory whose deletion frees enough space for the
/// update.
fn part_2(input: &str) -> Result<Answer, SolveError> {
    let totals = parse(input)?.total_sizes();
    let used = totals[ROOT];
    let shortfall = (UPDATE_SPACE + used).saturating_sub(DISK_SPACE);
    totals
        .into_iter()
        .filter(|&size| size > shortfall)
        .min()
        .map(Answer::from)
        .ok_or_else(|| SolveError::NoAnswer("no directory large enough to delete".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        $ cd /
        $ ls
        dir a
        14848514 b.txt
        8504156 c.dat
        dir d
        $ cd a
        $ ls
        dir e
        29116 f
        2557 g
        62596 h.lst
        $ cd e
        $ ls
        584 i
        $ cd ..
        $ cd ..
        $ cd d
        $ ls
        4060174 j
        8033020 d.log
        5626152 d.ext
        7214296 k
    "};

    #[test]
    fn child_handles_are_stable() {
        let mut tree = DirTree::new();
        let a = tree.child(ROOT, "a");
        let b = tree.child(a, "b");
        assert_eq!(tree.child(ROOT, "a"), a);
        assert_eq!(tree.child(a, "b"), b);
        assert_ne!(a, b);
    }

    #[test]
    fn accumulates_directory_sizes() {
        let totals = parse(EXAMPLE).unwrap().total_sizes();
        assert_eq!(totals[ROOT], 48381165);
        // a and e from the walkthrough
        assert!(totals.contains(&94853));
        assert!(totals.contains(&584));
    }

    #[test]
    fn sums_small_directories() {
        assert_eq!(part_1(EXAMPLE).unwrap(), Answer::Num(95437));
    }

    #[test]
    fn finds_smallest_deletable_directory() {
        assert_eq!(part_2(EXAMPLE).unwrap(), Answer::Num(24933642));
    }

    #[test]
    fn fresh_tree_per_run() {
        // Two runs over the same text must not accumulate state.
        assert_eq!(part_1(EXAMPLE).unwrap(), part_1(EXAMPLE).unwrap());
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(parse("$ pwd").is_err());
        assert!(parse("$ cd /\nnot-a-listing").is_err());
    }
}
