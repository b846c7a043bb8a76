#![doc = include_str!("../puzzles/12.md")]

use std::collections::HashMap;

use itertools::Itertools;

type Memo = HashMap<(usize, usize, usize), u64>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    /// The spring conditions, with a trailing `b'.'` so that every damaged
    /// group is closed before the end of the row.
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Record {
    pub fn parse(line: &str) -> Self {
        let (springs, groups) = line.split_once(' ').expect("springs and group sizes");
        Self::new(springs, groups)
    }

    /// Parses a line unfolded five-fold: springs joined by `?`, groups
    /// repeated.
    pub fn parse_unfolded(line: &str) -> Self {
        let (springs, groups) = line.split_once(' ').expect("springs and group sizes");

        let springs = itertools::repeat_n(springs, 5).join("?");
        let groups = itertools::repeat_n(groups, 5).join(",");

        Self::new(&springs, &groups)
    }

    fn new(springs: &str, groups: &str) -> Self {
        let mut springs = springs.as_bytes().to_vec();
        springs.push(b'.');

        let groups = groups
            .split(',')
            .map(|n| n.parse().expect("group sizes are integers"))
            .collect();

        Self { springs, groups }
    }

    /// The number of ways to assign the unknown springs so that the damaged
    /// runs match the group sizes exactly.
    pub fn arrangements(&self) -> u64 {
        let mut memo = Memo::new();
        self.count(0, 0, 0, &mut memo)
    }

    /// `position` indexes the springs, `group` the group sizes, and `run` is
    /// the length of the damaged run ending just before `position`.
    fn count(&self, position: usize, group: usize, run: usize, memo: &mut Memo) -> u64 {
        if position == self.springs.len() {
            return (group == self.groups.len() && run == 0) as u64;
        }

        if let Some(&cached) = memo.get(&(position, group, run)) {
            return cached;
        }

        let options: &[u8] = match self.springs[position] {
            b'?' => b".#",
            b'#' => b"#",
            _ => b".",
        };

        let mut total = 0;
        for &option in options {
            if option == b'#' {
                // Extend the ongoing damaged run.
                total += self.count(position + 1, group, run + 1, memo);
            } else if run > 0 {
                // The run just closed; it must match the expected group.
                if self.groups.get(group) == Some(&run) {
                    total += self.count(position + 1, group + 1, 0, memo);
                }
            } else {
                total += self.count(position + 1, group, 0, memo);
            }
        }

        memo.insert((position, group, run), total);
        total
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(
        input
            .lines()
            .map(|line| Record::parse(line).arrangements())
            .sum(),
    )
}

pub fn part_two(input: &str) -> Option<u64> {
    Some(
        input
            .lines()
            .map(|line| Record::parse_unfolded(line).arrangements())
            .sum(),
    )
}

fn main() {
    let input = &aoc2023::read_file("inputs", 12);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_arrangements(line: &str, expected: u64) {
        assert_eq!(Record::parse(line).arrangements(), expected);
    }

    #[test]
    fn test_arrangements() {
        assert_arrangements("???.### 1,1,3", 1);
        assert_arrangements(".??..??...?##. 1,1,3", 4);
        assert_arrangements("?###???????? 3,2,1", 10);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 12);
        assert_eq!(part_one(&input), Some(21));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 12);
        assert_eq!(part_two(&input), Some(525152));
    }
}
