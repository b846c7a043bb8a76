#![doc = include_str!("../puzzles/13.md")]

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pattern {
    rocks: grid::Grid<bool>,
}

impl Pattern {
    pub fn parse(block: &str) -> Self {
        let n_cols = block.lines().next().unwrap().len();

        let mut rocks = grid::Grid::new(0, n_cols);
        for line in block.lines() {
            rocks.push_row(line.chars().map(|c| c == '#').collect());
        }

        Self { rocks }
    }

    /// Counts the mismatched cells across a mirror between rows `row` and
    /// `row + 1`.
    fn row_mirror_smudges(&self, row: usize) -> usize {
        let mut smudges = 0;
        let mut above = row;
        let mut below = row + 1;

        loop {
            smudges += self
                .rocks
                .iter_row(above)
                .zip(self.rocks.iter_row(below))
                .filter(|(a, b)| a != b)
                .count();

            if above == 0 || below + 1 == self.rocks.rows() {
                break;
            }
            above -= 1;
            below += 1;
        }

        smudges
    }

    /// Counts the mismatched cells across a mirror between columns `col` and
    /// `col + 1`.
    fn col_mirror_smudges(&self, col: usize) -> usize {
        let mut smudges = 0;
        let mut left = col;
        let mut right = col + 1;

        loop {
            smudges += self
                .rocks
                .iter_col(left)
                .zip(self.rocks.iter_col(right))
                .filter(|(a, b)| a != b)
                .count();

            if left == 0 || right + 1 == self.rocks.cols() {
                break;
            }
            left -= 1;
            right += 1;
        }

        smudges
    }

    /// The pattern's summary: columns left of each vertical mirror plus 100
    /// times the rows above each horizontal mirror. Only mirrors with
    /// exactly `smudges` mismatched cells count.
    pub fn summarize(&self, smudges: usize) -> usize {
        let mut total = 0;

        for row in 0..self.rocks.rows() - 1 {
            if self.row_mirror_smudges(row) == smudges {
                total += 100 * (row + 1);
            }
        }
        for col in 0..self.rocks.cols() - 1 {
            if self.col_mirror_smudges(col) == smudges {
                total += col + 1;
            }
        }

        total
    }
}

fn patterns(input: &str) -> impl Iterator<Item = Pattern> + '_ {
    input.split("\n\n").map(Pattern::parse)
}

pub fn part_one(input: &str) -> Option<usize> {
    Some(patterns(input).map(|pattern| pattern.summarize(0)).sum())
}

pub fn part_two(input: &str) -> Option<usize> {
    Some(patterns(input).map(|pattern| pattern.summarize(1)).sum())
}

fn main() {
    let input = &aoc2023::read_file("inputs", 13);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let pattern = Pattern::parse(
            "#...##..#\n\
             #....#..#\n\
             ..##..###\n\
             #####.##.\n\
             #####.##.\n\
             ..##..###\n\
             #....#..#",
        );
        assert_eq!(pattern.summarize(0), 400);
        assert_eq!(pattern.summarize(1), 100);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 13);
        assert_eq!(part_one(&input), Some(709));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 13);
        assert_eq!(part_two(&input), Some(1400));
    }
}
