#![doc = include_str!("../puzzles/11.md")]

use itertools::Itertools;

/// Each empty row or column counts this many times in part two.
const PART_TWO_EXPANSION: u64 = 1_000_000;

#[derive(Debug)]
struct Image {
    /// Galaxy positions as `(row, col)`.
    galaxies: Vec<(usize, usize)>,
    empty_rows: Vec<usize>,
    empty_cols: Vec<usize>,
}

impl Image {
    pub fn parse(input: &str) -> Self {
        let galaxies: Vec<(usize, usize)> = input
            .lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == '#')
                    .map(move |(col, _)| (row, col))
            })
            .collect();

        let empty_rows = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.contains('#'))
            .map(|(row, _)| row)
            .collect();

        let width = input.lines().next().unwrap().len();
        let empty_cols = (0..width)
            .filter(|&col| !galaxies.iter().any(|&(_, c)| c == col))
            .collect();

        Self {
            galaxies,
            empty_rows,
            empty_cols,
        }
    }

    /// The walking distance between two galaxies, with every empty row and
    /// column in between counting `expansion` times.
    fn distance(&self, a: (usize, usize), b: (usize, usize), expansion: u64) -> u64 {
        let (row_lo, row_hi) = (a.0.min(b.0), a.0.max(b.0));
        let (col_lo, col_hi) = (a.1.min(b.1), a.1.max(b.1));

        let expanded_rows = self
            .empty_rows
            .iter()
            .filter(|&&row| row_lo < row && row <= row_hi)
            .count();
        let expanded_cols = self
            .empty_cols
            .iter()
            .filter(|&&col| col_lo < col && col <= col_hi)
            .count();

        let base = (row_hi - row_lo) + (col_hi - col_lo);
        base as u64 + (expansion - 1) * (expanded_rows + expanded_cols) as u64
    }

    pub fn sum_of_distances(&self, expansion: u64) -> u64 {
        self.galaxies
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| self.distance(a, b, expansion))
            .sum()
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(Image::parse(input).sum_of_distances(2))
}

pub fn part_two(input: &str) -> Option<u64> {
    Some(Image::parse(input).sum_of_distances(PART_TWO_EXPANSION))
}

fn main() {
    let input = &aoc2023::read_file("inputs", 11);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 11);
        assert_eq!(part_one(&input), Some(374));
    }

    #[test]
    fn test_larger_expansions() {
        let image = Image::parse(&aoc2023::read_file("examples", 11));
        assert_eq!(image.sum_of_distances(10), 1030);
        assert_eq!(image.sum_of_distances(100), 8410);
    }
}
