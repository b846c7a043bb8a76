#![doc = include_str!("../puzzles/09.md")]

use itertools::Itertools;

use aoc2023::helpers::parse;

fn differences(values: &[i64]) -> Vec<i64> {
    values.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

/// Extrapolates the next value of a history: the sum of the trailing values
/// of the history and all its difference sequences.
fn extrapolate(history: &[i64]) -> i64 {
    let mut current = history.to_vec();
    let mut next_value = 0;

    while current.iter().any(|&value| value != 0) {
        next_value += current.last().copied().unwrap();
        current = differences(&current);
    }

    next_value
}

fn histories(input: &str) -> impl Iterator<Item = Vec<i64>> + '_ {
    input
        .lines()
        .map(|line| parse::from_str(line, parsing::history()).unwrap())
}

pub fn part_one(input: &str) -> Option<i64> {
    Some(histories(input).map(|history| extrapolate(&history)).sum())
}

pub fn part_two(_input: &str) -> Option<i64> {
    None
}

fn main() {
    let input = &aoc2023::read_file("inputs", 9);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrapolate() {
        assert_eq!(extrapolate(&[0, 3, 6, 9, 12, 15]), 18);
        assert_eq!(extrapolate(&[1, 3, 6, 10, 15, 21]), 28);
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
        assert_eq!(extrapolate(&[3, 1, -1, -3]), -5);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 9);
        assert_eq!(part_one(&input), Some(114));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 9);
        assert_eq!(part_two(&input), None);
    }
}

mod parsing {
    use aoc2023::helpers::parse;

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    // "10 13 16 21 30 45"
    pub fn history<Input>() -> impl Parser<Input, Output = Vec<i64>>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::sep_by1(parse::signed_decimal_integer::<i64, Input>(), c::token(' '))
    }
}
