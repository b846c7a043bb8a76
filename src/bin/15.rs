#![doc = include_str!("../puzzles/15.md")]

use aoc2023::helpers::parse;

/// The HASH of a string: add each ASCII code, multiply by 17, modulo 256.
fn hash(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| (acc + b as u32) * 17 % 256)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Remove,
    Insert(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    label: String,
    operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Lens {
    label: String,
    focal_length: u32,
}

/// The 256 boxes of the HASHMAP procedure.
struct Boxes(Vec<Vec<Lens>>);

impl Boxes {
    pub fn new() -> Self {
        Self(vec![Vec::new(); 256])
    }

    pub fn apply(&mut self, step: Step) {
        let lenses = &mut self.0[hash(&step.label) as usize];

        match step.operation {
            Operation::Remove => lenses.retain(|lens| lens.label != step.label),
            Operation::Insert(focal_length) => {
                if let Some(lens) = lenses.iter_mut().find(|lens| lens.label == step.label) {
                    lens.focal_length = focal_length;
                } else {
                    lenses.push(Lens {
                        label: step.label,
                        focal_length,
                    });
                }
            }
        }
    }

    /// Box number times slot number times focal length, over every lens.
    pub fn focusing_power(&self) -> u32 {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(box_index, lenses)| {
                lenses.iter().enumerate().map(move |(slot, lens)| {
                    (box_index as u32 + 1) * (slot as u32 + 1) * lens.focal_length
                })
            })
            .sum()
    }
}

fn steps(input: &str) -> impl Iterator<Item = Step> + '_ {
    input
        .trim()
        .split(',')
        .map(|step| parse::from_str(step, Step::parser()).unwrap())
}

pub fn part_one(input: &str) -> Option<u32> {
    Some(input.trim().split(',').map(hash).sum())
}

pub fn part_two(input: &str) -> Option<u32> {
    let mut boxes = Boxes::new();
    for step in steps(input) {
        boxes.apply(step);
    }
    Some(boxes.focusing_power())
}

fn main() {
    let input = &aoc2023::read_file("inputs", 15);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("qp"), 1);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 15);
        assert_eq!(part_one(&input), Some(1320));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 15);
        assert_eq!(part_two(&input), Some(145));
    }
}

mod parsing {
    use super::*;

    use aoc2023::helpers::parse;

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    impl Step {
        // "rn=1" or "cm-"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let operation = c::choice((
                c::token('-').map(|_| Operation::Remove),
                (c::token('='), parse::decimal_integer())
                    .map(|(_, focal_length)| Operation::Insert(focal_length)),
            ));

            (c::many1(c::char::letter()), operation)
                .map(|(label, operation)| Step { label, operation })
        }
    }
}
