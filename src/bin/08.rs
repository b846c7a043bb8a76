#![doc = include_str!("../puzzles/08.md")]

use std::collections::HashMap;

use aoc2023::helpers::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    name: String,
    left: String,
    right: String,
}

#[derive(Debug)]
struct Network {
    instructions: Vec<Instruction>,
    nodes: HashMap<String, (String, String)>,
}

impl Network {
    pub fn parse(input: &str) -> Self {
        let (instructions, nodes) = input
            .split_once("\n\n")
            .expect("instructions and nodes are separated by a blank line");

        let instructions = instructions
            .trim()
            .chars()
            .map(|c| match c {
                'L' => Instruction::Left,
                'R' => Instruction::Right,
                _ => panic!("invalid instruction {c:?}"),
            })
            .collect();

        let nodes = nodes
            .lines()
            .map(|line| {
                let node = parse::from_str(line, Node::parser()).unwrap();
                (node.name, (node.left, node.right))
            })
            .collect();

        Self {
            instructions,
            nodes,
        }
    }

    /// Steps to walk from `start` to `goal`, repeating the instruction list
    /// as often as needed.
    pub fn steps_between(&self, start: &str, goal: &str) -> u64 {
        let mut current = start;
        let mut steps = 0;

        for &instruction in self.instructions.iter().cycle() {
            let (left, right) = &self.nodes[current];
            current = match instruction {
                Instruction::Left => left,
                Instruction::Right => right,
            };
            steps += 1;

            if current == goal {
                break;
            }
        }

        steps
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    let network = Network::parse(input);
    Some(network.steps_between("AAA", "ZZZ"))
}

pub fn part_two(_input: &str) -> Option<u64> {
    None
}

fn main() {
    let input = &aoc2023::read_file("inputs", 8);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 8);
        assert_eq!(part_one(&input), Some(2));
    }

    #[test]
    fn test_part_one_repeats_instructions() {
        let input = "LLR\n\
                     \n\
                     AAA = (BBB, BBB)\n\
                     BBB = (AAA, ZZZ)\n\
                     ZZZ = (ZZZ, ZZZ)";
        assert_eq!(part_one(input), Some(6));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 8);
        assert_eq!(part_two(&input), None);
    }
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    fn name<Input>() -> impl Parser<Input, Output = String>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::many1(c::char::alpha_num())
    }

    impl Node {
        // "AAA = (BBB, CCC)"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                name(),
                c::string(" = ("),
                name(),
                c::string(", "),
                name(),
                c::token(')'),
            )
                .map(|(name, _, left, _, right, _)| Node { name, left, right })
        }
    }
}
