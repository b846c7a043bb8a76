#![doc = include_str!("../puzzles/19.md")]

use std::collections::HashMap;

use aoc2023::helpers::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Category {
    X,
    M,
    A,
    S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    LessThan,
    GreaterThan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Condition {
    category: Category,
    comparison: Comparison,
    value: u64,
}

impl Condition {
    pub fn matches(&self, part: &Part) -> bool {
        let rating = part.rating(self.category);
        match self.comparison {
            Comparison::LessThan => rating < self.value,
            Comparison::GreaterThan => rating > self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Accept,
    Reject,
    Workflow(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    /// `None` for a workflow's unconditional last rule.
    condition: Option<Condition>,
    target: Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Part {
    x: u64,
    m: u64,
    a: u64,
    s: u64,
}

impl Part {
    pub fn rating(&self, category: Category) -> u64 {
        match category {
            Category::X => self.x,
            Category::M => self.m,
            Category::A => self.a,
            Category::S => self.s,
        }
    }

    pub fn total_rating(&self) -> u64 {
        self.x + self.m + self.a + self.s
    }
}

#[derive(Debug)]
struct System {
    workflows: HashMap<String, Vec<Rule>>,
    parts: Vec<Part>,
}

impl System {
    pub fn parse(input: &str) -> Self {
        let (workflows, parts) = input
            .split_once("\n\n")
            .expect("workflows and parts are separated by a blank line");

        let workflows = workflows
            .lines()
            .map(|line| parse::from_str(line, parsing::workflow()).unwrap())
            .collect();

        let parts = parts
            .lines()
            .map(|line| parse::from_str(line, Part::parser()).unwrap())
            .collect();

        Self { workflows, parts }
    }

    /// Runs a part through the workflows, starting at `in`.
    pub fn accepts(&self, part: &Part) -> bool {
        let mut name = "in";

        loop {
            let rules = &self.workflows[name];
            let rule = rules
                .iter()
                .find(|rule| {
                    rule.condition
                        .map(|condition| condition.matches(part))
                        .unwrap_or(true)
                })
                .expect("every workflow ends in an unconditional rule");

            match &rule.target {
                Target::Accept => return true,
                Target::Reject => return false,
                Target::Workflow(next) => name = next,
            }
        }
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    let system = System::parse(input);

    Some(
        system
            .parts
            .iter()
            .filter(|part| system.accepts(part))
            .map(Part::total_rating)
            .sum(),
    )
}

pub fn part_two(_input: &str) -> Option<u64> {
    None
}

fn main() {
    let input = &aoc2023::read_file("inputs", 19);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    use maplit::hashmap;

    #[test]
    fn test_parse_workflow() {
        let system = System::parse("ex{x>10:one,s<20:A,R}\n\n{x=1,m=2,a=3,s=4}");

        let expected = hashmap! {
            "ex".to_owned() => vec![
                Rule {
                    condition: Some(Condition {
                        category: Category::X,
                        comparison: Comparison::GreaterThan,
                        value: 10,
                    }),
                    target: Target::Workflow("one".to_owned()),
                },
                Rule {
                    condition: Some(Condition {
                        category: Category::S,
                        comparison: Comparison::LessThan,
                        value: 20,
                    }),
                    target: Target::Accept,
                },
                Rule {
                    condition: None,
                    target: Target::Reject,
                },
            ],
        };

        assert_eq!(system.workflows, expected);
        assert_eq!(system.parts, vec![Part { x: 1, m: 2, a: 3, s: 4 }]);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 19);
        assert_eq!(part_one(&input), Some(19114));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 19);
        assert_eq!(part_two(&input), None);
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

    impl Category {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            c::one_of("xmas".chars()).map(|c: char| match c {
                'x' => Category::X,
                'm' => Category::M,
                'a' => Category::A,
                's' => Category::S,
                _ => unreachable!(),
            })
        }
    }

    impl Condition {
        // "a<2006"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let comparison = c::one_of("<>".chars()).map(|c: char| match c {
                '<' => Comparison::LessThan,
                '>' => Comparison::GreaterThan,
                _ => unreachable!(),
            });

            (Category::parser(), comparison, parse::decimal_integer()).map(
                |(category, comparison, value)| Condition {
                    category,
                    comparison,
                    value,
                },
            )
        }
    }

    fn target<Input>() -> impl Parser<Input, Output = Target>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::many1(c::char::letter()).map(|name: String| match name.as_str() {
            "A" => Target::Accept,
            "R" => Target::Reject,
            _ => Target::Workflow(name),
        })
    }

    impl Rule {
        // "a<2006:qkq" or "rfg"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // A bare target can also start with x/m/a/s, so back out of a
            // half-parsed condition.
            c::choice((
                c::attempt((Condition::parser(), c::token(':'), target())).map(
                    |(condition, _, target)| Rule {
                        condition: Some(condition),
                        target,
                    },
                ),
                target().map(|target| Rule {
                    condition: None,
                    target,
                }),
            ))
        }
    }

    // "px{a<2006:qkq,m>2090:A,rfg}"
    pub fn workflow<Input>() -> impl Parser<Input, Output = (String, Vec<Rule>)>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        (
            c::many1(c::char::letter()),
            c::between(
                c::token('{'),
                c::token('}'),
                c::sep_by1::<Vec<_>, _, _, _>(Rule::parser(), c::token(',')),
            ),
        )
    }

    impl Part {
        // "{x=787,m=2655,a=1222,s=2876}"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::string("{x="),
                parse::decimal_integer(),
                c::string(",m="),
                parse::decimal_integer(),
                c::string(",a="),
                parse::decimal_integer(),
                c::string(",s="),
                parse::decimal_integer(),
                c::token('}'),
            )
                .map(|(_, x, _, m, _, a, _, s, _)| Part { x, m, a, s })
        }
    }
}
