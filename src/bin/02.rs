#![doc = include_str!("../puzzles/02.md")]

use aoc2023::helpers::parse;

/// The bag contents the elf asks about in part one.
const BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Game {
    id: u32,
    draws: Vec<CubeSet>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

impl CubeSet {
    #[inline]
    pub fn fits_in(&self, bag: &CubeSet) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// The component-wise maximum of two sets.
    #[inline]
    pub fn max(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    #[inline]
    pub fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

impl Game {
    pub fn is_possible_with(&self, bag: &CubeSet) -> bool {
        self.draws.iter().all(|draw| draw.fits_in(bag))
    }

    /// The smallest bag that makes every draw of this game possible.
    pub fn minimum_bag(&self) -> CubeSet {
        self.draws
            .iter()
            .fold(CubeSet::default(), |bag, &draw| bag.max(draw))
    }
}

fn games(input: &str) -> impl Iterator<Item = Game> + '_ {
    input
        .lines()
        .map(|line| parse::from_str(line, Game::parser()).unwrap())
}

pub fn part_one(input: &str) -> Option<u32> {
    Some(
        games(input)
            .filter(|game| game.is_possible_with(&BAG))
            .map(|game| game.id)
            .sum(),
    )
}

pub fn part_two(input: &str) -> Option<u32> {
    Some(games(input).map(|game| game.minimum_bag().power()).sum())
}

fn main() {
    let input = &aoc2023::read_file("inputs", 2);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    use aoc2023::helpers::parse;

    #[test]
    fn test_minimum_bag() {
        let game = parse::from_str(
            "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green",
            Game::parser(),
        )
        .unwrap();

        let bag = game.minimum_bag();
        assert_eq!(
            bag,
            CubeSet {
                red: 4,
                green: 2,
                blue: 6
            }
        );
        assert_eq!(bag.power(), 48);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 2);
        assert_eq!(part_one(&input), Some(8));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 2);
        assert_eq!(part_two(&input), Some(2286));
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

    #[derive(Debug, Clone, Copy)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    fn color<Input>() -> impl Parser<Input, Output = Color>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::choice((
            c::string("red").map(|_| Color::Red),
            c::string("green").map(|_| Color::Green),
            c::string("blue").map(|_| Color::Blue),
        ))
    }

    impl CubeSet {
        // "3 blue, 4 red"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let count = (parse::decimal_integer::<u32, _>(), c::token(' '), color());

            c::sep_by1::<Vec<_>, _, _, _>(count, c::string(", ")).map(|counts| {
                let mut set = CubeSet::default();
                for (n, _, color) in counts {
                    match color {
                        Color::Red => set.red = n,
                        Color::Green => set.green = n,
                        Color::Blue => set.blue = n,
                    }
                }
                set
            })
        }
    }

    impl Game {
        // "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::string("Game "),
                parse::decimal_integer(),
                c::string(": "),
                c::sep_by1::<Vec<_>, _, _, _>(CubeSet::parser(), c::string("; ")),
            )
                .map(|(_, id, _, draws)| Game { id, draws })
        }
    }
}
