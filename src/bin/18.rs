#![doc = include_str!("../puzzles/18.md")]

use std::collections::{BTreeMap, BTreeSet};

use glam::IVec2;

use aoc2023::helpers::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Screen coordinates: `x` is the column, `y` is the row.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DigStep {
    direction: Direction,
    meters: i64,
    /// The raw 24-bit color from the dig plan.
    color: u32,
}

impl DigStep {
    /// Reads the color as the real instruction: five hex digits of distance,
    /// one of direction.
    pub fn decoded(self) -> (Direction, i64) {
        let meters = (self.color >> 4) as i64;
        let direction = match self.color & 0xf {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Up,
            d => panic!("invalid direction digit {d}"),
        };
        (direction, meters)
    }
}

fn dig_plan(input: &str) -> Vec<DigStep> {
    input
        .lines()
        .map(|line| parse::from_str(line, DigStep::parser()).unwrap())
        .collect()
}

/// The trench, one dug-out cell at a time, grouped by row.
#[derive(Debug, Default)]
struct TrenchMap {
    rows: BTreeMap<i32, BTreeSet<i32>>,
}

impl TrenchMap {
    pub fn dig(&mut self, pos: IVec2) {
        self.rows.entry(pos.y).or_default().insert(pos.x);
    }

    fn is_dug(&self, row: i32, col: i32) -> bool {
        self.rows
            .get(&row)
            .map(|cols| cols.contains(&col))
            .unwrap_or(false)
    }

    /// Trench cells plus the cells they enclose, scanning row by row.
    ///
    /// A run of trench cells whose endpoints hang off the same side (a
    /// U-turn) does not flip insideness; any other run does.
    pub fn capacity(&self) -> u64 {
        let mut count = 0;

        for (&row, cols) in &self.rows {
            let first = *cols.iter().next().unwrap();
            let last = *cols.iter().next_back().unwrap();

            let mut inside = false;
            let mut edge_begin: Option<i32> = None;

            for col in first..=last {
                if cols.contains(&col) {
                    match edge_begin {
                        None => edge_begin = Some(col),
                        Some(begin) => {
                            let u_turn = (self.is_dug(row - 1, col) && self.is_dug(row - 1, begin))
                                || (self.is_dug(row + 1, col) && self.is_dug(row + 1, begin));
                            if u_turn {
                                edge_begin = None;
                            }
                        }
                    }
                    count += 1;
                } else {
                    if edge_begin.is_some() {
                        inside = !inside;
                        edge_begin = None;
                    }
                    if inside {
                        count += 1;
                    }
                }
            }
        }

        count
    }
}

fn dig_trench(steps: impl IntoIterator<Item = (Direction, i64)>) -> TrenchMap {
    let mut trench = TrenchMap::default();
    let mut position = IVec2::ZERO;
    trench.dig(position);

    for (direction, meters) in steps {
        for _ in 0..meters {
            position += direction.offset();
            trench.dig(position);
        }
    }

    trench
}

/// Lagoon capacity from the loop's corners alone: the shoelace formula for
/// the enclosed area, plus the boundary correction from Pick's theorem. The
/// part two distances rule out digging cell by cell.
fn surveyed_capacity(steps: impl IntoIterator<Item = (Direction, i64)>) -> u64 {
    // Corner coordinates overflow an IVec2 on the decoded distances.
    let (mut col, mut row) = (0_i64, 0_i64);
    let mut twice_area = 0;
    let mut perimeter = 0;

    for (direction, meters) in steps {
        let offset = direction.offset();
        let next_col = col + offset.x as i64 * meters;
        let next_row = row + offset.y as i64 * meters;

        twice_area += col * next_row - next_col * row;
        perimeter += meters;

        col = next_col;
        row = next_row;
    }

    (twice_area.abs() / 2 + perimeter / 2 + 1) as u64
}

pub fn part_one(input: &str) -> Option<u64> {
    let steps = dig_plan(input)
        .into_iter()
        .map(|step| (step.direction, step.meters));

    Some(dig_trench(steps).capacity())
}

pub fn part_two(input: &str) -> Option<u64> {
    let steps = dig_plan(input).into_iter().map(DigStep::decoded);
    Some(surveyed_capacity(steps))
}

fn main() {
    let input = &aoc2023::read_file("inputs", 18);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    use aoc2023::helpers::parse;

    #[test]
    fn test_decoded() {
        let step = parse::from_str("R 6 (#70c710)", DigStep::parser()).unwrap();
        assert_eq!(step.direction, Direction::Right);
        assert_eq!(step.meters, 6);
        assert_eq!(step.decoded(), (Direction::Right, 461937));
    }

    #[test]
    fn test_survey_matches_digging() {
        // On part one's small distances both approaches agree.
        let input = aoc2023::read_file("examples", 18);
        let steps: Vec<_> = dig_plan(&input)
            .into_iter()
            .map(|step| (step.direction, step.meters))
            .collect();

        assert_eq!(
            dig_trench(steps.iter().copied()).capacity(),
            surveyed_capacity(steps)
        );
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 18);
        assert_eq!(part_one(&input), Some(62));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 18);
        assert_eq!(part_two(&input), Some(952408144115));
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

    impl Direction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            c::one_of("UDLR".chars()).map(|c: char| match c {
                'U' => Direction::Up,
                'D' => Direction::Down,
                'L' => Direction::Left,
                'R' => Direction::Right,
                _ => unreachable!(),
            })
        }
    }

    impl DigStep {
        // "R 6 (#70c710)"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                Direction::parser(),
                c::token(' '),
                parse::decimal_integer(),
                c::string(" (#"),
                c::many1::<String, _, _>(c::char::hex_digit()),
                c::token(')'),
            )
                .map(|(direction, _, meters, _, color, _)| DigStep {
                    direction,
                    meters,
                    color: u32::from_str_radix(&color, 16)
                        .expect("six hex digits fit in a u32"),
                })
        }
    }
}
