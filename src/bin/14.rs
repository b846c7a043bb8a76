#![doc = include_str!("../puzzles/14.md")]

use std::fmt;

use aoc2023::debugln;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Tile {
    #[default]
    Empty,
    Rounded,
    Cube,
}

impl Tile {
    pub fn from_char(c: char) -> Self {
        match c {
            '.' => Tile::Empty,
            'O' => Tile::Rounded,
            '#' => Tile::Cube,
            _ => panic!("unexpected tile {c:?}"),
        }
    }

    pub fn character(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Rounded => 'O',
            Tile::Cube => '#',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Platform {
    tiles: grid::Grid<Tile>,
}

impl Platform {
    pub fn parse(input: &str) -> Self {
        let n_cols = input.lines().next().unwrap().len();

        let mut tiles = grid::Grid::new(0, n_cols);
        for line in input.lines() {
            tiles.push_row(line.chars().map(Tile::from_char).collect());
        }

        Self { tiles }
    }

    /// Rolls every rounded rock as far north as it can go.
    pub fn tilt_north(&mut self) {
        for col in 0..self.tiles.cols() {
            // The northernmost row a rolling rock can come to rest in.
            let mut next_free = 0;

            for row in 0..self.tiles.rows() {
                match *self.tiles.get(row, col).unwrap() {
                    Tile::Rounded => {
                        *self.tiles.get_mut(row, col).unwrap() = Tile::Empty;
                        *self.tiles.get_mut(next_free, col).unwrap() = Tile::Rounded;
                        next_free += 1;
                    }
                    Tile::Cube => next_free = row + 1,
                    Tile::Empty => {}
                }
            }
        }
    }

    /// The total load on the north support beams: every rounded rock counts
    /// the number of rows between it and the south edge, inclusive.
    pub fn north_load(&self) -> usize {
        let rows = self.tiles.rows();
        (0..rows)
            .map(|row| {
                let rounded = self
                    .tiles
                    .iter_row(row)
                    .filter(|&&tile| tile == Tile::Rounded)
                    .count();
                (rows - row) * rounded
            })
            .sum()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.tiles.rows() {
            for tile in self.tiles.iter_row(row) {
                write!(f, "{}", tile.character())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn part_one(input: &str) -> Option<usize> {
    let mut platform = Platform::parse(input);

    platform.tilt_north();
    debugln!("{platform}");

    Some(platform.north_load())
}

pub fn part_two(_input: &str) -> Option<usize> {
    None
}

fn main() {
    let input = &aoc2023::read_file("inputs", 14);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_north() {
        let mut platform = Platform::parse("O.\n.O\nO#\n..");
        platform.tilt_north();
        assert_eq!(platform, Platform::parse("OO\nO.\n.#\n.."));
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 14);
        assert_eq!(part_one(&input), Some(136));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 14);
        assert_eq!(part_two(&input), None);
    }
}
