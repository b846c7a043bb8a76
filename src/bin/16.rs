#![doc = include_str!("../puzzles/16.md")]

use bitvec::prelude::*;
use glam::IVec2;
use rayon::prelude::*;
use smallvec::{smallvec, SmallVec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Screen coordinates: `x` is the column, `y` is the row.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Beam {
    position: IVec2,
    direction: Direction,
}

#[derive(Debug)]
struct Contraption {
    tiles: grid::Grid<char>,
}

impl Contraption {
    pub fn parse(input: &str) -> Self {
        let n_cols = input.lines().next().unwrap().len();

        let mut tiles = grid::Grid::new(0, n_cols);
        for line in input.lines() {
            tiles.push_row(line.chars().collect());
        }

        Self { tiles }
    }

    #[inline]
    fn get(&self, pos: IVec2) -> Option<char> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.tiles.get(pos.y as usize, pos.x as usize).copied()
    }

    /// The directions a beam leaves a tile, given its incoming direction.
    fn deflect(tile: char, direction: Direction) -> SmallVec<[Direction; 2]> {
        use Direction::*;

        match (tile, direction) {
            ('.', _) | ('-', Left | Right) | ('|', Up | Down) => smallvec![direction],
            ('-', Up | Down) => smallvec![Left, Right],
            ('|', Left | Right) => smallvec![Up, Down],
            ('/', Right) => smallvec![Up],
            ('/', Left) => smallvec![Down],
            ('/', Up) => smallvec![Right],
            ('/', Down) => smallvec![Left],
            ('\\', Right) => smallvec![Down],
            ('\\', Left) => smallvec![Up],
            ('\\', Up) => smallvec![Left],
            ('\\', Down) => smallvec![Right],
            _ => panic!("unexpected tile {tile:?}"),
        }
    }

    /// One bit per (tile, direction) pair.
    #[inline]
    fn beam_index(&self, beam: Beam) -> usize {
        let tile = beam.position.y as usize * self.tiles.cols() + beam.position.x as usize;
        tile * 4 + beam.direction as usize
    }

    /// Counts the tiles the beam passes through, starting from `start`.
    pub fn energized_tiles(&self, start: Beam) -> usize {
        let mut seen = bitvec![0; self.tiles.rows() * self.tiles.cols() * 4];

        let mut pending = vec![start];
        while let Some(beam) = pending.pop() {
            let Some(tile) = self.get(beam.position) else {
                continue;
            };

            let index = self.beam_index(beam);
            if seen[index] {
                continue;
            }
            seen.set(index, true);

            for direction in Self::deflect(tile, beam.direction) {
                pending.push(Beam {
                    position: beam.position + direction.offset(),
                    direction,
                });
            }
        }

        // A tile is energized if a beam crossed it in any direction.
        seen.chunks(4).filter(|directions| directions.any()).count()
    }

    /// One inward-heading beam for every edge tile.
    pub fn edge_beams(&self) -> Vec<Beam> {
        let rows = self.tiles.rows() as i32;
        let cols = self.tiles.cols() as i32;

        let mut beams = Vec::new();
        for col in 0..cols {
            beams.push(Beam {
                position: IVec2::new(col, 0),
                direction: Direction::Down,
            });
            beams.push(Beam {
                position: IVec2::new(col, rows - 1),
                direction: Direction::Up,
            });
        }
        for row in 0..rows {
            beams.push(Beam {
                position: IVec2::new(0, row),
                direction: Direction::Right,
            });
            beams.push(Beam {
                position: IVec2::new(cols - 1, row),
                direction: Direction::Left,
            });
        }
        beams
    }
}

pub fn part_one(input: &str) -> Option<usize> {
    let contraption = Contraption::parse(input);

    Some(contraption.energized_tiles(Beam {
        position: IVec2::ZERO,
        direction: Direction::Right,
    }))
}

pub fn part_two(input: &str) -> Option<usize> {
    let contraption = Contraption::parse(input);

    contraption
        .edge_beams()
        .into_par_iter()
        .map(|beam| contraption.energized_tiles(beam))
        .max()
}

fn main() {
    let input = &aoc2023::read_file("inputs", 16);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 16);
        assert_eq!(part_one(&input), Some(46));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 16);
        assert_eq!(part_two(&input), Some(51));
    }
}
