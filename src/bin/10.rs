#![doc = include_str!("../puzzles/10.md")]

use std::collections::HashMap;

use glam::IVec2;
use pathfinding::directed::dijkstra::dijkstra_all;
use smallvec::{smallvec, SmallVec};

use aoc2023::debugln;

/// Screen coordinates: `x` is the column, `y` is the row, north is `-y`.
type Pos = IVec2;

const NORTH: IVec2 = IVec2::new(0, -1);
const SOUTH: IVec2 = IVec2::new(0, 1);
const EAST: IVec2 = IVec2::new(1, 0);
const WEST: IVec2 = IVec2::new(-1, 0);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Vertical,
    Horizontal,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
    #[default]
    Ground,
    Start,
}

impl Tile {
    pub fn from_char(c: char) -> Self {
        match c {
            '|' => Tile::Vertical,
            '-' => Tile::Horizontal,
            'L' => Tile::NorthEast,
            'J' => Tile::NorthWest,
            '7' => Tile::SouthWest,
            'F' => Tile::SouthEast,
            '.' => Tile::Ground,
            'S' => Tile::Start,
            _ => panic!("unexpected tile {c:?}"),
        }
    }

    /// The two directions this pipe connects to. The start tile's shape is
    /// unknown at this level; see [`Maze::connections`].
    pub fn connections(self) -> SmallVec<[IVec2; 2]> {
        match self {
            Tile::Vertical => smallvec![NORTH, SOUTH],
            Tile::Horizontal => smallvec![EAST, WEST],
            Tile::NorthEast => smallvec![NORTH, EAST],
            Tile::NorthWest => smallvec![NORTH, WEST],
            Tile::SouthWest => smallvec![SOUTH, WEST],
            Tile::SouthEast => smallvec![SOUTH, EAST],
            Tile::Ground | Tile::Start => SmallVec::new(),
        }
    }
}

#[derive(Debug)]
struct Maze {
    tiles: grid::Grid<Tile>,
    start: Pos,
}

impl Maze {
    pub fn parse(input: &str) -> Self {
        let n_cols = input.lines().next().unwrap().len();

        let mut tiles = grid::Grid::new(0, n_cols);
        let mut start = None;

        for (row, line) in input.lines().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c == 'S' {
                    start = Some(Pos::new(col as i32, row as i32));
                }
            }
            tiles.push_row(line.chars().map(Tile::from_char).collect());
        }

        Self {
            tiles,
            start: start.expect("the maze has a start tile"),
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.tiles.get(pos.y as usize, pos.x as usize).copied()
    }

    /// The start tile's connections, inferred from which neighbors connect
    /// back to it.
    fn start_connections(&self) -> SmallVec<[IVec2; 2]> {
        [NORTH, SOUTH, EAST, WEST]
            .into_iter()
            .filter(|&dir| {
                self.get(self.start + dir)
                    .map(|neighbor| neighbor.connections().contains(&(-dir)))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn connections(&self, pos: Pos) -> SmallVec<[IVec2; 2]> {
        if pos == self.start {
            self.start_connections()
        } else {
            self.get(pos)
                .map(Tile::connections)
                .unwrap_or_default()
        }
    }

    /// Every tile of the loop, with its walking distance from the start.
    ///
    /// Only mutual connections are followed, so stray pipe segments that
    /// happen to point at the loop are never entered.
    pub fn loop_distances(&self) -> HashMap<Pos, u32> {
        let successors = |&pos: &Pos| -> SmallVec<[(Pos, u32); 2]> {
            self.connections(pos)
                .into_iter()
                .filter(|&dir| self.connections(pos + dir).contains(&(-dir)))
                .map(|dir| (pos + dir, 1))
                .collect()
        };

        let mut distances: HashMap<Pos, u32> = dijkstra_all(&self.start, successors)
            .into_iter()
            .map(|(pos, (_parent, cost))| (pos, cost))
            .collect();
        distances.insert(self.start, 0);

        distances
    }

    /// Counts the tiles enclosed by the loop by casting a ray along each
    /// row: crossing a loop tile that connects north flips insideness.
    pub fn enclosed_tiles(&self) -> usize {
        let pipe_loop = self.loop_distances();

        let mut enclosed = 0;
        for row in 0..self.tiles.rows() {
            let mut inside = false;
            for col in 0..self.tiles.cols() {
                let pos = Pos::new(col as i32, row as i32);
                if pipe_loop.contains_key(&pos) {
                    if self.connections(pos).contains(&NORTH) {
                        inside = !inside;
                    }
                } else if inside {
                    enclosed += 1;
                }
            }
        }

        enclosed
    }
}

pub fn part_one(input: &str) -> Option<u32> {
    let maze = Maze::parse(input);

    let distances = maze.loop_distances();
    debugln!("loop length: {}", distances.len());

    distances.into_values().max()
}

pub fn part_two(input: &str) -> Option<usize> {
    let maze = Maze::parse(input);
    Some(maze.enclosed_tiles())
}

fn main() {
    let input = &aoc2023::read_file("inputs", 10);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const LARGER_LOOP: &str = "7-F7-\n\
                               .FJ|7\n\
                               SJLL7\n\
                               |F--J\n\
                               LJ.LJ";

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 10);
        assert_eq!(part_one(&input), Some(4));
    }

    #[test]
    fn test_part_one_larger_loop() {
        assert_eq!(part_one(LARGER_LOOP), Some(8));
    }

    #[test]
    fn test_part_two_simple() {
        let input = "...........\n\
                     .S-------7.\n\
                     .|F-----7|.\n\
                     .||.....||.\n\
                     .||.....||.\n\
                     .|L-7.F-J|.\n\
                     .|..|.|..|.\n\
                     .L--J.L--J.\n\
                     ...........";
        assert_eq!(part_two(input), Some(4));
    }

    #[test]
    fn test_part_two_larger() {
        let input = ".F----7F7F7F7F-7....\n\
                     .|F--7||||||||FJ....\n\
                     .||.FJ||||||||L7....\n\
                     FJL7L7LJLJ||LJ.L-7..\n\
                     L--J.L7...LJS7F-7L7.\n\
                     ....F-J..F7FJ|L7L7L7\n\
                     ....L7.F7||L7|.L7L7|\n\
                     .....|FJLJ|FJ|F7|.LJ\n\
                     ....FJL-7.||.||||...\n\
                     ....L---J.LJ.LJLJ...";
        assert_eq!(part_two(input), Some(8));
    }

    #[test]
    fn test_part_two_with_junk_pipes() {
        let input = "FF7FSF7F7F7F7F7F---7\n\
                     L|LJ||||||||||||F--J\n\
                     FL-7LJLJ||||||LJL-77\n\
                     F--JF--7||LJLJ7F7FJ-\n\
                     L---JF-JLJ.||-FJLJJ7\n\
                     |F|F-JF---7F7-L7L|7|\n\
                     |FFJF7L7F-JF7|JL---7\n\
                     7-L-JL7||F7|L7F-7F7|\n\
                     L.L7LFJ|||||FJL7||LJ\n\
                     L7JLJL-JLJLJL--JLJ.L";
        assert_eq!(part_two(input), Some(10));
    }
}
