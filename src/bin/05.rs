#![doc = include_str!("../puzzles/05.md")]

use std::ops::Range;

use itertools::Itertools;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapEntry {
    destination: u64,
    source: u64,
    length: u64,
}

impl MapEntry {
    /// Parses one `destination source length` line.
    pub fn parse(line: &str) -> Self {
        let (destination, source, length) = line
            .split_whitespace()
            .map(|n| n.parse().unwrap())
            .collect_tuple()
            .expect("map entries have three numbers");

        Self {
            destination,
            source,
            length,
        }
    }

    #[inline]
    pub fn convert(&self, value: u64) -> Option<u64> {
        (self.source..self.source + self.length)
            .contains(&value)
            .then(|| value - self.source + self.destination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RangeMap {
    entries: Vec<MapEntry>,
}

impl RangeMap {
    /// Parses a whole block, e.g. `seed-to-soil map:` followed by entries.
    pub fn parse(block: &str) -> Self {
        Self {
            entries: block.lines().skip(1).map(MapEntry::parse).collect(),
        }
    }

    /// Numbers not covered by any entry map to themselves.
    #[inline]
    pub fn convert(&self, value: u64) -> u64 {
        self.entries
            .iter()
            .find_map(|entry| entry.convert(value))
            .unwrap_or(value)
    }
}

#[derive(Debug)]
struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<RangeMap>,
}

impl Almanac {
    pub fn parse(input: &str) -> Self {
        let mut blocks = input.split("\n\n");

        let seeds = blocks
            .next()
            .unwrap()
            .strip_prefix("seeds:")
            .expect("input starts with the seeds line")
            .split_whitespace()
            .map(|n| n.parse().unwrap())
            .collect();

        let maps = blocks.map(RangeMap::parse).collect();

        Self { seeds, maps }
    }

    /// Feeds a seed through the whole chain of maps.
    pub fn location_of(&self, seed: u64) -> u64 {
        self.maps.iter().fold(seed, |value, map| map.convert(value))
    }

    /// The seeds line read as (start, length) pairs.
    pub fn seed_ranges(&self) -> Vec<Range<u64>> {
        self.seeds
            .iter()
            .tuples()
            .map(|(&start, &length)| start..start + length)
            .collect()
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    let almanac = Almanac::parse(input);

    almanac
        .seeds
        .iter()
        .map(|&seed| almanac.location_of(seed))
        .min()
}

pub fn part_two(input: &str) -> Option<u64> {
    let almanac = Almanac::parse(input);

    // Brute force over every seed in every range; the ranges are independent,
    // so they can be ground through in parallel.
    almanac
        .seed_ranges()
        .into_par_iter()
        .filter_map(|range| range.map(|seed| almanac.location_of(seed)).min())
        .min()
}

fn main() {
    let input = &aoc2023::read_file("inputs", 5);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_values_pass_through() {
        let map = RangeMap::parse("seed-to-soil map:\n50 98 2\n52 50 48");
        assert_eq!(map.convert(98), 50);
        assert_eq!(map.convert(53), 55);
        assert_eq!(map.convert(10), 10);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 5);
        assert_eq!(part_one(&input), Some(35));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 5);
        assert_eq!(part_two(&input), Some(46));
    }
}
