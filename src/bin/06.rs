#![doc = include_str!("../puzzles/06.md")]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Race {
    time: u64,
    distance: u64,
}

impl Race {
    #[inline]
    pub fn beats_record(&self, hold: u64) -> bool {
        hold * (self.time - hold) > self.distance
    }

    /// Counts the hold times that beat the record, scanning in from both
    /// ends of the race.
    pub fn ways_to_win(&self) -> u64 {
        let min_hold = (1..=self.time).find(|&hold| self.beats_record(hold));
        let max_hold = (1..=self.time).rev().find(|&hold| self.beats_record(hold));

        match (min_hold, max_hold) {
            (Some(min), Some(max)) => max - min + 1,
            _ => 0,
        }
    }
}

fn numbers_after_colon(line: &str) -> impl Iterator<Item = &str> {
    line.split(':')
        .nth(1)
        .expect("line has a label and numbers")
        .split_whitespace()
}

fn parse_races(input: &str) -> Vec<Race> {
    let mut lines = input.lines();
    let times = numbers_after_colon(lines.next().unwrap());
    let distances = numbers_after_colon(lines.next().unwrap());

    times
        .zip(distances)
        .map(|(time, distance)| Race {
            time: time.parse().unwrap(),
            distance: distance.parse().unwrap(),
        })
        .collect()
}

/// Reads the lines with the kerning fixed: one race, digits joined.
fn parse_single_race(input: &str) -> Race {
    let mut lines = input.lines();
    let time: String = numbers_after_colon(lines.next().unwrap()).collect();
    let distance: String = numbers_after_colon(lines.next().unwrap()).collect();

    Race {
        time: time.parse().unwrap(),
        distance: distance.parse().unwrap(),
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(
        parse_races(input)
            .iter()
            .map(|race| race.ways_to_win())
            .product(),
    )
}

pub fn part_two(input: &str) -> Option<u64> {
    Some(parse_single_race(input).ways_to_win())
}

fn main() {
    let input = &aoc2023::read_file("inputs", 6);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ways_to_win() {
        assert_eq!(
            Race {
                time: 7,
                distance: 9
            }
            .ways_to_win(),
            4
        );
        assert_eq!(
            Race {
                time: 30,
                distance: 200
            }
            .ways_to_win(),
            9
        );
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 6);
        assert_eq!(part_one(&input), Some(288));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 6);
        assert_eq!(part_two(&input), Some(71503));
    }
}
