#![doc = include_str!("../puzzles/01.md")]

/// The spelled-out digits, in value order.
const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Returns the digit starting at byte `index` of `line`, if any.
fn digit_at(line: &str, index: usize, include_spelled: bool) -> Option<u32> {
    let rest = &line[index..];
    let first = rest.chars().next()?;

    if let Some(value) = first.to_digit(10) {
        return Some(value);
    }

    if include_spelled {
        for (i, word) in SPELLED_DIGITS.iter().enumerate() {
            if rest.starts_with(word) {
                return Some(i as u32 + 1);
            }
        }
    }

    None
}

/// The two-digit number formed by the first and last digit on the line.
///
/// Scanning every position (rather than replacing words) keeps overlapping
/// spellings like `zoneight` intact: it contains both a 1 and an 8.
fn calibration_value(line: &str, include_spelled: bool) -> u32 {
    let mut digits = (0..line.len()).filter_map(|index| digit_at(line, index, include_spelled));

    let first = digits.next().expect("every line has at least one digit");
    let last = digits.last().unwrap_or(first);

    first * 10 + last
}

pub fn part_one(input: &str) -> Option<u32> {
    Some(
        input
            .lines()
            .map(|line| calibration_value(line, false))
            .sum(),
    )
}

pub fn part_two(input: &str) -> Option<u32> {
    Some(
        input
            .lines()
            .map(|line| calibration_value(line, true))
            .sum(),
    )
}

fn main() {
    let input = &aoc2023::read_file("inputs", 1);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_spellings() {
        assert_eq!(calibration_value("zoneight234", true), 14);
        assert_eq!(calibration_value("eightwothree", true), 83);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 1);
        assert_eq!(part_one(&input), Some(142));
    }

    #[test]
    fn test_part_two() {
        // Part two comes with its own example document.
        let input = "two1nine\n\
                     eightwothree\n\
                     abcone2threexyz\n\
                     xtwone3four\n\
                     4nineeightseven2\n\
                     zoneight234\n\
                     7pqrstsixteen";
        assert_eq!(part_two(input), Some(281));
    }
}
