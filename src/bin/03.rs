#![doc = include_str!("../puzzles/03.md")]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartNumber {
    value: u32,
    row: usize,
    first_col: usize,
    last_col: usize,
}

impl PartNumber {
    /// Returns true if the cell at `(row, col)` touches this number,
    /// diagonals included.
    pub fn is_adjacent_to(&self, row: usize, col: usize) -> bool {
        self.row.abs_diff(row) <= 1
            && (self.first_col.saturating_sub(1)..=self.last_col + 1).contains(&col)
    }
}

#[derive(Debug)]
struct Schematic {
    cells: grid::Grid<char>,
    numbers: Vec<PartNumber>,
}

impl Schematic {
    pub fn parse(input: &str) -> Self {
        let n_cols = input.lines().next().unwrap().len();

        let mut cells = grid::Grid::new(0, n_cols);
        let mut numbers = Vec::new();

        for (row, line) in input.lines().enumerate() {
            cells.push_row(line.chars().collect());

            let bytes = line.as_bytes();
            let mut col = 0;
            while col < bytes.len() {
                if bytes[col].is_ascii_digit() {
                    let first_col = col;
                    while col < bytes.len() && bytes[col].is_ascii_digit() {
                        col += 1;
                    }
                    numbers.push(PartNumber {
                        value: line[first_col..col].parse().unwrap(),
                        row,
                        first_col,
                        last_col: col - 1,
                    });
                } else {
                    col += 1;
                }
            }
        }

        Self { cells, numbers }
    }

    fn is_symbol(c: char) -> bool {
        c != '.' && !c.is_ascii_digit()
    }

    pub fn has_adjacent_symbol(&self, number: &PartNumber) -> bool {
        let first_row = number.row.saturating_sub(1);
        let first_col = number.first_col.saturating_sub(1);

        for row in first_row..=number.row + 1 {
            for col in first_col..=number.last_col + 1 {
                if let Some(&c) = self.cells.get(row, col) {
                    if Self::is_symbol(c) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// The gear ratio of the `*` at `(row, col)`, or `None` if it does not
    /// touch exactly two numbers.
    pub fn gear_ratio(&self, row: usize, col: usize) -> Option<u32> {
        let mut adjacent = self
            .numbers
            .iter()
            .filter(|number| number.is_adjacent_to(row, col));

        match (adjacent.next(), adjacent.next(), adjacent.next()) {
            (Some(a), Some(b), None) => Some(a.value * b.value),
            _ => None,
        }
    }

    pub fn gears(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.cells.rows()).flat_map(move |row| {
            (0..self.cells.cols()).filter_map(move |col| {
                if self.cells.get(row, col) == Some(&'*') {
                    self.gear_ratio(row, col)
                } else {
                    None
                }
            })
        })
    }
}

pub fn part_one(input: &str) -> Option<u32> {
    let schematic = Schematic::parse(input);

    Some(
        schematic
            .numbers
            .iter()
            .filter(|number| schematic.has_adjacent_symbol(number))
            .map(|number| number.value)
            .sum(),
    )
}

pub fn part_two(input: &str) -> Option<u32> {
    let schematic = Schematic::parse(input);
    Some(schematic.gears().sum())
}

fn main() {
    let input = &aoc2023::read_file("inputs", 3);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_between_two_numbers() {
        assert_eq!(part_two("10*20"), Some(200));
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 3);
        assert_eq!(part_one(&input), Some(4361));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 3);
        assert_eq!(part_two(&input), Some(467835));
    }
}
