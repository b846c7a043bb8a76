#![doc = include_str!("../puzzles/07.md")]

use itertools::Itertools;

/// A card, ordered by strength. Jokers are worth 1, below every other card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Card(u8);

const JOKER: Card = Card(1);

impl Card {
    pub fn from_char(c: char, jokers_wild: bool) -> Self {
        let value = match c {
            'A' => 14,
            'K' => 13,
            'Q' => 12,
            'J' if jokers_wild => 1,
            'J' => 11,
            'T' => 10,
            _ => c.to_digit(10).expect("invalid card") as u8,
        };
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    Pair,
    TwoPairs,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hand {
    cards: [Card; 5],
    bid: u64,
}

impl Hand {
    pub fn parse(line: &str, jokers_wild: bool) -> Self {
        let (cards, bid) = line.split_once(' ').expect("hand and bid");

        let cards: Vec<Card> = cards
            .chars()
            .map(|c| Card::from_char(c, jokers_wild))
            .collect();

        Self {
            cards: cards.try_into().expect("hands have five cards"),
            bid: bid.parse().expect("bids are integers"),
        }
    }

    /// Jokers join whichever group is already the largest; that always
    /// produces the strongest possible type.
    pub fn hand_type(&self) -> HandType {
        let jokers = self.cards.iter().filter(|&&card| card == JOKER).count();

        let mut groups: Vec<usize> = self
            .cards
            .iter()
            .filter(|&&card| card != JOKER)
            .counts()
            .into_values()
            .sorted()
            .rev()
            .collect();

        if groups.is_empty() {
            // Five jokers.
            groups.push(0);
        }
        groups[0] += jokers;

        match (groups[0], groups.get(1).copied().unwrap_or(0)) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPairs,
            (2, _) => HandType::Pair,
            _ => HandType::HighCard,
        }
    }

    /// Hands sort by type first, then card by card in input order.
    pub fn sort_key(&self) -> (HandType, [Card; 5]) {
        (self.hand_type(), self.cards)
    }
}

fn total_winnings(input: &str, jokers_wild: bool) -> u64 {
    let hands: Vec<Hand> = input
        .lines()
        .map(|line| Hand::parse(line, jokers_wild))
        .collect();

    hands
        .iter()
        .sorted_by_key(|hand| hand.sort_key())
        .enumerate()
        .map(|(index, hand)| (index as u64 + 1) * hand.bid)
        .sum()
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(total_winnings(input, false))
}

pub fn part_two(input: &str) -> Option<u64> {
    Some(total_winnings(input, true))
}

fn main() {
    let input = &aoc2023::read_file("inputs", 7);
    aoc2023::solve!(1, part_one, input);
    aoc2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_hand_type(cards: &str, jokers_wild: bool, expected: HandType) {
        let hand = Hand::parse(&format!("{cards} 0"), jokers_wild);
        assert_eq!(hand.hand_type(), expected);
    }

    #[test]
    fn test_hand_type() {
        assert_hand_type("32T3K", false, HandType::Pair);
        assert_hand_type("KK677", false, HandType::TwoPairs);
        assert_hand_type("T55J5", false, HandType::ThreeOfAKind);
        assert_hand_type("23332", false, HandType::FullHouse);
        assert_hand_type("AAAAA", false, HandType::FiveOfAKind);
    }

    #[test]
    fn test_hand_type_with_jokers() {
        assert_hand_type("T55J5", true, HandType::FourOfAKind);
        assert_hand_type("KTJJT", true, HandType::FourOfAKind);
        assert_hand_type("QQQJA", true, HandType::FourOfAKind);
        assert_hand_type("32T3K", true, HandType::Pair);
        assert_hand_type("JJJJJ", true, HandType::FiveOfAKind);
    }

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 7);
        assert_eq!(part_one(&input), Some(6440));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 7);
        assert_eq!(part_two(&input), Some(5905));
    }
}
