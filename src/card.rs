//! Card types (Suit/Rank/Card) and their two-character token form.
//!
//! A card's id is `suit * 13 + rank`, which is also its bit position in a
//! 64-bit hand mask (see [`crate::mask`]).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A playing card suit.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn from_u8(x: u8) -> Suit {
        match x & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    pub const fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// A playing card rank, stored as 0..12 (Two..Ace).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    const CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8
    }

    /// Convert 0..12 to a Rank (Two..Ace). Input is assumed valid.
    #[inline(always)]
    pub const fn from_u8(x: u8) -> Rank {
        match x {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        Self::CHARS
            .iter()
            .position(|&r| r == c)
            .map(|i| Rank::from_u8(i as u8))
    }

    pub const fn to_char(self) -> char {
        Self::CHARS[self as usize]
    }
}

/// A card = suit + rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[inline(always)]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// suit = id / 13, rank = id % 13. Input assumed < 52.
    #[inline(always)]
    pub const fn from_id(id: u8) -> Self {
        Self {
            suit: Suit::from_u8(id / 13),
            rank: Rank::from_u8(id % 13),
        }
    }

    #[inline(always)]
    pub const fn id(self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8)
    }

    /// The single bit this card occupies in a hand mask.
    #[inline(always)]
    pub const fn bit(self) -> u64 {
        1u64 << self.id()
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCardToken(token.to_string());
        let mut chars = token.chars();
        let rank = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let suit = chars.next().and_then(Suit::from_char).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Card::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// Parse a slice of tokens such as `["Qd", "5s"]`.
pub fn parse_cards(tokens: &[&str]) -> Result<Vec<Card>, Error> {
    tokens.iter().map(|t| t.parse()).collect()
}

/// Parse a whitespace separated list such as `"Qd 5s Ac 9c 5h"`.
pub fn parse_cards_str(s: &str) -> Result<Vec<Card>, Error> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip_for_every_card() {
        for id in 0u8..52 {
            let card = Card::from_id(id);
            let parsed: Card = card.to_string().parse().unwrap();
            assert_eq!(parsed, card);
            assert_eq!(parsed.id(), id);
        }
    }

    #[test]
    fn parses_known_tokens() {
        let ace: Card = "As".parse().unwrap();
        assert_eq!(ace, Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(ace.id(), 51);

        let ten: Card = "Tc".parse().unwrap();
        assert_eq!(ten, Card::new(Suit::Clubs, Rank::Ten));
        assert_eq!(ten.bit(), 1 << 8);
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "A", "1s", "Ax", "as", "AsK", "10s", "sA"] {
            let err = bad.parse::<Card>().unwrap_err();
            assert!(matches!(err, Error::InvalidCardToken(ref t) if t == bad), "{bad}");
        }
    }

    #[test]
    fn parses_space_separated_lists() {
        let cards = parse_cards_str("Qd 5s  Ac").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::new(Suit::Clubs, Rank::Ace));
        assert!(parse_cards(&["Qd", "zz"]).is_err());
    }
}
