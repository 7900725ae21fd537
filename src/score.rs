//! Packed, totally ordered hand strength.
//!
//! bits 20..23 : category, higher is better
//! bits 16..19 : r0
//! bits 12..15 : r1
//! bits  8..11 : r2
//! bits  4..7  : r3
//! bits  0..3  : r4
//!
//! Rank slots hold 0..12 indices, most significant first; unused slots are 0.
//! Comparing the raw `u32` therefore compares hands.

use std::fmt;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Strength(pub u32);

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl Category {
    const fn from_u8(x: u8) -> Category {
        match x {
            0 => Category::HighCard,
            1 => Category::OnePair,
            2 => Category::TwoPair,
            3 => Category::Trips,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::Quads,
            _ => Category::StraightFlush,
        }
    }
}

impl Strength {
    #[inline(always)]
    pub fn pack(cat: Category, ranks: [u8; 5]) -> Strength {
        let slots = ranks
            .iter()
            .fold(0u32, |acc, &r| (acc << 4) | (r as u32 & 0xF));
        Strength(((cat as u32) << 20) | slots)
    }

    pub fn category(self) -> Category {
        Category::from_u8(((self.0 >> 20) & 0xF) as u8)
    }

    /// Rank slots r0..r4.
    pub fn ranks(self) -> [u8; 5] {
        [16, 12, 8, 4, 0].map(|shift| ((self.0 >> shift) & 0xF) as u8)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::Trips => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::Quads => "four of a kind",
            Category::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}
