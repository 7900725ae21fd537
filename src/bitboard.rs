//! 4×13 bitboard: the evaluator's view of a hand mask, one 13-bit rank set
//! per suit.

pub const MASK13: u16 = (1u16 << 13) - 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct BitBoard4x13 {
    suits: [u16; 4],
}

impl BitBoard4x13 {
    /// Split a 52-bit hand mask into its four suit slabs.
    #[inline(always)]
    pub const fn from_mask(mask: u64) -> Self {
        Self {
            suits: [
                (mask & MASK13 as u64) as u16,
                ((mask >> 13) & MASK13 as u64) as u16,
                ((mask >> 26) & MASK13 as u64) as u16,
                ((mask >> 39) & MASK13 as u64) as u16,
            ],
        }
    }

    #[inline(always)]
    pub const fn suits_array(&self) -> &[u16; 4] {
        &self.suits
    }

    /// Ranks present in any suit.
    #[inline(always)]
    pub fn ranks_any(&self) -> u16 {
        self.suits[0] | self.suits[1] | self.suits[2] | self.suits[3]
    }

    /// Ranks held at least twice.
    #[inline(always)]
    pub fn ge2(&self) -> u16 {
        let [h0, h1, h2, h3] = self.suits;
        (h0 & h1) | (h0 & h2) | (h0 & h3) | (h1 & h2) | (h1 & h3) | (h2 & h3)
    }

    /// Ranks held at least three times.
    #[inline(always)]
    pub fn ge3(&self) -> u16 {
        let [h0, h1, h2, h3] = self.suits;
        (h0 & h1 & h2) | (h0 & h1 & h3) | (h0 & h2 & h3) | (h1 & h2 & h3)
    }

    #[inline(always)]
    pub fn ge4(&self) -> u16 {
        self.suits[0] & self.suits[1] & self.suits[2] & self.suits[3]
    }

    /// Rank set of the first suit holding five or more cards. A hand of at
    /// most nine cards can have only one such suit.
    #[inline(always)]
    pub fn flush_ranks(&self) -> Option<u16> {
        self.suits.iter().copied().find(|s| s.count_ones() >= 5)
    }
}
