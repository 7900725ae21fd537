//! Card codec: 64-bit hand masks.
//!
//! Bit `suit * 13 + rank` stands for one card, so a hand, a board, or the
//! whole used part of the deck is a single `u64`. Each suit owns a contiguous
//! 13-bit slab, which makes suit permutations cheap shifts.

use crate::bitboard::MASK13;
use crate::card::Card;
use crate::error::Error;

/// All 52 card bits.
pub const FULL_DECK: u64 = (1u64 << 52) - 1;

/// Encode a single token (`"As"`) into its one-bit mask.
pub fn encode(token: &str) -> Result<u64, Error> {
    token.parse::<Card>().map(Card::bit)
}

/// Union of card bits. The first card seen a second time is reported.
pub fn combine(cards: &[Card]) -> Result<u64, Error> {
    let mut mask = 0u64;
    for &c in cards {
        if mask & c.bit() != 0 {
            return Err(Error::DuplicateCard(c));
        }
        mask |= c.bit();
    }
    Ok(mask)
}

/// Iterate the ids (bit positions) of a mask in ascending order.
pub fn ids(mut mask: u64) -> impl Iterator<Item = u8> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let id = mask.trailing_zeros() as u8;
        mask &= mask - 1;
        Some(id)
    })
}

/// All 24 orderings of the four suits.
const SUIT_PERMUTATIONS: [[u8; 4]; 24] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 1, 3], [0, 2, 3, 1], [0, 3, 1, 2], [0, 3, 2, 1],
    [1, 0, 2, 3], [1, 0, 3, 2], [1, 2, 0, 3], [1, 2, 3, 0], [1, 3, 0, 2], [1, 3, 2, 0],
    [2, 0, 1, 3], [2, 0, 3, 1], [2, 1, 0, 3], [2, 1, 3, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [3, 1, 0, 2], [3, 1, 2, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

#[inline(always)]
fn permute(mask: u64, perm: &[u8; 4]) -> u64 {
    let mut out = 0u64;
    for (suit, &target) in perm.iter().enumerate() {
        let slab = (mask >> (13 * suit)) & MASK13 as u64;
        out |= slab << (13 * target as u32);
    }
    out
}

/// Smallest mask among all suit relabelings. Two hands share a canonical
/// mask iff they are identical up to renaming suits, and therefore have the
/// same preflop equity against a uniform opponent.
pub fn canonical(mask: u64) -> u64 {
    SUIT_PERMUTATIONS
        .iter()
        .map(|p| permute(mask, p))
        .min()
        .unwrap_or(mask)
}
