//! The undealt part of the deck: enumeration and sampling of completions.

use rand::Rng;

use crate::mask::{ids, FULL_DECK};

/// Largest subset the enumerator draws at once (a full board).
pub const MAX_DRAW: usize = 5;

/// Cards not present in `used`, as ids in ascending order.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [u8; 52],
    len: usize,
}

impl Deck {
    pub fn remaining(used: u64) -> Self {
        let mut cards = [0u8; 52];
        let mut len = 0;
        for id in ids(FULL_DECK & !used) {
            cards[len] = id;
            len += 1;
        }
        Self { cards, len }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.cards[..self.len]
    }

    /// Call `f` with the mask of every `k`-card subset, in lexicographic
    /// order of positions. `k = 0` yields the empty mask once.
    pub fn for_each_combination(&self, k: usize, mut f: impl FnMut(u64)) {
        assert!(k <= MAX_DRAW, "cannot draw {k} cards at once");
        let cards = self.as_slice();
        let n = cards.len();
        if k > n {
            return;
        }
        let mut pos = [0usize; MAX_DRAW];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }
        loop {
            f(pos[..k].iter().fold(0u64, |m, &i| m | 1u64 << cards[i]));

            // rightmost position that can still advance
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                return;
            };
            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }

    /// Draw `k` distinct cards uniformly at random with a partial
    /// Fisher-Yates shuffle and return them. The deck keeps its card set;
    /// only the order changes, so repeated draws are independent.
    #[inline]
    pub fn draw<R: Rng>(&mut self, rng: &mut R, k: usize) -> &[u8] {
        debug_assert!(k <= self.len);
        for i in 0..k {
            let j = rng.gen_range(i..self.len);
            self.cards.swap(i, j);
        }
        &self.cards[..k]
    }
}

/// Mask of a list of card ids.
#[inline(always)]
pub fn mask_of(cards: &[u8]) -> u64 {
    cards.iter().fold(0u64, |m, &id| m | 1u64 << id)
}

/// n choose k.
pub fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}
