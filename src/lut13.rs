//! Lookups over 13-bit rank masks (0..8191).
//!
//! - STRAIGHT_HIGH13[mask] -> highest straight's top rank (0..12), or -1.
//!   The wheel A2345 tops out at the Five (3).
//! - hibit13 / pop_high13 pick ranks off a mask from the top down.

use crate::bitboard::MASK13;

const N: usize = 1 << 13;
const WHEEL: u16 = (1 << 12) | 0b1111;
const RUN5: u16 = 0b11111;

const fn straight_high(mask: u16) -> i8 {
    let mut top: i8 = 12;
    while top >= 4 {
        let window = RUN5 << (top - 4) as u16;
        if mask & window == window {
            return top;
        }
        top -= 1;
    }
    if mask & WHEEL == WHEEL {
        3
    } else {
        -1
    }
}

const fn build_straight_high13() -> [i8; N] {
    let mut arr = [-1i8; N];
    let mut m = 0usize;
    while m < N {
        arr[m] = straight_high(m as u16);
        m += 1;
    }
    arr
}

pub const STRAIGHT_HIGH13: [i8; N] = build_straight_high13();

#[inline(always)]
pub fn straight_high13(mask: u16) -> Option<u8> {
    match STRAIGHT_HIGH13[(mask & MASK13) as usize] {
        -1 => None,
        top => Some(top as u8),
    }
}

/// Highest rank index in a non-empty mask.
#[inline(always)]
pub fn hibit13(mask: u16) -> u8 {
    debug_assert!(mask & MASK13 != 0);
    (15 - (mask & MASK13).leading_zeros()) as u8
}

/// Remove and return the highest rank of `mask`, or 0 once it is empty
/// (unused score slots are zero).
#[inline(always)]
pub fn pop_high13(mask: &mut u16) -> u8 {
    if *mask == 0 {
        return 0;
    }
    let r = hibit13(*mask);
    *mask &= !(1u16 << r);
    r
}
