//! Hand evaluation over the 4×13 bitboard.
//!
//! [`evaluate`] scores any 5..7 card bitboard by computing multiplicity masks
//! once and walking the categories from strongest to weakest. The
//! [`Evaluator`] trait is what the simulation depends on: it scores a hole
//! mask against a complete five-card board under some best-hand rule.

use crate::bitboard::BitBoard4x13;
use crate::game::Game;
use crate::lut13::{hibit13, pop_high13, straight_high13};
use crate::score::{Category, Strength};

pub trait Evaluator {
    /// Strength of the best hand `hole` can make with a five-card `board`.
    fn strength(&self, hole: u64, board: u64) -> Strength;
}

#[inline(always)]
fn top_ranks(mut m: u16, n: usize) -> [u8; 5] {
    let mut out = [0u8; 5];
    for slot in out.iter_mut().take(n) {
        *slot = pop_high13(&mut m);
    }
    out
}

#[inline(always)]
fn without(m: u16, rank: u8) -> u16 {
    m & !(1u16 << rank)
}

pub fn evaluate(hand: &BitBoard4x13) -> Strength {
    let ranks = hand.ranks_any();
    let ge2 = hand.ge2();
    let ge3 = hand.ge3();
    let ge4 = hand.ge4();
    let flush = hand.flush_ranks();

    if let Some(top) = flush.and_then(straight_high13) {
        return Strength::pack(Category::StraightFlush, [top, 0, 0, 0, 0]);
    }

    if ge4 != 0 {
        let quad = hibit13(ge4);
        let kicker = top_ranks(without(ranks, quad), 1)[0];
        return Strength::pack(Category::Quads, [quad, kicker, 0, 0, 0]);
    }

    // quads are gone, so every ge3 rank is exactly trips
    if ge3 != 0 {
        let trips = hibit13(ge3);
        let pair = without(ge2, trips);
        if pair != 0 {
            return Strength::pack(Category::FullHouse, [trips, hibit13(pair), 0, 0, 0]);
        }
    }

    if let Some(suited) = flush {
        return Strength::pack(Category::Flush, top_ranks(suited, 5));
    }

    if let Some(top) = straight_high13(ranks) {
        return Strength::pack(Category::Straight, [top, 0, 0, 0, 0]);
    }

    if ge3 != 0 {
        let trips = hibit13(ge3);
        let k = top_ranks(without(ranks, trips), 2);
        return Strength::pack(Category::Trips, [trips, k[0], k[1], 0, 0]);
    }

    if ge2.count_ones() >= 2 {
        let p1 = hibit13(ge2);
        let p2 = hibit13(without(ge2, p1));
        let k = top_ranks(without(without(ranks, p1), p2), 1);
        return Strength::pack(Category::TwoPair, [p1, p2, k[0], 0, 0]);
    }

    if ge2 != 0 {
        let pair = hibit13(ge2);
        let k = top_ranks(without(ranks, pair), 3);
        return Strength::pack(Category::OnePair, [pair, k[0], k[1], k[2], 0]);
    }

    Strength::pack(Category::HighCard, top_ranks(ranks, 5))
}

#[inline(always)]
pub fn evaluate_mask(mask: u64) -> Strength {
    evaluate(&BitBoard4x13::from_mask(mask))
}

/// Single-card masks of `mask`, lowest first.
#[inline(always)]
fn singles(mut mask: u64, out: &mut [u64; 5]) -> usize {
    let mut n = 0;
    while mask != 0 && n < out.len() {
        out[n] = mask & mask.wrapping_neg();
        mask &= mask - 1;
        n += 1;
    }
    n
}

/// Best Omaha hand: exactly two of the four hole cards with exactly three of
/// the five board cards.
pub fn evaluate_omaha(hole: u64, board: u64) -> Strength {
    let mut h = [0u64; 5];
    let mut b = [0u64; 5];
    let nh = singles(hole, &mut h);
    let nb = singles(board, &mut b);

    let mut triples = [0u64; 10];
    let mut nt = 0;
    for i in 0..nb {
        for j in (i + 1)..nb {
            for l in (j + 1)..nb {
                triples[nt] = b[i] | b[j] | b[l];
                nt += 1;
            }
        }
    }

    let mut best = Strength::default();
    for i in 0..nh {
        for j in (i + 1)..nh {
            let pair = h[i] | h[j];
            for &t in &triples[..nt] {
                best = best.max(evaluate_mask(pair | t));
            }
        }
    }
    best
}

impl Evaluator for Game {
    #[inline]
    fn strength(&self, hole: u64, board: u64) -> Strength {
        match self {
            Game::Holdem => evaluate_mask(hole | board),
            Game::Omaha => evaluate_omaha(hole, board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards_str;
    use crate::mask::combine;

    fn mask(s: &str) -> u64 {
        combine(&parse_cards_str(s).unwrap()).unwrap()
    }

    fn eval(s: &str) -> Strength {
        evaluate_mask(mask(s))
    }

    #[test]
    fn categories_basic() {
        assert_eq!(eval("Ts Js Qs Ks As 2h 3d").category(), Category::StraightFlush);
        assert_eq!(eval("2c 2d 2h 2s Ac Kh Qd").category(), Category::Quads);
        assert_eq!(eval("9c 9d 9h 4s 4c Kh 2d").category(), Category::FullHouse);
        assert_eq!(eval("2h 7h 9h Jh Kh Kc Kd").category(), Category::Flush);
        assert_eq!(eval("5c 6d 7h 8s 9c Kh Kd").category(), Category::Straight);
        assert_eq!(eval("9c 9d 9h 4s 3c Kh 2d").category(), Category::Trips);
        assert_eq!(eval("9c 9d 4h 4s 3c Kh 2d").category(), Category::TwoPair);
        assert_eq!(eval("9c 9d 5h 4s 3c Kh Jd").category(), Category::OnePair);
        assert_eq!(eval("9c Td 5h 4s 3c Kh Jd").category(), Category::HighCard);
    }

    #[test]
    fn wheel_is_five_high() {
        let wheel = eval("Ac 2d 3h 4s 5c");
        assert_eq!(wheel.category(), Category::Straight);
        assert_eq!(wheel.ranks()[0], 3);
        assert!(eval("2c 3d 4h 5s 6c") > wheel);
    }

    #[test]
    fn two_trips_make_full_house_with_lower_trips_as_pair() {
        let s = eval("Kc Kd Kh 5s 5c 5h 2d");
        assert_eq!(s.category(), Category::FullHouse);
        assert_eq!(s.ranks()[..2], [11, 3]);
    }

    #[test]
    fn kickers_break_ties() {
        assert!(eval("Ac Ad Kh 7s 3c 2h 4d") > eval("Ac Ad Qh 7s 3c 2h 4d"));
        assert_eq!(eval("Ac Ad Kh 7s 3c"), eval("Ah As Kd 7c 3d"));
    }

    #[test]
    fn holdem_uses_best_five_of_seven() {
        let board = mask("Ah Kh Qh Jh 2c");
        assert_eq!(Game::Holdem.strength(mask("Th 3d"), board).category(), Category::StraightFlush);
    }

    #[test]
    fn omaha_requires_exactly_two_hole_cards() {
        // four hearts on board plus one heart in hand is not an Omaha flush
        let board = mask("2h 5h 9h Jh Kc");
        let hole = mask("Ah 3c 3d 7s");
        assert_eq!(Game::Holdem.strength(hole & mask("Ah 3c"), board).category(), Category::Flush);
        assert_eq!(Game::Omaha.strength(hole, board).category(), Category::OnePair);

        // quads in hand play only as a pair
        let quads = mask("As Ac Ad Ah");
        assert_eq!(Game::Omaha.strength(quads, mask("2c 7d 9h Js 4s")).category(), Category::OnePair);
    }

    #[test]
    fn omaha_finds_best_combination() {
        let board = mask("Qd 5s Ac 9c 5h");
        // As Tc with Ac 5s 5h: aces and fives, ten kicker
        let mine = Game::Omaha.strength(mask("Tc As 6s 8h"), board);
        assert_eq!(mine.category(), Category::TwoPair);
        assert_eq!(mine.ranks()[..3], [12, 3, 8]);
        // Kc 7c + Ac 9c 5x is no flush (only two board clubs); 5d makes trips
        let theirs = Game::Omaha.strength(mask("Kc 7c 5d Jh"), board);
        assert_eq!(theirs.category(), Category::Trips);
        assert!(theirs > mine);
    }
}
