//! Simulation worker: one slice of an equity query.
//!
//! Exhaustive mode walks every (runout, opponent hand) pair of the undealt
//! deck in a fixed order and keeps the pairs whose running index is
//! congruent to the worker's index modulo the worker count. The slices of
//! all workers are disjoint and together cover the space, with no
//! coordination between them.
//!
//! Sampling mode draws `trials` independent deals with the worker's own RNG.

use rand::rngs::SmallRng;

use crate::card::Card;
use crate::deck::{choose, mask_of, Deck};
use crate::error::Error;
use crate::evaluator::Evaluator;
use crate::game::{Game, Street};
use crate::mask::combine;
use crate::outcome::{Outcome, Outcomes};
use crate::score::Strength;

/// A validated query: own hole cards and known board as disjoint masks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Deal {
    hole: u64,
    board: u64,
}

impl Deal {
    /// Checks hand size against the game, board size against the streets,
    /// and that no card appears twice anywhere.
    pub fn new(game: Game, hand: &[Card], board: &[Card]) -> Result<Deal, Error> {
        if hand.len() != game.hole_cards() {
            return Err(Error::InvalidHandSize {
                expected: game.hole_cards(),
                found: hand.len(),
            });
        }
        if Street::from_board_len(board.len()).is_none() {
            return Err(Error::InvalidBoardSize(board.len()));
        }
        let all: Vec<Card> = hand.iter().chain(board).copied().collect();
        combine(&all)?;
        Ok(Deal {
            hole: combine(hand)?,
            board: combine(board)?,
        })
    }

    /// Masks already known to be disjoint, with a valid hole count and a
    /// 0, 3, 4 or 5 card board.
    pub(crate) fn from_masks(hole: u64, board: u64) -> Deal {
        debug_assert!(hole & board == 0);
        debug_assert!(board.count_ones() <= 5);
        Deal { hole, board }
    }

    #[inline(always)]
    pub fn hole(&self) -> u64 {
        self.hole
    }

    #[inline(always)]
    pub fn board(&self) -> u64 {
        self.board
    }

    #[inline(always)]
    pub fn hole_len(&self) -> usize {
        self.hole.count_ones() as usize
    }

    /// Board cards still to come.
    #[inline(always)]
    pub fn missing(&self) -> usize {
        5 - self.board.count_ones() as usize
    }

    /// Number of (runout, opponent hand) pairs exhaustive mode visits.
    pub fn exhaustive_trials(&self) -> u64 {
        let undealt = 52 - (self.hole | self.board).count_ones() as u64;
        let missing = self.missing() as u64;
        choose(undealt, missing) * choose(undealt - missing, self.hole_len() as u64)
    }
}

pub enum Mode {
    Exhaustive,
    Sampling { trials: u32, rng: SmallRng },
}

pub struct Worker<'a, E> {
    index: usize,
    workers: usize,
    evaluator: &'a E,
    deal: Deal,
    mode: Mode,
}

#[inline(always)]
fn classify(mine: Strength, theirs: Strength) -> Outcome {
    if mine > theirs {
        Outcome::Win
    } else if mine < theirs {
        Outcome::Loss
    } else {
        Outcome::Split
    }
}

impl<'a, E: Evaluator> Worker<'a, E> {
    pub fn new(index: usize, workers: usize, evaluator: &'a E, deal: Deal, mode: Mode) -> Self {
        debug_assert!(index < workers);
        Self {
            index,
            workers,
            evaluator,
            deal,
            mode,
        }
    }

    pub fn run(self) -> Outcomes {
        let Worker {
            index,
            workers,
            evaluator,
            deal,
            mode,
        } = self;
        match mode {
            Mode::Exhaustive => enumerate(index, workers, evaluator, deal),
            Mode::Sampling { trials, mut rng } => sample(evaluator, deal, trials, &mut rng),
        }
    }
}

fn enumerate<E: Evaluator>(index: usize, workers: usize, evaluator: &E, deal: Deal) -> Outcomes {
    let Deal { hole, board } = deal;
    let k = deal.hole_len();
    let workers = workers as u64;
    let index = index as u64;

    let mut counts = Outcomes::default();
    let mut position = 0u64;
    Deck::remaining(hole | board).for_each_combination(deal.missing(), |runout| {
        let full = board | runout;
        let mut mine = None;
        Deck::remaining(hole | full).for_each_combination(k, |opponent| {
            if position % workers == index {
                let mine = *mine.get_or_insert_with(|| evaluator.strength(hole, full));
                counts.record(classify(mine, evaluator.strength(opponent, full)));
            }
            position += 1;
        });
    });
    counts
}

fn sample<E: Evaluator>(evaluator: &E, deal: Deal, trials: u32, rng: &mut SmallRng) -> Outcomes {
    let Deal { hole, board } = deal;
    let missing = deal.missing();
    let k = deal.hole_len();

    let mut counts = Outcomes::default();
    let mut deck = Deck::remaining(hole | board);
    for _ in 0..trials {
        let drawn = deck.draw(rng, missing + k);
        let full = board | mask_of(&drawn[..missing]);
        let opponent = mask_of(&drawn[missing..]);
        let mine = evaluator.strength(hole, full);
        counts.record(classify(mine, evaluator.strength(opponent, full)));
    }
    counts
}
