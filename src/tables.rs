//! Precomputed tables: starting-hand equities and per-street percentiles.
//!
//! Both are immutable once constructed. An [`crate::Engine`] holds them by
//! value and hands out shared references, so concurrent reads need no
//! synchronization.

use std::collections::HashMap;

use crate::error::Error;
use crate::game::{Game, Street};
use crate::mask::{canonical, FULL_DECK};

/// Entries for percent 0..=100.
pub const PERCENTILE_POINTS: usize = 101;

/// Percent → percentile rank, non-decreasing, all values in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct PercentileTable {
    values: [f64; PERCENTILE_POINTS],
}

impl PercentileTable {
    pub fn new(values: &[f64]) -> Result<Self, Error> {
        if values.len() != PERCENTILE_POINTS {
            return Err(Error::MalformedTable(format!(
                "percentile table needs {PERCENTILE_POINTS} entries, got {}",
                values.len()
            )));
        }
        if let Some(v) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(Error::MalformedTable(format!("percentile {v} outside [0, 1]")));
        }
        if let Some(k) = values.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::MalformedTable(format!(
                "percentile table decreases at {}%",
                k + 1
            )));
        }
        let mut table = [0.0; PERCENTILE_POINTS];
        table.copy_from_slice(values);
        Ok(Self { values: table })
    }

    /// Identity mapping: the percentile of p% equity is p/100.
    pub fn uniform() -> Self {
        let mut values = [0.0; PERCENTILE_POINTS];
        for (k, v) in values.iter_mut().enumerate() {
            *v = k as f64 / 100.0;
        }
        Self { values }
    }

    /// Empirical CDF of weighted equity samples, evaluated at every percent:
    /// entry k is the weight share of samples with equity ≤ k/100.
    pub fn from_weighted_samples(samples: &mut [(f64, f64)]) -> Result<Self, Error> {
        let total: f64 = samples.iter().map(|&(_, w)| w).sum();
        if samples.is_empty() || total <= 0.0 {
            return Err(Error::MalformedTable("no samples to build a percentile table".into()));
        }
        samples.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut values = [0.0; PERCENTILE_POINTS];
        let mut below = 0.0;
        let mut i = 0;
        for (k, v) in values.iter_mut().enumerate() {
            let threshold = k as f64 / 100.0;
            while i < samples.len() && samples[i].0 <= threshold {
                below += samples[i].1;
                i += 1;
            }
            *v = (below / total).min(1.0);
        }
        values[PERCENTILE_POINTS - 1] = 1.0;
        Ok(Self { values })
    }

    #[inline(always)]
    pub fn get(&self, percent: usize) -> f64 {
        self.values[percent]
    }

    pub fn values(&self) -> &[f64; PERCENTILE_POINTS] {
        &self.values
    }
}

/// Preflop equity vs a uniform random opponent, keyed by the canonical
/// (suit-isomorphic) hole mask.
#[derive(Clone, Debug, PartialEq)]
pub struct StartingHands {
    game: Game,
    equities: HashMap<u64, f64>,
}

impl StartingHands {
    /// Keys are canonicalized on the way in, so callers may pass any suit
    /// labeling of a hand.
    pub fn new(game: Game, entries: impl IntoIterator<Item = (u64, f64)>) -> Result<Self, Error> {
        let mut equities = HashMap::new();
        for (mask, equity) in entries {
            if mask & !FULL_DECK != 0 {
                return Err(Error::MalformedTable(format!(
                    "starting hand {mask:#x} sets bits outside the deck"
                )));
            }
            if mask.count_ones() as usize != game.hole_cards() {
                return Err(Error::MalformedTable(format!(
                    "starting hand {mask:#x} has {} cards, {game} needs {}",
                    mask.count_ones(),
                    game.hole_cards()
                )));
            }
            if !(0.0..=1.0).contains(&equity) {
                return Err(Error::MalformedTable(format!("equity {equity} outside [0, 1]")));
            }
            equities.insert(canonical(mask), equity);
        }
        Ok(Self { game, equities })
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn len(&self) -> usize {
        self.equities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equities.is_empty()
    }

    pub fn get(&self, hole: u64) -> Result<f64, Error> {
        let key = canonical(hole);
        self.equities
            .get(&key)
            .copied()
            .ok_or(Error::MissingStartingHand(key))
    }

    /// (canonical mask, equity) pairs in ascending mask order.
    pub fn entries(&self) -> Vec<(u64, f64)> {
        let mut out: Vec<(u64, f64)> = self.equities.iter().map(|(&m, &e)| (m, e)).collect();
        out.sort_unstable_by_key(|&(m, _)| m);
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tables {
    starting: StartingHands,
    percentiles: [PercentileTable; 4],
}

impl Tables {
    /// `percentiles` is indexed by [`Street::idx`]: preflop, flop, turn, river.
    pub fn new(starting: StartingHands, percentiles: [PercentileTable; 4]) -> Self {
        Self {
            starting,
            percentiles,
        }
    }

    pub fn game(&self) -> Game {
        self.starting.game()
    }

    pub fn starting(&self) -> &StartingHands {
        &self.starting
    }

    pub fn percentile(&self, street: Street) -> &PercentileTable {
        &self.percentiles[street.idx()]
    }
}

/// Source of the tables an engine is initialized with.
pub trait TableProvider {
    fn provide(&self, game: Game) -> Result<Tables, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards_str;
    use crate::mask::combine;

    fn mask(s: &str) -> u64 {
        combine(&parse_cards_str(s).unwrap()).unwrap()
    }

    #[test]
    fn percentile_table_validation() {
        assert!(PercentileTable::new(&[0.5; 100]).is_err());
        assert!(PercentileTable::new(&[1.5; 101]).is_err());
        let mut values = PercentileTable::uniform().values().to_vec();
        assert!(PercentileTable::new(&values).is_ok());
        values[40] = 0.1;
        assert!(matches!(PercentileTable::new(&values), Err(Error::MalformedTable(_))));
    }

    #[test]
    fn empirical_cdf_counts_weight_at_or_below_each_percent() {
        let mut samples = vec![(0.25, 1.0), (0.75, 3.0), (0.5, 0.0), (0.0, 0.0)];
        let t = PercentileTable::from_weighted_samples(&mut samples).unwrap();
        assert_eq!(t.get(0), 0.0);
        assert_eq!(t.get(24), 0.0);
        assert_eq!(t.get(25), 0.25);
        assert_eq!(t.get(74), 0.25);
        assert_eq!(t.get(75), 1.0);
        assert_eq!(t.get(100), 1.0);
        assert!(PercentileTable::from_weighted_samples(&mut []).is_err());
    }

    #[test]
    fn starting_hands_lookup_ignores_suit_labels() {
        let hands = StartingHands::new(Game::Holdem, [(mask("As Ks"), 0.67)]).unwrap();
        assert_eq!(hands.get(mask("Ah Kh")).unwrap(), 0.67);
        assert!(matches!(hands.get(mask("Ah Kd")), Err(Error::MissingStartingHand(_))));
        assert!(StartingHands::new(Game::Omaha, [(mask("As Ks"), 0.5)]).is_err());
        assert!(!hands.is_empty());
        assert!(StartingHands::new(Game::Holdem, std::iter::empty()).unwrap().is_empty());
    }

    #[test]
    fn starting_hands_reject_bits_past_the_deck() {
        // two cards, but one of them is bit 60
        let stray = 1u64 | 1 << 60;
        assert_eq!(stray.count_ones(), 2);
        assert!(matches!(
            StartingHands::new(Game::Holdem, [(stray, 0.5)]),
            Err(Error::MalformedTable(_))
        ));
    }
}
