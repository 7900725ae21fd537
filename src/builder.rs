//! Table provider that builds everything by simulation.
//!
//! - Starting hands: every suit-isomorphism class of hole cards, equity
//!   sampled against a random opponent on a random board.
//! - Preflop percentiles: the exact class-weighted distribution of those
//!   equities.
//! - Flop/turn/river percentiles: empirical distribution of sampled equities
//!   of random (hand, board) deals for that street.
//!
//! Every unit of work has its own RNG derived from `seed` and its position,
//! so the result does not depend on the `parallel` feature or thread count.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::deck::{mask_of, Deck};
use crate::error::Error;
use crate::game::{Game, Street};
use crate::mask::canonical;
use crate::tables::{PercentileTable, StartingHands, TableProvider, Tables};
use crate::worker::{Deal, Mode, Worker};

/// Build parameters. Cost is dominated by the starting-hand pass:
/// `classes × preflop_trials` sampled deals, with 16,432 Omaha classes
/// (169 for hold'em) and 120 five-card evaluations per Omaha deal. The
/// defaults keep an Omaha build around 8M deals; enable `parallel` for it,
/// or build once and reload through [`crate::TableFile`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimulatedTables {
    /// Sampled deals per starting-hand class.
    pub preflop_trials: u32,
    /// Random (hand, board) deals per postflop street.
    pub percentile_samples: usize,
    /// Sampled deals behind each of those equities.
    pub percentile_trials: u32,
    pub seed: u64,
}

impl Default for SimulatedTables {
    fn default() -> Self {
        Self {
            preflop_trials: 500,
            percentile_samples: 2_000,
            percentile_trials: 200,
            seed: 0x5EED,
        }
    }
}

/// Canonical hole masks with the number of concrete hands in each class,
/// in ascending mask order.
pub fn starting_classes(game: Game) -> Vec<(u64, u64)> {
    let mut classes: HashMap<u64, u64> = HashMap::new();
    Deck::remaining(0).for_each_combination(game.hole_cards(), |hole| {
        *classes.entry(canonical(hole)).or_default() += 1;
    });
    let mut out: Vec<(u64, u64)> = classes.into_iter().collect();
    out.sort_unstable_by_key(|&(m, _)| m);
    out
}

fn rng_for(seed: u64, stream: u64, i: usize) -> SmallRng {
    let key = (stream << 40) ^ i as u64;
    SmallRng::seed_from_u64(seed ^ key.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[cfg(feature = "parallel")]
fn map_indexed<T, F>(n: usize, f: F) -> Result<Vec<T>, Error>
where
    T: Send,
    F: Fn(usize) -> Result<T, Error> + Sync + Send,
{
    use rayon::prelude::*;
    (0..n).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_indexed<T, F>(n: usize, f: F) -> Result<Vec<T>, Error>
where
    F: Fn(usize) -> Result<T, Error>,
{
    (0..n).map(f).collect()
}

impl SimulatedTables {
    fn sampled_equity(&self, game: Game, deal: Deal, trials: u32, rng: SmallRng) -> Result<f64, Error> {
        Worker::new(0, 1, &game, deal, Mode::Sampling { trials, rng })
            .run()
            .equity()
    }

    fn starting_hands(&self, game: Game, classes: &[(u64, u64)]) -> Result<Vec<f64>, Error> {
        map_indexed(classes.len(), |i| {
            let deal = Deal::from_masks(classes[i].0, 0);
            self.sampled_equity(game, deal, self.preflop_trials, rng_for(self.seed, 0, i))
        })
    }

    fn street_percentiles(&self, game: Game, street: Street) -> Result<PercentileTable, Error> {
        let k = game.hole_cards();
        let n = street.board_len();
        let equities = map_indexed(self.percentile_samples, |i| {
            let mut rng = rng_for(self.seed, 1 + street.idx() as u64, i);
            let mut deck = Deck::remaining(0);
            let drawn = deck.draw(&mut rng, k + n);
            let deal = Deal::from_masks(mask_of(&drawn[..k]), mask_of(&drawn[k..]));
            self.sampled_equity(game, deal, self.percentile_trials, rng)
        })?;
        let mut samples: Vec<(f64, f64)> = equities.into_iter().map(|e| (e, 1.0)).collect();
        PercentileTable::from_weighted_samples(&mut samples)
    }
}

impl TableProvider for SimulatedTables {
    fn provide(&self, game: Game) -> Result<Tables, Error> {
        let classes = starting_classes(game);
        log::info!("{:<32}{:<32}", "simulating starting hands", classes.len());
        let equities = self.starting_hands(game, &classes)?;

        let mut weighted: Vec<(f64, f64)> = equities
            .iter()
            .zip(&classes)
            .map(|(&e, &(_, count))| (e, count as f64))
            .collect();
        let preflop = PercentileTable::from_weighted_samples(&mut weighted)?;
        let starting = StartingHands::new(game, classes.iter().map(|&(m, _)| m).zip(equities))?;

        let mut postflop = Vec::with_capacity(3);
        for street in [Street::Flop, Street::Turn, Street::River] {
            log::info!("{:<32}{:<32}", "simulating percentiles", street);
            postflop.push(self.street_percentiles(game, street)?);
        }
        let [flop, turn, river]: [PercentileTable; 3] = postflop
            .try_into()
            .map_err(|_| Error::MalformedTable("expected three postflop tables".into()))?;
        Ok(Tables::new(starting, [preflop, flop, turn, river]))
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

    fn small() -> SimulatedTables {
        SimulatedTables {
            preflop_trials: 400,
            percentile_samples: 200,
            percentile_trials: 50,
            seed: 17,
        }
    }

    #[test]
    fn holdem_has_169_classes_covering_every_hand() {
        let classes = starting_classes(Game::Holdem);
        assert_eq!(classes.len(), 169);
        assert_eq!(classes.iter().map(|&(_, c)| c).sum::<u64>(), 1326);
    }

    #[test]
    fn omaha_class_count() {
        let classes = starting_classes(Game::Omaha);
        assert_eq!(classes.len(), 16_432);
        assert_eq!(classes.iter().map(|&(_, c)| c).sum::<u64>(), 270_725);
    }

    #[test]
    fn builds_consistent_holdem_tables() {
        let tables = small().provide(Game::Holdem).unwrap();
        assert_eq!(tables.game(), Game::Holdem);
        assert_eq!(tables.starting().len(), 169);

        let aces = tables.starting().get(mask("Ac Ad")).unwrap();
        let trash = tables.starting().get(mask("7c 2d")).unwrap();
        assert!(aces > 0.75, "aces {aces}");
        assert!(trash < 0.45, "72o {trash}");

        for street in Street::ALL {
            let t = tables.percentile(street);
            assert_eq!(t.get(100), 1.0);
            assert!(t.values().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn default_omaha_build_stays_bounded() {
        let d = SimulatedTables::default();
        let preflop = 16_432 * d.preflop_trials as u64;
        let postflop = 3 * d.percentile_samples as u64 * d.percentile_trials as u64;
        assert!(preflop + postflop <= 10_000_000, "{preflop} + {postflop} deals");
    }

    #[test]
    fn same_seed_same_tables() {
        let a = small().provide(Game::Holdem).unwrap();
        let b = small().provide(Game::Holdem).unwrap();
        assert_eq!(a, b);
    }
}
