//! Fork-join scheduling of simulation workers.
//!
//! One scoped thread per worker, joined before the counters are summed.
//! Nothing mutable is shared: each worker gets its own counters and, in
//! sampling mode, its own RNG.

use std::thread;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::Error;
use crate::evaluator::Evaluator;
use crate::outcome::Outcomes;
use crate::worker::{Deal, Mode, Worker};

/// Independent per-worker RNGs. With a seed the streams are a pure function
/// of it; without one each worker is seeded from OS entropy.
pub fn worker_rngs(seed: Option<u64>, workers: usize) -> Vec<SmallRng> {
    match seed {
        Some(seed) => {
            let mut master = SmallRng::seed_from_u64(seed);
            (0..workers)
                .map(|_| SmallRng::seed_from_u64(master.gen()))
                .collect()
        }
        None => (0..workers).map(|_| SmallRng::from_entropy()).collect(),
    }
}

/// Run one query across `config.workers()` threads and sum the results.
/// `trials == 0` enumerates exhaustively; otherwise every worker samples
/// `trials` deals.
pub fn run<E: Evaluator + Sync>(
    evaluator: &E,
    deal: Deal,
    trials: u32,
    config: &Config,
) -> Result<Outcomes, Error> {
    let workers = config.workers();
    let modes: Vec<Mode> = if trials == 0 {
        (0..workers).map(|_| Mode::Exhaustive).collect()
    } else {
        worker_rngs(config.seed, workers)
            .into_iter()
            .map(|rng| Mode::Sampling { trials, rng })
            .collect()
    };
    log::debug!(
        "{:<32}{:<16}{:<16}",
        "spawning simulation workers",
        workers,
        if trials == 0 { "exhaustive" } else { "sampling" }
    );

    let parts = thread::scope(|scope| {
        let handles: Vec<_> = modes
            .into_iter()
            .enumerate()
            .map(|(i, mode)| {
                let worker = Worker::new(i, workers, evaluator, deal, mode);
                scope.spawn(move || worker.run())
            })
            .collect();
        handles
            .into_iter()
            .enumerate()
            .map(|(i, h)| h.join().map_err(|_| Error::WorkerPanicked(i)))
            .collect::<Result<Vec<Outcomes>, Error>>()
    })?;

    for (i, p) in parts.iter().enumerate() {
        log::trace!("{:<32}{:<8}{:?}", "worker finished", i, p);
    }
    Ok(parts.into_iter().sum())
}
