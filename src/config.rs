//! Engine configuration.
//!
//! `EQUITY_THREADS` and `EQUITY_SEED` override the defaults when read
//! through [`Config::from_env`].

use crate::game::Game;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub game: Game,
    /// Workers per query; values below 1 are treated as 1.
    pub threads: usize,
    /// Base seed for sampling mode. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: Game::Omaha,
            threads: num_cpus::get().max(1),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        let threads = std::env::var("EQUITY_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(default.threads);
        let seed = std::env::var("EQUITY_SEED")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(default.seed);
        log::debug!("{:<32}{:<32}", "config threads", threads);
        Self {
            threads,
            seed,
            ..default
        }
    }

    pub fn with_game(self, game: Game) -> Self {
        Self { game, ..self }
    }

    pub fn with_threads(self, threads: usize) -> Self {
        Self { threads, ..self }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Effective number of workers.
    pub fn workers(&self) -> usize {
        self.threads.max(1)
    }
}
