//! The query surface: an engine owns a configuration and, once initialized,
//! the read-only tables every query consults.

use std::sync::OnceLock;

use crate::card::{parse_cards, Card};
use crate::config::Config;
use crate::error::Error;
use crate::game::Street;
use crate::outcome::Outcomes;
use crate::percentile::{self, NEUTRAL_PERCENTILE};
use crate::scheduler;
use crate::tables::{TableProvider, Tables};
use crate::worker::Deal;

#[derive(Debug)]
pub struct Engine {
    config: Config,
    tables: OnceLock<Tables>,
}

impl Engine {
    /// An engine without tables; call [`Engine::init`] before querying.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tables: OnceLock::new(),
        }
    }

    /// An engine initialized with prebuilt tables.
    pub fn with_tables(config: Config, tables: Tables) -> Result<Self, Error> {
        let engine = Self::new(config);
        engine.install(tables)?;
        Ok(engine)
    }

    /// Build the tables from `provider`. Tables are write-once: a second
    /// call fails with [`Error::AlreadyInitialized`].
    pub fn init<P: TableProvider + ?Sized>(&self, provider: &P) -> Result<(), Error> {
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized);
        }
        let tables = provider.provide(self.config.game)?;
        self.install(tables)
    }

    fn install(&self, tables: Tables) -> Result<(), Error> {
        if tables.game() != self.config.game {
            return Err(Error::GameMismatch {
                expected: self.config.game,
                found: tables.game(),
            });
        }
        if tables.starting().is_empty() {
            log::warn!("{:<32}{:<32}", "empty starting-hand table", tables.game());
        }
        log::info!("{:<32}{:<32}", "tables ready", tables.starting().len());
        self.tables.set(tables).map_err(|_| Error::AlreadyInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.tables.get().is_some()
    }

    pub fn tables(&self) -> Result<&Tables, Error> {
        self.tables.get().ok_or(Error::UninitializedTables)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Equity of `own_hand` against one random opponent hand, given `board`
    /// tokens. `trials == 0` enumerates exhaustively, otherwise each worker
    /// samples `trials` deals. An empty board is answered from the
    /// starting-hand table without simulating.
    pub fn get_equity(&self, board: &[&str], own_hand: &[&str], trials: u32) -> Result<f64, Error> {
        self.get_equity_with(board, own_hand, trials, &self.config)
    }

    /// [`Engine::get_equity`] with a per-call configuration (worker count,
    /// seed). The game always comes from the engine's own configuration.
    pub fn get_equity_with(
        &self,
        board: &[&str],
        own_hand: &[&str],
        trials: u32,
        config: &Config,
    ) -> Result<f64, Error> {
        let board = parse_cards(board)?;
        let hand = parse_cards(own_hand)?;
        self.equity_with(&board, &hand, trials, config)
    }

    pub fn equity(&self, board: &[Card], own_hand: &[Card], trials: u32) -> Result<f64, Error> {
        self.equity_with(board, own_hand, trials, &self.config)
    }

    pub fn equity_with(
        &self,
        board: &[Card],
        own_hand: &[Card],
        trials: u32,
        config: &Config,
    ) -> Result<f64, Error> {
        let tables = self.tables()?;
        let deal = Deal::new(self.config.game, own_hand, board)?;
        if deal.board() == 0 {
            return tables.starting().get(deal.hole());
        }
        self.run(deal, trials, config)?.equity()
    }

    /// Raw counters of a postflop query. Preflop boards are rejected here:
    /// they are only ever answered by table lookup.
    pub fn simulate(&self, board: &[Card], own_hand: &[Card], trials: u32) -> Result<Outcomes, Error> {
        self.tables()?;
        let deal = Deal::new(self.config.game, own_hand, board)?;
        if deal.board() == 0 {
            return Err(Error::InvalidBoardSize(0));
        }
        self.run(deal, trials, &self.config)
    }

    fn run(&self, deal: Deal, trials: u32, config: &Config) -> Result<Outcomes, Error> {
        let street = Street::from_board_len(deal.board().count_ones() as usize);
        log::debug!("{:<32}{:<16?}{:<16}", "equity query", street, trials);
        scheduler::run(&self.config.game, deal, trials, config)
    }

    /// Percentile of `equity` on `street` (0 = preflop, 3 = flop, 4 = turn,
    /// 5 = river). Other street codes give the neutral 0.5.
    pub fn convert_equity_to_percentile(&self, equity: f64, street: u8) -> Result<f64, Error> {
        if Street::from_code(street).is_none() {
            return Ok(NEUTRAL_PERCENTILE);
        }
        percentile::convert_equity_to_percentile(self.tables()?, equity, street)
    }
}
