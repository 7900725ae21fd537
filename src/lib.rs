//! Equity simulation against a random opponent and per-street percentile
//! ranking, for Texas Hold'em and Omaha.
//!
//! Simulating Omaha tables takes millions of sampled deals (see
//! [`SimulatedTables`]); save them once with [`Tables::save`] and load them
//! back through [`TableFile`].
//!
//! ```no_run
//! use equity_rank::{Config, Engine, SimulatedTables, TableFile, TableProvider};
//!
//! let engine = Engine::new(Config::default());
//! let file = TableFile::new("omaha.eqtb");
//! if engine.init(&file).is_err() {
//!     let tables = SimulatedTables::default().provide(engine.config().game)?;
//!     tables.save(&file.path)?;
//!     engine.init(&file)?;
//! }
//!
//! let board = ["Qd", "5s", "Ac", "9c", "5h"];
//! let equity = engine.get_equity(&board, &["Tc", "As", "6s", "8h"], 0)?;
//! let percentile = engine.convert_equity_to_percentile(equity, board.len() as u8)?;
//! # Ok::<(), equity_rank::Error>(())
//! ```

pub mod card;
pub mod mask;
pub mod bitboard;
pub mod lut13;
pub mod score;
pub mod evaluator;
pub mod game;
pub mod deck;
pub mod outcome;
pub mod worker;
pub mod scheduler;
pub mod config;
pub mod tables;
pub mod percentile;
pub mod builder;
pub mod table_io;
pub mod engine;
pub mod error;

pub use card::{parse_cards, parse_cards_str, Card, Rank, Suit};
pub use mask::{combine, encode};
pub use score::{Category, Strength};
pub use evaluator::{evaluate, evaluate_mask, Evaluator};
pub use game::{Game, Street};
pub use outcome::{aggregate, Outcome, Outcomes};
pub use worker::{Deal, Mode, Worker};
pub use config::Config;
pub use tables::{PercentileTable, StartingHands, TableProvider, Tables};
pub use percentile::{convert_equity_to_percentile, NEUTRAL_PERCENTILE};
pub use builder::SimulatedTables;
pub use table_io::TableFile;
pub use engine::Engine;
pub use error::{Error, Result};
