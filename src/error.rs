//! Crate-wide error type.

use std::fmt;
use std::io;

use crate::card::Card;
use crate::game::Game;

#[derive(Debug)]
pub enum Error {
    /// Token is not a rank character followed by a suit character.
    InvalidCardToken(String),
    /// The same physical card appears twice across hand and board.
    DuplicateCard(Card),
    /// Board must hold 0, 3, 4 or 5 cards.
    InvalidBoardSize(usize),
    InvalidHandSize { expected: usize, found: usize },
    /// Aggregation over zero outcomes.
    ZeroTrials,
    /// A query was issued before the tables were initialized.
    UninitializedTables,
    AlreadyInitialized,
    /// Equity given to the percentile converter is NaN.
    InvalidEquity(f64),
    GameMismatch { expected: Game, found: Game },
    /// Starting-hand table has no entry for this (canonical) mask.
    MissingStartingHand(u64),
    MalformedTable(String),
    /// A simulation worker panicked; the query is aborted.
    WorkerPanicked(usize),
    Io(io::Error),
    InvalidMagic,
    UnsupportedVersion(u16),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCardToken(t) => write!(f, "invalid card token: {t:?}"),
            Error::DuplicateCard(c) => write!(f, "card {c} supplied more than once"),
            Error::InvalidBoardSize(n) => {
                write!(f, "invalid board size: {n} (expected 0, 3, 4 or 5)")
            }
            Error::InvalidHandSize { expected, found } => {
                write!(f, "invalid hand size: {found} (expected {expected})")
            }
            Error::ZeroTrials => write!(f, "cannot compute equity from zero trials"),
            Error::UninitializedTables => write!(f, "tables queried before initialization"),
            Error::AlreadyInitialized => write!(f, "tables are already initialized"),
            Error::InvalidEquity(e) => write!(f, "invalid equity: {e}"),
            Error::GameMismatch { expected, found } => {
                write!(f, "tables built for {found}, engine configured for {expected}")
            }
            Error::MissingStartingHand(mask) => {
                write!(f, "no starting-hand entry for mask {mask:#015x}")
            }
            Error::MalformedTable(msg) => write!(f, "malformed table: {msg}"),
            Error::WorkerPanicked(i) => write!(f, "simulation worker {i} panicked"),
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::InvalidMagic => write!(f, "invalid table file magic"),
            Error::UnsupportedVersion(v) => write!(f, "unsupported table file version: {v}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
