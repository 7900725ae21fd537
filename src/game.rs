//! Game variants and the street a board belongs to.

use std::fmt;

use crate::error::Error;

/// The variant decides hand size and the best-hand rule.
///
/// - `Holdem`: two hole cards, best five of the seven available.
/// - `Omaha`: four hole cards, exactly two of them plus exactly three board
///   cards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Game {
    Holdem,
    Omaha,
}

impl Game {
    pub const fn hole_cards(self) -> usize {
        match self {
            Game::Holdem => 2,
            Game::Omaha => 4,
        }
    }

    pub(crate) const fn code(self) -> u8 {
        match self {
            Game::Holdem => 0,
            Game::Omaha => 1,
        }
    }

    pub(crate) fn from_code(code: u8) -> Result<Game, Error> {
        match code {
            0 => Ok(Game::Holdem),
            1 => Ok(Game::Omaha),
            x => Err(Error::MalformedTable(format!("unknown game code {x}"))),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Game::Holdem => f.write_str("hold'em"),
            Game::Omaha => f.write_str("omaha"),
        }
    }
}

/// Betting round, identified by the number of board cards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// 0, 3, 4 and 5 board cards; anything else is not a street.
    pub const fn from_board_len(n: usize) -> Option<Street> {
        match n {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    /// Street from its public code, which is the board length.
    pub const fn from_code(code: u8) -> Option<Street> {
        Self::from_board_len(code as usize)
    }

    pub const fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub const fn idx(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => f.write_str("preflop"),
            Street::Flop => f.write_str("flop"),
            Street::Turn => f.write_str("turn"),
            Street::River => f.write_str("river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streets_follow_board_length() {
        for s in Street::ALL {
            assert_eq!(Street::from_board_len(s.board_len()), Some(s));
        }
        assert_eq!(Street::from_code(1), None);
        assert_eq!(Street::from_code(6), None);
    }

    #[test]
    fn game_codes_round_trip() {
        for g in [Game::Holdem, Game::Omaha] {
            assert_eq!(Game::from_code(g.code()).unwrap(), g);
        }
        assert!(Game::from_code(9).is_err());
    }
}
