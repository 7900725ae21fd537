//! Win/split/loss counters and their aggregation into equity.

use std::iter::Sum;
use std::ops::AddAssign;

use crate::error::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Split,
    Loss,
}

/// Per-worker counters. A worker owns one exclusively; the scheduler sums
/// them after the join.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Outcomes {
    pub wins: u64,
    pub splits: u64,
    pub losses: u64,
}

impl Outcomes {
    #[inline(always)]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Split => self.splits += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    #[inline(always)]
    pub fn total(&self) -> u64 {
        self.wins + self.splits + self.losses
    }

    /// (wins + splits/2) / total. Zero trials is an error, never NaN.
    pub fn equity(&self) -> Result<f64, Error> {
        let total = self.total();
        if total == 0 {
            return Err(Error::ZeroTrials);
        }
        Ok((self.wins as f64 + self.splits as f64 / 2.0) / total as f64)
    }
}

impl AddAssign for Outcomes {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.splits += rhs.splits;
        self.losses += rhs.losses;
    }
}

impl Sum for Outcomes {
    fn sum<I: Iterator<Item = Outcomes>>(iter: I) -> Self {
        iter.fold(Outcomes::default(), |mut acc, o| {
            acc += o;
            acc
        })
    }
}

/// Sum per-worker counters and turn them into one equity value.
pub fn aggregate<I: IntoIterator<Item = Outcomes>>(parts: I) -> Result<f64, Error> {
    parts.into_iter().sum::<Outcomes>().equity()
}
