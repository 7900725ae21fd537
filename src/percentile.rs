//! Equity → percentile conversion by linear interpolation between the two
//! neighbouring percent entries of a street's table.

use crate::error::Error;
use crate::game::Street;
use crate::tables::{PercentileTable, Tables};

/// Returned for street codes other than 0, 3, 4 and 5.
pub const NEUTRAL_PERCENTILE: f64 = 0.5;

/// Interpolate `equity` over `table`. Values at or beyond the boundaries
/// (≤ 0 or ≥ 1) are returned unchanged. `equity` must not be NaN.
pub(crate) fn interpolate(table: &PercentileTable, equity: f64) -> f64 {
    if equity <= 0.0 || equity >= 1.0 {
        return equity;
    }
    let scaled = equity * 100.0;
    let k = (scaled.floor() as usize).min(99);
    let r = scaled - k as f64;
    (1.0 - r) * table.get(k) + r * table.get(k + 1)
}

/// Percentile of `equity` on the street with public code `street`
/// (the board length). NaN equity is rejected rather than propagated.
pub fn convert_equity_to_percentile(tables: &Tables, equity: f64, street: u8) -> Result<f64, Error> {
    let Some(street) = Street::from_code(street) else {
        return Ok(NEUTRAL_PERCENTILE);
    };
    if equity.is_nan() {
        return Err(Error::InvalidEquity(equity));
    }
    Ok(interpolate(tables.percentile(street), equity))
}
