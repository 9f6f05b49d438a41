//! Swap pricing and submission
//!
//! Holds the fixed-fee quote calculator, the trading direction and the
//! pieces used to hand a swap to an external executor.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::debug;

use crate::{
    utils::{format_fixed, parse_number},
    SwapFormError,
};

pub mod assets;
pub mod executor;
pub mod request;

pub use assets::{Asset, AssetPair, Chain, Environment};
pub use executor::{AddressResolver, SwapExecutor};
pub use request::SubmissionRequest;

/// Fractional digits of a derived amount
pub const QUOTE_PRECISION: usize = 8;

/// Which side of the pair the user types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// WBTC is typed, BTC is derived
    #[default]
    #[serde(rename = "WBTC-BTC")]
    SourceIsWrapped,
    /// BTC is typed, WBTC is derived
    #[serde(rename = "BTC-WBTC")]
    SourceIsNative,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::SourceIsNative, Direction::SourceIsWrapped];

    /// Pair label shown next to the radio control
    pub fn label(&self) -> &'static str {
        match self {
            Direction::SourceIsWrapped => "WBTC-BTC",
            Direction::SourceIsNative => "BTC-WBTC",
        }
    }

    /// Asset the user sends
    pub fn source_asset<'a>(&self, pair: &'a AssetPair) -> &'a Asset {
        match self {
            Direction::SourceIsWrapped => &pair.wrapped,
            Direction::SourceIsNative => &pair.native,
        }
    }

    /// Asset the user receives
    pub fn destination_asset<'a>(&self, pair: &'a AssetPair) -> &'a Asset {
        match self {
            Direction::SourceIsWrapped => &pair.native,
            Direction::SourceIsNative => &pair.wrapped,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = SwapFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WBTC-BTC" => Ok(Direction::SourceIsWrapped),
            "BTC-WBTC" => Ok(Direction::SourceIsNative),
            other => Err(SwapFormError::UnknownDirection(other.to_string())),
        }
    }
}

/// Fee taken from every swap, as a percentage of the sent amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FeeRate {
    percent: f64,
}

impl FeeRate {
    pub const DEFAULT_PERCENT: f64 = 0.3;

    pub fn from_percent(percent: f64) -> crate::Result<Self> {
        if !percent.is_finite() || !(0.0..100.0).contains(&percent) {
            return Err(SwapFormError::InvalidFeeRate(percent));
        }
        Ok(Self { percent })
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Share of the input that reaches the receiver
    pub fn multiplier(&self) -> f64 {
        1.0 - self.percent / 100.0
    }

    pub fn apply(&self, amount: f64) -> f64 {
        self.multiplier() * amount
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self {
            percent: Self::DEFAULT_PERCENT,
        }
    }
}

impl TryFrom<f64> for FeeRate {
    type Error = SwapFormError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::from_percent(percent)
    }
}

impl From<FeeRate> for f64 {
    fn from(rate: FeeRate) -> Self {
        rate.percent
    }
}

/// Result of pricing one edit of the source field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Direction the edit was made in
    pub direction: Direction,
    /// The raw input, echoed verbatim
    pub source: String,
    /// Amount received after fees, `None` unless the input is a positive number
    pub derived: Option<String>,
}

/// Price an edit of the source field.
///
/// Never fails: input that is empty, malformed, zero or negative simply
/// produces no derived amount.
pub fn quote(direction: Direction, input: &str, fee: FeeRate) -> Quote {
    let value = parse_number(input);
    let derived = (value.is_finite() && value > 0.0)
        .then(|| format_fixed(fee.apply(value), QUOTE_PRECISION));

    debug!(%direction, input, ?derived, "quoted amount");

    Quote {
        direction,
        source: input.to_string(),
        derived,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fee_multiplier() {
        let fee = FeeRate::default();
        assert_eq!(fee.percent(), 0.3);
        assert_eq!(fee.multiplier(), 0.997);
    }

    #[test]
    fn test_fee_rate_bounds() {
        assert!(FeeRate::from_percent(0.0).is_ok());
        assert!(FeeRate::from_percent(-1.0).is_err());
        assert!(FeeRate::from_percent(100.0).is_err());
        assert!(FeeRate::from_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_quote_positive_input() {
        let q = quote(Direction::SourceIsWrapped, "1", FeeRate::default());
        assert_eq!(q.source, "1");
        assert_eq!(q.derived.as_deref(), Some("0.99700000"));

        let q = quote(Direction::SourceIsNative, "2", FeeRate::default());
        assert_eq!(q.derived.as_deref(), Some("1.99400000"));
    }

    #[test]
    fn test_quote_matches_multiplier_for_many_inputs() {
        let fee = FeeRate::default();
        for input in ["0.5", "0.00000001", "3.14159", "21", "1000000", "1e-3"] {
            let expected = format!("{:.8}", input.parse::<f64>().unwrap() * 0.997);
            let q = quote(Direction::SourceIsWrapped, input, fee);
            assert_eq!(q.derived, Some(expected), "input {input}");
        }
    }

    #[test]
    fn test_quote_rounds_half_up_on_exact_ties() {
        // Both inputs land exactly on k/512 after the fee
        let fee = FeeRate::default();
        let q = quote(Direction::SourceIsWrapped, "0.001959002006018054", fee);
        assert_eq!(q.derived.as_deref(), Some("0.00195313"));

        let q = quote(Direction::SourceIsNative, "1.0049680290872618", fee);
        assert_eq!(q.derived.as_deref(), Some("1.00195313"));
    }

    #[test]
    fn test_quote_non_positive_input_has_no_derived() {
        for input in ["", "0", "-1", "abc", "0.0", "Infinity", " "] {
            let q = quote(Direction::SourceIsNative, input, FeeRate::default());
            assert_eq!(q.source, input);
            assert_eq!(q.derived, None, "input {input:?}");
        }
    }

    #[test]
    fn test_direction_labels_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(direction.label().parse::<Direction>().unwrap(), direction);
        }
        assert!("ETH-BTC".parse::<Direction>().is_err());
        assert_eq!(Direction::default(), Direction::SourceIsWrapped);
    }

    #[test]
    fn test_direction_selects_assets() {
        let pair = AssetPair::for_environment(Environment::Localnet);
        let direction = Direction::SourceIsWrapped;
        assert_eq!(direction.source_asset(&pair).symbol, "WBTC");
        assert_eq!(direction.destination_asset(&pair).symbol, "BTC");

        let direction = Direction::SourceIsNative;
        assert_eq!(direction.source_asset(&pair).symbol, "BTC");
        assert_eq!(direction.destination_asset(&pair).symbol, "WBTC");
    }
}
