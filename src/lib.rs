//! btc-wbtc-swap-form: a headless BTC <-> WBTC swap form
//!
//! This library holds everything behind a two-field swap form: a fixed-fee
//! quote calculator, the direction and amount state, receive-address
//! auto-fill, and the adapter that hands a swap to an external executor.
//! Rendering is left to the caller through [`view::FormView`].

pub mod form;
pub mod session;
pub mod swap;
pub mod utils;
pub mod view;
pub mod wallet;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub use form::{AmountPair, FormState};
pub use session::{SubmitOutcome, SwapSession};
pub use swap::{quote, AssetPair, Direction, Environment, FeeRate, Quote, SubmissionRequest};
pub use view::FormView;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for swap form operations
#[derive(Error, Debug)]
pub enum SwapFormError {
    #[error("Unknown swap direction: {0}")]
    UnknownDirection(String),

    #[error("Fee rate must be a percentage in [0, 100), got {0}")]
    InvalidFeeRate(f64),

    #[error("Invalid {field} amount: {source}")]
    InvalidAmount {
        field: &'static str,
        source: utils::AmountError,
    },

    #[error("The {field} amount must be greater than zero")]
    NonPositiveAmount { field: &'static str },

    #[error("Swap failed: {0}")]
    SwapFailed(String),

    #[error("Address resolution failed: {0}")]
    AddressResolution(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error(transparent)]
    ConfigError(#[from] serde_json::Error),

    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Result type for swap form operations
pub type Result<T> = std::result::Result<T, SwapFormError>;

/// Configuration for a swap form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Fee taken from every swap (percent)
    pub fee_percent: FeeRate,
    /// Network environment of the pair
    pub environment: Environment,
    /// Explicit asset pair, overriding the environment's
    pub assets: Option<AssetPair>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            fee_percent: FeeRate::default(), // 0.3%
            environment: Environment::default(),
            assets: None,
        }
    }
}

impl SwapConfig {
    /// Parse a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The pair this form trades
    pub fn asset_pair(&self) -> AssetPair {
        self.assets
            .clone()
            .unwrap_or_else(|| AssetPair::for_environment(self.environment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap::Chain;

    #[test]
    fn test_config_defaults() {
        let config = SwapConfig::default();
        assert_eq!(config.fee_percent.percent(), 0.3);
        assert_eq!(config.environment, Environment::default());
        assert_eq!(config.asset_pair(), AssetPair::default());
    }

    #[test]
    fn test_config_from_json() {
        let config = SwapConfig::from_json(r#"{ "fee_percent": 0.5, "environment": "testnet" }"#)
            .unwrap();
        assert_eq!(config.fee_percent.percent(), 0.5);
        assert_eq!(config.asset_pair().native.chain, Chain::BitcoinTestnet);

        let config = SwapConfig::from_json("{}").unwrap();
        assert_eq!(config, SwapConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_fee() {
        let err = SwapConfig::from_json(r#"{ "fee_percent": 150 }"#).unwrap_err();
        assert!(matches!(err, SwapFormError::ConfigError(_)));
    }

    #[test]
    fn test_config_asset_override() {
        let json = r#"{
            "assets": {
                "native": { "chain": "bitcoin_regtest", "symbol": "BTC", "decimals": 8 },
                "wrapped": { "chain": "ethereum_sepolia", "symbol": "WBTC", "decimals": 8 }
            }
        }"#;
        let config = SwapConfig::from_json(json).unwrap();
        let pair = config.asset_pair();
        assert_eq!(pair.native.chain, Chain::BitcoinRegtest);
        assert_eq!(pair.wrapped.chain, Chain::EthereumSepolia);
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = SwapConfig::from_file("/nonexistent/swap-form.json").unwrap_err();
        assert!(matches!(err, SwapFormError::IOError(_)));
    }
}
