//! Static asset registry
//!
//! The swap form only ever trades one fixed pair: native BTC on a bitcoin
//! network against WBTC on an EVM network. Which networks is decided by
//! the [`Environment`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::BTC_DECIMALS;

/// Chains the pair can live on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    BitcoinRegtest,
    BitcoinTestnet,
    EthereumLocalnet,
    EthereumSepolia,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::BitcoinRegtest => "bitcoin_regtest",
            Chain::BitcoinTestnet => "bitcoin_testnet",
            Chain::EthereumLocalnet => "ethereum_localnet",
            Chain::EthereumSepolia => "ethereum_sepolia",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tradable asset on a specific chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Chain holding the asset
    pub chain: Chain,
    /// Ticker symbol
    pub symbol: String,
    /// Decimal places of one base unit
    pub decimals: u8,
}

impl Asset {
    pub fn new(chain: Chain, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            chain,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Identifier handed to the swap executor, e.g. `bitcoin_regtest:BTC`
    pub fn id(&self) -> String {
        format!("{}:{}", self.chain, self.symbol)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain, self.symbol)
    }
}

/// Network environment the pair is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Ethereum localnet + bitcoin regtest
    Localnet,
    /// Ethereum sepolia + bitcoin testnet
    Testnet,
}

impl Default for Environment {
    #[cfg(feature = "testnet")]
    fn default() -> Self {
        Environment::Testnet
    }

    #[cfg(not(feature = "testnet"))]
    fn default() -> Self {
        Environment::Localnet
    }
}

/// The fixed native/wrapped pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPair {
    /// Native BTC
    pub native: Asset,
    /// WBTC on the EVM side
    pub wrapped: Asset,
}

impl AssetPair {
    pub fn for_environment(environment: Environment) -> Self {
        let (bitcoin, ethereum) = match environment {
            Environment::Localnet => (Chain::BitcoinRegtest, Chain::EthereumLocalnet),
            Environment::Testnet => (Chain::BitcoinTestnet, Chain::EthereumSepolia),
        };
        Self {
            native: Asset::new(bitcoin, "BTC", BTC_DECIMALS),
            wrapped: Asset::new(ethereum, "WBTC", BTC_DECIMALS),
        }
    }
}

impl Default for AssetPair {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}
