//! Wallet-side collaborators
//!
//! Both providers are owned elsewhere (browser wallet, signing flow); the
//! form only reads their state and asks the wallet to connect.

use async_trait::async_trait;

use crate::Result;

/// Browser wallet connection
#[async_trait]
pub trait WalletConnection: Send + Sync {
    /// Ask the wallet to connect
    async fn connect(&self) -> Result<()>;

    /// Whether a wallet is currently connected
    fn is_connected(&self) -> bool;
}

/// Whether the user has completed the signing step
pub trait SigningStatus: Send + Sync {
    fn is_signed(&self) -> bool;
}
