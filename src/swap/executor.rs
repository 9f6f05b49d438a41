//! Collaborators that actually move funds

use async_trait::async_trait;

use crate::{swap::SubmissionRequest, Result};

/// External library performing the cross-chain swap
#[async_trait]
pub trait SwapExecutor: Send + Sync {
    /// Initiate the swap described by `request`
    async fn swap(&self, request: &SubmissionRequest) -> Result<()>;
}

/// Resolves the user's bitcoin receive address from the connected signer
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn get_address(&self) -> Result<String>;
}
