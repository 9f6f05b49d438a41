//! Receive address field
//!
//! The address may be typed by the user or filled in from the signer.
//! Auto-fill runs asynchronously, so every fetch carries a ticket and only
//! the latest ticket may write.

/// Proof that a fetch was started at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiveAddress {
    value: Option<String>,
    generation: u64,
}

impl ReceiveAddress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// User typed into the field. A fetch still running will not
    /// overwrite it.
    pub fn set_manual(&mut self, value: impl Into<String>) {
        self.invalidate();
        self.value = Some(value.into());
    }

    /// Start a fetch, superseding any fetch still running
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Drop any fetch still running without starting a new one
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Write a fetched address. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: FetchTicket, address: String) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.value = Some(address);
        true
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }
}
