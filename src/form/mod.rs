//! Form state for one swap form instance
//!
//! Tracks the active direction and the two amount fields. Only one field
//! is ever authored per edit; the other is recomputed from it.

use serde::{Deserialize, Serialize};

use crate::swap::{self, Direction, FeeRate, Quote};

pub mod address;

pub use address::{FetchTicket, ReceiveAddress};

/// Display amounts of both legs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountPair {
    /// BTC amount
    pub native: Option<String>,
    /// WBTC amount
    pub wrapped: Option<String>,
}

impl AmountPair {
    /// Lay a quote out onto the two fields
    pub fn from_quote(quote: Quote) -> Self {
        match quote.direction {
            Direction::SourceIsWrapped => Self {
                wrapped: Some(quote.source),
                native: quote.derived,
            },
            Direction::SourceIsNative => Self {
                native: Some(quote.source),
                wrapped: quote.derived,
            },
        }
    }

    /// Field the user types into under `direction`
    pub fn source(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::SourceIsWrapped => self.wrapped.as_deref(),
            Direction::SourceIsNative => self.native.as_deref(),
        }
    }

    /// Field computed from the source under `direction`
    pub fn derived(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::SourceIsWrapped => self.native.as_deref(),
            Direction::SourceIsNative => self.wrapped.as_deref(),
        }
    }
}

/// Direction plus amounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    direction: Direction,
    amounts: AmountPair,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn amounts(&self) -> &AmountPair {
        &self.amounts
    }

    /// Switch the active direction. Amounts are left alone.
    pub fn select(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Apply an edit of the source field for `direction`.
    ///
    /// Replaces both amounts wholesale and moves the form to `direction`.
    pub fn on_edit(&mut self, direction: Direction, raw: &str, fee: FeeRate) {
        self.amounts = AmountPair::from_quote(swap::quote(direction, raw, fee));
        self.direction = direction;
    }

    /// Reset to an empty wrapped field, as after a submission
    pub fn clear(&mut self, fee: FeeRate) {
        self.on_edit(Direction::SourceIsWrapped, "", fee);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_wrapped_and_empty() {
        let form = FormState::new();
        assert_eq!(form.direction(), Direction::SourceIsWrapped);
        assert_eq!(form.amounts(), &AmountPair::default());
    }

    #[test]
    fn test_edit_wrapped() {
        let mut form = FormState::new();
        form.on_edit(Direction::SourceIsWrapped, "1", FeeRate::default());

        assert_eq!(
            form.amounts(),
            &AmountPair {
                wrapped: Some("1".into()),
                native: Some("0.99700000".into()),
            }
        );
    }

    #[test]
    fn test_edit_flips_direction_and_replaces_pair() {
        let mut form = FormState::new();
        form.on_edit(Direction::SourceIsWrapped, "1", FeeRate::default());
        form.on_edit(Direction::SourceIsNative, "2", FeeRate::default());

        assert_eq!(form.direction(), Direction::SourceIsNative);
        assert_eq!(
            form.amounts(),
            &AmountPair {
                native: Some("2".into()),
                wrapped: Some("1.99400000".into()),
            }
        );
        assert_eq!(form.amounts().source(Direction::SourceIsNative), Some("2"));
        assert_eq!(form.amounts().derived(Direction::SourceIsNative), Some("1.99400000"));
    }

    #[test]
    fn test_invalid_edit_clears_derived() {
        let mut form = FormState::new();
        form.on_edit(Direction::SourceIsNative, "5", FeeRate::default());
        form.on_edit(Direction::SourceIsNative, "-3", FeeRate::default());

        assert_eq!(
            form.amounts(),
            &AmountPair {
                native: Some("-3".into()),
                wrapped: None,
            }
        );
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut form = FormState::new();
        form.on_edit(Direction::SourceIsNative, "2", FeeRate::default());
        let before = form.clone();

        form.select(Direction::SourceIsNative);
        form.select(Direction::SourceIsNative);

        assert_eq!(form, before);
    }

    #[test]
    fn test_clear_resets_to_wrapped() {
        let mut form = FormState::new();
        form.on_edit(Direction::SourceIsNative, "2", FeeRate::default());
        form.clear(FeeRate::default());

        assert_eq!(form.direction(), Direction::SourceIsWrapped);
        assert_eq!(form.amounts().wrapped.as_deref(), Some(""));
        assert_eq!(form.amounts().native, None);
    }
}
