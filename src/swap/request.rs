//! Building the request handed to the swap executor

use serde::Serialize;
use std::fmt;

use crate::{
    form::AmountPair,
    swap::{Asset, AssetPair, Direction},
    utils::{format_amount, parse_amount},
    Result, SwapFormError,
};

/// A fully validated swap, alive only for the duration of one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    /// Asset sent by the user
    pub source: Asset,
    /// Asset received by the user
    pub destination: Asset,
    /// Sent amount in base units of `source`
    pub send_amount: u64,
    /// Received amount in base units of `destination`
    pub receive_amount: u64,
    /// Where the destination asset should go, if the user gave one
    pub receive_address: Option<String>,
}

impl SubmissionRequest {
    /// Build a request from the current form contents.
    ///
    /// The authored field of `direction` is the send amount and the other
    /// one the receive amount. Both must be positive decimals with no more
    /// precision than their asset supports.
    pub fn from_form(
        assets: &AssetPair,
        direction: Direction,
        amounts: &AmountPair,
        receive_address: Option<&str>,
    ) -> Result<Self> {
        let source = direction.source_asset(assets).clone();
        let destination = direction.destination_asset(assets).clone();
        let (send, receive) = match direction {
            Direction::SourceIsWrapped => (&amounts.wrapped, &amounts.native),
            Direction::SourceIsNative => (&amounts.native, &amounts.wrapped),
        };

        let send_amount = to_base_units("send", send.as_deref(), &source)?;
        let receive_amount = to_base_units("receive", receive.as_deref(), &destination)?;

        Ok(Self {
            source,
            destination,
            send_amount,
            receive_amount,
            receive_address: receive_address
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
        })
    }
}

impl fmt::Display for SubmissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            format_amount(self.send_amount, self.source.decimals),
            self.source,
            format_amount(self.receive_amount, self.destination.decimals),
            self.destination,
        )
    }
}

fn to_base_units(field: &'static str, value: Option<&str>, asset: &Asset) -> Result<u64> {
    let units = parse_amount(value.unwrap_or_default(), asset.decimals)
        .map_err(|source| SwapFormError::InvalidAmount { field, source })?;
    if units == 0 {
        return Err(SwapFormError::NonPositiveAmount { field });
    }
    Ok(units)
}
