//! View-model of the swap form
//!
//! A flat description of what to draw: radio options, the send and receive
//! fields, the address field and both buttons. Renderers map it 1:1 onto
//! their widgets.

use serde::Serialize;

use crate::{form::FormState, swap::Direction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioOption {
    pub direction: Direction,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountField {
    /// Element id, also the ticker shown next to the input
    pub id: &'static str,
    pub label: String,
    /// Current text, empty when unset
    pub value: String,
    pub placeholder: &'static str,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressField {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Black,
    White,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub style: ButtonStyle,
    pub enabled: bool,
}

/// Complete form view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub pairs: Vec<RadioOption>,
    pub send: AmountField,
    pub receive: AmountField,
    pub receive_address: AddressField,
    pub connect_button: Button,
    pub swap_button: Button,
    pub submitting: bool,
    pub error: Option<String>,
}

impl FormView {
    pub fn new(
        form: &FormState,
        receive_address: Option<&str>,
        wallet_connected: bool,
        submitting: bool,
        error: Option<&str>,
    ) -> Self {
        let direction = form.direction();
        let amounts = form.amounts();
        let (send_id, receive_id) = match direction {
            Direction::SourceIsWrapped => ("wbtc", "btc"),
            Direction::SourceIsNative => ("btc", "wbtc"),
        };

        let pairs = Direction::ALL
            .iter()
            .map(|d| RadioOption {
                direction: *d,
                label: d.label(),
                checked: *d == direction,
            })
            .collect();

        Self {
            pairs,
            send: AmountField {
                id: send_id,
                label: format!("Send {}", send_id.to_uppercase()),
                value: amounts.source(direction).unwrap_or_default().to_string(),
                placeholder: "0",
                read_only: false,
            },
            receive: AmountField {
                id: receive_id,
                label: format!("Receive {}", receive_id.to_uppercase()),
                value: amounts.derived(direction).unwrap_or_default().to_string(),
                placeholder: "0",
                read_only: true,
            },
            receive_address: AddressField {
                label: "Receive address",
                value: receive_address.unwrap_or_default().to_string(),
                placeholder: "Enter BTC Address",
            },
            connect_button: Button {
                label: if wallet_connected { "Connected" } else { "Connect Metamask" },
                style: if wallet_connected { ButtonStyle::Black } else { ButtonStyle::White },
                enabled: true,
            },
            swap_button: Button {
                label: "Swap",
                style: if wallet_connected { ButtonStyle::White } else { ButtonStyle::Black },
                enabled: wallet_connected && !submitting,
            },
            submitting,
            error: error.map(str::to_string),
        }
    }
}
