use btc_wbtc_swap_form::{
    quote, AmountPair, AssetPair, Direction, Environment, FeeRate, FormState, SubmissionRequest,
};

use pretty_assertions::assert_eq;

/// Helper: a form after one edit
fn edited(direction: Direction, raw: &str) -> FormState {
    let mut form = FormState::new();
    form.on_edit(direction, raw, FeeRate::default());
    form
}

#[test]
fn test_positive_inputs_apply_fee() {
    let fee = FeeRate::default();
    for direction in Direction::ALL {
        for raw in ["1", "0.1", "2.5", "0.00000001", "12345.6789"] {
            let value: f64 = raw.parse().unwrap();
            let q = quote(direction, raw, fee);
            assert_eq!(q.derived, Some(format!("{:.8}", value * 0.997)));
        }
    }
}

#[test]
fn test_non_positive_inputs_have_no_derived() {
    let fee = FeeRate::default();
    for direction in Direction::ALL {
        for raw in ["", "0", "-0.5", "1.2.3", "btc", "--1"] {
            assert_eq!(quote(direction, raw, fee).derived, None, "{raw:?}");
        }
    }
}

#[test]
fn test_documented_round_trips() {
    let form = edited(Direction::SourceIsWrapped, "1");
    assert_eq!(form.amounts().native.as_deref(), Some("0.99700000"));

    let form = edited(Direction::SourceIsNative, "2");
    assert_eq!(form.amounts().wrapped.as_deref(), Some("1.99400000"));
}

#[test]
fn test_only_one_field_authored_per_edit() {
    let mut form = edited(Direction::SourceIsWrapped, "3");
    form.on_edit(Direction::SourceIsNative, "abc", FeeRate::default());

    // The stale wrapped amount does not survive an edit of the native field
    assert_eq!(
        form.amounts(),
        &AmountPair {
            native: Some("abc".into()),
            wrapped: None,
        }
    );
}

#[test]
fn test_reselecting_direction_is_noop() {
    let mut form = edited(Direction::SourceIsWrapped, "4");
    let before = form.clone();
    form.select(Direction::SourceIsWrapped);
    form.select(Direction::SourceIsWrapped);
    assert_eq!(form, before);
}

#[test]
fn test_custom_fee_rate() {
    let fee = FeeRate::from_percent(1.0).unwrap();
    assert_eq!(
        quote(Direction::SourceIsNative, "100", fee).derived.as_deref(),
        Some("99.00000000")
    );
}

#[test]
fn test_form_to_request() {
    let form = edited(Direction::SourceIsWrapped, "1");
    let request = SubmissionRequest::from_form(
        &AssetPair::for_environment(Environment::Localnet),
        form.direction(),
        form.amounts(),
        None,
    )
    .unwrap();

    assert_eq!(request.source.symbol, "WBTC");
    assert_eq!(request.destination.symbol, "BTC");
    assert_eq!(request.send_amount, 100_000_000);
    assert_eq!(request.receive_amount, 99_700_000);
}
