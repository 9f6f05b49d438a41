//! Amount parsing and formatting helpers
//!
//! Conversions between the decimal strings a user types and the integer
//! base units the swap executor expects.

use thiserror::Error;

/// Decimal places shared by BTC and WBTC
pub const BTC_DECIMALS: u8 = 8;

/// Reasons a decimal string cannot be turned into base units
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a plain decimal number")]
    Malformed(String),

    #[error("more than {decimals} fractional digits")]
    TooPrecise { decimals: u8 },

    #[error("amount does not fit in base units")]
    Overflow,
}

/// Interpret a raw input string as a browser numeric field would.
///
/// Surrounding whitespace is ignored and an empty string is zero. Decimal
/// and exponent notation, `Infinity`, and unsigned `0x`/`0o`/`0b` integers
/// are accepted. Anything else yields NaN rather than an error.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_integer(s) {
        return value;
    }

    let body = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if body == "Infinity" {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Keeps out "inf", "nan" and friends that the std parser would accept
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_integer(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    Some(
        u128::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}

/// Fractional digits needed to print any finite f64 exactly
const EXACT_F64_PLACES: usize = 1074;

/// Format a value with exactly `places` fractional digits, rounding
/// ties away from zero.
///
/// `format!("{:.8}")` rounds exact ties to even, so a value such as
/// `0.001953125` would come out as `0.00195312`. Here the exact decimal
/// expansion is rounded by hand instead.
pub fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_F64_PLACES.max(places), value.abs());
    let (whole, fraction) = match exact.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (exact.as_str(), ""),
    };

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(places))
        .collect();

    if fraction.as_bytes().get(places).map_or(false, |d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| d as char));
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| d as char));
    }
    out
}

/// Parse a plain decimal string into integer base units without going
/// through floating point. `"1.5"` at 8 decimals is `150_000_000`.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<u64, AmountError> {
    let s = amount.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    let unsigned = s.strip_prefix('+').unwrap_or(s);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(AmountError::Malformed(s.to_string()));
    }

    let significant = fraction.trim_end_matches('0');
    if significant.len() > decimals as usize {
        return Err(AmountError::TooPrecise { decimals });
    }

    let scale = 10u64
        .checked_pow(decimals as u32)
        .ok_or(AmountError::Overflow)?;
    let whole_units = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u64>()
            .map_err(|_| AmountError::Overflow)?
            .checked_mul(scale)
            .ok_or(AmountError::Overflow)?
    };
    let fraction_units = if significant.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", significant, width = decimals as usize);
        padded.parse::<u64>().map_err(|_| AmountError::Overflow)?
    };

    whole_units
        .checked_add(fraction_units)
        .ok_or(AmountError::Overflow)
}

/// Render base units as a decimal string with all `decimals` places
pub fn format_amount(base_units: u64, decimals: u8) -> String {
    if decimals == 0 {
        return base_units.to_string();
    }
    let scale = 10u128.pow(decimals as u32);
    let units = base_units as u128;
    format!(
        "{}.{:0width$}",
        units / scale,
        units % scale,
        width = decimals as usize
    )
}
