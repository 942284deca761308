//! Two-tier input validation.
//!
//! Validation runs on every keystroke as well as on explicit submission, so a
//! half-typed value (`""`, `"-"`, `"."`) is reported as [`InputState::Incomplete`]
//! rather than as an error. Only fully typed garbage is [`InputState::Invalid`].

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::error::TimeconvError;
use crate::units::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("not a number")]
    NotANumber,
    #[error("not a finite number")]
    NotFinite,
    #[error("negative values are not allowed")]
    Negative,
    #[error("value is too large to convert")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// A non-negative, finite decimal ready for conversion.
    Valid(Decimal),
    /// The user is still typing; no message, submit disabled.
    Incomplete,
    Invalid(InvalidReason),
}

impl InputState {
    pub fn is_valid(&self) -> bool {
        matches!(self, InputState::Valid(_))
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            InputState::Valid(v) => Some(*v),
            _ => None,
        }
    }
}

const INCOMPLETE: [&str; 6] = ["", "-", "+", ".", "-.", "+."];
const NON_FINITE: [&str; 4] = ["nan", "snan", "inf", "infinity"];

pub fn validate(raw: &str) -> InputState {
    let text = raw.trim();
    if INCOMPLETE.contains(&text) {
        return InputState::Incomplete;
    }

    let unsigned = text.trim_start_matches(['-', '+']).to_lowercase();
    if NON_FINITE.contains(&unsigned.as_str()) {
        return InputState::Invalid(InvalidReason::NotFinite);
    }

    let value = match parse_decimal(text) {
        Ok(value) => value,
        Err(reason) => return InputState::Invalid(reason),
    };

    if value < Decimal::ZERO {
        return InputState::Invalid(InvalidReason::Negative);
    }
    if value.checked_mul(Unit::max_factor()).is_none() {
        return InputState::Invalid(InvalidReason::OutOfRange);
    }

    // "-0" compares equal to zero but would otherwise keep its sign.
    if value.is_zero() {
        InputState::Valid(Decimal::ZERO)
    } else {
        InputState::Valid(value)
    }
}

/// Like [`validate`], but as a `Result` for callers that only care about
/// a usable value (one-shot CLI conversion).
pub fn parse_quantity(raw: &str) -> crate::error::Result<Decimal> {
    match validate(raw) {
        InputState::Valid(v) => Ok(v),
        InputState::Incomplete => Err(TimeconvError::InvalidInput {
            input: raw.to_string(),
            reason: InvalidReason::NotANumber,
        }),
        InputState::Invalid(reason) => Err(TimeconvError::InvalidInput {
            input: raw.to_string(),
            reason,
        }),
    }
}

/// Decimal point positions beyond these bounds are zero or out of range
/// for any non-zero leading digit.
const MAX_POINT: i64 = 30;
const MIN_POINT: i64 = -40;

fn parse_decimal(text: &str) -> Result<Decimal, InvalidReason> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let positional = match body.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => expand_exponent(mantissa, exponent)?,
        None => body.to_string(),
    };
    let magnitude = parse_positional(&positional)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Splits `digits[.digits]` into its integer and fractional parts. At least
/// one digit is required; ".5" and "5." are accepted.
fn split_positional(text: &str) -> Result<(&str, &str), InvalidReason> {
    let (int, frac) = text.split_once('.').unwrap_or((text, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
        return Err(InvalidReason::NotANumber);
    }
    Ok((int, frac))
}

/// Parses a plain positional number. More than 28 fractional digits are
/// rounded away; an integer part too wide for the decimal type is out of
/// range rather than malformed.
fn parse_positional(text: &str) -> Result<Decimal, InvalidReason> {
    let (int, frac) = split_positional(text)?;
    let int = if int.is_empty() { "0" } else { int };
    let normalized = if frac.is_empty() {
        int.to_string()
    } else {
        format!("{int}.{frac}")
    };
    Decimal::from_str(&normalized).map_err(|_| InvalidReason::OutOfRange)
}

/// Rewrites `mantissa` × 10^`exponent` in positional form so scientific
/// input rounds exactly like the same value typed out in full.
fn expand_exponent(mantissa: &str, exponent: &str) -> Result<String, InvalidReason> {
    let (int, frac) = split_positional(mantissa)?;
    let exponent: i64 = exponent.parse().map_err(|_| InvalidReason::NotANumber)?;

    let digits = format!("{int}{frac}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok("0".to_string());
    }
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point = (int.len() as i64 - leading_zeros).saturating_add(exponent);

    if point > MAX_POINT {
        return Err(InvalidReason::OutOfRange);
    }
    if point < MIN_POINT {
        return Ok("0".to_string());
    }

    let len = significant.len() as i64;
    Ok(if point <= 0 {
        format!("0.{}{significant}", "0".repeat((-point) as usize))
    } else if point >= len {
        format!("{significant}{}", "0".repeat((point - len) as usize))
    } else {
        let (head, tail) = significant.split_at(point as usize);
        format!("{head}.{tail}")
    })
}
