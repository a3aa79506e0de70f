//! Conversion of display amounts into integer minor units.
//!
//! Amounts arrive as decimal strings (`"12.34"`) and leave as whole cents.
//! Parsing goes through `rust_decimal` so no binary floating point is ever
//! involved. Sub-cent digits are truncated toward zero, so `"0.005"` is
//! always `0` and `"12.349"` is always `1234`.

use crate::{CoreError, MINOR_UNITS_PER_MAJOR, Result};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

#[track_caller]
pub fn parse_minor_units(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(value, "amount is required"));
    }

    let decimal = Decimal::from_str(trimmed).map_err(|_| invalid(value, "amount is not a number"))?;
    if decimal.is_sign_negative() && !decimal.is_zero() {
        return Err(invalid(value, "amount cannot be negative"));
    }

    let minor = decimal
        .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
        .map(|scaled| scaled.trunc())
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| invalid(value, "amount is too large"))?;

    Ok(minor)
}

#[track_caller]
fn invalid(value: &str, message: &str) -> CoreError {
    CoreError::InvalidAmount {
        value: value.to_string(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
