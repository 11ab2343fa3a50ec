// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Trims the value and rejects it when nothing is left.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(value.to_string())
}

/// Parses a non-negative decimal amount such as `150` or `99.50`.
pub(crate) fn price(field: &'static str, value: &str) -> Result<Decimal> {
    let value = required(field, value)?;
    let price = Decimal::from_str(&value)
        .map_err(|_| Error::validation(field, format!("`{value}` is not a number")))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(Error::validation(field, "must not be negative"));
    }
    Ok(price)
}

/// Parses a positive whole count such as a guest capacity.
pub(crate) fn count(field: &'static str, value: &str) -> Result<u32> {
    let value = required(field, value)?;
    match value.parse::<u32>() {
        Ok(0) => Err(Error::validation(field, "must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::validation(
            field,
            format!("`{value}` is not a whole number"),
        )),
    }
}
