//! Fixed-point currency amounts.
//!
//! All balances and payouts are held as `u64` micro-units, where one whole
//! currency unit equals 1,000,000 micro-units (6 decimal places). Fee
//! arithmetic is integer-only; parsing and display go through the decimal
//! form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Micro-units per whole currency unit (6 decimal places).
pub const MICROS_PER_UNIT: u64 = 1_000_000;

/// A non-negative currency amount in micro-units.
///
/// `Amount(1_000_000)` is one whole unit. Serialized as a bare integer so
/// that stored records never carry float rounding artifacts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from raw micro-units.
    pub const fn from_micros(micros: u64) -> Self {
        Amount(micros)
    }

    /// Creates an amount from whole currency units.
    pub const fn from_units(units: u64) -> Self {
        Amount(units * MICROS_PER_UNIT)
    }

    /// Returns the raw micro-unit value.
    pub const fn micros(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, other: Amount) -> Amount {
        Amount(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Amount {
    /// Formats as a decimal with trailing zeros trimmed (`9.7`, `0.3`, `12`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / MICROS_PER_UNIT;
        let frac = self.0 % MICROS_PER_UNIT;
        if frac == 0 {
            return write!(f, "{}", units);
        }
        let frac_str = format!("{:06}", frac);
        write!(f, "{}.{}", units, frac_str.trim_end_matches('0'))
    }
}

/// Errors from parsing a decimal amount string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    /// Input is empty or not a decimal number.
    #[error("Not a decimal number: {0:?}")]
    Malformed(String),
    /// More than 6 fractional digits.
    #[error("Too many decimal places (max 6): {0:?}")]
    TooPrecise(String),
    /// Value exceeds the representable range.
    #[error("Amount out of range: {0:?}")]
    Overflow(String),
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses a decimal string such as `"12"`, `"0.3"`, or `"9.700001"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAmountError::Malformed(s.to_string()));
        }
        let (units_str, frac_str) = match s.split_once('.') {
            Some((u, f)) => (u, f),
            None => (s, ""),
        };
        if frac_str.len() > 6 {
            return Err(ParseAmountError::TooPrecise(s.to_string()));
        }
        if units_str.is_empty() && frac_str.is_empty() {
            return Err(ParseAmountError::Malformed(s.to_string()));
        }
        let units: u64 = if units_str.is_empty() {
            0
        } else {
            units_str
                .parse()
                .map_err(|_| ParseAmountError::Malformed(s.to_string()))?
        };
        let frac: u64 = if frac_str.is_empty() {
            0
        } else {
            let padded = format!("{:0<6}", frac_str);
            padded
                .parse()
                .map_err(|_| ParseAmountError::Malformed(s.to_string()))?
        };
        units
            .checked_mul(MICROS_PER_UNIT)
            .and_then(|m| m.checked_add(frac))
            .map(Amount)
            .ok_or_else(|| ParseAmountError::Overflow(s.to_string()))
    }
}
