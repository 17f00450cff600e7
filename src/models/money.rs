//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, lenient parsing for
//! spreadsheet-sourced values, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "$-10.50", "10",
    /// "1,050.25". A single leading currency symbol (before or after the
    /// sign) and well-placed comma thousands separators are stripped; any
    /// other character is an error, never silently dropped. Fractional
    /// digits beyond two are truncated ("10.999" parses as 10.99).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let s = s.trim();
        if s.is_empty() {
            return Err(invalid());
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = strip_currency_symbol(s);
        // Spreadsheet cells sometimes carry the sign after the symbol
        let (negative, s) = match s.strip_prefix('-') {
            Some(_) if negative => return Err(invalid()),
            Some(rest) => (true, rest),
            None => (negative, s),
        };
        if s.is_empty() {
            return Err(invalid());
        }

        let (units_str, frac_str) = match s.split_once('.') {
            Some((units, frac)) => (units, Some(frac)),
            None => (s, None),
        };

        let units_digits = parse_grouped_digits(units_str).ok_or_else(invalid)?;
        if units_digits.is_empty() && frac_str.map(str::is_empty).unwrap_or(true) {
            return Err(invalid());
        }

        let units: i64 = if units_digits.is_empty() {
            0
        } else {
            units_digits.parse().map_err(|_| invalid())?
        };

        let frac: i64 = match frac_str {
            None => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    // Truncate beyond two fractional digits
                    _ => frac[..2].parse().map_err(|_| invalid())?,
                }
            }
        };

        let cents = units * 100 + frac;
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }

    /// Format as a plain decimal literal, e.g. "10.50" (the ledger store
    /// serialization of Amount)
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }
}

/// Strip at most one leading currency symbol
fn strip_currency_symbol(s: &str) -> &str {
    s.strip_prefix(|c: char| matches!(c, '$' | '€' | '£' | '¥'))
        .unwrap_or(s)
}

/// Validate a units string as plain digits or digits with well-placed comma
/// grouping ("1,050", not "10,50"), returning the digits with commas removed
fn parse_grouped_digits(s: &str) -> Option<String> {
    if !s.contains(',') {
        if s.chars().all(|c| c.is_ascii_digit()) {
            return Some(s.to_string());
        }
        return None;
    }

    let mut groups = s.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !first.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
