//! # Money Module
//!
//! Provides the `Money` type and the currency formatter used by every
//! dashboard read model.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORAGE vs DISPLAY                                                     │
//! │                                                                         │
//! │  invoices.amount is stored in cents:   15795                            │
//! │       │                                                                 │
//! │       ├──► card / table display:  format_currency(15795) = "$157.95"   │
//! │       │                                                                 │
//! │       └──► edit form:             Money::as_major_units() = 157.95     │
//! │                                                                         │
//! │  Sums and totals are computed by the store, in cents.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::money::{format_currency, Money};
//!
//! let amount = Money::from_cents(123456);
//! assert_eq!(amount.to_string(), "$1,234.56");
//!
//! // Missing values format as zero
//! assert_eq!(format_currency(None), "$0.00");
//! assert_eq!(format_currency(0), format_currency(None));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Currency symbol of the fixed display locale (en-US).
pub const CURRENCY_SYMBOL: &str = "$";

/// Thousands separator of the fixed display locale (en-US).
const GROUP_SEPARATOR: char = ',';

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: sums over the store never overflow in practice and
///   negative values still render sensibly
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a possibly missing amount.
    ///
    /// `SUM(...)` over zero rows comes back as NULL; that is zero money.
    #[inline]
    pub const fn from_optional_cents(cents: Option<i64>) -> Self {
        match cents {
            Some(c) => Money(c),
            None => Money(0),
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in major units as a float.
    ///
    /// ## Note
    /// Only for edit forms that show "157.95" in an input box. Never feed the
    /// result back into arithmetic.
    #[inline]
    pub fn as_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount in cents as a display currency string.
///
/// Accepts either a plain `i64` or an `Option<i64>`; a missing amount is
/// formatted as zero. Never fails.
///
/// ## Example
/// ```rust
/// use acme_core::money::format_currency;
///
/// assert_eq!(format_currency(15795), "$157.95");
/// assert_eq!(format_currency(Some(100_000_000)), "$1,000,000.00");
/// assert_eq!(format_currency(None), "$0.00");
/// ```
pub fn format_currency(amount: impl Into<Option<i64>>) -> String {
    Money::from_optional_cents(amount.into()).to_string()
}

/// Inserts thousands separators into an unsigned integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders in the fixed en-US display locale: `$1,234.56`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        // unsigned_abs keeps i64::MIN renderable
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert!(!money.is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_cents(99_999).to_string(), "$999.99");
        assert_eq!(Money::from_cents(100_000).to_string(), "$1,000.00");
        assert_eq!(Money::from_cents(123_456_789).to_string(), "$1,234,567.89");
        assert_eq!(Money::from_cents(-123_456_789).to_string(), "-$1,234,567.89");
    }

    #[test]
    fn test_display_extremes_do_not_panic() {
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-$92,233,720,368,547,758.08"
        );
        assert_eq!(
            Money::from_cents(i64::MAX).to_string(),
            "$92,233,720,368,547,758.07"
        );
    }

    #[test]
    fn test_format_currency_missing_is_zero() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_currency(0), format_currency(None));
        assert_eq!(format_currency(Some(300)), "$3.00");
    }

    #[test]
    fn test_format_currency_two_fraction_digits() {
        for cents in [0_i64, 1, 10, 99, 100, 101, 15795, 4_429_000] {
            let text = format_currency(cents);
            assert!(text.starts_with(CURRENCY_SYMBOL), "{text}");
            let (_, fraction) = text.rsplit_once('.').unwrap();
            assert_eq!(fraction.len(), 2, "{text}");
            assert_eq!(fraction.parse::<i64>().unwrap(), cents % 100);
            let whole: i64 = text[1..text.len() - 3].replace(',', "").parse().unwrap();
            assert_eq!(whole, cents / 100);
        }
    }

    #[test]
    fn test_as_major_units() {
        assert_eq!(Money::from_cents(15795).as_major_units(), 157.95);
        assert_eq!(Money::from_cents(0).as_major_units(), 0.0);
        assert_eq!(Money::from_cents(100).as_major_units(), 1.0);
    }

    #[test]
    fn test_from_optional_cents() {
        assert_eq!(Money::from_optional_cents(None).cents(), 0);
        assert_eq!(Money::from_optional_cents(Some(42)).cents(), 42);
    }
}
