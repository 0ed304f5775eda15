//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting. All reference
//! data and user input are in euros.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Default currency symbol used by `Display`
pub const EURO: &str = "€";

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use city_budgeter::models::Money;
    /// let amount = Money::from_cents(1050); // €10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole euros
    ///
    /// Saturates at the representable range instead of overflowing.
    ///
    /// # Examples
    /// ```
    /// use city_budgeter::models::Money;
    /// let rent = Money::from_euros(1000);
    /// assert_eq!(rent.cents(), 100_000);
    /// ```
    pub const fn from_euros(euros: i64) -> Self {
        Self(euros.saturating_mul(100))
    }

    /// Create a Money amount from a fractional euro value, rounded to the cent
    ///
    /// Returns `None` for NaN, infinities and values outside the cent range.
    pub fn try_from_euros_f64(euros: f64) -> Option<Self> {
        let cents = (euros * 100.0).round();
        // i64::MAX is not exactly representable; stay strictly below 2^63
        if cents.is_finite() && cents.abs() < i64::MAX as f64 {
            Some(Self(cents as i64))
        } else {
            None
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole euros portion (truncated toward zero)
    pub const fn euros(&self) -> i64 {
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

    /// Clamp negative amounts to zero
    pub fn floor_zero(self) -> Self {
        self.max(Self::zero())
    }

    /// Split a non-negative amount evenly over `parts` and round the share up
    /// to a whole euro.
    ///
    /// The returned share multiplied by `parts` is never less than `self`.
    /// Returns zero when `parts` is zero or the amount is not positive.
    pub fn ceil_whole_euros_per(&self, parts: u32) -> Self {
        if parts == 0 || !self.is_positive() {
            return Self::zero();
        }
        let divisor = i64::from(parts) * 100;
        Self::from_euros((self.0 - 1) / divisor + 1)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn checked_mul(self, times: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(times)).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "€10.50", "10.50€", "10". Digits
    /// past the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, s) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };

        // Currency symbol may lead or trail
        let s = s.strip_prefix(EURO).unwrap_or(s);
        let s = s.strip_suffix(EURO).unwrap_or(s).trim();

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid());
        }

        let euros: i64 = whole.parse().map_err(|_| invalid())?;

        // Fraction is ASCII here, so byte positions are char positions
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, omitting the cents when they are zero
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if self.cents_part() == 0 {
            format!("{}{}{}", sign, symbol, self.euros().abs())
        } else {
            format!(
                "{}{}{}.{:02}",
                sign,
                symbol,
                self.euros().abs(),
                self.cents_part()
            )
        }
    }

    /// The amount as a floating point number of euros, for charts
    pub fn as_euros_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(EURO))
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

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, months: u32) -> Self {
        Self(self.0 * i64::from(months))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_euros() {
        let m = Money::from_euros(992);
        assert_eq!(m.cents(), 99_200);
        assert_eq!(m.euros(), 992);
        assert_eq!(m.cents_part(), 0);
    }

    #[test]
    fn test_from_euros_saturates() {
        assert_eq!(Money::from_euros(100_000_000_000_000_000).cents(), i64::MAX);
        assert_eq!(Money::from_euros(i64::MIN).cents(), i64::MIN);
    }

    #[test]
    fn test_try_from_euros_f64() {
        assert_eq!(Money::try_from_euros_f64(772.5).unwrap().cents(), 77_250);
        assert_eq!(Money::try_from_euros_f64(-3.0).unwrap().cents(), -300);
        assert_eq!(Money::try_from_euros_f64(1e300), None);
        assert_eq!(Money::try_from_euros_f64(f64::NAN), None);
        assert_eq!(Money::try_from_euros_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(
            Money::from_euros(402).checked_mul(3),
            Some(Money::from_euros(1206))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_euros(1380).to_string(), "€1380");
        assert_eq!(Money::from_cents(1050).to_string(), "€10.50");
        assert_eq!(Money::from_euros(-388).to_string(), "-€388");
        assert_eq!(Money::from_cents(5).to_string(), "€0.05");
        assert_eq!(Money::zero().to_string(), "€0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_euros(134).format_with_symbol("EUR "), "EUR 134");
        assert_eq!(Money::from_cents(-250).format_with_symbol("$"), "-$2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_euros(10);
        let b = Money::from_euros(5);

        assert_eq!((a + b).euros(), 15);
        assert_eq!((a - b).euros(), 5);
        assert_eq!((-a).euros(), -10);
        assert_eq!((a * 3).euros(), 30);
    }

    #[test]
    fn test_floor_zero() {
        assert_eq!(Money::from_euros(-1164).floor_zero(), Money::zero());
        assert_eq!(Money::from_euros(12).floor_zero(), Money::from_euros(12));
    }

    #[test]
    fn test_ceil_whole_euros_per() {
        assert_eq!(Money::from_euros(400).ceil_whole_euros_per(3), Money::from_euros(134));
        // Exact division does not overshoot
        assert_eq!(Money::from_euros(300).ceil_whole_euros_per(3), Money::from_euros(100));
        // A single cent over still needs another euro
        assert_eq!(Money::from_cents(30_001).ceil_whole_euros_per(3), Money::from_euros(101));
        assert_eq!(Money::from_euros(-5).ceil_whole_euros_per(3), Money::zero());
        assert_eq!(Money::from_euros(5).ceil_whole_euros_per(0), Money::zero());
        // No intermediate overflow near the top of the range
        assert_eq!(
            Money::from_cents(i64::MAX).ceil_whole_euros_per(1),
            Money::from_euros(i64::MAX / 100 + 1)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("€10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.50€").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("992").unwrap().cents(), 99_200);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert_eq!(Money::parse("249.999").unwrap().cents(), 24_999);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        // Multibyte character after the decimal point
        assert!(Money::parse("1.5é").is_err());
        assert!(Money::parse("1.é5").is_err());
        // Signs are only allowed in front
        assert!(Money::parse("1.-5").is_err());
        assert!(Money::parse("1.+5").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse(".5").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::InvalidFormat("100000000000000000".to_string()))
        );
        assert!(Money::parse("92233720368547758.08").is_err());
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::from_euros(1000), Money::from_euros(300), Money::from_euros(80)];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_euros(1380));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
