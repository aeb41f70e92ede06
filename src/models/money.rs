//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides exact arithmetic and locale-aware formatting.
//!
//! Whenever a value falls between two cents (ratio multiplication, division,
//! parsing more than two fraction digits, converting from `f64`) it is rounded
//! half away from zero. All of those paths go through [`div_round`].
//!
//! Serialized amounts are decimal numbers of whole units (`45.5` is 45,50 €).
//! Input may also be an integer or a decimal string such as `"45.50"`.
//! Amounts beyond [`Money::MAX`] are rejected at that boundary, and the
//! arithmetic operators saturate instead of overflowing.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from input: 99.999.999.999,99
    pub const MAX: Money = Money(9_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10,50 €
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// `minor` is the size of the cents part (0-99) and takes the sign of
    /// `major`.
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// assert_eq!(Money::from_major_minor(10, 50).cents(), 1050);
    /// assert_eq!(Money::from_major_minor(-10, 50).cents(), -1050);
    /// ```
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        let base = major.saturating_mul(100);
        if major < 0 {
            Self(base.saturating_sub(minor))
        } else {
            Self(base.saturating_add(minor))
        }
    }

    /// Create a Money amount from whole units
    pub const fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(100))
    }

    /// Convert a floating point amount at an input boundary
    pub fn from_major_f64(value: f64) -> Self {
        // f64::round already rounds half away from zero
        Self((value * 100.0).round() as i64)
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
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a floating point number of whole units
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Plain decimal rendering for machine-readable output, e.g. `-1234.50`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.minor_part())
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
        Self(self.0.saturating_abs())
    }

    /// Whether the magnitude exceeds [`Money::MAX`]
    pub const fn exceeds_limit(&self) -> bool {
        self.0.unsigned_abs() > Self::MAX.0 as u64
    }

    /// Multiply by `numerator / denominator`, rounding to the nearest cent
    ///
    /// A zero denominator yields zero.
    pub fn mul_ratio(&self, numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::zero();
        }
        let n = self.0 as i128 * numerator as i128;
        Self(clamp_cents(div_round(n, denominator as i128)))
    }

    /// Divide into `parts` equal shares, rounding to the nearest cent
    pub fn div_round(&self, parts: i64) -> Self {
        self.mul_ratio(1, parts)
    }

    /// Parse an amount as written in `format`'s locale
    ///
    /// The locale decides which separator is decimal: under de-DE `1.234`
    /// is 1.234,00 € and `1.234,5` is 1.234,50 €, under en-US `1,234.5` is
    /// the same amount. Group separators must split the integer part into
    /// groups of three. The currency symbol or code may precede or follow
    /// the number.
    pub fn parse_localized(s: &str, format: &MoneyFormat) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let style = format.locale.style();

        let mut rest = s.trim();
        let negative = match rest.strip_prefix('-') {
            Some(stripped) => {
                rest = stripped.trim_start();
                true
            }
            None => false,
        };
        for marker in [format.currency.code(), format.currency.symbol()] {
            if let Some(stripped) = rest.strip_prefix(marker) {
                rest = stripped.trim_start();
            }
            if let Some(stripped) = rest.strip_suffix(marker) {
                rest = stripped.trim_end();
            }
        }
        let negative = match rest.strip_prefix('-') {
            Some(stripped) if !negative => {
                rest = stripped;
                true
            }
            _ => negative,
        };

        let mut parts = rest.split(style.decimal_separator);
        let int_part = parts.next().unwrap_or_default();
        let frac_part = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let int_digits = if int_part.contains(style.group_separator) {
            let groups: Vec<&str> = int_part.split(style.group_separator).collect();
            let well_formed = groups.iter().enumerate().all(|(i, g)| {
                if i == 0 {
                    (1..=3).contains(&g.len())
                } else {
                    g.len() == 3
                }
            });
            if !well_formed {
                return Err(invalid());
            }
            groups.concat()
        } else {
            int_part.to_string()
        };

        let cents = cents_from_parts(&int_digits, frac_part).ok_or_else(invalid)?;
        checked_amount(if negative { -cents } else { cents }, s)
    }

    /// Format using a locale/currency pair
    pub fn format(&self, format: &MoneyFormat) -> String {
        let style = format.locale.style();
        let number = format!(
            "{}{}{:02}",
            group_digits(self.major().unsigned_abs(), style.group_separator),
            style.decimal_separator,
            self.minor_part()
        );
        let symbol = format.currency.symbol();
        let sign = if self.is_negative() { "-" } else { "" };

        if style.symbol_after {
            format!("{}{} {}", sign, number, symbol)
        } else if format.currency.symbol_is_code() {
            format!("{}{} {}", sign, symbol, number)
        } else {
            format!("{}{}{}", sign, symbol, number)
        }
    }
}

/// Integer division rounding half away from zero; `d` must be positive
pub(crate) fn div_round(n: i128, d: i128) -> i128 {
    let q = n / d;
    let r = n % d;
    if 2 * r.abs() >= d {
        q + n.signum()
    } else {
        q
    }
}

fn clamp_cents(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Cents from ASCII integer and fraction digits; `None` on anything else
fn cents_from_parts(int_digits: &str, frac_digits: &str) -> Option<i128> {
    let all_digits = |d: &str| d.chars().all(|c| c.is_ascii_digit());
    if (int_digits.is_empty() && frac_digits.is_empty())
        || !all_digits(int_digits)
        || !all_digits(frac_digits)
        || int_digits.len() > 20
        || frac_digits.len() > 20
    {
        return None;
    }

    let major: i128 = if int_digits.is_empty() {
        0
    } else {
        int_digits.parse().ok()?
    };
    let minor: i128 = if frac_digits.is_empty() {
        0
    } else {
        let digits = frac_digits.len() as u32;
        let value: i128 = frac_digits.parse().ok()?;
        if digits <= 2 {
            value * 10_i128.pow(2 - digits)
        } else {
            div_round(value, 10_i128.pow(digits - 2))
        }
    };
    Some(major * 100 + minor)
}

fn checked_amount(cents: i128, input: &str) -> Result<Money, MoneyParseError> {
    if cents.unsigned_abs() > Money::MAX.0 as u128 {
        return Err(MoneyParseError::OutOfRange(input.to_string()));
    }
    Ok(Money(cents as i64))
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(&MoneyFormat::default()))
    }
}

/// Plain decimal notation as written by [`Money::to_decimal_string`]:
/// an optional minus, digits and an optional `.` fraction. No grouping.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let cents = cents_from_parts(int_digits, frac_digits)
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;
        checked_amount(if negative { -cents } else { cents }, s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major_f64())
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount such as 45.5 or \"45.50\"")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Money, E> {
        checked_amount(value as i128 * 100, &value.to_string()).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Money, E> {
        checked_amount(value as i128 * 100, &value.to_string()).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Money, E> {
        if !value.is_finite() {
            return Err(E::custom(MoneyParseError::InvalidFormat(value.to_string())));
        }
        // The shortest decimal rendering of the float is what was written,
        // so `1.005` rounds to 1,01 € rather than following its binary value.
        value.to_string().parse().map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount out of range: {} (limit {})", s, Money::MAX.to_decimal_string())
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

/// Supported formatting locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "de-CH")]
    DeCh,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "fr-FR")]
    FrFr,
}

struct LocaleStyle {
    group_separator: &'static str,
    decimal_separator: char,
    symbol_after: bool,
}

impl Locale {
    fn style(&self) -> LocaleStyle {
        match self {
            Self::DeDe => LocaleStyle {
                group_separator: ".",
                decimal_separator: ',',
                symbol_after: true,
            },
            Self::DeCh => LocaleStyle {
                group_separator: "’",
                decimal_separator: '.',
                symbol_after: false,
            },
            Self::EnUs | Self::EnGb => LocaleStyle {
                group_separator: ",",
                decimal_separator: '.',
                symbol_after: false,
            },
            Self::FrFr => LocaleStyle {
                group_separator: " ",
                decimal_separator: ',',
                symbol_after: true,
            },
        }
    }

    /// BCP 47 tag of the locale
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DeDe => "de-DE",
            Self::DeCh => "de-CH",
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::FrFr => "fr-FR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "de-de" | "de" => Ok(Self::DeDe),
            "de-ch" => Ok(Self::DeCh),
            "en-us" | "en" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
    Chf,
}

impl Currency {
    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Gbp => "£",
            Self::Chf => "CHF",
        }
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
        }
    }

    fn symbol_is_code(&self) -> bool {
        matches!(self, Self::Chf)
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" | "€" => Ok(Self::Eur),
            "USD" | "$" => Ok(Self::Usd),
            "GBP" | "£" => Ok(Self::Gbp),
            "CHF" => Ok(Self::Chf),
            other => Err(format!("unsupported currency '{}'", other)),
        }
    }
}

/// Locale/currency pair used for rendering amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MoneyFormat {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub currency: Currency,
}

impl MoneyFormat {
    pub fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(123450).to_decimal_string(), "1234.50");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
        assert_eq!(Money::zero().to_decimal_string(), "0.00");
    }

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_from_major_f64_rounds_half_away_from_zero() {
        assert_eq!(Money::from_major_f64(45.5).cents(), 4550);
        assert_eq!(Money::from_major_f64(0.125).cents(), 13);
        assert_eq!(Money::from_major_f64(-0.125).cents(), -13);
    }

    #[test]
    fn test_format_german_default() {
        let fmt = MoneyFormat::default();
        assert_eq!(Money::from_cents(123456).format(&fmt), "1.234,56 €");
        assert_eq!(Money::from_cents(0).format(&fmt), "0,00 €");
        assert_eq!(Money::from_cents(-4550).format(&fmt), "-45,50 €");
        assert_eq!(Money::from_cents(5).format(&fmt), "0,05 €");
        assert_eq!(Money::from_cents(100000000).format(&fmt), "1.000.000,00 €");
    }

    #[test]
    fn test_format_other_locales() {
        let us = MoneyFormat::new(Locale::EnUs, Currency::Usd);
        assert_eq!(Money::from_cents(123456).format(&us), "$1,234.56");
        assert_eq!(Money::from_cents(-50000).format(&us), "-$500.00");

        let ch = MoneyFormat::new(Locale::DeCh, Currency::Chf);
        assert_eq!(Money::from_cents(123456).format(&ch), "CHF 1’234.56");

        let fr = MoneyFormat::new(Locale::FrFr, Currency::Eur);
        assert_eq!(Money::from_cents(123456).format(&fr), "1 234,56 €");
    }

    #[test]
    fn test_display_uses_default_format() {
        assert_eq!(format!("{}", Money::from_cents(55700)), "557,00 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_mul_ratio_rounding() {
        // 10,00 € * 4.33
        assert_eq!(Money::from_cents(1000).mul_ratio(433, 100).cents(), 4330);
        // 0,01 € * 4.33 = 0,0433 -> 0,04
        assert_eq!(Money::from_cents(1).mul_ratio(433, 100).cents(), 4);
        // 100,00 € / 12 = 8,3333 -> 8,33
        assert_eq!(Money::from_cents(10000).div_round(12).cents(), 833);
        // 0,30 € / 12 = 0,025 -> 0,03 (half away from zero)
        assert_eq!(Money::from_cents(30).div_round(12).cents(), 3);
        assert_eq!(Money::from_cents(-30).div_round(12).cents(), -3);
        assert_eq!(Money::from_cents(500).mul_ratio(1, 0), Money::zero());
    }

    #[test]
    fn test_from_str_plain_decimal() {
        assert_eq!("10.50".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("-10.50".parse::<Money>().unwrap().cents(), -1050);
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("89.995".parse::<Money>().unwrap().cents(), 9000);
        assert_eq!("12.345".parse::<Money>().unwrap().cents(), 1235);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        for input in ["", "abc", "12x", "--5", "1,234.56", "10,50", "1.2.3", "€10", "-"] {
            assert!(input.parse::<Money>().is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_localized_german() {
        let fmt = MoneyFormat::default();
        let parse = |s: &str| Money::parse_localized(s, &fmt).map(|m| m.cents());

        assert_eq!(parse("1.234"), Ok(123400));
        assert_eq!(parse("1.234,56"), Ok(123456));
        assert_eq!(parse("1.234.567"), Ok(123456700));
        assert_eq!(parse("10,50 €"), Ok(1050));
        assert_eq!(parse("10,5"), Ok(1050));
        assert_eq!(parse("-45,50 €"), Ok(-4550));
        assert_eq!(parse("12,50 EUR"), Ok(1250));
        assert_eq!(parse("89,995"), Ok(9000));
        assert_eq!(parse("1234"), Ok(123400));

        assert!(parse("10.50").is_err());
        assert!(parse("1.23,45").is_err());
        assert!(parse("1,2,3").is_err());
        assert!(parse("12 $").is_err());
    }

    #[test]
    fn test_parse_localized_other_locales() {
        let us = MoneyFormat::new(Locale::EnUs, Currency::Usd);
        assert_eq!(Money::parse_localized("1,234.56", &us).unwrap().cents(), 123456);
        assert_eq!(Money::parse_localized("$1,234", &us).unwrap().cents(), 123400);
        assert_eq!(Money::parse_localized("-$500.00", &us).unwrap().cents(), -50000);
        assert!(Money::parse_localized("1.234,56", &us).is_err());

        let ch = MoneyFormat::new(Locale::DeCh, Currency::Chf);
        assert_eq!(Money::parse_localized("CHF 1’234.56", &ch).unwrap().cents(), 123456);

        let fr = MoneyFormat::new(Locale::FrFr, Currency::Eur);
        assert_eq!(Money::parse_localized("1 234,56 €", &fr).unwrap().cents(), 123456);
    }

    #[test]
    fn test_formatted_amounts_parse_back() {
        let formats = [
            MoneyFormat::default(),
            MoneyFormat::new(Locale::EnUs, Currency::Usd),
            MoneyFormat::new(Locale::DeCh, Currency::Chf),
            MoneyFormat::new(Locale::FrFr, Currency::Eur),
        ];
        for fmt in formats {
            let amount = Money::from_cents(-123456789);
            assert_eq!(Money::parse_localized(&amount.format(&fmt), &fmt), Ok(amount));
        }
    }

    #[test]
    fn test_amounts_beyond_limit_are_rejected() {
        assert_eq!(Money::MAX.format(&MoneyFormat::default()), "99.999.999.999,99 €");
        assert!("99999999999.99".parse::<Money>().is_ok());
        assert!(matches!(
            "100000000000".parse::<Money>(),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse_localized("100.000.000.000,00", &MoneyFormat::default()).is_err());
        assert!(Money::from_cents(i64::MAX).exceeds_limit());
        assert!(!(-Money::MAX).exceeds_limit());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!((-big - big - big).cents(), i64::MIN);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).abs().cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MAX).mul_ratio(433, 100).cents(), i64::MAX);

        let mut total = big;
        total += big;
        assert_eq!(total.cents(), i64::MAX);
        let summed: Money = [big, big, big].iter().sum();
        assert_eq!(summed.cents(), i64::MAX);
    }

    #[test]
    fn test_from_major_minor_follows_sign_of_major() {
        assert_eq!(Money::from_major_minor(10, 50).cents(), 1050);
        assert_eq!(Money::from_major_minor(-10, 50).cents(), -1050);
        assert_eq!(Money::from_major_minor(0, 5).cents(), 5);
        assert_eq!(Money::from_major_minor(i64::MAX, 99).cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("de-DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!("en_us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("xx-YY".parse::<Locale>().is_err());
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");
        assert_eq!(serde_json::to_string(&Money::from_cents(-99)).unwrap(), "-0.99");

        let fmt = MoneyFormat::default();
        let json = serde_json::to_string(&fmt).unwrap();
        assert_eq!(json, r#"{"locale":"de-DE","currency":"EUR"}"#);
    }

    #[test]
    fn test_deserialize_decimal_units() {
        let from_json = |s: &str| serde_json::from_str::<Money>(s).map(|m| m.cents());

        assert_eq!(from_json("500.00").unwrap(), 50000);
        assert_eq!(from_json("500").unwrap(), 50000);
        assert_eq!(from_json("45.5").unwrap(), 4550);
        assert_eq!(from_json("-19.99").unwrap(), -1999);
        assert_eq!(from_json("1.005").unwrap(), 101);
        assert_eq!(from_json(r#""12.345""#).unwrap(), 1235);
        assert_eq!(from_json(r#""-0.05""#).unwrap(), -5);

        assert!(from_json(r#""1.234,56""#).is_err());
        assert!(from_json("true").is_err());
        assert!(from_json("1e14").is_err());
        assert!(from_json("100000000000").is_err());

        let from_yaml: Money = serde_yaml::from_str("2500").unwrap();
        assert_eq!(from_yaml.cents(), 250000);
        let from_yaml: Money = serde_yaml::from_str("12.34").unwrap();
        assert_eq!(from_yaml.cents(), 1234);
    }

    #[test]
    fn test_serialized_amounts_load_back() {
        for cents in [0, 1, -1, 1050, 123456789, -4550, Money::MAX.cents()] {
            let m = Money::from_cents(cents);
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), m, "{}", json);
        }
    }
}
