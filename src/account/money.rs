use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MoneyError {
    #[error("invalid monetary amount: '{0}'")]
    InvalidAmount(String),
    #[error("invalid percentage: '{0}'")]
    InvalidPercentage(String),
}

/// Two-decimal fixed point money value, kept in cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MonetaryAmount(i64);

impl MonetaryAmount {
    pub const fn zero() -> Self {
        MonetaryAmount(0)
    }

    pub const fn from_cents(cents: i64) -> Self {
        MonetaryAmount(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }
}

impl FromStr for MonetaryAmount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoneyError::InvalidAmount(s.to_string());
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, "00"),
        };
        if whole.is_empty() || frac.len() != 2 || !all_digits(whole) || !all_digits(frac) {
            return Err(err());
        }
        let whole: i64 = whole.parse().map_err(|_| err())?;
        let frac: i64 = frac.parse().map_err(|_| err())?;
        let cents = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(err)?;
        Ok(MonetaryAmount(sign * cents))
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

/// Allocation percentage in the range 0%..=100%, kept in hundredths
/// of a percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Percentage(u32);

impl Percentage {
    pub const fn zero() -> Self {
        Percentage(0)
    }

    pub fn new(hundredths: u32) -> Result<Self, MoneyError> {
        if hundredths > 100_00 {
            return Err(MoneyError::InvalidPercentage(format!(
                "{}.{:02}",
                hundredths / 100,
                hundredths % 100
            )));
        }
        Ok(Percentage(hundredths))
    }

    pub const fn hundredths(&self) -> u32 {
        self.0
    }
}

impl FromStr for Percentage {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoneyError::InvalidPercentage(s.to_string());
        let digits = s.strip_suffix('%').unwrap_or(s).trim();
        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, "00"),
        };
        if whole.is_empty() || frac.len() != 2 || !all_digits(whole) || !all_digits(frac) {
            return Err(err());
        }
        let whole: u32 = whole.parse().map_err(|_| err())?;
        let frac: u32 = frac.parse().map_err(|_| err())?;
        let hundredths = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(err)?;
        Percentage::new(hundredths).map_err(|_| err())
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

impl Serialize for MonetaryAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonetaryAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monetary_amount_parses_and_formats() {
        let amount: MonetaryAmount = "8.00".parse().unwrap();
        assert_eq!(amount.cents(), 800);
        assert_eq!(amount.to_string(), "8.00");

        let amount: MonetaryAmount = "-0.50".parse().unwrap();
        assert_eq!(amount.cents(), -50);
        assert_eq!(amount.to_string(), "-0.50");

        let amount: MonetaryAmount = "100".parse().unwrap();
        assert_eq!(amount.cents(), 10000);
    }

    #[test]
    fn monetary_amount_rejects_garbage() {
        assert!("".parse::<MonetaryAmount>().is_err());
        assert!("8.0".parse::<MonetaryAmount>().is_err());
        assert!("eight".parse::<MonetaryAmount>().is_err());
        assert!("8.000".parse::<MonetaryAmount>().is_err());
    }

    #[test]
    fn percentage_parses_and_formats() {
        let pct: Percentage = "50%".parse().unwrap();
        assert_eq!(pct.hundredths(), 5000);
        assert_eq!(pct.to_string(), "50%");

        let pct: Percentage = "12.50%".parse().unwrap();
        assert_eq!(pct.to_string(), "12.50%");

        let pct: Percentage = "100".parse().unwrap();
        assert_eq!(pct.hundredths(), 10000);
    }

    #[test]
    fn percentage_rejects_out_of_range() {
        assert!("101%".parse::<Percentage>().is_err());
        assert!(Percentage::new(100_01).is_err());
        assert!("half".parse::<Percentage>().is_err());
    }

    #[test]
    fn serde_round_trip_as_strings() {
        let amount = MonetaryAmount::from_cents(425);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"4.25\"");

        let pct: Percentage = serde_json::from_str("\"50%\"").unwrap();
        assert_eq!(pct, Percentage::new(5000).unwrap());
    }
}
