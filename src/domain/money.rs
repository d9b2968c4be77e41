use crate::error::RmaError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A non-negative monetary value.
///
/// Wraps `rust_decimal::Decimal` so order totals and refund amounts are exact
/// and can never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, RmaError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(RmaError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = RmaError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_validation() {
        assert!(Money::new(dec!(1.0)).is_ok());
        assert!(Money::new(dec!(0.0)).is_ok());
        assert!(matches!(
            Money::new(dec!(-0.01)),
            Err(RmaError::ValidationError(_))
        ));
    }

    #[test]
    fn test_money_display_drops_trailing_zeros() {
        let money = Money::new(dec!(50000.00)).unwrap();
        assert_eq!(money.to_string(), "50000");
        let money = Money::new(dec!(19.90)).unwrap();
        assert_eq!(money.to_string(), "19.9");
    }

    #[test]
    fn test_money_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Money>("\"-5\"").is_err());
        let money: Money = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(money.value(), dec!(12.5));
    }
}
