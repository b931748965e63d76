//! Money as integer currency units
//!
//! MONI groups are single-currency and all amounts are integral (minor units
//! or whole units, depending on the group's currency convention). Storing
//! amounts as `i64` keeps every split and settlement computation exact; there
//! is no floating-point money anywhere in the system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in integer currency units
///
/// The unit is whatever the owning group uses (e.g. cents, or whole units for
/// zero-decimal currencies); this type never subdivides it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount
    pub const ZERO: Money = Money(0);

    /// Creates a Money value from integer currency units
    pub fn new(units: i64) -> Self {
        Self(units)
    }

    /// Returns the amount in integer currency units
    pub fn units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns -1, 0, or 1 according to the sign of the amount
    pub fn signum(&self) -> i64 {
        self.0.signum()
    }

    /// Returns the smaller of two amounts
    pub fn min(self, other: Money) -> Money {
        Self(self.0.min(other.0))
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> i64 {
        money.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(10050);
        assert_eq!(m.units(), 10050);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(10000);
        let b = Money::new(5000);

        assert_eq!((a + b).units(), 15000);
        assert_eq!((a - b).units(), 5000);
        assert_eq!((-b).units(), -5000);
    }

    #[test]
    fn test_money_sign_queries() {
        assert!(Money::new(1).is_positive());
        assert!(Money::new(-1).is_negative());
        assert!(Money::ZERO.is_zero());
        assert_eq!(Money::new(-7).abs(), Money::new(7));
        assert_eq!(Money::new(-7).signum(), -1);
    }

    #[test]
    fn test_money_checked_add_overflow() {
        let max = Money::new(i64::MAX);
        let result = max.checked_add(&Money::new(1));
        assert_eq!(result, Err(MoneyError::Overflow));
    }

    #[test]
    fn test_money_sum() {
        let parts = vec![Money::new(34), Money::new(33), Money::new(33)];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total, Money::new(100));
    }

    #[test]
    fn test_money_serde_transparent() {
        let m = Money::new(90000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "90000");

        let back: Money = serde_json::from_str("90000").unwrap();
        assert_eq!(back, m);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_commutative(
            a in -1_000_000_000i64..1_000_000_000i64,
            b in -1_000_000_000i64..1_000_000_000i64
        ) {
            let ma = Money::new(a);
            let mb = Money::new(b);

            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn money_subtraction_inverts_addition(
            a in -1_000_000_000i64..1_000_000_000i64,
            b in -1_000_000_000i64..1_000_000_000i64
        ) {
            let ma = Money::new(a);
            let mb = Money::new(b);

            prop_assert_eq!((ma + mb) - mb, ma);
        }
    }
}
