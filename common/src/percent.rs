//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Floating-point percentage, guaranteed to be within `[0, 100]`.
///
/// The range is enforced on deserialization too, so no persisted value can
/// smuggle in an out-of-range percentage.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(try_from = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Applies this [`Percent`] to the provided amount, rounding half-up to
    /// the nearest whole unit.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        (amount * self.0 / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("percent value out of `[0, 100]` range")
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn rejects_out_of_range() {
        assert!(Percent::new(Decimal::from(-1)).is_none());
        assert!(Percent::new(Decimal::from(101)).is_none());
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        let p: Percent = serde_json::from_str("20").unwrap();
        assert_eq!(p, Percent::new(Decimal::from(20)).unwrap());

        assert!(serde_json::from_str::<Percent>("150").is_err());
        assert!(serde_json::from_str::<Percent>("-5").is_err());
    }

    #[test]
    fn applies_with_half_up_rounding() {
        let p = Percent::new(Decimal::from(20)).unwrap();
        assert_eq!(p.of(Decimal::from(4350)), Decimal::from(870));

        // 15% of 1210 = 181.5, rounds away from the midpoint.
        let p = Percent::new(Decimal::from(15)).unwrap();
        assert_eq!(p.of(Decimal::from(1210)), Decimal::from(182));

        assert_eq!(Percent::ZERO.of(Decimal::from(4350)), Decimal::ZERO);
    }
}
