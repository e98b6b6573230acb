//! Promotional code definitions.

use std::str::FromStr;

use common::Percent;
use derive_more::{AsRef, Display};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Promotional code granting a percentage discount on a booking.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PromoCode {
    /// [`Code`] identifying this promotion, unique within the collection.
    pub code: Code,

    /// Discount this promotion grants.
    pub discount: Percent,

    /// Human-readable description of this promotion.
    pub description: String,

    /// Advisory validity text. Never enforced.
    pub valid_until: Option<String>,
}

/// Token of a [`PromoCode`], normalized to its trimmed uppercase form.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    /// Creates a new [`Code`] by normalizing the given token (trimming and
    /// uppercasing), if the result is valid.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let token = token.as_ref().trim().to_uppercase();
        Self::check(&token).then_some(Self(token))
    }

    /// Checks whether the given normalized `token` is a valid [`Code`].
    fn check(token: impl AsRef<str>) -> bool {
        let token = token.as_ref();
        !token.is_empty() && token.len() <= 32
    }
}

impl FromStr for Code {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Code`")
    }
}

/// Returns the default promotions, persisted on first read.
#[expect(clippy::missing_panics_doc, reason = "infallible")]
#[must_use]
pub fn seed() -> Vec<PromoCode> {
    [
        ("AARA10", 10, "10% off your stay"),
        ("WELCOME20", 20, "20% welcome discount"),
        ("RETREAT15", 15, "15% retreat special"),
    ]
    .into_iter()
    .map(|(code, percent, description)| PromoCode {
        code: Code::new(code).expect("valid code"),
        discount: Percent::new(Decimal::from(percent)).expect("in range"),
        description: description.into(),
        valid_until: None,
    })
    .collect()
}

#[cfg(test)]
mod spec {
    use super::Code;

    #[test]
    fn normalizes_on_construction() {
        assert_eq!(
            AsRef::<str>::as_ref(&Code::new("  welcome20 ").unwrap()),
            "WELCOME20",
        );
        assert_eq!(
            AsRef::<str>::as_ref(&Code::new("WELCOME20").unwrap()),
            "WELCOME20",
        );
        assert!(Code::new("   ").is_none());
        assert!(Code::new("").is_none());
    }

    #[test]
    fn compares_by_normalized_form() {
        assert_eq!(Code::new("aara10").unwrap(), Code::new("AARA10").unwrap());
    }
}
