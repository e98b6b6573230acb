//! Room catalog definitions.

use std::str::FromStr;

use common::{define_kind, money::Currency, Money};
use derive_more::{AsRef, Display};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-night pricing of a room type.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoomPricing {
    /// ID of the room type.
    pub id: Id,

    /// [`Name`] of the room type.
    pub name: Name,

    /// Price per night of the room type.
    pub price_per_night: Money,
}

define_kind! {
    #[doc = "ID of a room type in the fixed resort catalog."]
    #[format = "kebab-case"]
    enum Id {
        #[doc = "Mud house."]
        MudHouse = 1,

        #[doc = "Tree house."]
        TreeHouse = 2,

        #[doc = "Luxury glamping tent."]
        Glamping = 3,

        #[doc = "Luxury suite."]
        LuxurySuite = 4,

        #[doc = "Family suite."]
        FamilySuite = 5,
    }
}

/// Display name of a room type.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Patch updating the per-night price of a single room type.
#[derive(Clone, Copy, Debug)]
pub struct PricePatch {
    /// ID of the room type to reprice.
    pub id: Id,

    /// New price per night.
    pub price_per_night: Money,
}

/// Returns the default catalog pricing, persisted on first read.
#[expect(clippy::missing_panics_doc, reason = "infallible")]
#[must_use]
pub fn seed() -> Vec<RoomPricing> {
    [
        (Id::MudHouse, "Mud House", 450),
        (Id::TreeHouse, "Tree House", 550),
        (Id::Glamping, "Luxury Glamping", 350),
        (Id::LuxurySuite, "Luxury Suite", 750),
        (Id::FamilySuite, "Family Suite", 650),
    ]
    .into_iter()
    .map(|(id, name, price)| RoomPricing {
        id,
        name: Name::new(name).expect("valid name"),
        price_per_night: Money {
            amount: Decimal::from(price),
            currency: Currency::Usd,
        },
    })
    .collect()
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Id;

    #[test]
    fn id_round_trips_through_kebab_case() {
        assert_eq!(Id::MudHouse.to_string(), "mud-house");
        assert_eq!(Id::from_str("luxury-suite").unwrap(), Id::LuxurySuite);
        assert!(Id::from_str("penthouse").is_err());
    }

    #[test]
    fn seed_covers_whole_catalog() {
        let seed = super::seed();
        assert_eq!(seed.len(), 5);
        assert!(seed.iter().all(|r| r.price_per_night.is_positive()));
    }
}
