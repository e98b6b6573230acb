//! Booking flow definitions: pricing and the reservation [`Wizard`].

pub mod payment;
pub mod wizard;

use std::fmt;

use common::{money::Currency, DateTime, Money};
use derive_more::Into;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::domain::{
    promo::PromoCode,
    reservation::{Contact, Guests},
    room::{self, RoomPricing},
};

pub use self::wizard::Wizard;

/// Booking flow limits.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Maximum [`Quantity`] of a single room type per booking.
    #[default(5)]
    pub max_room_quantity: u8,
}

impl Config {
    /// Creates a [`Quantity`] if the given `quantity` is within
    /// `1..=max_room_quantity` of this [`Config`].
    ///
    /// This is the only checked way to obtain a [`Quantity`], so every
    /// booking respects the configured limit.
    #[must_use]
    pub fn quantity(&self, quantity: u8) -> Option<Quantity> {
        ((1..=self.max_room_quantity).contains(&quantity))
            .then_some(Quantity(quantity))
    }
}

/// Number of rooms of one type in a booking, at least one and within the
/// configured limit.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Into, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct Quantity(u8);

impl Quantity {
    /// Single room.
    pub const ONE: Self = Self(1);

    /// Returns this [`Quantity`] as a number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stay period with the check-out strictly after the check-in.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Period {
    /// Check-in [`DateTime`].
    #[serde(with = "common::datetime::serde::unix_timestamp")]
    check_in: DateTime,

    /// Check-out [`DateTime`].
    #[serde(with = "common::datetime::serde::unix_timestamp")]
    check_out: DateTime,
}

impl Period {
    /// Seconds in one night.
    const SECS_PER_NIGHT: u64 = 24 * 60 * 60;

    /// Creates a new [`Period`] if `check_out` is strictly after `check_in`.
    #[must_use]
    pub fn new(check_in: DateTime, check_out: DateTime) -> Option<Self> {
        (check_out > check_in).then_some(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in [`DateTime`] of this [`Period`].
    #[must_use]
    pub fn check_in(&self) -> DateTime {
        self.check_in
    }

    /// Returns the check-out [`DateTime`] of this [`Period`].
    #[must_use]
    pub fn check_out(&self) -> DateTime {
        self.check_out
    }

    /// Returns the number of nights of this [`Period`], rounding partial
    /// nights up. Always at least one.
    #[must_use]
    pub fn nights(&self) -> u32 {
        let secs = (self.check_out - self.check_in).as_secs();
        u32::try_from(secs.div_ceil(Self::SECS_PER_NIGHT))
            .unwrap_or(u32::MAX)
    }
}

/// Selection of one room type in a booking, with the per-night price
/// snapshotted at selection time.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoomSelection {
    /// ID of the selected room type.
    pub room: room::Id,

    /// Display [`room::Name`] of the selected room type.
    pub name: room::Name,

    /// Per-night price snapshot.
    pub price_per_night: Money,

    /// Number of rooms of this type.
    pub quantity: Quantity,
}

impl RoomSelection {
    /// Creates a new [`RoomSelection`] of the provided `pricing` catalog
    /// entry.
    #[must_use]
    pub fn new(pricing: &RoomPricing, quantity: Quantity) -> Self {
        Self {
            room: pricing.id,
            name: pricing.name.clone(),
            price_per_night: pricing.price_per_night,
            quantity,
        }
    }
}

/// Computed pricing of a booking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Number of nights, `0` while the stay period is not picked yet.
    pub nights: u32,

    /// Price of the selected rooms over the stay, before any discount.
    pub subtotal: Money,

    /// Discount granted by the applied promotion, rounded half-up to a whole
    /// currency unit.
    pub discount: Money,

    /// Final price: subtotal net of discount. Never negative.
    pub total: Money,
}

impl Quote {
    /// Calculates a [`Quote`] for the provided selections, stay period and
    /// applied promotion.
    #[must_use]
    pub fn calculate(
        rooms: &[RoomSelection],
        period: Option<&Period>,
        promo: Option<&PromoCode>,
    ) -> Self {
        let nights = period.map_or(0, Period::nights);
        let currency = rooms
            .first()
            .map_or(Currency::Usd, |r| r.price_per_night.currency);

        let per_night = rooms
            .iter()
            .map(|r| {
                r.price_per_night.amount * Decimal::from(r.quantity.get())
            })
            .sum::<Decimal>();
        let subtotal = per_night * Decimal::from(nights);

        let discount =
            promo.map_or(Decimal::ZERO, |p| p.discount.of(subtotal));

        Self {
            nights,
            subtotal: Money {
                amount: subtotal,
                currency,
            },
            discount: Money {
                amount: discount,
                currency,
            },
            total: Money {
                amount: subtotal - discount,
                currency,
            },
        }
    }
}

/// Checkout payload of a completed [`Wizard`] flow, ready for payment and
/// commit.
#[derive(Clone, Debug)]
pub struct Order {
    /// Selected rooms with price snapshots.
    pub rooms: Vec<RoomSelection>,

    /// Stay [`Period`].
    pub period: Period,

    /// Party size.
    pub guests: Guests,

    /// Guest [`Contact`] details.
    pub contact: Contact,

    /// Applied promotion, if any.
    pub promo: Option<PromoCode>,
}

impl Order {
    /// Calculates the current [`Quote`] of this [`Order`].
    #[must_use]
    pub fn quote(&self) -> Quote {
        Quote::calculate(&self.rooms, Some(&self.period), self.promo.as_ref())
    }
}
