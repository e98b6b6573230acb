//! [`Reservation`] definitions.

use std::{num::NonZeroU8, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::{Period, RoomSelection};

/// Committed booking, created once at successful payment.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Reservation {
    /// ID of this [`Reservation`].
    pub id: Id,

    /// Rooms booked, with per-night price snapshots taken at booking time.
    pub rooms: Vec<RoomSelection>,

    /// Stay [`Period`] of this [`Reservation`].
    pub period: Period,

    /// Party size of this [`Reservation`].
    pub guests: Guests,

    /// [`Contact`] details of the booking guest.
    pub contact: Contact,

    /// Total price, already net of any discount.
    pub total: Money,

    /// Number of nights of the stay.
    pub nights: u32,

    /// [`DateTime`] when this [`Reservation`] was created.
    #[serde(with = "common::datetime::serde::unix_timestamp")]
    pub created_at: CreationDateTime,

    /// [`Status`] of this [`Reservation`].
    pub status: Status,
}

/// ID of a [`Reservation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Status of a [`Reservation`]."]
    #[format = "kebab-case"]
    enum Status {
        #[doc = "Paid and confirmed."]
        Confirmed = 1,

        #[doc = "Awaiting confirmation."]
        Pending = 2,

        #[doc = "Cancelled by an admin."]
        Cancelled = 3,
    }
}

/// Party size of a [`Reservation`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Guests {
    /// Number of adults, at least one.
    pub adults: NonZeroU8,

    /// Number of children.
    pub children: u8,
}

impl Default for Guests {
    fn default() -> Self {
        Self {
            adults: NonZeroU8::new(2).expect("non-zero"),
            children: 0,
        }
    }
}

/// Contact details of the booking guest.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Contact {
    /// First [`GivenName`] of the guest.
    pub first_name: GivenName,

    /// Last [`GivenName`] of the guest.
    pub last_name: GivenName,

    /// [`Email`] of the guest.
    pub email: Email,

    /// [`Phone`] of the guest.
    pub phone: Phone,

    /// Free-text special requests, if any.
    pub special_requests: Option<String>,
}

/// First or last name of a guest.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct GivenName(String);

impl GivenName {
    /// Creates a new [`GivenName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`GivenName`]:
    /// at least 2 characters, trimmed, at most 100 characters.
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name
            && name.chars().count() >= 2
            && name.len() <= 100
    }
}

impl FromStr for GivenName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `GivenName`")
    }
}

/// Email address of a guest.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a syntactically valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a guest.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`]: at least 10
    /// characters of digits, separators or a leading `+`.
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^\+?[\d\s()-]{9,}\d$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Patch transitioning the [`Status`] of a single [`Reservation`].
#[derive(Clone, Copy, Debug)]
pub struct StatusPatch {
    /// ID of the [`Reservation`] to transition.
    pub id: Id,

    /// New [`Status`].
    pub status: Status,
}

/// [`DateTime`] when a [`Reservation`] was created.
pub type CreationDateTime = DateTimeOf<(Reservation, unit::Creation)>;

/// Returns the default reservations collection: empty.
#[must_use]
pub fn seed() -> Vec<Reservation> {
    Vec::new()
}

#[cfg(test)]
mod spec {
    use super::{Email, GivenName, Guests, Phone};

    #[test]
    fn given_name_requires_two_chars() {
        assert!(GivenName::new("Jo").is_some());
        assert!(GivenName::new("J").is_none());
        assert!(GivenName::new(" Jo").is_none());
    }

    #[test]
    fn email_is_syntactically_checked() {
        assert!(Email::new("guest@example.com").is_some());
        assert!(Email::new("guest@example").is_none());
        assert!(Email::new("not-an-email").is_none());
        assert!(Email::new("two@@example.com").is_none());
    }

    #[test]
    fn phone_requires_ten_chars() {
        assert!(Phone::new("0123456789").is_some());
        assert!(Phone::new("+1 555 123 4567").is_some());
        assert!(Phone::new("12345").is_none());
        assert!(Phone::new("not a phone").is_none());
    }

    #[test]
    fn guests_default_to_two_adults() {
        let guests = Guests::default();
        assert_eq!(guests.adults.get(), 2);
        assert_eq!(guests.children, 0);
    }
}
