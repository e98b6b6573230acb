//! [`Storage`]-related implementations.
//!
//! Every persisted collection lives under its own storage key and is
//! rewritten whole on each mutation, as the persisted-state layout requires.

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "json")]
pub mod memory;

use derive_more::{Display, Error as StdError, From};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{
    gallery, offer, promo, reservation, room, GalleryImage, Offer, PromoCode,
    Reservation, RoomPricing,
};

#[cfg(feature = "json")]
pub use self::{json::Json, memory::Memory};

/// Storage operation.
pub use common::Handler as Storage;

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "json")]
    /// [`Json`] error.
    Json(json::Error),

    #[cfg(feature = "json")]
    /// [`Memory`] error.
    Memory(memory::Error),
}

/// Entity persisted as a named collection.
///
/// This is the single generic repository contract every collection shares:
/// a storage key, a seed persisted on first read, and an identifier for
/// by-id operations.
pub trait Record: Clone + DeserializeOwned + Serialize {
    /// Storage key of the collection.
    const KEY: &'static str;

    /// Identifier selecting one record within the collection.
    type Id: PartialEq;

    /// Returns the identifier of this record.
    fn id(&self) -> Self::Id;

    /// Returns the default collection, persisted on first read.
    fn seed() -> Vec<Self>;
}

impl Record for Reservation {
    const KEY: &'static str = "hotel_reservations";

    type Id = reservation::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn seed() -> Vec<Self> {
        reservation::seed()
    }
}

impl Record for RoomPricing {
    const KEY: &'static str = "room_pricing";

    type Id = room::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn seed() -> Vec<Self> {
        room::seed()
    }
}

impl Record for Offer {
    const KEY: &'static str = "offers_data";

    type Id = offer::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn seed() -> Vec<Self> {
        offer::seed()
    }
}

impl Record for PromoCode {
    const KEY: &'static str = "promo_codes";

    type Id = promo::Code;

    fn id(&self) -> Self::Id {
        self.code.clone()
    }

    fn seed() -> Vec<Self> {
        promo::seed()
    }
}

impl Record for GalleryImage {
    const KEY: &'static str = "gallery_data";

    type Id = gallery::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn seed() -> Vec<Self> {
        gallery::seed()
    }
}

/// Storage key of the single admin [`PasswordHash`] value.
///
/// [`PasswordHash`]: crate::domain::admin::PasswordHash
pub const ADMIN_PASSWORD_KEY: &str = "aarawild_admin_password";
