//! In-memory [`Storage`] implementation.

use std::collections::HashMap;

use common::operations::{All, By, Delete, Insert, Select, Update};
use derive_more::{Display, Error as StdError};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{admin, offer, reservation, room, Offer, Reservation, RoomPricing},
    infra::storage::{self, Record, Storage, ADMIN_PASSWORD_KEY},
};

/// In-memory [`Storage`], lost on drop.
///
/// Mirrors the persisted-state layout of [`Json`] (one encoded document per
/// storage key, seeded on first read), so it can stand in for it in tests.
///
/// [`Json`]: super::Json
#[derive(Debug, Default)]
pub struct Memory {
    /// Encoded collections, indexed by their storage keys.
    cells: RwLock<HashMap<&'static str, serde_json::Value>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the value stored under the provided `key`, seeding it on first
    /// read.
    async fn load_value<T>(
        &self,
        key: &'static str,
        seed: impl FnOnce() -> T,
    ) -> Result<T, Traced<storage::Error>>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut cells = self.cells.write().await;

        if let Some(cell) = cells.get(key) {
            decode(key, cell)
        } else {
            let value = seed();
            drop(cells.insert(key, encode(key, &value)?));
            Ok(value)
        }
    }

    /// Applies the provided function to the value stored under the provided
    /// `key` (seeding it on first access), storing the result back.
    async fn update_value<T, R>(
        &self,
        key: &'static str,
        seed: impl FnOnce() -> T,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, Traced<storage::Error>>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut cells = self.cells.write().await;

        let mut value = match cells.get(key) {
            Some(cell) => decode(key, cell)?,
            None => seed(),
        };
        let out = f(&mut value);
        drop(cells.insert(key, encode(key, &value)?));
        Ok(out)
    }

    /// Applies the provided function to the whole collection of `T`s.
    async fn update_with<T: Record, R>(
        &self,
        f: impl FnOnce(&mut Vec<T>) -> R,
    ) -> Result<R, Traced<storage::Error>> {
        self.update_value(T::KEY, T::seed, f).await
    }
}

/// Decodes the value stored in the provided cell.
fn decode<T: DeserializeOwned>(
    key: &'static str,
    cell: &serde_json::Value,
) -> Result<T, Traced<storage::Error>> {
    serde_json::from_value(cell.clone()).map_err(|source| {
        tracerr::new!(storage::Error::from(Error::Codec { key, source }))
    })
}

/// Encodes the provided value for storing in a cell.
fn encode<T: Serialize>(
    key: &'static str,
    value: &T,
) -> Result<serde_json::Value, Traced<storage::Error>> {
    serde_json::to_value(value).map_err(|source| {
        tracerr::new!(storage::Error::from(Error::Codec { key, source }))
    })
}

/// In-memory storage [`Error`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Collection failed to encode or decode.
    #[display("cannot recode `{key}` collection: {source}")]
    Codec {
        /// Storage key of the collection.
        key: &'static str,

        /// Underlying codec error.
        source: serde_json::Error,
    },
}

impl<T: Record> Storage<Select<By<Vec<T>, All>>> for Memory {
    type Ok = Vec<T>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<T>, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.load_value(T::KEY, T::seed).await
    }
}

impl<T: Record> Storage<Insert<T>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert(entity): Insert<T>,
    ) -> Result<Self::Ok, Self::Err> {
        self.update_with(|items: &mut Vec<T>| items.push(entity)).await
    }
}

impl<T: Record> Storage<Delete<By<T, T::Id>>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<T, T::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.update_with(|items: &mut Vec<T>| {
            items.retain(|item| item.id() != id);
        })
        .await
    }
}

impl Storage<Update<reservation::StatusPatch>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(patch): Update<reservation::StatusPatch>,
    ) -> Result<Self::Ok, Self::Err> {
        self.update_with(|items: &mut Vec<Reservation>| {
            if let Some(r) = items.iter_mut().find(|r| r.id == patch.id) {
                r.status = patch.status;
            }
        })
        .await
    }
}

impl Storage<Update<room::PricePatch>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(patch): Update<room::PricePatch>,
    ) -> Result<Self::Ok, Self::Err> {
        self.update_with(|items: &mut Vec<RoomPricing>| {
            if let Some(r) = items.iter_mut().find(|r| r.id == patch.id) {
                r.price_per_night = patch.price_per_night;
            }
        })
        .await
    }
}

impl Storage<Update<offer::Patch>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(patch): Update<offer::Patch>,
    ) -> Result<Self::Ok, Self::Err> {
        self.update_with(|items: &mut Vec<Offer>| {
            if let Some(o) = items.iter_mut().find(|o| o.id == patch.id) {
                o.apply(patch);
            }
        })
        .await
    }
}

impl Storage<Select<By<admin::PasswordHash, All>>> for Memory {
    type Ok = admin::PasswordHash;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<admin::PasswordHash, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.load_value(ADMIN_PASSWORD_KEY, admin::seed).await
    }
}

impl Storage<Update<admin::PasswordHash>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(hash): Update<admin::PasswordHash>,
    ) -> Result<Self::Ok, Self::Err> {
        self.update_value(ADMIN_PASSWORD_KEY, admin::seed, |stored| {
            *stored = hash;
        })
        .await
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{All, By, Insert, Select, Update};

    use crate::{
        domain::{admin, reservation, room, RoomPricing},
        infra::Storage as _,
    };

    use super::Memory;

    #[tokio::test]
    async fn seeds_each_collection_once() {
        let store = Memory::new();

        let rooms: Vec<RoomPricing> =
            store.execute(Select(By::<Vec<RoomPricing>, _>::new(All))).await.unwrap();
        assert_eq!(rooms, room::seed());

        let again: Vec<RoomPricing> =
            store.execute(Select(By::<Vec<RoomPricing>, _>::new(All))).await.unwrap();
        assert_eq!(again, rooms);
    }

    #[tokio::test]
    async fn updates_room_price_in_place() {
        let store = Memory::new();
        let new_price = "500USD".parse().unwrap();

        store
            .execute(Update(room::PricePatch {
                id: room::Id::MudHouse,
                price_per_night: new_price,
            }))
            .await
            .unwrap();

        let rooms: Vec<RoomPricing> =
            store.execute(Select(By::<Vec<RoomPricing>, _>::new(All))).await.unwrap();
        let mud_house = rooms
            .iter()
            .find(|r| r.id == room::Id::MudHouse)
            .unwrap();
        assert_eq!(mud_house.price_per_night, new_price);
    }

    #[tokio::test]
    async fn status_update_of_unknown_reservation_is_a_no_op() {
        let store = Memory::new();

        store
            .execute(Update(reservation::StatusPatch {
                id: reservation::Id::new(),
                status: reservation::Status::Cancelled,
            }))
            .await
            .unwrap();

        let all: Vec<crate::domain::Reservation> =
            store.execute(Select(By::<Vec<crate::domain::Reservation>, _>::new(All))).await.unwrap();
        assert_eq!(all, vec![]);
    }

    #[tokio::test]
    async fn admin_password_defaults_and_updates() {
        let store = Memory::new();

        let stored: admin::PasswordHash =
            store.execute(Select(By::<admin::PasswordHash, _>::new(All))).await.unwrap();
        assert_eq!(stored, admin::seed());

        let new_hash = admin::PasswordHash::new(
            &admin::Password::new("s3cret-enough").unwrap(),
        );
        store.execute(Update(new_hash.clone())).await.unwrap();

        let stored: admin::PasswordHash =
            store.execute(Select(By::<admin::PasswordHash, _>::new(All))).await.unwrap();
        assert_eq!(stored, new_hash);
    }

    #[tokio::test]
    async fn insert_roundtrips() {
        let store = Memory::new();
        let extra = RoomPricing {
            id: room::Id::Glamping,
            name: "Glamping Deluxe".parse().unwrap(),
            price_per_night: "400USD".parse().unwrap(),
        };

        store.execute(Insert(extra.clone())).await.unwrap();

        let rooms: Vec<RoomPricing> =
            store.execute(Select(By::<Vec<RoomPricing>, _>::new(All))).await.unwrap();
        assert!(rooms.contains(&extra));
    }
}
