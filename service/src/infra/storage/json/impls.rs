//! [`Storage`] operations of a [`Json`] storage.

use common::operations::{All, By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{admin, offer, reservation, room, Offer, Reservation, RoomPricing},
    infra::storage::{self, Record, Storage, ADMIN_PASSWORD_KEY},
};

use super::Json;

impl<T: Record> Storage<Select<By<Vec<T>, All>>> for Json {
    type Ok = Vec<T>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<T>, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.read().await;

        self.load().await
    }
}

impl<T: Record> Storage<Insert<T>> for Json {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert(entity): Insert<T>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.write().await;

        let mut items = self.load::<T>().await?;
        items.push(entity);
        self.persist(&items).await
    }
}

impl<T: Record> Storage<Delete<By<T, T::Id>>> for Json {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<T, T::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.write().await;

        let id = by.into_inner();
        let mut items = self.load::<T>().await?;
        items.retain(|item| item.id() != id);
        self.persist(&items).await
    }
}

impl Storage<Update<reservation::StatusPatch>> for Json {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(patch): Update<reservation::StatusPatch>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.write().await;

        let mut items = self.load::<Reservation>().await?;
        let Some(reservation) =
            items.iter_mut().find(|r| r.id == patch.id)
        else {
            return Ok(());
        };
        reservation.status = patch.status;
        self.persist(&items).await
    }
}

impl Storage<Update<room::PricePatch>> for Json {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(patch): Update<room::PricePatch>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.write().await;

        let mut items = self.load::<RoomPricing>().await?;
        let Some(room) = items.iter_mut().find(|r| r.id == patch.id) else {
            return Ok(());
        };
        room.price_per_night = patch.price_per_night;
        self.persist(&items).await
    }
}

impl Storage<Update<offer::Patch>> for Json {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(patch): Update<offer::Patch>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.write().await;

        let mut items = self.load::<Offer>().await?;
        let Some(offer) = items.iter_mut().find(|o| o.id == patch.id) else {
            return Ok(());
        };
        offer.apply(patch);
        self.persist(&items).await
    }
}

impl Storage<Select<By<admin::PasswordHash, All>>> for Json {
    type Ok = admin::PasswordHash;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<admin::PasswordHash, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.read().await;

        self.load_value(ADMIN_PASSWORD_KEY, admin::seed).await
    }
}

impl Storage<Update<admin::PasswordHash>> for Json {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(hash): Update<admin::PasswordHash>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.lock.write().await;

        self.persist_value(ADMIN_PASSWORD_KEY, &hash).await
    }
}
