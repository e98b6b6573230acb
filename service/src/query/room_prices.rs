//! [`Query`] collection related to the room catalog pricing.

use common::{
    operations::{All, By, Select},
    Money,
};
use tracerr::Traced;

use crate::{
    domain::{room, RoomPricing},
    infra::{storage, Storage},
    Query, Service,
};

use super::StorageQuery;

/// Queries the whole room catalog with its current pricing.
pub type List = StorageQuery<By<Vec<RoomPricing>, All>>;

/// Queries the current per-night price of the provided room type, if it's
/// present in the catalog.
#[derive(Clone, Copy, Debug)]
pub struct PriceOf(pub room::Id);

impl<St, Pay> Query<PriceOf> for Service<St, Pay>
where
    St: Storage<
        Select<By<Vec<RoomPricing>, All>>,
        Ok = Vec<RoomPricing>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Option<Money>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        PriceOf(id): PriceOf,
    ) -> Result<Self::Ok, Self::Err> {
        let rooms = self
            .storage()
            .execute(Select(By::new(All)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(rooms
            .into_iter()
            .find(|r: &RoomPricing| r.id == id)
            .map(|r| r.price_per_night))
    }
}

#[cfg(test)]
mod spec {
    use crate::{domain::room, infra::Memory, Config, Query as _, Service};

    use super::PriceOf;

    #[tokio::test]
    async fn reads_seeded_price() {
        let service = Service::new(
            Config::from_jwt_secret(b"test-secret"),
            Memory::new(),
        );

        let price = service
            .execute(PriceOf(room::Id::TreeHouse))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(price, "550USD".parse().unwrap());
    }
}
