//! [`Command`] for repricing a room type.

use common::{operations::Update, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::room::{self, PricePatch},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for updating the per-night price of a single room type.
///
/// Existing reservations keep their price snapshots; only future quotes see
/// the new price.
#[derive(Clone, Copy, Debug, From)]
pub struct UpdateRoomPrice {
    /// ID of the room type to reprice.
    pub id: room::Id,

    /// New per-night price.
    pub price_per_night: Money,
}

impl<St, Pay> Command<UpdateRoomPrice> for Service<St, Pay>
where
    St: Storage<Update<PricePatch>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateRoomPrice,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateRoomPrice {
            id,
            price_per_night,
        } = cmd;

        if !price_per_night.is_positive() {
            return Err(tracerr::new!(E::NonPositivePrice(price_per_night)));
        }

        self.storage()
            .execute(Update(PricePatch {
                id,
                price_per_night,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateRoomPrice`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),

    /// Provided price is zero or negative.
    #[display("price per night must be positive, got {_0}")]
    #[from(ignore)]
    NonPositivePrice(#[error(not(source))] Money),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::room, infra::Memory, query, Command as _, Config, Query as _,
        Service,
    };

    use super::UpdateRoomPrice;

    fn service() -> Service<Memory> {
        Service::new(Config::from_jwt_secret(b"test-secret"), Memory::new())
    }

    #[tokio::test]
    async fn reprices_catalog_entry() {
        let service = service();

        service
            .execute(UpdateRoomPrice {
                id: room::Id::Glamping,
                price_per_night: "400USD".parse().unwrap(),
            })
            .await
            .unwrap();

        let price = service
            .execute(query::room_prices::PriceOf(room::Id::Glamping))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(price, "400USD".parse().unwrap());
    }

    #[tokio::test]
    async fn rejects_non_positive_price() {
        let service = service();

        let err = service
            .execute(UpdateRoomPrice {
                id: room::Id::Glamping,
                price_per_night: "0USD".parse().unwrap(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must be positive"));

        let price = service
            .execute(query::room_prices::PriceOf(room::Id::Glamping))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(price, "350USD".parse().unwrap());
    }
}
