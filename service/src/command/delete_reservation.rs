//! [`Command`] for deleting a [`Reservation`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{reservation, Reservation},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Reservation`].
///
/// A no-op if no [`Reservation`] with the provided ID exists.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteReservation {
    /// ID of the [`Reservation`] to delete.
    pub id: reservation::Id,
}

impl<St, Pay> Command<DeleteReservation> for Service<St, Pay>
where
    St: Storage<
        Delete<By<Reservation, reservation::Id>>,
        Ok = (),
        Err = Traced<storage::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteReservation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteReservation { id } = cmd;

        self.storage()
            .execute(Delete(By::<Reservation, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteReservation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
