//! [`Command`] for transitioning a [`Reservation`]'s [`Status`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Reservation;
use crate::{
    domain::reservation::{self, Status, StatusPatch},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for transitioning a [`Reservation`]'s [`Status`].
///
/// A no-op if no [`Reservation`] with the provided ID exists.
#[derive(Clone, Copy, Debug, From)]
pub struct UpdateReservationStatus {
    /// ID of the [`Reservation`] to transition.
    pub id: reservation::Id,

    /// New [`Status`] of the [`Reservation`].
    pub status: Status,
}

impl<St, Pay> Command<UpdateReservationStatus> for Service<St, Pay>
where
    St: Storage<Update<StatusPatch>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateReservationStatus,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateReservationStatus { id, status } = cmd;

        self.storage()
            .execute(Update(StatusPatch { id, status }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateReservationStatus`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
