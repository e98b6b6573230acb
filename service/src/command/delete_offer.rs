//! [`Command`] for deleting an [`Offer`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{offer, Offer},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for deleting an [`Offer`].
///
/// A no-op if no [`Offer`] with the provided ID exists.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteOffer {
    /// ID of the [`Offer`] to delete.
    pub id: offer::Id,
}

impl<St, Pay> Command<DeleteOffer> for Service<St, Pay>
where
    St: Storage<
        Delete<By<Offer, offer::Id>>,
        Ok = (),
        Err = Traced<storage::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteOffer { id } = cmd;

        self.storage()
            .execute(Delete(By::<Offer, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
