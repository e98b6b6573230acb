//! [`Command`] for updating an [`Offer`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Offer;
use crate::{
    domain::offer,
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for merging an [`offer::Patch`] into a stored [`Offer`].
///
/// A no-op if no [`Offer`] with the patched ID exists.
#[derive(Clone, Debug, From)]
pub struct UpdateOffer {
    /// [`offer::Patch`] to merge.
    pub patch: offer::Patch,
}

impl<St, Pay> Command<UpdateOffer> for Service<St, Pay>
where
    St: Storage<Update<offer::Patch>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateOffer { patch } = cmd;

        self.storage()
            .execute(Update(patch))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
