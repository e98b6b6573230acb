//! [`Command`] for deleting a [`PromoCode`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{promo, PromoCode},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`PromoCode`].
///
/// A no-op if no [`PromoCode`] with the provided [`promo::Code`] exists.
#[derive(Clone, Debug, From)]
pub struct DeletePromoCode {
    /// [`promo::Code`] of the [`PromoCode`] to delete.
    pub code: promo::Code,
}

impl<St, Pay> Command<DeletePromoCode> for Service<St, Pay>
where
    St: Storage<
        Delete<By<PromoCode, promo::Code>>,
        Ok = (),
        Err = Traced<storage::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeletePromoCode,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeletePromoCode { code } = cmd;

        self.storage()
            .execute(Delete(By::<PromoCode, _>::new(code)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeletePromoCode`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
