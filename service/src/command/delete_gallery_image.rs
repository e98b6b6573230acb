//! [`Command`] for deleting a [`GalleryImage`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{gallery, GalleryImage},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`GalleryImage`].
///
/// A no-op if no [`GalleryImage`] with the provided ID exists.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteGalleryImage {
    /// ID of the [`GalleryImage`] to delete.
    pub id: gallery::Id,
}

impl<St, Pay> Command<DeleteGalleryImage> for Service<St, Pay>
where
    St: Storage<
        Delete<By<GalleryImage, gallery::Id>>,
        Ok = (),
        Err = Traced<storage::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteGalleryImage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteGalleryImage { id } = cmd;

        self.storage()
            .execute(Delete(By::<GalleryImage, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteGalleryImage`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
