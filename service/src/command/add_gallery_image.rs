//! [`Command`] for adding a [`GalleryImage`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{gallery, GalleryImage},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for adding a [`GalleryImage`].
#[derive(Clone, Debug, From)]
pub struct AddGalleryImage {
    /// Image reference of the [`GalleryImage`].
    pub src: String,

    /// Alternative text of the [`GalleryImage`].
    pub alt: String,

    /// [`gallery::Category`] the [`GalleryImage`] belongs to.
    pub category: gallery::Category,
}

impl<St, Pay> Command<AddGalleryImage> for Service<St, Pay>
where
    St: Storage<Insert<GalleryImage>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = GalleryImage;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddGalleryImage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddGalleryImage { src, alt, category } = cmd;

        let image = GalleryImage {
            id: gallery::Id::new(),
            src,
            alt,
            category,
        };
        self.storage()
            .execute(Insert(image.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(image)
    }
}

/// Error of [`AddGalleryImage`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
