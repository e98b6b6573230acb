//! [`Command`] for creating an [`Offer`].

use common::{operations::Insert, Percent};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{offer, promo, Offer},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for creating an [`Offer`].
#[derive(Clone, Debug, From)]
pub struct CreateOffer {
    /// [`offer::Title`] of the [`Offer`].
    pub title: offer::Title,

    /// Subtitle of the [`Offer`].
    pub subtitle: String,

    /// Description of the [`Offer`].
    pub description: String,

    /// Image reference of the [`Offer`].
    pub image_url: String,

    /// Human-readable validity text of the [`Offer`].
    pub valid_until: String,

    /// Terms text of the [`Offer`].
    pub terms: String,

    /// [`promo::Code`] attached to the [`Offer`], if any.
    pub promo_code: Option<promo::Code>,

    /// Discount attached to the [`Offer`], if any.
    pub discount: Option<Percent>,
}

impl<St, Pay> Command<CreateOffer> for Service<St, Pay>
where
    St: Storage<Insert<Offer>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = Offer;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateOffer {
            title,
            subtitle,
            description,
            image_url,
            valid_until,
            terms,
            promo_code,
            discount,
        } = cmd;

        let offer = Offer {
            id: offer::Id::new(),
            title,
            subtitle,
            description,
            image_url,
            valid_until,
            terms,
            promo_code,
            discount,
        };
        self.storage()
            .execute(Insert(offer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(offer)
    }
}

/// Error of [`CreateOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}
