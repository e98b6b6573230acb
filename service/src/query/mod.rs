//! [`Query`] definition.

pub mod gallery;
pub mod offers;
pub mod promo_codes;
pub mod reservations;
pub mod room_prices;

use common::operations::{All, By, Select};
use tracerr::Traced;

use crate::{
    infra::{storage, Storage},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Storage`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct StorageQuery<T>(T);

impl<W, B> StorageQuery<By<W, B>> {
    /// Creates a new [`StorageQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<W> StorageQuery<By<W, All>> {
    /// Creates a new [`StorageQuery`] selecting the whole collection of `W`s.
    #[must_use]
    pub fn all() -> Self {
        Self(By::new(All))
    }
}

impl<St, Pay, W, B> Query<StorageQuery<By<W, B>>> for Service<St, Pay>
where
    St: Storage<Select<By<W, B>>, Ok = W, Err = Traced<storage::Error>>,
{
    type Ok = W;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        StorageQuery(by): StorageQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.storage()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}
