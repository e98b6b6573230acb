//! [`Query`] collection related to the multiple [`PromoCode`]s.

use common::operations::{All, By, Select};
use tracerr::Traced;

use crate::{
    domain::{promo, PromoCode},
    infra::{storage, Storage},
    Query, Service,
};

use super::StorageQuery;

/// Queries the list of all [`PromoCode`]s.
pub type List = StorageQuery<By<Vec<PromoCode>, All>>;

/// Queries the [`PromoCode`] matching the provided raw token, if any.
///
/// The token is normalized the same way [`promo::Code`]s are, so lookups are
/// case- and whitespace-insensitive.
#[derive(Clone, Debug)]
pub struct Validate(pub String);

impl<St, Pay> Query<Validate> for Service<St, Pay>
where
    St: Storage<
        Select<By<Vec<PromoCode>, All>>,
        Ok = Vec<PromoCode>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Option<PromoCode>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Validate(token): Validate,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(code) = promo::Code::new(token) else {
            return Ok(None);
        };

        let codes = self
            .storage()
            .execute(Select(By::new(All)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(codes.into_iter().find(|c: &PromoCode| c.code == code))
    }
}

#[cfg(test)]
mod spec {
    use crate::{infra::Memory, Config, Query as _, Service};

    use super::Validate;

    fn service() -> Service<Memory> {
        Service::new(Config::from_jwt_secret(b"test-secret"), Memory::new())
    }

    #[tokio::test]
    async fn matches_case_insensitively() {
        let service = service();

        let found = service
            .execute(Validate("  welcome20 ".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(AsRef::<str>::as_ref(&found.code), "WELCOME20");
    }

    #[tokio::test]
    async fn unknown_token_yields_none() {
        let service = service();

        let found =
            service.execute(Validate("NOSUCH".into())).await.unwrap();
        assert_eq!(found, None);

        let found = service.execute(Validate("   ".into())).await.unwrap();
        assert_eq!(found, None);
    }
}
