//! [`Command`] for creating a [`PromoCode`].

use common::{
    operations::{All, By, Insert, Select},
    Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{promo, PromoCode},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for creating a [`PromoCode`].
#[derive(Clone, Debug, From)]
pub struct CreatePromoCode {
    /// [`promo::Code`] identifying the promotion.
    pub code: promo::Code,

    /// Discount the promotion grants.
    pub discount: Percent,

    /// Human-readable description of the promotion.
    pub description: String,

    /// Advisory validity text, if any.
    pub valid_until: Option<String>,
}

impl<St, Pay> Command<CreatePromoCode> for Service<St, Pay>
where
    St: Storage<
            Select<By<Vec<PromoCode>, All>>,
            Ok = Vec<PromoCode>,
            Err = Traced<storage::Error>,
        > + Storage<Insert<PromoCode>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = PromoCode;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreatePromoCode,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreatePromoCode {
            code,
            discount,
            description,
            valid_until,
        } = cmd;

        let existing: Vec<PromoCode> = self
            .storage()
            .execute(Select(By::new(All)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.iter().any(|p| p.code == code) {
            return Err(tracerr::new!(E::CodeOccupied(code)));
        }

        let promo_code = PromoCode {
            code,
            discount,
            description,
            valid_until,
        };
        self.storage()
            .execute(Insert(promo_code.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(promo_code)
    }
}

/// Error of [`CreatePromoCode`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),

    /// [`PromoCode`] with the provided [`promo::Code`] exists already.
    #[display("`PromoCode({_0})` exists already")]
    #[from(ignore)]
    CodeOccupied(#[error(not(source))] promo::Code),
}

#[cfg(test)]
mod spec {
    use common::Percent;
    use rust_decimal::Decimal;

    use crate::{
        domain::promo, infra::Memory, Command as _, Config, Service,
    };

    use super::CreatePromoCode;

    fn command(code: &str) -> CreatePromoCode {
        CreatePromoCode {
            code: promo::Code::new(code).unwrap(),
            discount: Percent::new(Decimal::from(25)).unwrap(),
            description: "25% off".into(),
            valid_until: None,
        }
    }

    #[tokio::test]
    async fn rejects_duplicate_of_seeded_code() {
        let service = Service::new(
            Config::from_jwt_secret(b"test-secret"),
            Memory::new(),
        );

        // Normalization makes this collide with the seeded `AARA10`.
        let err =
            service.execute(command("  aara10 ")).await.unwrap_err();
        assert!(err.to_string().contains("exists already"));
    }

    #[tokio::test]
    async fn creates_fresh_code() {
        let service = Service::new(
            Config::from_jwt_secret(b"test-secret"),
            Memory::new(),
        );

        let created = service.execute(command("spring25")).await.unwrap();
        assert_eq!(AsRef::<str>::as_ref(&created.code), "SPRING25");
    }
}
