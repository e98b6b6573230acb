//! [`Command`] for placing a [`Reservation`].

use common::{
    operations::{Insert, Perform},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        booking::{
            payment::{self, Charge, Receipt},
            Order,
        },
        reservation, Reservation,
    },
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for placing a [`Reservation`] out of a completed booking
/// [`Order`].
///
/// The [`Order`] is charged first; the [`Reservation`] is committed only
/// once the charge succeeds, already [`Confirmed`].
///
/// [`Confirmed`]: reservation::Status::Confirmed
#[derive(Clone, Debug, From)]
pub struct PlaceReservation {
    /// Checkout [`Order`] to charge and commit.
    pub order: Order,
}

impl<St, Pay> Command<PlaceReservation> for Service<St, Pay>
where
    St: Storage<Insert<Reservation>, Ok = (), Err = Traced<storage::Error>>,
    Pay: payment::Gateway<
        Perform<Charge>,
        Ok = Receipt,
        Err = payment::Error,
    >,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: PlaceReservation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PlaceReservation { order } = cmd;

        let quote = order.quote();
        let receipt = self
            .payment()
            .execute(Perform(Charge {
                amount: quote.total,
            }))
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;
        tracing::info!(reference = %receipt.reference, "charge authorized");

        let reservation = Reservation {
            id: reservation::Id::new(),
            rooms: order.rooms,
            period: order.period,
            guests: order.guests,
            contact: order.contact,
            total: quote.total,
            nights: quote.nights,
            created_at: DateTime::now().coerce(),
            status: reservation::Status::Confirmed,
        };
        self.storage()
            .execute(Insert(reservation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(reservation)
    }
}

/// Error of [`PlaceReservation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Payment collaborator refused or failed the [`Charge`].
    #[display("`Charge` failed: {_0}")]
    Payment(payment::Error),

    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),
}

#[cfg(test)]
mod spec {
    use common::{operations::Perform, DateTime};

    use crate::{
        domain::{
            booking::{
                payment::{self, Charge, Receipt},
                wizard::{Prefill, Wizard},
            },
            promo, reservation, room, Reservation,
        },
        infra::Memory,
        query, Command as _, Config, Query as _, Service,
    };

    use super::PlaceReservation;

    /// Payment collaborator approving every [`Charge`].
    struct ApproveAll;

    impl payment::Gateway<Perform<Charge>> for ApproveAll {
        type Ok = Receipt;
        type Err = payment::Error;

        async fn execute(
            &self,
            _: Perform<Charge>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Receipt {
                reference: "ref-0001".into(),
            })
        }
    }

    /// Payment collaborator declining every [`Charge`].
    struct DeclineAll;

    impl payment::Gateway<Perform<Charge>> for DeclineAll {
        type Ok = Receipt;
        type Err = payment::Error;

        async fn execute(
            &self,
            _: Perform<Charge>,
        ) -> Result<Self::Ok, Self::Err> {
            Err(payment::Error::Declined)
        }
    }

    fn date(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    /// Drives a [`Wizard`] through the whole flow up to the payment step,
    /// selecting room quantities within the configured booking limits.
    fn wizard_at_payment(config: &Config) -> Wizard {
        let mud_house = room::seed()
            .into_iter()
            .find(|r| r.id == room::Id::MudHouse)
            .unwrap();

        let mut wizard = Wizard::open(Prefill::default());
        let draft = wizard.draft_mut().unwrap();
        draft.check_in = Some(date("2025-06-01T00:00:00Z"));
        draft.check_out = Some(date("2025-06-04T00:00:00Z"));
        wizard.next().unwrap();
        wizard
            .draft_mut()
            .unwrap()
            .select_room(&mud_house, config.booking.quantity(1).unwrap());
        wizard.next().unwrap();
        let form = &mut wizard.draft_mut().unwrap().contact;
        form.first_name = "Asha".into();
        form.last_name = "Nair".into();
        form.email = "asha@example.com".into();
        form.phone = "+91 98765 43210".into();
        wizard.next().unwrap();
        let _ = wizard
            .apply_promo("welcome20", &promo::seed())
            .unwrap();
        wizard.next().unwrap();

        wizard
    }

    #[tokio::test]
    async fn commits_confirmed_reservation_on_successful_charge() {
        let service = Service::new(
            Config::from_jwt_secret(b"test-secret"),
            Memory::new(),
        )
        .with_payment(ApproveAll);

        let mut wizard = wizard_at_payment(service.config());
        let order = wizard.order().unwrap();

        let placed = service
            .execute(PlaceReservation { order })
            .await
            .unwrap();
        wizard.finish();
        assert_eq!(wizard.step(), None);
        // 450 × 3, 20% off: 1350 − 270 = 1080
        assert_eq!(placed.total.to_string(), "1080USD");
        assert_eq!(placed.nights, 3);
        assert_eq!(placed.status, reservation::Status::Confirmed);

        let stored: Vec<Reservation> = service
            .execute(query::reservations::List::all())
            .await
            .unwrap();
        assert_eq!(stored, vec![placed]);
    }

    #[tokio::test]
    async fn declined_charge_persists_nothing() {
        let service = Service::new(
            Config::from_jwt_secret(b"test-secret"),
            Memory::new(),
        )
        .with_payment(DeclineAll);

        let wizard = wizard_at_payment(service.config());
        let order = wizard.order().unwrap();

        let err = service
            .execute(PlaceReservation { order })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("payment declined"));

        let stored: Vec<Reservation> = service
            .execute(query::reservations::List::all())
            .await
            .unwrap();
        assert_eq!(stored, vec![]);
    }

    #[tokio::test]
    async fn abandoned_flow_persists_nothing() {
        let service = Service::new(
            Config::from_jwt_secret(b"test-secret"),
            Memory::new(),
        )
        .with_payment(ApproveAll);

        let mut wizard = wizard_at_payment(service.config());
        wizard.close();
        assert!(wizard.order().is_err());

        let stored: Vec<Reservation> = service
            .execute(query::reservations::List::all())
            .await
            .unwrap();
        assert_eq!(stored, vec![]);
    }
}
