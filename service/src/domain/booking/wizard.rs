//! Reservation [`Wizard`] definitions.
//!
//! The flow is a linear, gated sequence of steps:
//! `Dates → Rooms → Guest → Review → Payment`. Every forward edge is
//! guarded; a guard failure surfaces a [`GuardError`] and leaves the
//! [`Wizard`] exactly where it was. Closing at any step abandons the flow
//! with no persisted effect.

use std::{fmt, mem};

use common::DateTime;
use derive_more::{Display, Error, From};

use crate::domain::{
    promo::{self, PromoCode},
    reservation::{Contact, Email, GivenName, Guests, Phone},
    room::{self, RoomPricing},
};

use super::{Order, Period, Quantity, Quote, RoomSelection};

/// Multi-step reservation flow.
#[derive(Clone, Debug, Default)]
pub enum Wizard {
    /// No flow in progress.
    #[default]
    Idle,

    /// Step 1: stay dates and party size.
    Dates(Draft),

    /// Step 2: room selection.
    Rooms(Draft),

    /// Step 3: guest contact details.
    Guest(Draft),

    /// Step 4: review and promo application.
    Review(Draft),

    /// Step 5: awaiting the payment outcome.
    Payment(Draft),
}

impl Wizard {
    /// Opens a new flow at the [`Step::Dates`] step, folding the provided
    /// [`Prefill`] into the opening state.
    #[must_use]
    pub fn open(prefill: Prefill) -> Self {
        let Prefill { room, promo } = prefill;

        let mut draft = Draft::default();
        if let Some(pricing) = room {
            draft.select_room(&pricing, Quantity::ONE);
        }
        draft.promo = promo;

        Self::Dates(draft)
    }

    /// Returns the current [`Step`], or [`None`] if no flow is in progress.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Idle => None,
            Self::Dates(_) => Some(Step::Dates),
            Self::Rooms(_) => Some(Step::Rooms),
            Self::Guest(_) => Some(Step::Guest),
            Self::Review(_) => Some(Step::Review),
            Self::Payment(_) => Some(Step::Payment),
        }
    }

    /// Returns the accumulated [`Draft`] of the flow in progress.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Idle => None,
            Self::Dates(d)
            | Self::Rooms(d)
            | Self::Guest(d)
            | Self::Review(d)
            | Self::Payment(d) => Some(d),
        }
    }

    /// Returns the accumulated [`Draft`] of the flow in progress for
    /// editing.
    #[must_use]
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Self::Idle => None,
            Self::Dates(d)
            | Self::Rooms(d)
            | Self::Guest(d)
            | Self::Review(d)
            | Self::Payment(d) => Some(d),
        }
    }

    /// Advances the flow to the next [`Step`].
    ///
    /// # Errors
    ///
    /// Returns a [`GuardError`] if the current step's guard rejects the
    /// accumulated [`Draft`]. The state is left unchanged in that case.
    pub fn next(&mut self) -> Result<(), GuardError> {
        use GuardError as E;

        match &*self {
            Self::Idle => return Err(E::Closed),
            Self::Dates(d) => drop(d.period()?),
            Self::Rooms(d) => {
                if d.rooms.is_empty() {
                    return Err(E::NoRoomSelected);
                }
            }
            Self::Guest(d) => drop(d.contact.validate()?),
            Self::Review(_) => {}
            Self::Payment(_) => return Err(E::AwaitingPayment),
        }

        *self = match mem::take(self) {
            Self::Dates(d) => Self::Rooms(d),
            Self::Rooms(d) => Self::Guest(d),
            Self::Guest(d) => Self::Review(d),
            Self::Review(d) => Self::Payment(d),
            Self::Idle | Self::Payment(_) => {
                unreachable!("guarded above")
            }
        };
        Ok(())
    }

    /// Steps the flow back. A no-op at the first step and when no flow is in
    /// progress.
    pub fn back(&mut self) {
        *self = match mem::take(self) {
            Self::Idle => Self::Idle,
            Self::Dates(d) | Self::Rooms(d) => Self::Dates(d),
            Self::Guest(d) => Self::Rooms(d),
            Self::Review(d) => Self::Guest(d),
            Self::Payment(d) => Self::Review(d),
        };
    }

    /// Applies the promotion matching the submitted `token` against the
    /// provided `catalog`. Only available at the [`Step::Review`] step.
    ///
    /// # Errors
    ///
    /// Returns an [`ApplyPromoError`] if the flow is not at review or no
    /// promotion matches; a previously applied promotion is left untouched.
    pub fn apply_promo(
        &mut self,
        token: impl AsRef<str>,
        catalog: &[PromoCode],
    ) -> Result<&PromoCode, ApplyPromoError> {
        use ApplyPromoError as E;

        let Self::Review(draft) = self else {
            return Err(E::NotAtReview);
        };

        let token = token.as_ref();
        let found = promo::Code::new(token)
            .and_then(|code| catalog.iter().find(|p| p.code == code))
            .ok_or_else(|| E::Unknown(token.trim().to_uppercase()))?;

        Ok(&*draft.promo.insert(found.clone()))
    }

    /// Removes the applied promotion, if any. Only effective at the
    /// [`Step::Review`] step.
    pub fn remove_promo(&mut self) {
        if let Self::Review(draft) = self {
            draft.promo = None;
        }
    }

    /// Calculates the current [`Quote`] of the accumulated [`Draft`].
    #[must_use]
    pub fn quote(&self) -> Quote {
        self.draft().map_or_else(
            || Quote::calculate(&[], None, None),
            |d| {
                Quote::calculate(
                    &d.rooms,
                    d.period().ok().as_ref(),
                    d.promo.as_ref(),
                )
            },
        )
    }

    /// Returns the checkout [`Order`] of the flow awaiting payment.
    ///
    /// # Errors
    ///
    /// Returns a [`GuardError`] if the flow is not at the [`Step::Payment`]
    /// step, or the accumulated [`Draft`] no longer passes the guards.
    pub fn order(&self) -> Result<Order, GuardError> {
        let Self::Payment(d) = self else {
            return Err(GuardError::NotAtPayment);
        };

        Ok(Order {
            rooms: d.rooms.clone(),
            period: d.period()?,
            guests: d.guests,
            contact: d.contact.validate()?,
            promo: d.promo.clone(),
        })
    }

    /// Abandons the flow, clearing all accumulated state. Nothing is
    /// persisted.
    pub fn close(&mut self) {
        *self = Self::Idle;
    }

    /// Completes the flow after its [`Order`] has been committed, resetting
    /// to [`Wizard::Idle`].
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }
}

/// Step of the [`Wizard`] flow.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Step {
    /// Stay dates and party size.
    #[display("dates")]
    Dates,

    /// Room selection.
    #[display("rooms")]
    Rooms,

    /// Guest contact details.
    #[display("guest")]
    Guest,

    /// Review and promo application.
    #[display("review")]
    Review,

    /// Awaiting the payment outcome.
    #[display("payment")]
    Payment,
}

/// Accumulated state of a [`Wizard`] flow.
#[derive(Clone, Debug, Default)]
pub struct Draft {
    /// Picked check-in [`DateTime`], if any.
    pub check_in: Option<DateTime>,

    /// Picked check-out [`DateTime`], if any.
    pub check_out: Option<DateTime>,

    /// Party size, defaulting to 2 adults and no children.
    pub guests: Guests,

    /// Selected rooms with price snapshots.
    pub rooms: Vec<RoomSelection>,

    /// Guest contact details as entered.
    pub contact: ContactForm,

    /// Applied promotion, if any.
    pub promo: Option<PromoCode>,
}

impl Draft {
    /// Returns the stay [`Period`] of this [`Draft`].
    ///
    /// # Errors
    ///
    /// Returns a [`GuardError`] if either date is missing or the check-out
    /// is not strictly after the check-in.
    pub fn period(&self) -> Result<Period, GuardError> {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out)
        else {
            return Err(GuardError::MissingDates);
        };
        Period::new(check_in, check_out).ok_or(GuardError::InvalidPeriod)
    }

    /// Selects `quantity` rooms of the provided catalog entry, snapshotting
    /// its current price. Replaces any previous selection of the same room
    /// type.
    pub fn select_room(&mut self, pricing: &RoomPricing, quantity: Quantity) {
        let selection = RoomSelection::new(pricing, quantity);
        if let Some(existing) =
            self.rooms.iter_mut().find(|s| s.room == pricing.id)
        {
            *existing = selection;
        } else {
            self.rooms.push(selection);
        }
    }

    /// Removes the selection of the provided room type, if present.
    pub fn deselect_room(&mut self, room: room::Id) {
        self.rooms.retain(|s| s.room != room);
    }
}

/// Externally supplied state folded into a [`Wizard`] on open.
#[derive(Clone, Debug, Default)]
pub struct Prefill {
    /// Pre-selected room type, if any.
    pub room: Option<RoomPricing>,

    /// Pre-applied promotion, if any.
    pub promo: Option<PromoCode>,
}

/// Guest contact details as entered, validated on advancing past the
/// [`Step::Guest`] step.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    /// First name field.
    pub first_name: String,

    /// Last name field.
    pub last_name: String,

    /// Email field.
    pub email: String,

    /// Phone field.
    pub phone: String,

    /// Special requests field.
    pub special_requests: String,
}

impl ContactForm {
    /// Validates this [`ContactForm`] into a [`Contact`].
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidContact`] listing every failing [`Field`].
    pub fn validate(&self) -> Result<Contact, InvalidContact> {
        let mut fields = Vec::new();

        let first_name = GivenName::new(self.first_name.clone());
        if first_name.is_none() {
            fields.push(Field::FirstName);
        }
        let last_name = GivenName::new(self.last_name.clone());
        if last_name.is_none() {
            fields.push(Field::LastName);
        }
        let email = Email::new(self.email.clone());
        if email.is_none() {
            fields.push(Field::Email);
        }
        let phone = Phone::new(self.phone.clone());
        if phone.is_none() {
            fields.push(Field::Phone);
        }

        if !fields.is_empty() {
            return Err(InvalidContact { fields });
        }

        let special_requests = (!self.special_requests.trim().is_empty())
            .then(|| self.special_requests.clone());

        Ok(Contact {
            first_name: first_name.expect("validated"),
            last_name: last_name.expect("validated"),
            email: email.expect("validated"),
            phone: phone.expect("validated"),
            special_requests,
        })
    }
}

/// Failure of a [`Wizard`] guard. Never fatal: the flow stays at its current
/// step.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum GuardError {
    /// Check-in or check-out date is not picked yet.
    #[display("check-in and check-out dates are not selected")]
    MissingDates,

    /// Check-out is not strictly after check-in.
    #[display("check-out must be after check-in")]
    InvalidPeriod,

    /// No room with a non-zero quantity is selected.
    #[display("no room selected")]
    NoRoomSelected,

    /// Guest contact details failed validation.
    #[display("{_0}")]
    Guest(InvalidContact),

    /// No flow is in progress.
    #[display("no reservation flow in progress")]
    Closed,

    /// The flow is at the payment step; only the payment outcome advances
    /// it.
    #[display("awaiting payment outcome")]
    AwaitingPayment,

    /// The flow has not reached the payment step.
    #[display("reservation flow has not reached payment")]
    NotAtPayment,
}

/// Failure of applying a promotion in a [`Wizard`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ApplyPromoError {
    /// The flow is not at the [`Step::Review`] step.
    #[display("promo codes are applied at the review step")]
    NotAtReview,

    /// No promotion matches the submitted token.
    #[display("unknown promo code `{_0}`")]
    Unknown(#[error(not(source))] String),
}

/// Field-level failures of a [`ContactForm`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub struct InvalidContact {
    /// Failing [`Field`]s, in form order.
    pub fields: Vec<Field>,
}

impl fmt::Display for InvalidContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid guest details: ")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Field of a [`ContactForm`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Field {
    /// First name field.
    #[display("first name")]
    FirstName,

    /// Last name field.
    #[display("last name")]
    LastName,

    /// Email field.
    #[display("email")]
    Email,

    /// Phone field.
    #[display("phone")]
    Phone,
}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::domain::{promo, room};

    use super::{
        ApplyPromoError, Field, GuardError, Prefill, Quantity, Step, Wizard,
    };

    fn date(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    fn mud_house() -> crate::domain::RoomPricing {
        room::seed()
            .into_iter()
            .find(|r| r.id == room::Id::MudHouse)
            .unwrap()
    }

    fn fill_contact(wizard: &mut Wizard) {
        let form = &mut wizard.draft_mut().unwrap().contact;
        form.first_name = "Asha".into();
        form.last_name = "Nair".into();
        form.email = "asha@example.com".into();
        form.phone = "+91 98765 43210".into();
    }

    #[test]
    fn advancing_from_dates_requires_both_dates() {
        let mut wizard = Wizard::open(Prefill::default());
        wizard.draft_mut().unwrap().check_in =
            Some(date("2025-06-01T00:00:00Z"));

        assert_eq!(wizard.next(), Err(GuardError::MissingDates));
        assert_eq!(wizard.step(), Some(Step::Dates));
    }

    #[test]
    fn check_out_must_be_after_check_in() {
        let mut wizard = Wizard::open(Prefill::default());
        let draft = wizard.draft_mut().unwrap();
        draft.check_in = Some(date("2025-06-04T00:00:00Z"));
        draft.check_out = Some(date("2025-06-01T00:00:00Z"));

        assert_eq!(wizard.next(), Err(GuardError::InvalidPeriod));
        assert_eq!(wizard.step(), Some(Step::Dates));
    }

    #[test]
    fn rooms_step_requires_a_selection() {
        let mut wizard = Wizard::open(Prefill::default());
        let draft = wizard.draft_mut().unwrap();
        draft.check_in = Some(date("2025-06-01T00:00:00Z"));
        draft.check_out = Some(date("2025-06-04T00:00:00Z"));
        wizard.next().unwrap();

        assert_eq!(wizard.next(), Err(GuardError::NoRoomSelected));
        assert_eq!(wizard.step(), Some(Step::Rooms));
    }

    #[test]
    fn guest_step_reports_failing_fields() {
        let mut wizard = Wizard::open(Prefill::default());
        let draft = wizard.draft_mut().unwrap();
        draft.check_in = Some(date("2025-06-01T00:00:00Z"));
        draft.check_out = Some(date("2025-06-04T00:00:00Z"));
        wizard.next().unwrap();
        wizard
            .draft_mut()
            .unwrap()
            .select_room(&mud_house(), Quantity::ONE);
        wizard.next().unwrap();

        let form = &mut wizard.draft_mut().unwrap().contact;
        form.first_name = "A".into();
        form.last_name = "Nair".into();
        form.email = "not-an-email".into();
        form.phone = "12345".into();

        let Err(GuardError::Guest(e)) = wizard.next() else {
            panic!("expected a guest guard failure");
        };
        assert_eq!(
            e.fields,
            vec![Field::FirstName, Field::Email, Field::Phone],
        );
        assert_eq!(wizard.step(), Some(Step::Guest));
    }

    #[test]
    fn promo_application_at_review() {
        let catalog = promo::seed();

        let mut wizard = Wizard::open(Prefill::default());
        let draft = wizard.draft_mut().unwrap();
        draft.check_in = Some(date("2025-06-01T00:00:00Z"));
        draft.check_out = Some(date("2025-06-04T00:00:00Z"));
        wizard.next().unwrap();
        wizard
            .draft_mut()
            .unwrap()
            .select_room(&mud_house(), Quantity::ONE);
        wizard.next().unwrap();
        fill_contact(&mut wizard);
        wizard.next().unwrap();
        assert_eq!(wizard.step(), Some(Step::Review));

        // 450 × 3 = 1350
        assert_eq!(wizard.quote().total.to_string(), "1350USD");

        assert_eq!(
            wizard.apply_promo("bogus", &catalog),
            Err(ApplyPromoError::Unknown("BOGUS".into())),
        );
        assert_eq!(wizard.draft().unwrap().promo, None);

        let applied = wizard.apply_promo(" welcome20 ", &catalog).unwrap();
        assert_eq!(AsRef::<str>::as_ref(&applied.code), "WELCOME20");
        assert_eq!(wizard.quote().total.to_string(), "1080USD");

        // An unknown token leaves the applied promotion untouched.
        assert!(wizard.apply_promo("bogus", &catalog).is_err());
        assert!(wizard.draft().unwrap().promo.is_some());

        wizard.remove_promo();
        assert_eq!(wizard.quote().total.to_string(), "1350USD");
    }

    #[test]
    fn back_is_a_no_op_at_dates() {
        let mut wizard = Wizard::open(Prefill::default());
        wizard.back();
        assert_eq!(wizard.step(), Some(Step::Dates));
    }

    #[test]
    fn close_abandons_all_state() {
        let mut wizard = Wizard::open(Prefill {
            room: Some(mud_house()),
            promo: None,
        });
        wizard.close();
        assert_eq!(wizard.step(), None);
        assert!(wizard.draft().is_none());
        assert_eq!(wizard.next(), Err(GuardError::Closed));
    }

    #[test]
    fn prefill_folds_room_and_promo() {
        let catalog = promo::seed();
        let wizard = Wizard::open(Prefill {
            room: Some(mud_house()),
            promo: catalog.first().cloned(),
        });

        let draft = wizard.draft().unwrap();
        assert_eq!(draft.rooms.len(), 1);
        assert_eq!(draft.rooms[0].room, room::Id::MudHouse);
        assert_eq!(draft.guests.adults.get(), 2);
        assert!(draft.promo.is_some());
    }

    #[test]
    fn order_is_only_available_at_payment() {
        let mut wizard = Wizard::open(Prefill::default());
        assert_eq!(
            wizard.order().unwrap_err(),
            GuardError::NotAtPayment,
        );

        let draft = wizard.draft_mut().unwrap();
        draft.check_in = Some(date("2025-06-01T00:00:00Z"));
        draft.check_out = Some(date("2025-06-04T00:00:00Z"));
        wizard.next().unwrap();
        wizard
            .draft_mut()
            .unwrap()
            .select_room(&mud_house(), Quantity::ONE);
        wizard.next().unwrap();
        fill_contact(&mut wizard);
        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), Some(Step::Payment));

        let order = wizard.order().unwrap();
        assert_eq!(order.quote().nights, 3);
        assert_eq!(order.quote().total.to_string(), "1350USD");
    }
}
