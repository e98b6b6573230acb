//! External payment collaborator contract.
//!
//! The service treats the payment provider as opaque: any
//! [`Gateway`]`<`[`Perform`]`<`[`Charge`]`>>` qualifies, and each invocation
//! completes exactly once with a [`Receipt`] or a typed [`Error`].

#[cfg(doc)]
use common::operations::Perform;
use common::Money;

/// Payment collaborator executing [`Charge`]s.
pub use common::Handler as Gateway;

/// Request to charge the guest for a booking.
#[derive(Clone, Copy, Debug)]
pub struct Charge {
    /// Amount to charge.
    pub amount: Money,
}

/// Proof of a successfully authorized [`Charge`].
#[derive(Clone, Debug)]
pub struct Receipt {
    /// Provider-issued payment reference.
    pub reference: String,
}

/// Failure of a [`Charge`] reported by the payment collaborator.
#[derive(Clone, Copy, Debug, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// The card was declined by the provider.
    #[display("payment declined")]
    Declined,

    /// The provider could not be reached.
    #[display("payment network failure")]
    Network,
}
