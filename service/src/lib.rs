//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

use derive_more::Debug;

#[cfg(doc)]
use infra::Storage;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// [JWT] encoding key for admin sessions.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub jwt_encoding_key: jsonwebtoken::EncodingKey,

    /// [JWT] decoding key for admin sessions.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub jwt_decoding_key: jsonwebtoken::DecodingKey,

    /// Booking flow limits.
    pub booking: domain::booking::Config,
}

impl Config {
    /// Creates a new [`Config`] with [JWT] keys derived from the provided
    /// secret and default booking limits.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[must_use]
    pub fn from_jwt_secret(secret: &[u8]) -> Self {
        Self {
            jwt_encoding_key: jsonwebtoken::EncodingKey::from_secret(secret),
            jwt_decoding_key: jsonwebtoken::DecodingKey::from_secret(secret),
            booking: domain::booking::Config::default(),
        }
    }
}

/// Domain service.
///
/// `St` is the [`Storage`] backing the persisted collections, and `Pay` is
/// the external payment collaborator charging reservations.
#[derive(Clone, Debug)]
pub struct Service<St, Pay = ()> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Storage`] of this [`Service`].
    storage: St,

    /// Payment collaborator of this [`Service`].
    payment: Pay,
}

impl<St> Service<St> {
    /// Creates a new [`Service`] with the provided parameters and no payment
    /// collaborator.
    pub fn new(config: Config, storage: St) -> Self {
        Self {
            config,
            storage,
            payment: (),
        }
    }
}

impl<St, Pay> Service<St, Pay> {
    /// Attaches the provided payment collaborator to this [`Service`].
    pub fn with_payment<P>(self, payment: P) -> Service<St, P> {
        Service {
            config: self.config,
            storage: self.storage,
            payment,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Storage`] of this [`Service`].
    #[must_use]
    pub fn storage(&self) -> &St {
        &self.storage
    }

    /// Returns the payment collaborator of this [`Service`].
    #[must_use]
    pub fn payment(&self) -> &Pay {
        &self.payment
    }
}
