//! [`Query`] collection related to the multiple [`Offer`]s.

use common::operations::{All, By};

use crate::domain::Offer;
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries the list of all [`Offer`]s.
pub type List = StorageQuery<By<Vec<Offer>, All>>;
