//! [`Query`] collection related to the multiple [`Reservation`]s.

use common::operations::{All, By};

use crate::domain::Reservation;
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries the list of all [`Reservation`]s, newest last.
pub type List = StorageQuery<By<Vec<Reservation>, All>>;
