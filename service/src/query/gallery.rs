//! [`Query`] collection related to the multiple [`GalleryImage`]s.

use common::operations::{All, By};

use crate::domain::GalleryImage;
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries the list of all admin-added [`GalleryImage`]s.
pub type List = StorageQuery<By<Vec<GalleryImage>, All>>;
