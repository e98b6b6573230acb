//! [`GalleryImage`] definitions.

use common::define_kind;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin-added photo in the gallery.
///
/// Built-in gallery photos live in a static catalog outside this store.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GalleryImage {
    /// ID of this [`GalleryImage`].
    pub id: Id,

    /// Image reference of this [`GalleryImage`].
    pub src: String,

    /// Alternative text of this [`GalleryImage`].
    pub alt: String,

    /// [`Category`] this [`GalleryImage`] belongs to.
    pub category: Category,
}

/// ID of a [`GalleryImage`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Category of a [`GalleryImage`]."]
    #[format = "kebab-case"]
    enum Category {
        #[doc = "Architecture."]
        Architecture = 1,

        #[doc = "Accommodation."]
        Accommodation = 2,

        #[doc = "Wellness."]
        Wellness = 3,

        #[doc = "Experiences."]
        Experiences = 4,

        #[doc = "Destinations."]
        Destinations = 5,

        #[doc = "Interiors."]
        Interiors = 6,

        #[doc = "Dining."]
        Dining = 7,
    }
}

/// Returns the default gallery collection: empty, as built-in photos are not
/// part of this store.
#[must_use]
pub fn seed() -> Vec<GalleryImage> {
    Vec::new()
}
