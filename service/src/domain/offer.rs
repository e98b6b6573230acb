//! [`Offer`] definitions.

use common::Percent;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::promo;

/// Promotional offer shown on the offers page.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Offer {
    /// ID of this [`Offer`].
    pub id: Id,

    /// [`Title`] of this [`Offer`].
    pub title: Title,

    /// Subtitle of this [`Offer`].
    pub subtitle: String,

    /// Description of this [`Offer`].
    pub description: String,

    /// Image reference of this [`Offer`].
    pub image_url: String,

    /// Human-readable validity text of this [`Offer`].
    pub valid_until: String,

    /// Terms text of this [`Offer`].
    pub terms: String,

    /// [`promo::Code`] attached to this [`Offer`], if any.
    pub promo_code: Option<promo::Code>,

    /// Discount attached to this [`Offer`], if any.
    pub discount: Option<Percent>,
}

impl Offer {
    /// Merges the provided [`Patch`] into this [`Offer`].
    pub fn apply(&mut self, patch: Patch) {
        let Patch {
            id: _,
            title,
            subtitle,
            description,
            image_url,
            valid_until,
            terms,
            promo_code,
            discount,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(subtitle) = subtitle {
            self.subtitle = subtitle;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(valid_until) = valid_until {
            self.valid_until = valid_until;
        }
        if let Some(terms) = terms {
            self.terms = terms;
        }
        if let Some(promo_code) = promo_code {
            self.promo_code = promo_code;
        }
        if let Some(discount) = discount {
            self.discount = discount;
        }
    }
}

/// ID of an [`Offer`].
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

/// Title of an [`Offer`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 256
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Patch merging changed fields into a stored [`Offer`].
///
/// Doubly-[`Option`]al fields distinguish "leave as is" ([`None`]) from
/// "clear" (`Some(None)`).
#[derive(Clone, Debug, Default)]
pub struct Patch {
    /// ID of the [`Offer`] to update.
    pub id: Id,

    /// New [`Title`], if changed.
    pub title: Option<Title>,

    /// New subtitle, if changed.
    pub subtitle: Option<String>,

    /// New description, if changed.
    pub description: Option<String>,

    /// New image reference, if changed.
    pub image_url: Option<String>,

    /// New validity text, if changed.
    pub valid_until: Option<String>,

    /// New terms text, if changed.
    pub terms: Option<String>,

    /// New [`promo::Code`], if changed.
    pub promo_code: Option<Option<promo::Code>>,

    /// New discount, if changed.
    pub discount: Option<Option<Percent>>,
}

/// Returns the default offers, persisted on first read.
#[expect(clippy::missing_panics_doc, reason = "infallible")]
#[must_use]
pub fn seed() -> Vec<Offer> {
    vec![Offer {
        id: Id::new(),
        title: Title::new("Extended Stay Retreat").expect("valid title"),
        subtitle: "Stay 5 nights, pay for 4".into(),
        description: "Extend your sanctuary escape with complimentary nights \
                      and exclusive amenities including daily spa credits and \
                      private dining experiences."
            .into(),
        image_url: String::new(),
        valid_until: "March 31, 2025".into(),
        terms: "Subject to availability. Blackout dates apply.".into(),
        promo_code: None,
        discount: None,
    }]
}

#[cfg(test)]
mod spec {
    use super::{Patch, Title};

    #[test]
    fn title_requires_non_empty_trimmed() {
        assert!(Title::new("Extended Stay Retreat").is_some());
        assert!(Title::new("").is_none());
        assert!(Title::new(" padded ").is_none());
    }

    #[test]
    fn patch_merges_and_clears() {
        let mut offer = super::seed().remove(0);

        offer.apply(Patch {
            subtitle: Some("Stay 7 nights, pay for 5".into()),
            ..Patch::default()
        });
        assert_eq!(offer.subtitle, "Stay 7 nights, pay for 5");

        offer.apply(Patch {
            discount: Some(None),
            ..Patch::default()
        });
        assert_eq!(offer.discount, None);
    }
}
