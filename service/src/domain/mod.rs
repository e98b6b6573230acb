//! Domain definitions.

pub mod admin;
pub mod booking;
pub mod gallery;
pub mod offer;
pub mod promo;
pub mod reservation;
pub mod room;

pub use self::{
    booking::{Order, Quote, Wizard},
    gallery::GalleryImage,
    offer::Offer,
    promo::PromoCode,
    reservation::Reservation,
    room::RoomPricing,
};
