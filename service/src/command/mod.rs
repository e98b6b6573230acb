//! [`Command`] definition.

pub mod add_gallery_image;
pub mod authorize_admin_session;
pub mod create_admin_session;
pub mod create_offer;
pub mod create_promo_code;
pub mod delete_gallery_image;
pub mod delete_offer;
pub mod delete_promo_code;
pub mod delete_reservation;
pub mod place_reservation;
pub mod update_admin_password;
pub mod update_offer;
pub mod update_reservation_status;
pub mod update_room_price;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_gallery_image::AddGalleryImage,
    authorize_admin_session::AuthorizeAdminSession,
    create_admin_session::CreateAdminSession, create_offer::CreateOffer,
    create_promo_code::CreatePromoCode,
    delete_gallery_image::DeleteGalleryImage, delete_offer::DeleteOffer,
    delete_promo_code::DeletePromoCode,
    delete_reservation::DeleteReservation,
    place_reservation::PlaceReservation,
    update_admin_password::UpdateAdminPassword, update_offer::UpdateOffer,
    update_reservation_status::UpdateReservationStatus,
    update_room_price::UpdateRoomPrice,
};
