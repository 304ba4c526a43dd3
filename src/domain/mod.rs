//! Domain layer: core types for tours and bookings.
//!
//! This module contains the server-side domain model: the tour catalog
//! entry, the booking record and its validated input form, the
//! human-readable booking reference, and the tour list filters the front
//! end drives through query parameters.

pub mod booking;
pub mod filter;
pub mod reference;
pub mod tour;

pub use booking::{Booking, BookingDraft};
pub use filter::{PriceBand, TourFilter};
pub use reference::BookingReference;
pub use tour::Tour;
