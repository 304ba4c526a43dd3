//! Service layer: booking orchestration.

pub mod booking_service;

pub use booking_service::BookingService;
