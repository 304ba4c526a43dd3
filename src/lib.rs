//! # fjord-booking
//!
//! REST API backend for the Fjord Tours booking site.
//!
//! Persists a fixed tour catalog and customer bookings in SQLite, exposes
//! a small JSON API for the static front end, and sends booking
//! confirmation emails on a best-effort basis. Booking references are
//! human-readable (`OSLO-YYYY-NNNNN`) and kept globally unique by a
//! database constraint rather than a check-then-write sequence.
//!
//! ## Architecture
//!
//! ```text
//! Clients (browser front end)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BookingService (service/)
//!     ├── ConfirmationMailer (notify/)
//!     │
//!     └── SqliteStore (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod persistence;
pub mod service;
