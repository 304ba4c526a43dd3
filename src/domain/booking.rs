//! Booking record and validated booking input.

use chrono::{DateTime, Utc};

use crate::error::BookingError;

/// Minimum allowed participant count per booking.
pub const MIN_PARTICIPANTS: i64 = 1;

/// Maximum allowed participant count per booking.
pub const MAX_PARTICIPANTS: i64 = 10;

/// Status assigned to every newly created booking. No transition logic
/// exists; the field is stored for future use.
pub const DEFAULT_STATUS: &str = "confirmed";

/// A stored booking row.
///
/// Tour name, price, and date are denormalized snapshots, not foreign
/// keys: the catalog could change independently of past bookings.
/// Bookings are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Database row id.
    pub id: i64,
    /// Globally unique human-facing reference (`OSLO-YYYY-NNNNN`).
    pub reference: String,
    /// Tour name at booking time.
    pub tour_name: String,
    /// Tour price at booking time, smallest currency unit.
    pub tour_price: i64,
    /// Requested tour date (`YYYY-MM-DD`, as submitted).
    pub tour_date: String,
    /// Participant count, within `[1, 10]`.
    pub participants: i64,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address (confirmation recipient).
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Optional free-text requests.
    pub special_requests: Option<String>,
    /// Booking status, `"confirmed"` on creation.
    pub status: String,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Unvalidated booking input as accepted by the API.
///
/// [`BookingDraft::validate`] applies the request rules before anything
/// is persisted. A blank string counts as a missing field, matching the
/// behavior the front end has always relied on.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    /// Name of the tour being booked.
    pub tour_name: String,
    /// Tour price snapshot, smallest currency unit.
    pub tour_price: i64,
    /// Requested tour date.
    pub tour_date: String,
    /// Participant count.
    pub participants: i64,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Optional free-text requests.
    pub special_requests: Option<String>,
}

impl BookingDraft {
    /// Checks required fields and the participant range.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] if a required field is blank
    /// or `participants` is outside `[1, 10]`.
    pub fn validate(&self) -> Result<(), BookingError> {
        let required = [
            ("tourName", &self.tour_name),
            ("tourDate", &self.tour_date),
            ("customerName", &self.customer_name),
            ("customerEmail", &self.customer_email),
            ("customerPhone", &self.customer_phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BookingError::Validation(format!(
                    "missing required field: {field}"
                )));
            }
        }

        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&self.participants) {
            return Err(BookingError::Validation(format!(
                "participants must be between {MIN_PARTICIPANTS} and {MAX_PARTICIPANTS}"
            )));
        }

        Ok(())
    }
}
