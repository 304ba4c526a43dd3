//! Booking DTOs for creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Booking, BookingDraft};

/// Request body for `POST /api/bookings`.
///
/// Every field is defaulted so that a missing field reaches the booking
/// service as a blank value and fails validation with a 400 rather than
/// being rejected at the deserialization layer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Name of the tour being booked.
    #[serde(default)]
    pub tour_name: String,
    /// Tour price snapshot, smallest currency unit.
    #[serde(default)]
    pub tour_price: i64,
    /// Requested tour date (`YYYY-MM-DD`).
    #[serde(default)]
    pub tour_date: String,
    /// Participant count, 1–10.
    #[serde(default)]
    pub participants: i64,
    /// Customer full name.
    #[serde(default)]
    pub customer_name: String,
    /// Customer email address.
    #[serde(default)]
    pub customer_email: String,
    /// Customer phone number.
    #[serde(default)]
    pub customer_phone: String,
    /// Optional free-text requests.
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl From<CreateBookingRequest> for BookingDraft {
    fn from(request: CreateBookingRequest) -> Self {
        Self {
            tour_name: request.tour_name,
            tour_price: request.tour_price,
            tour_date: request.tour_date,
            participants: request.participants,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            customer_phone: request.customer_phone,
            special_requests: request.special_requests,
        }
    }
}

/// A booking as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    /// Assigned row id.
    pub id: i64,
    /// Unique booking reference (`OSLO-YYYY-NNNNN`).
    pub reference: String,
    /// Tour name snapshot.
    pub tour_name: String,
    /// Tour price snapshot.
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Booking status (`"confirmed"`).
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            reference: booking.reference,
            tour_name: booking.tour_name,
            tour_price: booking.tour_price,
            tour_date: booking.tour_date,
            participants: booking.participants,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            customer_phone: booking.customer_phone,
            special_requests: booking.special_requests,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

/// Response body for `POST /api/bookings` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateBookingResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The stored booking.
    pub booking: BookingDto,
}
