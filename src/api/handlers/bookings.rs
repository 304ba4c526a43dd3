//! Booking handlers: create and list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{BookingDto, CreateBookingRequest, CreateBookingResponse};
use crate::app_state::AppState;
use crate::domain::BookingDraft;
use crate::error::{BookingError, ErrorResponse};

/// `GET /api/bookings` — List all bookings, newest first.
///
/// # Errors
///
/// Returns a [`BookingError::Persistence`] on database failure.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    summary = "List bookings",
    description = "Returns every booking ordered newest-created-first. Intended for admin use.",
    responses(
        (status = 200, description = "Booking list", body = Vec<BookingDto>),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let bookings = state.booking_service.list_bookings().await?;
    let data: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(data))
}

/// `POST /api/bookings` — Create a booking.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] for missing or out-of-range
/// fields, [`BookingError::ReferenceExhausted`] or
/// [`BookingError::Persistence`] on server-side failure.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    summary = "Create a booking",
    description = "Validates the request, assigns a unique booking reference, stores the booking, and queues a confirmation email. The email is best-effort and never blocks the response.",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponse),
        (status = 400, description = "Missing or out-of-range fields", body = ErrorResponse),
        (status = 500, description = "Reference generation or persistence failure", body = ErrorResponse),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, BookingError> {
    let draft = BookingDraft::from(request);
    let booking = state.booking_service.create_booking(draft).await?;

    let response = CreateBookingResponse {
        success: true,
        booking: BookingDto::from(booking),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Booking routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings).post(create_booking))
}
