//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted under `/api`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new().nest("/api", handlers::routes())
}

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::tours::list_tours,
        handlers::bookings::list_bookings,
        handlers::bookings::create_booking,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::TourDto,
        dto::BookingDto,
        dto::CreateBookingRequest,
        dto::CreateBookingResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Tours", description = "Tour catalog"),
        (name = "Bookings", description = "Booking creation and listing"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;
