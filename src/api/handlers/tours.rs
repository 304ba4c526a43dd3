//! Tour catalog handlers.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{TourDto, TourListParams};
use crate::app_state::AppState;
use crate::error::{BookingError, ErrorResponse};

/// `GET /api/tours` — List the tour catalog.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] for an unknown `price` value.
#[utoipa::path(
    get,
    path = "/api/tours",
    tag = "Tours",
    summary = "List tours",
    description = "Returns all tours in catalog order, optionally narrowed by a free-text search and a price bucket.",
    params(TourListParams),
    responses(
        (status = 200, description = "Tour list", body = Vec<TourDto>),
        (status = 400, description = "Invalid price bucket", body = ErrorResponse),
    )
)]
pub async fn list_tours(
    State(state): State<AppState>,
    Query(params): Query<TourListParams>,
) -> Result<impl IntoResponse, BookingError> {
    let filter = params.into_filter()?;
    let tours = state.booking_service.list_tours(&filter).await?;
    let data: Vec<TourDto> = tours.into_iter().map(TourDto::from).collect();
    Ok(Json(data))
}

/// Tour routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tours", get(list_tours))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::api;
    use crate::app_state::AppState;
    use crate::notify::LogMailer;
    use crate::persistence::SqliteStore;
    use crate::service::BookingService;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store setup failed");
        };
        let Ok(()) = store.seed_tours().await else {
            panic!("seed failed");
        };
        let booking_service = Arc::new(BookingService::new(store, Arc::new(LogMailer)));
        api::build_router().with_state(AppState { booking_service })
    }

    async fn get_tours(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = test_app().await;
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        let status = response.status();
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(body) = serde_json::from_slice(&bytes) else {
            panic!("body is not JSON: {}", String::from_utf8_lossy(&bytes));
        };
        (status, body)
    }

    #[tokio::test]
    async fn lists_full_catalog_in_order() {
        let (status, body) = get_tours("/api/tours").await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = body
            .as_array()
            .map(|tours| {
                tours
                    .iter()
                    .filter_map(|t| t.get("name").and_then(|v| v.as_str()))
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(names.len(), 6);
        assert_eq!(names.first().copied(), Some("Oslo Fjord Cruise"));
    }

    #[tokio::test]
    async fn search_narrows_by_substring() {
        let (status, body) = get_tours("/api/tours?search=viking").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn price_bucket_narrows_by_price() {
        // low (< 400): Walking 350, Royal Palace 375, Cultural History 380
        let (status, body) = get_tours("/api/tours?price=low").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(3));

        // medium (400–450): Viking 400, Fram 450
        let (_, body) = get_tours("/api/tours?price=medium").await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));

        // high (> 450): Fjord Cruise 500
        let (_, body) = get_tours("/api/tours?price=high").await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn unknown_price_bucket_is_rejected() {
        let (status, body) = get_tours("/api/tours?price=budget").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/error/code").and_then(|v| v.as_u64()),
            Some(1001)
        );
    }
}
