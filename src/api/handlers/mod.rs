//! REST endpoint handlers organized by resource.

pub mod bookings;
pub mod system;
pub mod tours;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(tours::routes())
        .merge(bookings::routes())
        .merge(system::routes())
}
