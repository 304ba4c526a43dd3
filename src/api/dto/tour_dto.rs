//! Tour DTOs for the catalog listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{PriceBand, Tour, TourFilter};
use crate::error::BookingError;

/// A tour as returned by `GET /api/tours`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    /// Catalog row id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Price per participant, smallest currency unit.
    pub price: i64,
    /// Image path used by the tour card.
    pub image: String,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Tour> for TourDto {
    fn from(tour: Tour) -> Self {
        Self {
            id: tour.id,
            name: tour.name,
            description: tour.description,
            price: tour.price,
            image: tour.image,
            created_at: tour.created_at,
        }
    }
}

/// Query parameters for `GET /api/tours`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TourListParams {
    /// Case-insensitive substring matched against name and description.
    #[serde(default)]
    pub search: Option<String>,
    /// Price bucket: `low` (< 400), `medium` (400–450), or `high` (> 450).
    #[serde(default)]
    pub price: Option<String>,
}

impl TourListParams {
    /// Converts the raw query parameters into a domain filter.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] for an unknown `price` value.
    pub fn into_filter(self) -> Result<TourFilter, BookingError> {
        let band = self
            .price
            .as_deref()
            .map(str::parse::<PriceBand>)
            .transpose()?;
        Ok(TourFilter {
            search: self.search,
            band,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_make_an_empty_filter() {
        let Ok(filter) = TourListParams::default().into_filter() else {
            panic!("empty params should convert");
        };
        assert!(filter.search.is_none());
        assert!(filter.band.is_none());
    }

    #[test]
    fn unknown_price_band_is_a_validation_error() {
        let params = TourListParams {
            search: None,
            price: Some("budget".to_string()),
        };
        assert!(params.into_filter().is_err());
    }

    #[test]
    fn known_price_band_converts() {
        let params = TourListParams {
            search: Some("fjord".to_string()),
            price: Some("high".to_string()),
        };
        let Ok(filter) = params.into_filter() else {
            panic!("params should convert");
        };
        assert_eq!(filter.band, Some(PriceBand::High));
        assert_eq!(filter.search.as_deref(), Some("fjord"));
    }
}
