//! Tour list filters driven by the front end.
//!
//! The search box and price dropdown on the tours page translate to the
//! `search` and `price` query parameters of `GET /api/tours`; the
//! matching rules live here so they are testable away from HTTP.

use std::str::FromStr;

use crate::domain::Tour;
use crate::error::BookingError;

/// Price bucket boundaries in the listed currency unit.
const LOW_CEILING: i64 = 400;
const HIGH_FLOOR: i64 = 450;

/// Price bucket selectable in the tour list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    /// Price strictly below 400.
    Low,
    /// Price in 400–450 inclusive.
    Medium,
    /// Price strictly above 450.
    High,
}

impl PriceBand {
    /// Returns `true` if `price` falls inside this bucket.
    #[must_use]
    pub fn contains(self, price: i64) -> bool {
        match self {
            Self::Low => price < LOW_CEILING,
            Self::Medium => (LOW_CEILING..=HIGH_FLOOR).contains(&price),
            Self::High => price > HIGH_FLOOR,
        }
    }
}

impl FromStr for PriceBand {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(BookingError::Validation(format!(
                "invalid price band: {other}"
            ))),
        }
    }
}

/// Combined tour list filter. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct TourFilter {
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
    /// Price bucket constraint.
    pub band: Option<PriceBand>,
}

impl TourFilter {
    /// Returns `true` if `tour` passes both the search and price filters.
    #[must_use]
    pub fn matches(&self, tour: &Tour) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            let needle = needle.to_lowercase();
            tour.name.to_lowercase().contains(&needle)
                || tour.description.to_lowercase().contains(&needle)
        });
        let band_ok = self.band.is_none_or(|band| band.contains(tour.price));
        search_ok && band_ok
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tour(name: &str, description: &str, price: i64) -> Tour {
        Tour {
            id: 1,
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: "img.jpg".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn price_bands_honor_boundaries() {
        assert!(PriceBand::Low.contains(399));
        assert!(!PriceBand::Low.contains(400));

        assert!(PriceBand::Medium.contains(400));
        assert!(PriceBand::Medium.contains(450));
        assert!(!PriceBand::Medium.contains(399));
        assert!(!PriceBand::Medium.contains(451));

        assert!(PriceBand::High.contains(451));
        assert!(!PriceBand::High.contains(450));
    }

    #[test]
    fn price_band_parsing() {
        let Ok(band) = "medium".parse::<PriceBand>() else {
            panic!("expected medium to parse");
        };
        assert_eq!(band, PriceBand::Medium);
        assert!("cheap".parse::<PriceBand>().is_err());
        assert!("LOW".parse::<PriceBand>().is_err());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let cruise = tour("Oslo Fjord Cruise", "Breathtaking views", 500);
        let filter = TourFilter {
            search: Some("fjord".to_string()),
            band: None,
        };
        assert!(filter.matches(&cruise));

        let filter = TourFilter {
            search: Some("BREATHTAKING".to_string()),
            band: None,
        };
        assert!(filter.matches(&cruise));

        let filter = TourFilter {
            search: Some("viking".to_string()),
            band: None,
        };
        assert!(!filter.matches(&cruise));
    }

    #[test]
    fn combined_filter_requires_both_matches() {
        let cruise = tour("Oslo Fjord Cruise", "Views", 500);
        let filter = TourFilter {
            search: Some("cruise".to_string()),
            band: Some(PriceBand::Low),
        };
        assert!(!filter.matches(&cruise));

        let filter = TourFilter {
            search: Some("cruise".to_string()),
            band: Some(PriceBand::High),
        };
        assert!(filter.matches(&cruise));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let walking = tour("Oslo City Walking Tour", "Landmarks", 350);
        assert!(TourFilter::default().matches(&walking));
    }
}
