//! Tour catalog entry.

use chrono::{DateTime, Utc};

/// A sellable tour product.
///
/// Tours are seeded once at startup and immutable afterwards; the API
/// only ever reads them. Prices are in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Database row id (insertion order).
    pub id: i64,
    /// Display name, e.g. `"Oslo Fjord Cruise"`.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Price per participant in the smallest currency unit.
    pub price: i64,
    /// Image path or URL used by the front end.
    pub image: String,
    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}
