//! Human-readable booking reference.
//!
//! [`BookingReference`] is a newtype wrapper around the `OSLO-YYYY-NNNNN`
//! reference string handed to customers. References are random draws, not
//! a counter: collisions are possible and the booking service handles
//! them by retrying against the store's uniqueness constraint.

use std::fmt;

use chrono::{Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix for every booking reference.
pub const REFERENCE_PREFIX: &str = "OSLO";

/// Upper bound (exclusive) of the random reference number.
const REFERENCE_SPACE: u32 = 100_000;

/// Human-facing unique booking identifier of the form `OSLO-YYYY-NNNNN`.
///
/// `YYYY` is the current UTC year and `NNNNN` a zero-padded random
/// integer in `[0, 99999]`. Not cryptographically unique; global
/// uniqueness is enforced by the bookings table, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    /// Draws a new random reference for the current year.
    #[must_use]
    pub fn generate() -> Self {
        let year = Utc::now().year();
        let number: u32 = rand::thread_rng().gen_range(0..REFERENCE_SPACE);
        Self(format!("{REFERENCE_PREFIX}-{year}-{number:05}"))
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether `value` has the `OSLO-YYYY-NNNNN` shape.
    #[must_use]
    pub fn is_valid_format(value: &str) -> bool {
        let mut parts = value.split('-');
        let (Some(prefix), Some(year), Some(number), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        prefix == REFERENCE_PREFIX
            && year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && number.len() == 5
            && number.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.0
    }
}
