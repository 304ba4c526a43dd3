//! Booking service: validates input, assigns references, persists
//! bookings, and triggers confirmation emails.

use std::fmt;
use std::sync::Arc;

use crate::domain::{Booking, BookingDraft, BookingReference, Tour, TourFilter};
use crate::error::BookingError;
use crate::notify::ConfirmationMailer;
use crate::persistence::SqliteStore;

/// Maximum reference candidates tried before giving up.
///
/// A liveness bound, not a correctness guarantee: uniqueness itself is
/// enforced by the store's insert.
pub const MAX_REFERENCE_ATTEMPTS: u32 = 10;

/// Orchestration layer for booking operations.
///
/// Owns the store and the mailer, both injected at construction so
/// tests can substitute an in-memory store and a recording mailer.
/// Creating a booking follows the pattern: validate → draw reference →
/// atomic insert (retry on collision) → detach confirmation email →
/// return the stored booking.
#[derive(Clone)]
pub struct BookingService {
    store: SqliteStore,
    mailer: Arc<dyn ConfirmationMailer>,
}

impl fmt::Debug for BookingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl BookingService {
    /// Creates a new `BookingService`.
    #[must_use]
    pub fn new(store: SqliteStore, mailer: Arc<dyn ConfirmationMailer>) -> Self {
        Self { store, mailer }
    }

    /// Creates a booking from `draft`.
    ///
    /// The confirmation email is sent from a detached task; its outcome
    /// never affects the returned result.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] for missing or out-of-range
    /// fields, [`BookingError::ReferenceExhausted`] when every candidate
    /// reference collided, or [`BookingError::Persistence`] on database
    /// failure.
    pub async fn create_booking(&self, draft: BookingDraft) -> Result<Booking, BookingError> {
        draft.validate()?;

        for attempt in 1..=MAX_REFERENCE_ATTEMPTS {
            let reference = BookingReference::generate();
            match self.store.insert_booking(&draft, reference.as_str()).await {
                Ok(booking) => {
                    tracing::info!(
                        reference = %booking.reference,
                        tour = %booking.tour_name,
                        "booking created"
                    );
                    self.spawn_confirmation(booking.clone());
                    return Ok(booking);
                }
                Err(BookingError::ReferenceConflict(_)) => {
                    tracing::warn!(attempt, reference = %reference, "reference collision, retrying");
                }
                Err(other) => return Err(other),
            }
        }

        Err(BookingError::ReferenceExhausted)
    }

    /// Returns the tour catalog, filtered by search text and price band.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_tours(&self, filter: &TourFilter) -> Result<Vec<Tour>, BookingError> {
        let tours = self.store.list_tours().await?;
        Ok(tours.into_iter().filter(|t| filter.matches(t)).collect())
    }

    /// Returns all bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        self.store.list_bookings().await
    }

    /// Sends the confirmation email from a detached task.
    ///
    /// Failure is logged and swallowed; the HTTP response for the
    /// booking has usually already been written by the time the send
    /// completes.
    fn spawn_confirmation(&self, booking: Booking) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            match mailer.send_confirmation(&booking).await {
                Ok(()) => {
                    tracing::info!(email = %booking.customer_email, "confirmation email sent");
                }
                Err(e) => {
                    tracing::warn!(
                        reference = %booking.reference,
                        error = %e,
                        "failed to send confirmation email"
                    );
                }
            }
        });
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::notify::LogMailer;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records the references it was asked to confirm.
    #[derive(Debug, Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ConfirmationMailer for RecordingMailer {
        async fn send_confirmation(&self, booking: &Booking) -> Result<(), BookingError> {
            if let Ok(mut sent) = self.sent.lock() {
                sent.push(booking.reference.clone());
            }
            Ok(())
        }
    }

    /// Always fails, standing in for an unreachable SMTP relay.
    #[derive(Debug)]
    struct FailingMailer;

    #[async_trait]
    impl ConfirmationMailer for FailingMailer {
        async fn send_confirmation(&self, _booking: &Booking) -> Result<(), BookingError> {
            Err(BookingError::Mail("relay unreachable".to_string()))
        }
    }

    async fn service_with(mailer: Arc<dyn ConfirmationMailer>) -> BookingService {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store setup failed");
        };
        BookingService::new(store, mailer)
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            tour_name: "Oslo Fjord Cruise".to_string(),
            tour_price: 500,
            tour_date: "2025-06-01".to_string(),
            participants: 2,
            customer_name: "A B".to_string(),
            customer_email: "a@b.com".to_string(),
            customer_phone: "123".to_string(),
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn create_booking_returns_confirmed_booking() {
        let service = service_with(Arc::new(LogMailer)).await;
        let Ok(booking) = service.create_booking(draft()).await else {
            panic!("booking failed");
        };
        assert!(booking.id > 0);
        assert_eq!(booking.status, "confirmed");
        assert!(BookingReference::is_valid_format(&booking.reference));
    }

    #[tokio::test]
    async fn invalid_participants_never_persist() {
        let service = service_with(Arc::new(LogMailer)).await;
        for participants in [0, 11] {
            let mut bad = draft();
            bad.participants = participants;
            let result = service.create_booking(bad).await;
            let Err(BookingError::Validation(_)) = result else {
                panic!("expected validation error for participants={participants}");
            };
        }

        let Ok(bookings) = service.list_bookings().await else {
            panic!("list_bookings failed");
        };
        assert!(bookings.is_empty());
    }

    #[tokio::test]
    async fn missing_field_never_persists() {
        let service = service_with(Arc::new(LogMailer)).await;
        let mut bad = draft();
        bad.customer_phone = String::new();
        assert!(service.create_booking(bad).await.is_err());

        let Ok(bookings) = service.list_bookings().await else {
            panic!("list_bookings failed");
        };
        assert!(bookings.is_empty());
    }

    #[tokio::test]
    async fn identical_payloads_get_distinct_references() {
        let service = service_with(Arc::new(LogMailer)).await;
        let Ok(first) = service.create_booking(draft()).await else {
            panic!("first booking failed");
        };
        let Ok(second) = service.create_booking(draft()).await else {
            panic!("second booking failed");
        };
        assert_ne!(first.reference, second.reference);
    }

    #[tokio::test]
    async fn confirmation_email_is_sent_for_created_booking() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = service_with(Arc::clone(&mailer) as Arc<dyn ConfirmationMailer>).await;

        let Ok(booking) = service.create_booking(draft()).await else {
            panic!("booking failed");
        };

        // The send runs on a detached task; give it a moment to land.
        for _ in 0..50 {
            let recorded = match mailer.sent.lock() {
                Ok(sent) => sent.clone(),
                Err(_) => panic!("mailer mutex poisoned"),
            };
            if !recorded.is_empty() {
                assert_eq!(recorded, vec![booking.reference.clone()]);
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("confirmation email never recorded");
    }

    #[tokio::test]
    async fn email_failure_does_not_fail_the_booking() {
        let service = service_with(Arc::new(FailingMailer)).await;
        let Ok(booking) = service.create_booking(draft()).await else {
            panic!("booking should succeed despite mail failure");
        };
        assert_eq!(booking.status, "confirmed");

        let Ok(bookings) = service.list_bookings().await else {
            panic!("list_bookings failed");
        };
        assert_eq!(bookings.len(), 1);
    }

    #[tokio::test]
    async fn list_tours_applies_filter() {
        let service = service_with(Arc::new(LogMailer)).await;
        let Ok(()) = service.store.seed_tours().await else {
            panic!("seed failed");
        };

        let all = service.list_tours(&TourFilter::default()).await;
        let Ok(all) = all else {
            panic!("unfiltered list failed");
        };
        assert_eq!(all.len(), 6);

        let filter = TourFilter {
            search: Some("museum".to_string()),
            band: None,
        };
        let Ok(museums) = service.list_tours(&filter).await else {
            panic!("filtered list failed");
        };
        assert_eq!(museums.len(), 3);
        assert!(museums.iter().all(|t| t.name.to_lowercase().contains("museum")));
    }
}
