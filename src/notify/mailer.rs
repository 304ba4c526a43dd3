//! SMTP confirmation mailer using Lettre.
//!
//! The booking service invokes the mailer from a detached task; send
//! failures are returned to that task, logged, and never surface to the
//! HTTP caller.

use std::fmt;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::AppConfig;
use crate::domain::Booking;
use crate::error::BookingError;

/// Sends a booking confirmation to the customer address.
///
/// Object-safe so the booking service can hold any implementation behind
/// an `Arc<dyn ConfirmationMailer>`; tests substitute recording doubles.
#[async_trait]
pub trait ConfirmationMailer: Send + Sync {
    /// Formats and sends the confirmation email for `booking`.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Mail`] if the message cannot be built
    /// or handed to the SMTP relay.
    async fn send_confirmation(&self, booking: &Booking) -> Result<(), BookingError>;
}

/// SMTP mailer backed by a Lettre relay transport.
#[derive(Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    credentials: Credentials,
    from: String,
}

impl SmtpMailer {
    /// Creates a mailer from the SMTP section of the configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            credentials: Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone()),
            from: config.smtp_from.clone(),
        }
    }

    /// Builds a fresh relay transport.
    ///
    /// A new transport per email avoids holding SMTP connections across
    /// the long idle stretches between bookings.
    fn build_transport(&self) -> Result<SmtpTransport, BookingError> {
        Ok(SmtpTransport::relay(&self.host)
            .map_err(|e| BookingError::Mail(format!("SMTP relay error: {e}")))?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build())
    }
}

// Credentials are deliberately left out of the debug output.
impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ConfirmationMailer for SmtpMailer {
    async fn send_confirmation(&self, booking: &Booking) -> Result<(), BookingError> {
        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| BookingError::Mail(format!("invalid from address: {e}")))?,
            )
            .to(booking
                .customer_email
                .parse()
                .map_err(|e| BookingError::Mail(format!("invalid to address: {e}")))?)
            .subject(format!("Booking Confirmation - {}", booking.reference))
            .header(ContentType::TEXT_HTML)
            .body(confirmation_body(booking))
            .map_err(|e| BookingError::Mail(format!("failed to build email: {e}")))?;

        let mailer = self.build_transport()?;

        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map(|_| ())
                .map_err(|e| BookingError::Mail(format!("failed to send email: {e}")))
        })
        .await
        .map_err(|e| BookingError::Mail(format!("email task failed: {e}")))?
    }
}

/// Mailer that logs the confirmation instead of sending it.
///
/// Used when no SMTP credentials are configured, so local development
/// and tests never open network connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl ConfirmationMailer for LogMailer {
    async fn send_confirmation(&self, booking: &Booking) -> Result<(), BookingError> {
        tracing::info!(
            reference = %booking.reference,
            email = %booking.customer_email,
            "email sending disabled; confirmation logged only"
        );
        Ok(())
    }
}

/// Renders the confirmation HTML body for `booking`.
fn confirmation_body(booking: &Booking) -> String {
    let special_requests = booking
        .special_requests
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("<p><strong>Special Requests:</strong> {s}</p>"))
        .unwrap_or_default();

    format!(
        r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #3b82f6;">Booking Confirmation</h2>
    <p>Dear {customer_name},</p>
    <p>Thank you for booking with Oslo Explore! Your booking has been confirmed.</p>

    <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
        <h3>Booking Details:</h3>
        <p><strong>Reference:</strong> {reference}</p>
        <p><strong>Tour:</strong> {tour_name}</p>
        <p><strong>Date:</strong> {tour_date}</p>
        <p><strong>Participants:</strong> {participants}</p>
        <p><strong>Price:</strong> {tour_price}</p>
        <p><strong>Phone:</strong> {customer_phone}</p>
        {special_requests}
    </div>

    <p>We look forward to seeing you in Oslo!</p>
    <p>Best regards,<br>Oslo Explore Team</p>
</div>
"#,
        customer_name = booking.customer_name,
        reference = booking.reference,
        tour_name = booking.tour_name,
        tour_date = booking.tour_date,
        participants = booking.participants,
        tour_price = booking.tour_price,
        customer_phone = booking.customer_phone,
    )
}
