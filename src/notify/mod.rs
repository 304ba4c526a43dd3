//! Confirmation email delivery.

pub mod mailer;

pub use mailer::{ConfirmationMailer, LogMailer, SmtpMailer};
