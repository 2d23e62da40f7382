//! Outbound email. The report only ever needs to send one plain-text message, so the transport surface is a single
//! method.
mod sendgrid;

pub use sendgrid::{SendGridMailer, SENDGRID_SEND_URL};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Could not initialize the mail client. {0}")]
    Initialization(String),
    #[error("Could not submit the message. {0}")]
    RequestError(String),
    #[error("The mail service rejected the message. Error {status}. {message}")]
    Rejected { status: u16, message: String },
}

/// Delivers a single email. Implementations return the status code reported by the delivery service.
#[allow(async_fn_in_trait)]
pub trait MailTransport {
    async fn send(&self, message: &EmailMessage) -> Result<u16, MailError>;
}
