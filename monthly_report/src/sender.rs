use std::fmt::{Display, Formatter};

use log::*;

use crate::{
    config::{MailConfig, ReportConfig},
    mailer::{EmailMessage, MailError, MailTransport},
    Report,
};

/// What happened when the report was handed to the mail service. A failed delivery is a normal value here, not an
/// error: the caller decides how loudly to complain about it.
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// The mail service accepted the message with the given HTTP status.
    Sent { status: u16 },
    /// Delivery failed. Nothing was retried.
    Failed(MailError),
    /// Dry run. Nothing was sent.
    Skipped,
}

impl DeliveryOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

impl Display for DeliveryOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent { status } => write!(f, "Email sent successfully, status {status}."),
            Self::Failed(e) => write!(f, "Email failed: {e}"),
            Self::Skipped => write!(f, "Dry run. Email was not sent."),
        }
    }
}

pub fn email_for_report(config: &MailConfig, report: &Report) -> EmailMessage {
    EmailMessage {
        from: config.from.clone(),
        to: config.to.clone(),
        subject: report.subject.clone(),
        body: report.body.clone(),
    }
}

/// Sends exactly one email carrying `report`, unless this is a dry run. Delivery errors are captured in the returned
/// outcome rather than propagated.
pub async fn send_report<M: MailTransport>(mailer: &M, config: &ReportConfig, report: &Report) -> DeliveryOutcome {
    if config.dry_run {
        info!("Dry run. Not sending '{}'", report.subject);
        return DeliveryOutcome::Skipped;
    }
    let message = email_for_report(&config.mail, report);
    debug!("Sending '{}' to {}", message.subject, message.to);
    match mailer.send(&message).await {
        Ok(status) => {
            info!("📧️ Report sent to {}. Status {status}", message.to);
            DeliveryOutcome::Sent { status }
        },
        Err(e) => {
            error!("📧️ Could not send the report to {}. {e}", message.to);
            DeliveryOutcome::Failed(e)
        },
    }
}
