//! # Monthly physical-order report
//! Fetches the previous calendar month's orders from a Shopify store, keeps the ones that need to be shipped and
//! emails a plain-text summary to a fixed recipient.
//!
//! A run has two stages, executed once each and in order:
//! * The [fetcher] computes the [`DateWindow`] for last month and pulls one page of orders from the Admin API.
//!   Any failure here is fatal.
//! * The [sender] formats a [`Report`] and hands it to a [`MailTransport`]. Failures here are captured in a
//!   [`DeliveryOutcome`] and never abort the run.
//!
//! [`run_monthly_report`] wires the two together.
//!
//! ## Configuration
//! Everything is configured via environment variables. See [config](config/index.html) for more information.

pub mod cli;
pub mod config;
pub mod date_window;
pub mod errors;
pub mod fetcher;
pub mod mailer;
pub mod order;
pub mod pipeline;
pub mod report;
pub mod sender;

pub use date_window::DateWindow;
pub use errors::ReportError;
pub use fetcher::{fetch_physical_orders, OrderSource};
pub use mailer::{EmailMessage, MailError, MailTransport, SendGridMailer};
pub use order::Order;
pub use pipeline::{run_monthly_report, ReportOutcome};
pub use report::Report;
pub use sender::{send_report, DeliveryOutcome};

#[cfg(test)]
mod test;
