use shopify_tools::ShopifyApiError;
use thiserror::Error;

/// Errors that abort a report run. Only the fetch stage produces these; delivery problems are reported through
/// [`crate::DeliveryOutcome`] instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not fetch last month's orders. {0}")]
    Fetch(#[from] ShopifyApiError),
}
