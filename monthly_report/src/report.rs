use crate::{DateWindow, Order};

pub const DEFAULT_REPORT_TITLE: &str = "Shopify Monthly Report";
pub const NO_ORDERS_SENTINEL: &str = "No physical orders this month.";
pub const ORDERS_HEADER: &str = "Physical orders this month:";

/// The subject and plain-text body of the email for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub subject: String,
    pub body: String,
}

impl Report {
    /// Builds the report for `orders`, naming the month and year of `window` in the subject. Orders are listed in the
    /// order given.
    pub fn new(title: &str, window: &DateWindow, orders: &[Order]) -> Self {
        let subject =
            format!("{title} – {} {} – {} physical orders", window.month_name(), window.year(), orders.len());
        let body = if orders.is_empty() {
            NO_ORDERS_SENTINEL.to_string()
        } else {
            let mut lines = Vec::with_capacity(orders.len() + 2);
            lines.push(ORDERS_HEADER.to_string());
            lines.push(String::new());
            lines.extend(orders.iter().map(Order::report_line));
            lines.join("\n")
        };
        Self { subject, body }
    }
}
