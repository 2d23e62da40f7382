use chrono::{DateTime, Utc};
use log::*;

use crate::{
    config::ReportConfig,
    fetcher::{fetch_physical_orders, OrderSource},
    mailer::MailTransport,
    sender::{send_report, DeliveryOutcome},
    DateWindow,
    Report,
    ReportError,
};

#[derive(Debug)]
pub struct ReportOutcome {
    pub window: DateWindow,
    pub order_count: usize,
    pub report: Report,
    pub delivery: DeliveryOutcome,
}

/// Runs the whole job for the month preceding `now`: fetch, filter, format, send.
///
/// The date window is computed once and used for both the order query and the report subject. A fetch failure
/// aborts the run before anything is sent. A delivery failure does not; it is returned in
/// [`ReportOutcome::delivery`].
pub async fn run_monthly_report<S, M>(
    source: &S,
    mailer: &M,
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> Result<ReportOutcome, ReportError>
where
    S: OrderSource,
    M: MailTransport,
{
    let window = DateWindow::previous_month(now);
    info!("Building the {} {} report ({window})", window.month_name(), window.year());
    let orders = fetch_physical_orders(source, &window).await?;
    let report = Report::new(&config.title, &window, &orders);
    trace!("Report subject: {}\n{}", report.subject, report.body);
    let delivery = send_report(mailer, config, &report).await;
    Ok(ReportOutcome { window, order_count: orders.len(), report, delivery })
}
