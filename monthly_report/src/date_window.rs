use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, Days, Duration, NaiveDateTime, NaiveTime, Utc};

/// The first and last instants (to the second) of one full UTC calendar month, both inclusive.
///
/// The window is computed once per run and shared between the fetch and send stages, so the orders queried and the
/// month named in the report subject always agree, even when a run straddles midnight at the end of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    /// The calendar month preceding the month that `now` falls in.
    pub fn previous_month(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let first_of_this_month = today - Days::new(u64::from(today.day0()));
        let last_of_prev_month = first_of_this_month - Days::new(1);
        let first_of_prev_month = last_of_prev_month - Days::new(u64::from(last_of_prev_month.day0()));
        let start = first_of_prev_month.and_time(NaiveTime::MIN);
        let end = first_of_this_month.and_time(NaiveTime::MIN) - Duration::seconds(1);
        Self { start, end }
    }

    pub fn start(&self) -> &NaiveDateTime {
        &self.start
    }

    pub fn end(&self) -> &NaiveDateTime {
        &self.end
    }

    /// The English name of the month, e.g. "February"
    pub fn month_name(&self) -> String {
        self.start.format("%B").to_string()
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }
}

impl Display for DateWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start.format("%Y-%m-%dT%H:%M:%S"), self.end.format("%Y-%m-%dT%H:%M:%S"))
    }
}
