use chrono::NaiveDateTime;

/// The timestamp format accepted by the `created_at` search syntax.
pub const SEARCH_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Builds a Shopify search-syntax filter matching orders created within `[start, end]`, inclusive on both ends.
pub fn created_at_filter(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    format!(
        "created_at:>={} AND created_at:<={}",
        start.format(SEARCH_TIMESTAMP_FORMAT),
        end.format(SEARCH_TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn filter_is_inclusive_range() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(
            created_at_filter(&start, &end),
            "created_at:>=2024-02-01T00:00:00 AND created_at:<=2024-02-29T23:59:59"
        );
    }
}
