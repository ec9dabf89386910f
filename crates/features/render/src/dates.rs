use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const PRESENT: &str = "Present";

/// `"<start year> - <end year | Present>"`.
///
/// `current` wins over any end date; a missing end date also reads as ongoing.
pub fn date_range(start: &str, end: Option<&str>, current: bool) -> String {
    let end = match end {
        Some(end) if !current && !end.trim().is_empty() => year(end),
        _ => PRESENT.to_owned(),
    };
    format!("{} - {end}", year(start))
}

/// Year of an ISO date (`2024-01-01`, `2024-01`, or a full timestamp). Anything else is
/// shown as written.
pub fn year(date: &str) -> String {
    let date = date.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return parsed.year().to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return parsed.year().to_string();
    }
    match date.split('-').next() {
        Some(prefix) if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) => prefix.to_owned(),
        _ => date.to_owned(),
    }
}

/// `"January 2024"`, for publication dates.
pub fn month_year(date: &DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn finished_ranges_show_both_years() {
        assert_eq!(date_range("2024-01-01", Some("2024-12-31"), false), "2024 - 2024");
        assert_eq!(date_range("2019-09", Some("2023-06-30T00:00:00Z"), false), "2019 - 2023");
    }

    #[test]
    fn current_always_reads_present() {
        assert_eq!(date_range("2023-01-01", Some("2020-01-01"), true), "2023 - Present");
        assert_eq!(date_range("2023-01-01", Some("2027-01-01"), true), "2023 - Present");
    }

    #[test]
    fn missing_end_reads_present() {
        assert_eq!(date_range("2022-03-01", None, false), "2022 - Present");
        assert_eq!(date_range("2022-03-01", Some("  "), false), "2022 - Present");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(year("Spring 2021"), "Spring 2021");
    }

    #[test]
    fn publication_month() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(month_year(&date), "March 2024");
    }

    proptest! {
        #[test]
        fn current_entries_never_show_an_end_year(
            start in 1990i32..2100,
            end in proptest::option::of(1990i32..2100),
        ) {
            let start = format!("{start}-01-01");
            let end = end.map(|y| format!("{y}-12-31"));
            let range = date_range(&start, end.as_deref(), true);
            prop_assert!(range.ends_with(" - Present"));
            prop_assert!(range.starts_with(&start[..4]));
        }

        #[test]
        fn finished_entries_show_their_end_year(start in 1990i32..2100, end in 1990i32..2100) {
            let range = date_range(&format!("{start}-06-01"), Some(&format!("{end}-06-01")), false);
            prop_assert_eq!(range, format!("{start} - {end}"));
        }
    }
}
