use chrono::{DateTime, Utc};

/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

/// Format a timestamp as DD/MM/YYYY
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024"
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// Format an optional timestamp, "-" when absent
pub fn format_date_opt(dt: Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => format_date(dt),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(dt), "15/03/2024");
    }

    #[test]
    fn test_format_date_opt() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date_opt(Some(dt)), "31/12/2024");
        assert_eq!(format_date_opt(None), "-");
    }
}
