//! Format build timestamps for the `BUILD_DATE` constant.
//!
//! ## Notes
//! - Formatting is always done in UTC with second precision and a literal `Z`, so the result does not depend on the
//!   host timezone or locale.

use chrono::DateTime;

/// `strftime` pattern for `BUILD_DATE` (e.g. `2024-06-21T05:12:05Z`).
pub const BUILD_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format milliseconds since the Unix epoch as an ISO-8601 UTC timestamp.
///
/// ## Returns
/// - `Some(String)` for any instant chrono can represent, `None` when the value is out of range.
///
/// ## Examples
/// ```rust
/// use buildconst_core::time::format_build_date;
///
/// assert_eq!(format_build_date(1718946725000).as_deref(), Some("2024-06-21T05:12:05Z"));
/// ```
pub fn format_build_date(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.format(BUILD_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_timestamp() {
        assert_eq!(format_build_date(1718946725000).as_deref(), Some("2024-06-21T05:12:05Z"));
    }

    #[test]
    fn test_millis_are_truncated() {
        assert_eq!(format_build_date(1718946725999).as_deref(), Some("2024-06-21T05:12:05Z"));
    }

    #[test]
    fn test_epoch() {
        assert_eq!(format_build_date(0).as_deref(), Some("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(format_build_date(-1000).as_deref(), Some("1969-12-31T23:59:59Z"));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(format_build_date(i64::MAX), None);
    }
}
