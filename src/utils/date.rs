//! Calendar dates in the timezone Mailchimp reports are keyed on.

use chrono::{DateTime, Utc};
use chrono_tz::America::Denver;

/// Formats `date` (or now) as `YYYY-MM-DD` in `America/Denver`.
///
/// The date is the local Denver calendar day, not the UTC one.
pub fn mailchimp_date_string(date: Option<DateTime<Utc>>) -> String {
    let instant = date.unwrap_or_else(Utc::now);
    instant.with_timezone(&Denver).format("%Y-%m-%d").to_string()
}
