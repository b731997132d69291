//! Business-day arithmetic in the resort's fixed UTC+8 offset.
//!
//! Timestamps are persisted in UTC. Reporting and "today" views operate on the
//! calendar date of the timestamp shifted by eight hours.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Offset applied to UTC timestamps to obtain the resort's local date.
pub const LOCAL_OFFSET_SECONDS: i32 = 8 * 3600;

fn local_offset() -> Duration {
    Duration::seconds(LOCAL_OFFSET_SECONDS as i64)
}

/// Local calendar date of a UTC timestamp.
pub fn local_date(timestamp: DateTime<Utc>) -> NaiveDate {
    (timestamp + local_offset()).date_naive()
}

/// Current local calendar date.
pub fn local_today() -> NaiveDate {
    local_date(Utc::now())
}

/// UTC instant at which the given local date begins.
///
/// `None` when the instant falls outside the representable range.
pub fn local_midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .checked_sub_signed(local_offset())
        .map(|utc| utc.and_utc())
}

/// Half-open UTC window `[start, end)` covering local dates `first..=last`.
///
/// `None` when either bound falls outside the representable range.
pub fn local_days_window(
    first: NaiveDate,
    last: NaiveDate,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = local_midnight_utc(first)?;
    let end = local_midnight_utc(last)?.checked_add_signed(Duration::days(1))?;
    Some((start, end))
}
