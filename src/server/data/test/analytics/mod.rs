use crate::server::{
    data::analytics::AnalyticsRepository,
    error::AppError,
    model::{
        analytics::DateRange,
        transaction::{BookingStatus, BookingType},
    },
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory::transaction::TransactionFactory};

mod financials;
mod operations;
mod sources;
mod trend;

/// Window covering local days 2026-03-01 and 2026-03-02.
fn march_window() -> (DateTime<Utc>, DateTime<Utc>) {
    DateRange::new(
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    )
    .unwrap()
    .utc_window()
}

/// UTC instant that falls on the given local (UTC+8) day at `hour` local time.
fn local(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap() - chrono::Duration::hours(8)
}
