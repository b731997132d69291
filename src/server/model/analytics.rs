//! Dashboard report models.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::{
    model::analytics::{AnalyticsDto, FinancialsDto, OperationDto, SourceDto, TrendPointDto},
    server::{
        error::validation::ValidationError,
        model::transaction::{BookingStatus, BookingType},
        util::time::{local_days_window, local_today},
    },
};

/// Inclusive range of local (UTC+8) calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    window: (DateTime<Utc>, DateTime<Utc>),
}

impl DateRange {
    /// # Returns
    /// - `Err(ValidationError::InvalidDateRange)` - `start` is after `end`, or a
    ///   bound is too far from the present to be represented as a timestamp
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange);
        }

        let window = local_days_window(start, end).ok_or(ValidationError::InvalidDateRange)?;

        Ok(Self { start, end, window })
    }

    /// Builds a range from optional query bounds.
    ///
    /// A missing start defaults to the first day of the current local month and
    /// a missing end to the current local day.
    pub fn from_query(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let today = local_today();
        let end = end.unwrap_or(today);
        let start = start.unwrap_or_else(|| today.with_day(1).unwrap_or(today));

        Self::new(start, end)
    }

    /// Half-open UTC window `[from, until)` matching the range's local days.
    pub fn utc_window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        self.window
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Financials {
    pub gross_sales: f64,
    pub cash_collected: f64,
    pub receivables: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceBreakdown {
    pub booking_type: BookingType,
    pub count: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub booking_status: BookingStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub sales: f64,
}

/// Owner dashboard report for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    /// Money totals over non-cancelled bookings.
    pub financials: Financials,
    /// Count and revenue per booking channel, non-cancelled only.
    pub sources: Vec<SourceBreakdown>,
    /// Count per booking status, cancelled included.
    pub operations: Vec<StatusCount>,
    /// Daily sales for days with at least one non-cancelled booking, ascending.
    pub trend: Vec<TrendPoint>,
}

impl Analytics {
    pub fn into_dto(self) -> AnalyticsDto {
        AnalyticsDto {
            financials: FinancialsDto {
                gross_sales: self.financials.gross_sales,
                cash_collected: self.financials.cash_collected,
                receivables: self.financials.receivables,
            },
            sources: self
                .sources
                .into_iter()
                .map(|source| SourceDto {
                    booking_type: source.booking_type.to_string(),
                    count: source.count,
                    revenue: source.revenue,
                })
                .collect(),
            operations: self
                .operations
                .into_iter()
                .map(|operation| OperationDto {
                    booking_status: operation.booking_status.to_string(),
                    count: operation.count,
                })
                .collect(),
            trend: self
                .trend
                .into_iter()
                .map(|point| TrendPointDto {
                    date: point.date,
                    sales: point.sales,
                })
                .collect(),
        }
    }
}
