//! Read-only rollups over bookings for the owner dashboard.
//!
//! Each report section is an independent query over the same UTC window.
//! Financials, sources and operations aggregate in SQL. Trend rows are folded
//! in memory so that buckets follow the local (UTC+8) calendar day regardless
//! of the database backend's date functions.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr,
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::{
        analytics::{Financials, SourceBreakdown, StatusCount, TrendPoint},
        transaction::{BookingStatus, BookingType},
    },
    util::{parse::parse_stored, time::local_date},
};

use entity::transaction::Column;

pub struct AnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums total, downpayment and balance of non-cancelled bookings in the window.
    ///
    /// # Returns
    /// - `Ok(Financials)` - Totals, all zero when no booking matches
    pub async fn financials(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Financials, AppError> {
        let sums = entity::prelude::Transaction::find()
            .select_only()
            .column_as(sum(Column::TotalAmount), "gross_sales")
            .column_as(sum(Column::Downpayment), "cash_collected")
            .column_as(sum(Column::Balance), "receivables")
            .filter(in_window(from, until))
            .filter(not_cancelled())
            .into_tuple::<(Option<f64>, Option<f64>, Option<f64>)>()
            .one(self.db)
            .await?;

        // SUM over no rows is NULL
        let (gross_sales, cash_collected, receivables) = sums.unwrap_or_default();

        Ok(Financials {
            gross_sales: gross_sales.unwrap_or_default(),
            cash_collected: cash_collected.unwrap_or_default(),
            receivables: receivables.unwrap_or_default(),
        })
    }

    /// Counts bookings and sums revenue per booking type, excluding cancelled ones.
    ///
    /// # Returns
    /// - `Ok(Vec<SourceBreakdown>)` - One entry per booking type present, ordered by type name
    pub async fn sources(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<SourceBreakdown>, AppError> {
        let rows = entity::prelude::Transaction::find()
            .select_only()
            .column(Column::BookingType)
            .column_as(count(Column::Id), "count")
            .column_as(sum(Column::TotalAmount), "revenue")
            .filter(in_window(from, until))
            .filter(not_cancelled())
            .group_by(Column::BookingType)
            .order_by_asc(Column::BookingType)
            .into_tuple::<(String, i64, Option<f64>)>()
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(booking_type, count, revenue)| {
                Ok(SourceBreakdown {
                    booking_type: parse_stored::<BookingType>("booking_type", booking_type)?,
                    count,
                    revenue: revenue.unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Counts bookings per status, cancelled included.
    ///
    /// # Returns
    /// - `Ok(Vec<StatusCount>)` - One entry per status present, ordered by status name
    pub async fn operations(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<StatusCount>, AppError> {
        let rows = entity::prelude::Transaction::find()
            .select_only()
            .column(Column::BookingStatus)
            .column_as(count(Column::Id), "count")
            .filter(in_window(from, until))
            .group_by(Column::BookingStatus)
            .order_by_asc(Column::BookingStatus)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(status, count)| {
                Ok(StatusCount {
                    booking_status: parse_stored::<BookingStatus>("booking_status", status)?,
                    count,
                })
            })
            .collect()
    }

    /// Sums non-cancelled sales per local calendar day.
    ///
    /// # Returns
    /// - `Ok(Vec<TrendPoint>)` - One point per day with sales, ascending by date
    pub async fn trend(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<TrendPoint>, AppError> {
        let rows = entity::prelude::Transaction::find()
            .select_only()
            .column(Column::CreatedAt)
            .column(Column::TotalAmount)
            .filter(in_window(from, until))
            .filter(not_cancelled())
            .into_tuple::<(DateTime<Utc>, f64)>()
            .all(self.db)
            .await?;

        let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (created_at, total) in rows {
            *days.entry(local_date(created_at)).or_insert(0.0) += total;
        }

        Ok(days
            .into_iter()
            .map(|(date, sales)| TrendPoint { date, sales })
            .collect())
    }
}

/// `from <= created_at < until`, shared by every section.
fn in_window(from: DateTime<Utc>, until: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(Column::CreatedAt.gte(from))
        .add(Column::CreatedAt.lt(until))
}

fn not_cancelled() -> Condition {
    Condition::all().add(Column::BookingStatus.ne(BookingStatus::Cancelled.as_str()))
}

fn sum(column: Column) -> Expr {
    // ExprTrait overlaps ColumnTrait comparison methods, keep it local
    use sea_orm::sea_query::ExprTrait;
    Expr::col(column).sum()
}

fn count(column: Column) -> Expr {
    use sea_orm::sea_query::ExprTrait;
    Expr::col(column).count()
}
