//! Owner dashboard report.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::analytics::AnalyticsRepository,
    error::AppError,
    model::analytics::{Analytics, DateRange},
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the dashboard report for bookings created within the local days of `range`.
    ///
    /// Financials, sources and trend exclude cancelled bookings; operations
    /// counts every status.
    pub async fn get_analytics(&self, range: DateRange) -> Result<Analytics, AppError> {
        let repo = AnalyticsRepository::new(self.db);
        let (from, until) = range.utc_window();

        let financials = repo.financials(from, until).await?;
        let sources = repo.sources(from, until).await?;
        let operations = repo.operations(from, until).await?;
        let trend = repo.trend(from, until).await?;

        tracing::debug!(
            "Built analytics for {} to {}: {} operation groups",
            range.start,
            range.end,
            operations.len()
        );

        Ok(Analytics {
            financials,
            sources,
            operations,
            trend,
        })
    }
}
