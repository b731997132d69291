use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FinancialsDto {
    pub gross_sales: f64,
    pub cash_collected: f64,
    pub receivables: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SourceDto {
    pub booking_type: String,
    pub count: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OperationDto {
    pub booking_status: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendPointDto {
    pub date: NaiveDate,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsDto {
    pub financials: FinancialsDto,
    pub sources: Vec<SourceDto>,
    pub operations: Vec<OperationDto>,
    pub trend: Vec<TrendPointDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct AnalyticsQuery {
    /// First local day of the range, inclusive (`YYYY-MM-DD`).
    pub start: Option<NaiveDate>,
    /// Last local day of the range, inclusive (`YYYY-MM-DD`).
    pub end: Option<NaiveDate>,
}
