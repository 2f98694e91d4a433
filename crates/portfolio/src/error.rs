use analytics::AnalyticsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("The date axis is empty; aggregation needs at least one trading date.")]
    EmptyDateAxis,

    #[error("Per-account statistics calculation failed: {0}")]
    Analytics(#[from] AnalyticsError),
}
