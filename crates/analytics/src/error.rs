use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error("An unexpected error occurred during analytics calculation: {0}")]
    InternalError(String),
}
