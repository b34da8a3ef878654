//! Analytics service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
