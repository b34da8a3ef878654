//! Analytics service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::records::AccountUuid,
        analytics::{
            errors::AnalyticsServiceError, records::SalesSummary,
            repository::PgAnalyticsRepository,
        },
    },
};

/// Best sellers reported in a summary.
pub const TOP_PRODUCTS: u32 = 5;

/// Calendar months covered by the monthly breakdown, including the current one.
pub const MONTHLY_WINDOW: u16 = 6;

#[derive(Debug, Clone)]
pub struct PgAnalyticsService {
    db: Db,
    repository: PgAnalyticsRepository,
}

impl PgAnalyticsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAnalyticsRepository::new(),
        }
    }
}

#[async_trait]
impl AnalyticsService for PgAnalyticsService {
    async fn sales_summary(&self, vendor: AccountUuid) -> Result<SalesSummary, AnalyticsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut summary = self.repository.sales_totals(&mut tx, vendor).await?;

        summary.top_products = self
            .repository
            .top_products(&mut tx, vendor, TOP_PRODUCTS)
            .await?;

        summary.monthly = self
            .repository
            .monthly_sales(&mut tx, vendor, MONTHLY_WINDOW)
            .await?;

        tx.commit().await?;

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Summarises everything a vendor has sold.
    async fn sales_summary(&self, vendor: AccountUuid) -> Result<SalesSummary, AnalyticsServiceError>;
}
