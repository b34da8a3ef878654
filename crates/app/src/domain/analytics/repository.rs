//! Analytics Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    accounts::records::AccountUuid,
    analytics::records::{MonthlySales, ProductSales, SalesSummary},
    columns::try_get_count,
    products::records::ProductUuid,
};

const SALES_TOTALS_SQL: &str = include_str!("sql/sales_totals.sql");
const TOP_PRODUCTS_SQL: &str = include_str!("sql/top_products.sql");
const MONTHLY_SALES_SQL: &str = include_str!("sql/monthly_sales.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAnalyticsRepository;

impl PgAnalyticsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Totals only; `top_products` and `monthly` are left empty.
    pub(crate) async fn sales_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: AccountUuid,
    ) -> Result<SalesSummary, sqlx::Error> {
        let row = query(SALES_TOTALS_SQL)
            .bind(vendor.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(SalesSummary {
            revenue: try_get_count(&row, "revenue")?,
            units_sold: try_get_count(&row, "units_sold")?,
            order_count: try_get_count(&row, "order_count")?,
            customer_count: try_get_count(&row, "customer_count")?,
            product_count: try_get_count(&row, "product_count")?,
            top_products: Vec::new(),
            monthly: Vec::new(),
        })
    }

    pub(crate) async fn top_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: AccountUuid,
        limit: u32,
    ) -> Result<Vec<ProductSales>, sqlx::Error> {
        query_as::<Postgres, ProductSales>(TOP_PRODUCTS_SQL)
            .bind(vendor.into_uuid())
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    /// Sales per month for the current month and the `months - 1` before it.
    pub(crate) async fn monthly_sales(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: AccountUuid,
        months: u16,
    ) -> Result<Vec<MonthlySales>, sqlx::Error> {
        query_as::<Postgres, MonthlySales>(MONTHLY_SALES_SQL)
            .bind(vendor.into_uuid())
            .bind(i32::from(months))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductSales {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            units_sold: try_get_count(row, "units_sold")?,
            revenue: try_get_count(row, "revenue")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for MonthlySales {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            month: row.try_get("month")?,
            revenue: try_get_count(row, "revenue")?,
            order_count: try_get_count(row, "order_count")?,
        })
    }
}
