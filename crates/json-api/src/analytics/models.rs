//! Analytics Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wave::money::format_price;
use wave_app::domain::analytics::records::{MonthlySales, ProductSales, SalesSummary};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSalesResponse {
    /// Product sold
    pub product_uuid: Uuid,

    /// Name at checkout
    pub name: String,

    /// Units sold
    pub units_sold: u64,

    /// Revenue in kobo
    pub revenue: u64,

    /// Revenue formatted in naira
    pub revenue_display: String,
}

impl From<ProductSales> for ProductSalesResponse {
    fn from(sales: ProductSales) -> Self {
        ProductSalesResponse {
            product_uuid: sales.product_uuid.into(),
            name: sales.name,
            units_sold: sales.units_sold,
            revenue: sales.revenue,
            revenue_display: format_price(sales.revenue),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MonthlySalesResponse {
    /// Calendar month, `YYYY-MM`
    pub month: String,

    /// Revenue in kobo
    pub revenue: u64,

    /// Revenue formatted in naira
    pub revenue_display: String,

    /// Orders placed that month
    pub order_count: u64,
}

impl From<MonthlySales> for MonthlySalesResponse {
    fn from(sales: MonthlySales) -> Self {
        MonthlySalesResponse {
            month: sales.month,
            revenue: sales.revenue,
            revenue_display: format_price(sales.revenue),
            order_count: sales.order_count,
        }
    }
}

/// A vendor's sales
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesSummaryResponse {
    /// Revenue from the vendor's order lines, in kobo
    pub revenue: u64,

    /// Revenue formatted in naira
    pub revenue_display: String,

    /// Units sold
    pub units_sold: u64,

    /// Orders containing at least one of the vendor's lines
    pub order_count: u64,

    /// Distinct customers across those orders
    pub customer_count: u64,

    /// Live products in the inventory
    pub product_count: u64,

    /// Best sellers by revenue
    pub top_products: Vec<ProductSalesResponse>,

    /// Recent months, oldest first
    pub monthly: Vec<MonthlySalesResponse>,
}

impl From<SalesSummary> for SalesSummaryResponse {
    fn from(summary: SalesSummary) -> Self {
        SalesSummaryResponse {
            revenue: summary.revenue,
            revenue_display: format_price(summary.revenue),
            units_sold: summary.units_sold,
            order_count: summary.order_count,
            customer_count: summary.customer_count,
            product_count: summary.product_count,
            top_products: summary.top_products.into_iter().map(Into::into).collect(),
            monthly: summary.monthly.into_iter().map(Into::into).collect(),
        }
    }
}
