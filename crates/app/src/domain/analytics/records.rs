//! Analytics Records

use crate::domain::products::records::ProductUuid;

/// A vendor's sales, computed from the order lines it sold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesSummary {
    pub revenue: u64,
    pub units_sold: u64,
    pub order_count: u64,
    pub customer_count: u64,
    /// Live products in the vendor's inventory.
    pub product_count: u64,
    pub top_products: Vec<ProductSales>,
    pub monthly: Vec<MonthlySales>,
}

/// Sales of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub units_sold: u64,
    pub revenue: u64,
}

/// Sales in one calendar month (UTC), keyed `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: String,
    pub revenue: u64,
    pub order_count: u64,
}
