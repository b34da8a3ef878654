//! Product Models

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wave::money::format_price;
use wave_app::domain::products::records::ProductRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// The vendor selling the product
    pub vendor_uuid: Uuid,

    /// Display name
    pub name: String,

    /// Long description
    pub description: String,

    /// Unit price in kobo
    pub price: u64,

    /// Unit price formatted in naira
    pub price_display: String,

    /// Category name
    pub category: String,

    /// Absolute image URL
    pub image_url: String,

    /// Approval status: pending, approved or rejected
    pub status: String,

    /// When an admin last reviewed the product
    pub reviewed_at: Option<String>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            vendor_uuid: product.vendor_uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            price_display: format_price(product.price),
            category: product.category,
            image_url: product.image_url,
            status: product.status.to_string(),
            reviewed_at: product.reviewed_at.as_ref().map(ToString::to_string),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// A list of products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

impl From<Vec<ProductRecord>> for ProductsResponse {
    fn from(products: Vec<ProductRecord>) -> Self {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
