//! Inventory Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use wave_app::domain::products::data::ProductDetails;

/// Product Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Display name
    pub name: String,

    /// Long description
    pub description: String,

    /// Unit price in kobo
    pub price: u64,

    /// Category name
    pub category: String,

    /// Absolute image URL
    pub image_url: String,
}

impl From<ProductRequest> for ProductDetails {
    fn from(request: ProductRequest) -> Self {
        ProductDetails {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            image_url: request.image_url,
        }
    }
}
