//! Products Data

use wave::catalog::ProductSubmission;

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub details: ProductDetails,
}

/// Vendor-editable product fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub image_url: String,
}

impl ProductDetails {
    /// Borrow the fields for validation.
    #[must_use]
    pub fn submission(&self) -> ProductSubmission<'_> {
        ProductSubmission {
            name: &self.name,
            description: &self.description,
            price: self.price,
            category: &self.category,
            image_url: &self.image_url,
        }
    }
}

/// Public catalog filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
}
