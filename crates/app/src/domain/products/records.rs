//! Product Records

use jiff::Timestamp;
use wave::catalog::ProductStatus;

use crate::{domain::accounts::records::AccountUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub vendor_uuid: AccountUuid,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub image_url: String,
    pub status: ProductStatus,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
