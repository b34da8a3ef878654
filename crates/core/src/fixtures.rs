//! Catalog Fixtures
//!
//! Seed catalogs are described in YAML: categories, vendor accounts keyed by
//! a short name, and products that reference both.

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::ProductStatus,
    money::{MAX_AMOUNT, STORE_CURRENCY},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Currency other than the store currency
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),

    /// Product references a vendor key that is not defined
    #[error("Product {product} references unknown vendor: {vendor}")]
    UnknownVendor {
        /// Product name
        product: String,

        /// Missing vendor key
        vendor: String,
    },

    /// Product references a category that is not listed
    #[error("Product {product} references unknown category: {category}")]
    UnknownCategory {
        /// Product name
        product: String,

        /// Missing category name
        category: String,
    },
}

/// Seed catalog
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Category names
    pub categories: Vec<String>,

    /// Map of vendor key -> vendor fixture
    pub vendors: FxHashMap<String, VendorFixture>,

    /// Products in seeding order
    pub products: Vec<ProductFixture>,
}

/// Vendor Fixture
#[derive(Debug, Deserialize)]
pub struct VendorFixture {
    /// Login email
    pub email: String,

    /// Display name
    pub full_name: String,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price (e.g., "2500 NGN")
    pub price: String,

    /// Category name
    pub category: String,

    /// Image URL
    pub image_url: String,

    /// Status the product should end up in
    #[serde(default)]
    pub status: ProductStatus,

    /// Vendor key
    pub vendor: String,
}

impl ProductFixture {
    /// Price in minor units.
    ///
    /// # Errors
    ///
    /// See [`parse_price`].
    pub fn price_minor(&self) -> Result<u64, FixtureError> {
        parse_price(&self.price)
    }
}

impl CatalogFixture {
    /// Read and check a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it fails
    /// [`CatalogFixture::check`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents)
    }

    /// Parse and check fixture YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or fails
    /// [`CatalogFixture::check`].
    pub fn parse(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: Self = serde_norway::from_str(yaml)?;

        fixture.check()?;

        Ok(fixture)
    }

    /// Verify every product's vendor, category and price.
    ///
    /// # Errors
    ///
    /// Returns the first broken reference or malformed price.
    pub fn check(&self) -> Result<(), FixtureError> {
        let categories: FxHashSet<&str> = self.categories.iter().map(String::as_str).collect();

        for product in &self.products {
            if !self.vendors.contains_key(&product.vendor) {
                return Err(FixtureError::UnknownVendor {
                    product: product.name.clone(),
                    vendor: product.vendor.clone(),
                });
            }

            if !categories.contains(product.category.as_str()) {
                return Err(FixtureError::UnknownCategory {
                    product: product.name.clone(),
                    category: product.category.clone(),
                });
            }

            product.price_minor()?;
        }

        Ok(())
    }

    /// Vendors sorted by key.
    pub fn sorted_vendors(&self) -> Vec<(&str, &VendorFixture)> {
        let mut vendors: Vec<_> = self
            .vendors
            .iter()
            .map(|(key, vendor)| (key.as_str(), vendor))
            .collect();

        vendors.sort_unstable_by_key(|(key, _)| *key);

        vendors
    }
}

/// Parse price string (e.g., "2500.50 NGN") into minor units
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency is not the
/// store currency.
pub fn parse_price(s: &str) -> Result<u64, FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    if *currency_code != STORE_CURRENCY.iso_alpha_code {
        return Err(FixtureError::UnsupportedCurrency((*currency_code).to_string()));
    }

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_u64())
        .filter(|minor| *minor <= MAX_AMOUNT)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const FIXTURE: &str = r"
categories: [Food]
vendors:
  vendor_01:
    email: v1@example.com
    full_name: Vendor One
products:
  - name: Golden Morn Cereal
    description: 500g pack of nutritious maize and soya cereal.
    price: 2500 NGN
    category: Food
    image_url: https://placehold.co/600x600.png
    status: approved
    vendor: vendor_01
";

    #[test]
    fn parse_price_converts_to_kobo() -> TestResult {
        assert_eq!(parse_price("2500 NGN")?, 2_500_00);
        assert_eq!(parse_price("19.99 NGN")?, 1_999);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        assert!(matches!(
            parse_price("2500NGN"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("-5 NGN"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("100000000000000000 NGN"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_other_currencies() {
        assert!(matches!(
            parse_price("2.99 GBP"),
            Err(FixtureError::UnsupportedCurrency(code)) if code == "GBP"
        ));
    }

    #[test]
    fn parse_reads_products_and_vendors() -> TestResult {
        let fixture = CatalogFixture::parse(FIXTURE)?;

        assert_eq!(fixture.products.len(), 1);
        assert_eq!(fixture.sorted_vendors().len(), 1);
        assert_eq!(
            fixture.products.first().map(|product| product.status),
            Some(ProductStatus::Approved)
        );

        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_vendor() {
        let yaml = FIXTURE.replace("vendor: vendor_01", "vendor: vendor_99");

        assert!(matches!(
            CatalogFixture::parse(&yaml),
            Err(FixtureError::UnknownVendor { vendor, .. }) if vendor == "vendor_99"
        ));
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let yaml = FIXTURE.replace("category: Food", "category: Toys");

        assert!(matches!(
            CatalogFixture::parse(&yaml),
            Err(FixtureError::UnknownCategory { category, .. }) if category == "Toys"
        ));
    }
}
