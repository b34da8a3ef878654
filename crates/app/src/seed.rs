//! Catalog seeding from YAML fixtures.

use thiserror::Error;
use wave::{
    accounts::Role,
    catalog::{ProductStatus, ReviewDecision},
    fixtures::{CatalogFixture, FixtureError},
};

use crate::domain::{
    accounts::{AccountsService, AccountsServiceError, data::NewAccount, records::AccountUuid},
    categories::{CategoriesService, CategoriesServiceError, data::NewCategory, records::CategoryUuid},
    products::{
        ProductsService, ProductsServiceError,
        data::{NewProduct, ProductDetails},
        records::ProductUuid,
    },
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("failed to seed vendor {email}")]
    Account {
        email: String,
        #[source]
        source: AccountsServiceError,
    },

    #[error("failed to seed category {name}")]
    Category {
        name: String,
        #[source]
        source: CategoriesServiceError,
    },

    #[error("failed to seed product {name}")]
    Product {
        name: String,
        #[source]
        source: ProductsServiceError,
    },

    #[error("fixture references vendor {0} that was not seeded")]
    MissingVendor(String),
}

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub vendors_created: usize,
    pub products_created: usize,
    pub products_skipped: usize,
}

/// Writes a [`CatalogFixture`] through the services.
///
/// Runs are repeatable: existing vendors are reused and a vendor's product is
/// skipped when one with the same name is already live.
pub struct CatalogSeeder<'a> {
    pub accounts: &'a dyn AccountsService,
    pub categories: &'a dyn CategoriesService,
    pub products: &'a dyn ProductsService,
}

impl std::fmt::Debug for CatalogSeeder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSeeder").finish_non_exhaustive()
    }
}

impl CatalogSeeder<'_> {
    /// Seed `fixture`, giving new vendor accounts `vendor_password`.
    ///
    /// # Errors
    ///
    /// Returns the first fixture or service failure.
    pub async fn seed(
        &self,
        fixture: &CatalogFixture,
        vendor_password: &str,
    ) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        for name in &fixture.categories {
            self.categories
                .create_category(NewCategory {
                    uuid: CategoryUuid::new(),
                    name: name.clone(),
                })
                .await
                .map_err(|source| SeedError::Category {
                    name: name.clone(),
                    source,
                })?;

            report.categories += 1;
        }

        let mut vendors: Vec<(&str, AccountUuid)> = Vec::with_capacity(fixture.vendors.len());

        for (key, vendor) in fixture.sorted_vendors() {
            let account = match self
                .accounts
                .register(NewAccount {
                    uuid: AccountUuid::new(),
                    email: vendor.email.clone(),
                    password: vendor_password.to_string(),
                    full_name: vendor.full_name.clone(),
                    phone: None,
                    role: Role::Vendor,
                })
                .await
            {
                Ok(account) => {
                    report.vendors_created += 1;
                    account
                }
                Err(AccountsServiceError::AlreadyExists) => self
                    .accounts
                    .find_account_by_email(&vendor.email)
                    .await
                    .map_err(|source| SeedError::Account {
                        email: vendor.email.clone(),
                        source,
                    })?,
                Err(source) => {
                    return Err(SeedError::Account {
                        email: vendor.email.clone(),
                        source,
                    });
                }
            };

            vendors.push((key, account.uuid));
        }

        for product in &fixture.products {
            let vendor = vendors
                .iter()
                .find(|(key, _)| *key == product.vendor)
                .map(|(_, uuid)| *uuid)
                .ok_or_else(|| SeedError::MissingVendor(product.vendor.clone()))?;

            let product_error = |source| SeedError::Product {
                name: product.name.clone(),
                source,
            };

            let existing = self
                .products
                .list_vendor_products(vendor)
                .await
                .map_err(product_error)?;

            if existing.iter().any(|record| record.name == product.name) {
                report.products_skipped += 1;
                continue;
            }

            let created = self
                .products
                .submit_product(
                    vendor,
                    NewProduct {
                        uuid: ProductUuid::new(),
                        details: ProductDetails {
                            name: product.name.clone(),
                            description: product.description.clone(),
                            price: product.price_minor()?,
                            category: product.category.clone(),
                            image_url: product.image_url.clone(),
                        },
                    },
                )
                .await
                .map_err(product_error)?;

            let decision = match product.status {
                ProductStatus::Pending => None,
                ProductStatus::Approved => Some(ReviewDecision::Approve),
                ProductStatus::Rejected => Some(ReviewDecision::Reject),
            };

            if let Some(decision) = decision {
                self.products
                    .review_product(created.uuid, decision)
                    .await
                    .map_err(product_error)?;
            }

            report.products_created += 1;
        }

        tracing::info!(
            categories = report.categories,
            vendors_created = report.vendors_created,
            products_created = report.products_created,
            products_skipped = report.products_skipped,
            "seeded catalog"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use wave::catalog::ProductStatus;

    use crate::{
        domain::products::data::ProductFilter,
        test::{TestContext, helpers::PASSWORD},
    };

    use super::*;

    const FIXTURE: &str = include_str!("../../../fixtures/catalog.yaml");

    fn seeder(ctx: &TestContext) -> CatalogSeeder<'_> {
        CatalogSeeder {
            accounts: &ctx.accounts,
            categories: &ctx.categories,
            products: &ctx.products,
        }
    }

    #[tokio::test]
    async fn seeding_applies_fixture_statuses() -> TestResult {
        let ctx = TestContext::new().await;
        let fixture = CatalogFixture::parse(FIXTURE)?;

        let report = seeder(&ctx).seed(&fixture, PASSWORD).await?;

        assert_eq!(report.vendors_created, fixture.vendors.len());
        assert_eq!(report.products_created, fixture.products.len());

        let approved = fixture
            .products
            .iter()
            .filter(|product| product.status == ProductStatus::Approved)
            .count();
        let pending = fixture
            .products
            .iter()
            .filter(|product| product.status == ProductStatus::Pending)
            .count();

        assert_eq!(
            ctx.products.list_products(ProductFilter::default()).await?.len(),
            approved
        );
        assert_eq!(
            ctx.products
                .list_products_by_status(ProductStatus::Pending)
                .await?
                .len(),
            pending
        );

        Ok(())
    }

    #[tokio::test]
    async fn seeding_twice_creates_nothing_new() -> TestResult {
        let ctx = TestContext::new().await;
        let fixture = CatalogFixture::parse(FIXTURE)?;

        seeder(&ctx).seed(&fixture, PASSWORD).await?;
        let again = seeder(&ctx).seed(&fixture, PASSWORD).await?;

        assert_eq!(again.vendors_created, 0);
        assert_eq!(again.products_created, 0);
        assert_eq!(again.products_skipped, fixture.products.len());

        Ok(())
    }
}
