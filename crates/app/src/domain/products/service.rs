//! Products service.

use async_trait::async_trait;
use mockall::automock;
use wave::catalog::{ProductStatus, ReviewDecision};

use crate::{
    database::Db,
    domain::{
        accounts::records::AccountUuid,
        products::{
            data::{NewProduct, ProductFilter, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let category = filter
            .category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty());

        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, category).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_vendor_products(
        &self,
        vendor: AccountUuid,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_vendor_products(&mut tx, vendor).await?;

        tx.commit().await?;

        Ok(products)
    }

    #[tracing::instrument(
        name = "products.service.submit_product",
        skip(self, product),
        fields(vendor_uuid = %vendor, product_uuid = %product.uuid),
        err
    )]
    async fn submit_product(
        &self,
        vendor: AccountUuid,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.details.submission().validate()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, vendor, product.uuid, &product.details)
            .await?;

        tx.commit().await?;

        tracing::info!(product = %created.uuid, vendor = %vendor, "submitted product for review");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(vendor_uuid = %vendor, product_uuid = %product),
        err
    )]
    async fn update_product(
        &self,
        vendor: AccountUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        update.details.submission().validate()?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, vendor, product, &update.details)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(vendor_uuid = %vendor, product_uuid = %product),
        err
    )]
    async fn delete_product(
        &self,
        vendor: AccountUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_product(&mut tx, vendor, product)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_products_by_status(
        &self,
        status: ProductStatus,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products_by_status(&mut tx, status)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    #[tracing::instrument(
        name = "products.service.review_product",
        skip(self),
        fields(product_uuid = %product, decision = %decision),
        err
    )]
    async fn review_product(
        &self,
        product: ProductUuid,
        decision: ReviewDecision,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.lock_product(&mut tx, product).await?;
        let status = current.status.review(decision)?;

        let reviewed = self
            .repository
            .set_product_status(&mut tx, product, status)
            .await?;

        tx.commit().await?;

        tracing::info!(product = %product, status = %status, "reviewed product");

        Ok(reviewed)
    }

    async fn related_products(
        &self,
        products: Vec<ProductUuid>,
        limit: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let related = self
            .repository
            .related_products(&mut tx, &products, limit)
            .await?;

        tx.commit().await?;

        Ok(related)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves approved products, newest first, optionally within one
    /// category.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves a single approved product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieves every live product a vendor owns, whatever its status.
    async fn list_vendor_products(
        &self,
        vendor: AccountUuid,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Creates a pending product owned by `vendor`.
    async fn submit_product(
        &self,
        vendor: AccountUuid,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's details and sends it back for review.
    async fn update_product(
        &self,
        vendor: AccountUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Withdraws a product from sale.
    async fn delete_product(
        &self,
        vendor: AccountUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;

    /// Retrieves products in a given status, oldest first.
    async fn list_products_by_status(
        &self,
        status: ProductStatus,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Approves or rejects a pending product.
    async fn review_product(
        &self,
        product: ProductUuid,
        decision: ReviewDecision,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Approved products sharing a category with `products`, excluding them.
    /// With no products given, the newest approved products.
    async fn related_products(
        &self,
        products: Vec<ProductUuid>,
        limit: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use wave::{accounts::Role, catalog::CatalogError};

    use crate::test::{
        TestContext,
        helpers::{create_account, create_approved_product, product_details},
    };

    use super::*;

    #[tokio::test]
    async fn submitted_products_are_pending_and_hidden() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;

        let product = ctx
            .products
            .submit_product(
                vendor.uuid,
                NewProduct {
                    uuid: ProductUuid::new(),
                    details: product_details("Golden Morn", "Food", 2_500_00),
                },
            )
            .await?;

        assert_eq!(product.status, ProductStatus::Pending);
        assert_eq!(product.price, 2_500_00);
        assert!(product.reviewed_at.is_none());

        let listed = ctx.products.list_products(ProductFilter::default()).await?;
        assert!(listed.is_empty(), "pending product should not be listed");

        let result = ctx.products.get_product(product.uuid).await;
        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        let owned = ctx.products.list_vendor_products(vendor.uuid).await?;
        assert_eq!(owned.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn submit_rejects_invalid_details() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;

        let mut details = product_details("Golden Morn", "Food", 0);
        details.name = "ab".to_string();

        let result = ctx
            .products
            .submit_product(
                vendor.uuid,
                NewProduct {
                    uuid: ProductUuid::new(),
                    details,
                },
            )
            .await;

        assert!(
            matches!(&result, Err(ProductsServiceError::Invalid(errors)) if errors.has("name") && errors.has("price")),
            "expected Invalid, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn submit_with_unknown_category_is_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;

        let result = ctx
            .products
            .submit_product(
                vendor.uuid,
                NewProduct {
                    uuid: ProductUuid::new(),
                    details: product_details("Lego Set", "Toys", 10_000_00),
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn approved_products_are_listed_by_category() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;

        let rice = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;
        let phone =
            create_approved_product(&ctx, vendor.uuid, "Tecno Phone", "Electronics", 150_000_00)
                .await?;

        let all = ctx.products.list_products(ProductFilter::default()).await?;
        let uuids: Vec<ProductUuid> = all.iter().map(|product| product.uuid).collect();
        assert_eq!(uuids, vec![phone.uuid, rice.uuid]);

        let food = ctx
            .products
            .list_products(ProductFilter {
                category: Some("Food".to_string()),
            })
            .await?;
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].uuid, rice.uuid);

        let fetched = ctx.products.get_product(rice.uuid).await?;
        assert_eq!(fetched.status, ProductStatus::Approved);
        assert!(fetched.reviewed_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn review_only_applies_to_pending_products() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;
        let product = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        let result = ctx
            .products
            .review_product(product.uuid, ReviewDecision::Reject)
            .await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::InvalidTransition(CatalogError::InvalidTransition {
                    from: ProductStatus::Approved,
                    ..
                }))
            ),
            "expected InvalidTransition, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn review_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .review_product(ProductUuid::new(), ReviewDecision::Approve)
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn rejected_products_leave_the_review_queue() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;

        let product = ctx
            .products
            .submit_product(
                vendor.uuid,
                NewProduct {
                    uuid: ProductUuid::new(),
                    details: product_details("Golden Morn", "Food", 2_500_00),
                },
            )
            .await?;

        let queue = ctx
            .products
            .list_products_by_status(ProductStatus::Pending)
            .await?;
        assert_eq!(queue.len(), 1);

        let rejected = ctx
            .products
            .review_product(product.uuid, ReviewDecision::Reject)
            .await?;
        assert_eq!(rejected.status, ProductStatus::Rejected);

        let queue = ctx
            .products
            .list_products_by_status(ProductStatus::Pending)
            .await?;
        assert!(queue.is_empty());

        let rejected = ctx
            .products
            .list_products_by_status(ProductStatus::Rejected)
            .await?;
        assert_eq!(rejected.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_sends_product_back_for_review() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;
        let product = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        let updated = ctx
            .products
            .update_product(
                vendor.uuid,
                product.uuid,
                ProductUpdate {
                    details: product_details("Ofada Rice 5kg", "Groceries", 12_000_00),
                },
            )
            .await?;

        assert_eq!(updated.name, "Ofada Rice 5kg");
        assert_eq!(updated.category, "Groceries");
        assert_eq!(updated.price, 12_000_00);
        assert_eq!(updated.status, ProductStatus::Pending);
        assert!(updated.reviewed_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn vendors_cannot_touch_each_others_products() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = create_account(&ctx, "owner@example.com", Role::Vendor).await?;
        let other = create_account(&ctx, "other@example.com", Role::Vendor).await?;
        let product = create_approved_product(&ctx, owner.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        let update = ctx
            .products
            .update_product(
                other.uuid,
                product.uuid,
                ProductUpdate {
                    details: product_details("Stolen Rice", "Food", 1_00),
                },
            )
            .await;

        assert!(
            matches!(update, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {update:?}"
        );

        let delete = ctx.products.delete_product(other.uuid, product.uuid).await;

        assert!(
            matches!(delete, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {delete:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn deleted_products_disappear_everywhere() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;
        let product = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        ctx.products.delete_product(vendor.uuid, product.uuid).await?;

        assert!(ctx.products.list_products(ProductFilter::default()).await?.is_empty());
        assert!(ctx.products.list_vendor_products(vendor.uuid).await?.is_empty());

        let again = ctx.products.delete_product(vendor.uuid, product.uuid).await;
        assert!(
            matches!(again, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {again:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn related_products_share_a_category() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;

        let rice = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;
        let beans = create_approved_product(&ctx, vendor.uuid, "Honey Beans", "Food", 2_000_00).await?;
        let phone =
            create_approved_product(&ctx, vendor.uuid, "Tecno Phone", "Electronics", 150_000_00)
                .await?;

        let related = ctx.products.related_products(vec![rice.uuid], 4).await?;
        let uuids: Vec<ProductUuid> = related.iter().map(|product| product.uuid).collect();
        assert_eq!(uuids, vec![beans.uuid]);

        let newest = ctx.products.related_products(Vec::new(), 2).await?;
        let uuids: Vec<ProductUuid> = newest.iter().map(|product| product.uuid).collect();
        assert_eq!(uuids, vec![phone.uuid, beans.uuid]);

        Ok(())
    }
}
