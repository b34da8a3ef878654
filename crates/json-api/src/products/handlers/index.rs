//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use wave_app::domain::products::data::ProductFilter;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns approved products, newest first, optionally within one category.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products(ProductFilter {
            category: category.into_inner(),
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use wave_app::domain::products::{ProductsServiceError, records::ProductUuid};

    use crate::test_helpers::{Mocks, VENDOR, make_product, storage_error};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(None, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products_in_service_order() -> TestResult {
        let newer = ProductUuid::new();
        let older = ProductUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .withf(|filter| filter.category.is_none())
            .return_once(move |_| {
                Ok(vec![
                    make_product(newer, VENDOR.account_uuid, 2_500_00),
                    make_product(older, VENDOR.account_uuid, 1_000_00),
                ])
            });

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        let uuids: Vec<Uuid> = response.products.iter().map(|p| p.uuid).collect();

        assert_eq!(uuids, vec![newer.into_uuid(), older.into_uuid()]);
        assert_eq!(
            response.products.first().map(|p| p.price_display.as_str()),
            Some("₦2,500.00")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_category_filter() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .withf(|filter| filter.category.as_deref() == Some("Food"))
            .return_once(|_| Ok(vec![]));

        let response: ProductsResponse = TestClient::get("http://example.com/products?category=Food")
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        assert!(response.products.is_empty(), "expected no products");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
