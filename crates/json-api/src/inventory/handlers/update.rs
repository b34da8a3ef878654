//! Update Inventory Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use wave_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    inventory::requests::ProductRequest,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Update Inventory Product Handler
///
/// Replaces a product's details and sends it back for review.
#[endpoint(
    tags("inventory"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let product = state
        .app
        .products
        .update_product(
            principal.account_uuid,
            product.into_inner().into(),
            ProductUpdate {
                details: json.into_inner().into(),
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use wave::catalog::ProductStatus;
    use wave_app::domain::products::{ProductsServiceError, records::ProductUuid};

    use crate::test_helpers::{Mocks, VENDOR, make_product};

    use super::{super::tests::product_json, *};

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(
            Some(VENDOR),
            Router::with_path("inventory/{product}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_resets_product_to_pending() -> TestResult {
        let uuid = ProductUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_update_product()
            .once()
            .withf(move |vendor, product, update| {
                *vendor == VENDOR.account_uuid
                    && *product == uuid
                    && update.details.category == "Fashion"
            })
            .return_once(|vendor, product, update| {
                let mut record = make_product(product, vendor, update.details.price);

                record.status = ProductStatus::Pending;

                Ok(record)
            });

        let mut res = TestClient::put(format!("http://example.com/inventory/{uuid}"))
            .json(&product_json())
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.status, "pending");
        assert_eq!(body.price, 15_000_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_someone_elses_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_update_product()
            .once()
            .return_once(|_, _, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/inventory/{uuid}"))
            .json(&product_json())
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
