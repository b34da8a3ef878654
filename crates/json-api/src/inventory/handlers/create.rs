//! Create Inventory Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use wave_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    extensions::*,
    inventory::requests::ProductRequest,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Create Inventory Product Handler
///
/// Submits a product for review. It stays hidden from customers until an
/// admin approves it.
#[endpoint(
    tags("inventory"),
    summary = "Submit Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product submitted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Not a vendor"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let product = state
        .app
        .products
        .submit_product(
            principal.account_uuid,
            NewProduct {
                uuid: ProductUuid::new(),
                details: json.into_inner().into(),
            },
        )
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/inventory/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
