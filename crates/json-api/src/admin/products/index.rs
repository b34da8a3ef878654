//! Admin Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use wave::catalog::ProductStatus;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Admin Product Index Handler
///
/// Returns products in the given status, oldest first. Defaults to the
/// pending review queue.
#[endpoint(
    tags("admin"),
    summary = "List Products By Status",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = status
        .into_inner()
        .map(|value| value.parse::<ProductStatus>())
        .transpose()
        .or_400("could not parse \"status\" query parameter")?
        .unwrap_or(ProductStatus::Pending);

    let products = state
        .app
        .products
        .list_products_by_status(status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
