//! Inventory Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Inventory Index Handler
///
/// Returns every live product the caller sells, whatever its status.
#[endpoint(
    tags("inventory"),
    summary = "List Inventory",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let products = state
        .app
        .products
        .list_vendor_products(principal.account_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
