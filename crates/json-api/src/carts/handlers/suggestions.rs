//! Cart Suggestions Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::errors::into_status_error as cart_error,
    extensions::*,
    products::{errors::into_status_error as product_error, models::ProductsResponse},
    state::State,
};

/// Number of products suggested alongside a cart.
const SUGGESTION_LIMIT: u32 = 4;

/// Cart Suggestions Handler
///
/// Suggests approved products from the same categories as the cart's lines.
/// An empty cart gets the newest approved products instead.
#[endpoint(
    tags("carts"),
    summary = "Suggest Products For Cart",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(principal.account_uuid)
        .await
        .map_err(cart_error)?;

    let in_cart = cart.lines.iter().map(|line| line.product_uuid).collect();

    let products = state
        .app
        .products
        .related_products(in_cart, SUGGESTION_LIMIT)
        .await
        .map_err(product_error)?;

    Ok(Json(products.into()))
}
