//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use wave::cart::CartAction;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Drops a product's line. Removing a product that is not in the cart leaves
/// the cart unchanged.
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let action = CartAction::RemoveItem {
        product: product.into_inner(),
    };

    let cart = state
        .app
        .carts
        .apply_action(principal.account_uuid, action)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::try_from(cart).or_500("failed to total cart")?))
}
