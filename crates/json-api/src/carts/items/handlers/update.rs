//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wave::cart::CartAction;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity; zero removes the line
    pub quantity: u32,
}

/// Update Cart Item Handler
///
/// Sets a line's quantity. A product that is not in the cart is left out and
/// the cart is returned unchanged.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::CONFLICT, description = "Product not available"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let action = CartAction::UpdateQuantity {
        product: product.into_inner(),
        quantity: json.into_inner().quantity,
    };

    let cart = state
        .app
        .carts
        .apply_action(principal.account_uuid, action)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::try_from(cart).or_500("failed to total cart")?))
}
