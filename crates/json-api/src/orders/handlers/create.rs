//! Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use wave_app::domain::orders::{data::NewOrder, records::OrderUuid};

use crate::{
    extensions::*,
    observability::observe_checkout,
    orders::{
        errors::into_status_error,
        models::{OrderResponse, ShippingAddressBody},
    },
    state::State,
};

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// The placed order
    pub order: OrderResponse,

    /// Number of vendors sent a sale notification
    pub vendors_notified: usize,
}

/// Checkout Handler
///
/// Places an order for everything in the cart, notifies each vendor in it and
/// empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid shipping address"),
        (status_code = StatusCode::CONFLICT, description = "Cart is empty or a product is unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ShippingAddressBody>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let checkout = state
        .app
        .orders
        .checkout(
            principal.account_uuid,
            NewOrder {
                uuid: OrderUuid::new(),
                shipping: json.into_inner().into(),
            },
        )
        .await
        .map_err(into_status_error)?;

    let vendors_notified = checkout.notifications.len();

    observe_checkout(vendors_notified);

    info!(
        order = %checkout.order.uuid,
        vendors_notified,
        "checkout completed"
    );

    res.add_header(LOCATION, format!("/orders/{}", checkout.order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CheckoutResponse {
        order: OrderResponse::try_from(checkout.order).or_500("failed to total order")?,
        vendors_notified,
    }))
}
