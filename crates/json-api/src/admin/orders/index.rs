//! Admin Order Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use wave::orders::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrdersResponse},
    state::State,
};

/// Admin Order Index Handler
///
/// Returns every order in the given status, oldest first. Defaults to
/// pending orders awaiting shipment.
#[endpoint(
    tags("admin"),
    summary = "List Orders By Status",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = status
        .into_inner()
        .map(|value| value.parse::<OrderStatus>())
        .transpose()
        .or_400("could not parse \"status\" query parameter")?
        .unwrap_or(OrderStatus::Pending);

    let orders = state
        .app
        .orders
        .list_orders_by_status(status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse::try_from(orders).or_500("failed to total orders")?))
}
