//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrdersResponse},
    state::State,
};

/// Order Index Handler
///
/// Returns the caller's orders, newest first.
#[endpoint(tags("orders"), summary = "List Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders(principal.account_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse::try_from(orders).or_500("failed to total orders")?))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use wave::orders::OrderStatus;
    use wave_app::domain::orders::records::OrderUuid;

    use crate::{
        orders::models::fixtures::make_order,
        test_helpers::{CUSTOMER, Mocks, VENDOR},
    };

    use super::*;

    #[tokio::test]
    async fn test_index_lists_own_orders() -> TestResult {
        let newest = OrderUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_list_orders()
            .once()
            .withf(|customer| *customer == CUSTOMER.account_uuid)
            .return_once(move |customer| {
                Ok(vec![make_order(
                    newest,
                    customer,
                    VENDOR.account_uuid,
                    OrderStatus::Shipped,
                )])
            });

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&mocks.service(Some(CUSTOMER), Router::with_path("orders").get(handler)))
            .await
            .take_json()
            .await?;

        assert_eq!(response.orders.len(), 1);
        assert_eq!(
            response.orders.first().map(|order| (order.uuid, order.status.as_str())),
            Some((newest.into_uuid(), "shipped"))
        );

        Ok(())
    }
}
