//! App Router

use salvo::Router;

use crate::{
    accounts, admin, analytics,
    auth::{self, guards},
    carts, categories, healthcheck, inventory, notifications,
    observability::metrics_handler,
    orders, products, sessions,
};

/// Every API route. Public routes come first; everything else sits behind
/// the bearer token middleware and, where needed, a role guard.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(public_router())
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(customer_router())
                .push(Router::new().hoop(guards::inventory_managers).push(vendor_router()))
                .push(
                    Router::with_path("admin")
                        .hoop(guards::reviewers)
                        .push(admin_router()),
                ),
        )
}

fn public_router() -> Router {
    Router::new()
        .push(Router::with_path("accounts").post(accounts::create::handler))
        .push(Router::with_path("sessions").post(sessions::create::handler))
        .push(Router::with_path("categories").get(categories::index::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
}

fn customer_router() -> Router {
    Router::new()
        .push(
            Router::with_path("accounts/me")
                .get(accounts::get::handler)
                .put(accounts::update::handler),
        )
        .push(Router::with_path("sessions").delete(sessions::delete::handler))
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(Router::with_path("suggestions").get(carts::suggestions::handler))
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(carts::items::update::handler)
                                .delete(carts::items::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
}

fn vendor_router() -> Router {
    Router::new()
        .push(
            Router::with_path("inventory")
                .get(inventory::index::handler)
                .post(inventory::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(inventory::update::handler)
                        .delete(inventory::delete::handler),
                ),
        )
        .push(
            Router::with_path("notifications")
                .get(notifications::index::handler)
                .push(
                    Router::with_path("{notification}")
                        .delete(notifications::delete::handler)
                        .push(Router::with_path("read").put(notifications::read::handler)),
                ),
        )
        .push(Router::with_path("analytics").get(analytics::get::handler))
}

fn admin_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(admin::products::index::handler)
                .push(
                    Router::with_path("{product}/review").put(admin::products::review::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(admin::orders::index::handler)
                .push(Router::with_path("{order}/status").put(admin::orders::status::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::AUTHORIZATION,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use wave_app::auth::{AuthServiceError, Principal};

    use crate::{
        products::models::ProductsResponse,
        test_helpers::{CUSTOMER, Mocks, VENDOR},
    };

    use super::*;

    fn serve_as(principal: Option<Principal>, mut mocks: Mocks) -> Service {
        mocks
            .auth
            .expect_authenticate_bearer()
            .returning(move |_| principal.ok_or(AuthServiceError::NotFound));

        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_catalog_is_public() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|_| Ok(vec![]));

        let body: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&serve_as(None, mocks))
            .await
            .take_json()
            .await?;

        assert!(body.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_requires_token() -> TestResult {
        let res = TestClient::get("http://example.com/cart")
            .send(&serve_as(None, Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_customers_cannot_manage_inventory() -> TestResult {
        let res = TestClient::get("http://example.com/inventory")
            .add_header(AUTHORIZATION, "Bearer wave_v1_secret", true)
            .send(&serve_as(Some(CUSTOMER), Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_vendors_cannot_review() -> TestResult {
        let res = TestClient::get("http://example.com/admin/products")
            .add_header(AUTHORIZATION, "Bearer wave_v1_secret", true)
            .send(&serve_as(Some(VENDOR), Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_vendor_reaches_inventory() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_vendor_products()
            .once()
            .withf(|vendor| *vendor == VENDOR.account_uuid)
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/inventory")
            .add_header(AUTHORIZATION, "Bearer wave_v1_secret", true)
            .send(&serve_as(Some(VENDOR), mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
