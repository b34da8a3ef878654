//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use wave::{accounts::Role, catalog::ProductStatus};
use wave_app::{
    auth::{MockAuthService, Principal},
    context::AppContext,
    domain::{
        accounts::{MockAccountsService, records::AccountUuid},
        analytics::MockAnalyticsService,
        carts::MockCartsService,
        categories::MockCategoriesService,
        notifications::MockNotificationsService,
        orders::MockOrdersService,
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::state::State;

pub(crate) const CUSTOMER: Principal = principal(1, Role::Customer);
pub(crate) const VENDOR: Principal = principal(2, Role::Vendor);
pub(crate) const ADMIN: Principal = principal(3, Role::Admin);

const fn principal(id: u128, role: Role) -> Principal {
    Principal {
        account_uuid: AccountUuid::from_uuid(Uuid::from_u128(id)),
        role,
        token_uuid: Uuid::from_u128(id + 100),
    }
}

/// One mock per service. Any call without an expectation fails the test.
pub(crate) struct Mocks {
    pub(crate) accounts: MockAccountsService,
    pub(crate) auth: MockAuthService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) notifications: MockNotificationsService,
    pub(crate) analytics: MockAnalyticsService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            accounts: MockAccountsService::new(),
            auth: MockAuthService::new(),
            categories: MockCategoriesService::new(),
            products: MockProductsService::new(),
            carts: MockCartsService::new(),
            orders: MockOrdersService::new(),
            notifications: MockNotificationsService::new(),
            analytics: MockAnalyticsService::new(),
        }
    }
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            accounts: Arc::new(self.accounts),
            auth: Arc::new(self.auth),
            categories: Arc::new(self.categories),
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            notifications: Arc::new(self.notifications),
            analytics: Arc::new(self.analytics),
        })
    }

    /// Serve `route` with these mocks, signed in as `principal` when given.
    pub(crate) fn service(self, principal: Option<Principal>, route: Router) -> Service {
        let router = Router::new().hoop(inject(self.into_state()));

        let router = match principal {
            Some(principal) => router.hoop(inject(principal)),
            None => router,
        };

        Service::new(router.push(route))
    }
}

pub(crate) fn make_product(uuid: ProductUuid, vendor: AccountUuid, price: u64) -> ProductRecord {
    ProductRecord {
        uuid,
        vendor_uuid: vendor,
        name: "Ankara Tote Bag".to_string(),
        description: "Hand-stitched tote in bold ankara print.".to_string(),
        price,
        category: "Fashion".to_string(),
        image_url: "https://images.example.com/tote.png".to_string(),
        status: ProductStatus::Approved,
        reviewed_at: Some(Timestamp::UNIX_EPOCH),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A storage failure for exercising 500 responses.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolClosed
}
