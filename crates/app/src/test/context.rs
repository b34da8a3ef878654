//! Test context for service-level integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::{
    auth::{HmacVerifier, OpenBaoError, PgAuthService},
    database::Db,
    domain::{
        accounts::PgAccountsService, analytics::PgAnalyticsService, carts::PgCartsService,
        categories::PgCategoriesService, notifications::PgNotificationsService,
        orders::PgOrdersService, products::PgProductsService,
    },
};

use super::db::TestDb;

/// Deterministic stand-in for the OpenBao transit key.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHmac;

#[async_trait]
impl HmacVerifier for LocalHmac {
    async fn hmac(&self, input: &[u8]) -> Result<String, OpenBaoError> {
        Ok(format!("local:v1:{}", BASE64.encode(input)))
    }

    async fn verify(&self, input: &[u8], hmac: &str) -> Result<bool, OpenBaoError> {
        Ok(self.hmac(input).await? == hmac)
    }
}

pub struct TestContext {
    pub db: TestDb,
    pub accounts: PgAccountsService,
    pub auth: PgAuthService,
    pub categories: PgCategoriesService,
    pub products: PgProductsService,
    pub carts: PgCartsService,
    pub orders: PgOrdersService,
    pub notifications: PgNotificationsService,
    pub analytics: PgAnalyticsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());
        let verifier: Arc<dyn HmacVerifier> = Arc::new(LocalHmac);

        Self {
            accounts: PgAccountsService::new(db.clone(), Arc::clone(&verifier)),
            auth: PgAuthService::new(db.clone(), verifier),
            categories: PgCategoriesService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            notifications: PgNotificationsService::new(db.clone()),
            analytics: PgAnalyticsService::new(db),
            db: test_db,
        }
    }
}
