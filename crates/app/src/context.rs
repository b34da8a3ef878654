//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, HmacVerifier, OpenBaoClient, PgAuthService},
    database::{self, Db, PoolSettings},
    domain::{
        accounts::{AccountsService, PgAccountsService},
        analytics::{AnalyticsService, PgAnalyticsService},
        carts::{CartsService, PgCartsService},
        categories::{CategoriesService, PgCategoriesService},
        notifications::{NotificationsService, PgNotificationsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub accounts: Arc<dyn AccountsService>,
    pub auth: Arc<dyn AuthService>,
    pub categories: Arc<dyn CategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub notifications: Arc<dyn NotificationsService>,
    pub analytics: Arc<dyn AnalyticsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        pool: PoolSettings,
        openbao: OpenBaoClient,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, pool)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(&Db::new(pool), Arc::new(openbao)))
    }

    /// Wire every service onto one database handle.
    #[must_use]
    pub fn from_db(db: &Db, verifier: Arc<dyn HmacVerifier>) -> Self {
        Self {
            accounts: Arc::new(PgAccountsService::new(db.clone(), Arc::clone(&verifier))),
            auth: Arc::new(PgAuthService::new(db.clone(), verifier)),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            notifications: Arc::new(PgNotificationsService::new(db.clone())),
            analytics: Arc::new(PgAnalyticsService::new(db.clone())),
        }
    }
}
