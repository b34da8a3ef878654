//! Carts Repository

use sqlx::{Postgres, Transaction, query, query_scalar};

use crate::domain::accounts::records::AccountUuid;

const ENSURE_CART_SQL: &str = include_str!("../sql/ensure_cart.sql");
const LOCK_CART_SQL: &str = include_str!("../sql/lock_cart.sql");
const TOUCH_CART_SQL: &str = include_str!("../sql/touch_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Create the account's cart if it does not exist yet.
    pub(crate) async fn ensure_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<(), sqlx::Error> {
        query(ENSURE_CART_SQL)
            .bind(account.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Lock the account's cart row, returning `false` when there is none.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<bool, sqlx::Error> {
        let locked = query_scalar::<Postgres, uuid::Uuid>(LOCK_CART_SQL)
            .bind(account.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(locked.is_some())
    }

    pub(crate) async fn touch_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_CART_SQL)
            .bind(account.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
