//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use wave::cart::{Cart, CartAction};

use crate::{
    database::Db,
    domain::{
        accounts::records::AccountUuid,
        carts::{
            errors::CartsServiceError,
            records::CartRecord,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        products::records::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, account: AccountUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.items_repository.get_cart_lines(&mut tx, account).await?;

        tx.commit().await?;

        Ok(CartRecord::from_lines(account, lines)?)
    }

    #[tracing::instrument(name = "carts.service.apply_action", skip(self), err)]
    async fn apply_action(
        &self,
        account: AccountUuid,
        action: CartAction,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts_repository.ensure_cart(&mut tx, account).await?;

        if !self.carts_repository.lock_cart(&mut tx, account).await? {
            return Err(CartsServiceError::NotFound);
        }

        let stored = self.items_repository.get_cart_items(&mut tx, account).await?;

        // Updating a product that is not in the cart leaves it untouched.
        let adds = match action {
            CartAction::AddItem { product } => Some(product),
            CartAction::UpdateQuantity { product, quantity }
                if quantity > 0 && stored.iter().any(|line| line.product == product) =>
            {
                Some(product)
            }
            CartAction::UpdateQuantity { .. } | CartAction::RemoveItem { .. } | CartAction::Clear => {
                None
            }
        };

        if let Some(product) = adds.map(ProductUuid::from_uuid) {
            let available = self
                .items_repository
                .product_available(&mut tx, product)
                .await?;

            if !available {
                return Err(CartsServiceError::ProductUnavailable(product));
            }
        }

        let cart = Cart::from_lines(stored)?.reduce(action)?;

        self.items_repository
            .replace_cart_items(&mut tx, account, &cart)
            .await?;
        self.carts_repository.touch_cart(&mut tx, account).await?;

        let lines = self.items_repository.get_cart_lines(&mut tx, account).await?;

        tx.commit().await?;

        Ok(CartRecord::from_lines(account, lines)?)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves the account's cart, empty when none has been started.
    async fn get_cart(&self, account: AccountUuid) -> Result<CartRecord, CartsServiceError>;

    /// Applies a cart action and returns the resulting cart.
    async fn apply_action(
        &self,
        account: AccountUuid,
        action: CartAction,
    ) -> Result<CartRecord, CartsServiceError>;
}
