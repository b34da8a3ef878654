//! Cart Items Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;
use wave::{
    cart::{Cart, CartLine},
    catalog::ProductStatus,
};

use crate::domain::{
    accounts::records::AccountUuid,
    carts::records::CartLineRecord,
    columns::{try_get_amount, try_get_parsed, try_get_quantity},
    products::records::ProductUuid,
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const GET_CART_LINES_SQL: &str = include_str!("../sql/get_cart_lines.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("../sql/delete_cart_items.sql");
const INSERT_CART_ITEMS_SQL: &str = include_str!("../sql/insert_cart_items.sql");
const PRODUCT_STATUS_SQL: &str = include_str!("../sql/product_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Stored lines in insertion order.
    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<Vec<CartLine>, sqlx::Error> {
        let rows = query(GET_CART_ITEMS_SQL)
            .bind(account.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        rows.iter()
            .map(|row| {
                Ok(CartLine {
                    product: row.try_get("product_uuid")?,
                    quantity: try_get_quantity(row, "quantity")?,
                })
            })
            .collect()
    }

    /// Lines joined with current product data, in insertion order.
    pub(crate) async fn get_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(GET_CART_LINES_SQL)
            .bind(account.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Replace every stored line with the lines of `cart`.
    pub(crate) async fn replace_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
        cart: &Cart,
    ) -> Result<(), sqlx::Error> {
        query(DELETE_CART_ITEMS_SQL)
            .bind(account.into_uuid())
            .execute(&mut **tx)
            .await?;

        if cart.is_empty() {
            return Ok(());
        }

        let mut products: Vec<Uuid> = Vec::with_capacity(cart.len());
        let mut quantities: Vec<i64> = Vec::with_capacity(cart.len());
        let mut positions: Vec<i32> = Vec::with_capacity(cart.len());

        for (position, line) in cart.lines().iter().enumerate() {
            products.push(line.product);
            quantities.push(i64::from(line.quantity));
            positions.push(i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?);
        }

        query(INSERT_CART_ITEMS_SQL)
            .bind(account.into_uuid())
            .bind(products)
            .bind(quantities)
            .bind(positions)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Whether `product` is listed and public.
    pub(crate) async fn product_available(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<bool, sqlx::Error> {
        let row = query(PRODUCT_STATUS_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        let Some(row) = row else {
            return Ok(false);
        };

        Ok(try_get_parsed::<ProductStatus>(&row, "status")?.is_public())
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            vendor_uuid: AccountUuid::from_uuid(row.try_get("vendor_uuid")?),
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            image_url: row.try_get("image_url")?,
            unit_price: try_get_amount(row, "unit_price")?,
            quantity: try_get_quantity(row, "quantity")?,
            available: row.try_get("available")?,
        })
    }
}
