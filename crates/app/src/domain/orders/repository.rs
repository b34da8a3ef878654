//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;
use wave::{
    checkout::{PricedLine, ShippingAddress},
    orders::OrderStatus,
};

use crate::domain::{
    accounts::records::AccountUuid,
    columns::{amount_param, try_get_amount, try_get_parsed, try_get_quantity},
    orders::records::{OrderItemRecord, OrderRecord, OrderUuid},
    products::records::ProductUuid,
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const INSERT_ORDER_ITEMS_SQL: &str = include_str!("sql/insert_order_items.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const LIST_ORDERS_BY_STATUS_SQL: &str = include_str!("sql/list_orders_by_status.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LOCK_ORDER_SQL: &str = include_str!("sql/lock_order.sql");
const SET_ORDER_STATUS_SQL: &str = include_str!("sql/set_order_status.sql");

/// An order line tagged with the order it belongs to.
#[derive(Debug, Clone)]
pub(crate) struct OrderItemRow {
    pub(crate) order_uuid: OrderUuid,
    pub(crate) item: OrderItemRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        customer: AccountUuid,
        total: u64,
        shipping: &ShippingAddress,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(customer.into_uuid())
            .bind(amount_param("total", total)?)
            .bind(shipping.name.trim())
            .bind(shipping.email.trim())
            .bind(shipping.address.trim())
            .bind(shipping.city.trim())
            .bind(shipping.country.trim())
            .fetch_one(&mut **tx)
            .await
    }

    /// Write `lines` in order, snapshotting name and unit price.
    pub(crate) async fn insert_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        lines: &[PricedLine],
    ) -> Result<(), sqlx::Error> {
        let mut products: Vec<Uuid> = Vec::with_capacity(lines.len());
        let mut vendors: Vec<Option<Uuid>> = Vec::with_capacity(lines.len());
        let mut names: Vec<&str> = Vec::with_capacity(lines.len());
        let mut unit_prices: Vec<i64> = Vec::with_capacity(lines.len());
        let mut quantities: Vec<i64> = Vec::with_capacity(lines.len());
        let mut positions: Vec<i32> = Vec::with_capacity(lines.len());

        for (position, line) in lines.iter().enumerate() {
            products.push(line.product);
            vendors.push(line.vendor);
            names.push(&line.name);
            unit_prices.push(amount_param("unit_price", line.unit_price)?);
            quantities.push(i64::from(line.quantity));
            positions.push(i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?);
        }

        query(INSERT_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .bind(products)
            .bind(vendors)
            .bind(names)
            .bind(unit_prices)
            .bind(quantities)
            .bind(positions)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Items of every order in `orders`, grouped by order then position.
    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRow>, sqlx::Error> {
        let uuids: Vec<Uuid> = orders.iter().map(|order| order.into_uuid()).collect();

        query_as::<Postgres, OrderItemRow>(GET_ORDER_ITEMS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: AccountUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders_by_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: OrderStatus,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_BY_STATUS_SQL)
            .bind(status.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: AccountUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn lock_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LOCK_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(SET_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer_uuid: AccountUuid::from_uuid(row.try_get("customer_uuid")?),
            status: try_get_parsed(row, "status")?,
            total: try_get_amount(row, "total")?,
            shipping: ShippingAddress {
                name: row.try_get("shipping_name")?,
                email: row.try_get("shipping_email")?,
                address: row.try_get("shipping_address")?,
                city: row.try_get("shipping_city")?,
                country: row.try_get("shipping_country")?,
            },
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            item: OrderItemRecord {
                product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                vendor_uuid: row
                    .try_get::<Option<Uuid>, _>("vendor_uuid")?
                    .map(AccountUuid::from_uuid),
                name: row.try_get("name")?,
                unit_price: try_get_amount(row, "unit_price")?,
                quantity: try_get_quantity(row, "quantity")?,
            },
        })
    }
}
