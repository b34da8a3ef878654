//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};
use wave::{
    cart::Cart,
    checkout::{OrderDraft, PricedLine, plan_vendor_notices},
    orders::OrderStatus,
};

use crate::{
    database::Db,
    domain::{
        accounts::records::AccountUuid,
        carts::repositories::{PgCartItemsRepository, PgCartsRepository},
        notifications::{
            records::NotificationUuid,
            repository::{NewNotificationRow, PgNotificationsRepository},
        },
        orders::{
            data::NewOrder,
            errors::OrdersServiceError,
            records::{Checkout, OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    notifications_repository: PgNotificationsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            notifications_repository: PgNotificationsRepository::new(),
        }
    }

    /// Attach stored items to each order, keeping the orders' own ordering.
    async fn with_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut orders: Vec<OrderRecord>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        if orders.is_empty() {
            return Ok(orders);
        }

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();
        let rows = self.repository.get_order_items(tx, &uuids).await?;

        let mut items: FxHashMap<OrderUuid, Vec<_>> = FxHashMap::default();

        for row in rows {
            items.entry(row.order_uuid).or_default().push(row.item);
        }

        for order in &mut orders {
            order.items = items.remove(&order.uuid).unwrap_or_default();
        }

        Ok(orders)
    }

    async fn with_items_one(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderRecord,
    ) -> Result<OrderRecord, OrdersServiceError> {
        self.with_items(tx, vec![order])
            .await?
            .pop()
            .ok_or(OrdersServiceError::NotFound)
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.checkout",
        skip(self, order),
        fields(order = %order.uuid),
        err
    )]
    async fn checkout(
        &self,
        customer: AccountUuid,
        order: NewOrder,
    ) -> Result<Checkout, OrdersServiceError> {
        order.shipping.validate()?;

        let mut tx = self.db.begin().await?;

        if !self.carts_repository.lock_cart(&mut tx, customer).await? {
            return Err(OrdersServiceError::EmptyCart);
        }

        let cart_lines = self.items_repository.get_cart_lines(&mut tx, customer).await?;

        if let Some(unavailable) = cart_lines.iter().find(|line| !line.available) {
            return Err(OrdersServiceError::ProductUnavailable(unavailable.product_uuid));
        }

        let draft = OrderDraft::new(
            cart_lines
                .into_iter()
                .map(|line| PricedLine {
                    product: line.product_uuid.into_uuid(),
                    vendor: Some(line.vendor_uuid.into_uuid()),
                    name: line.name,
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                })
                .collect(),
        )?;

        let created = self
            .repository
            .create_order(&mut tx, order.uuid, customer, draft.total(), &order.shipping)
            .await?;

        self.repository
            .insert_order_items(&mut tx, order.uuid, draft.lines())
            .await?;

        let notices = plan_vendor_notices(created.shipping.name.as_str(), draft.lines())?;
        let mut notifications = Vec::with_capacity(notices.len());

        for notice in &notices {
            let notification = self
                .notifications_repository
                .create_notification(
                    &mut tx,
                    &NewNotificationRow {
                        uuid: NotificationUuid::new(),
                        vendor: AccountUuid::from_uuid(notice.vendor),
                        order: Some(order.uuid),
                        title: &notice.title,
                        message: &notice.message,
                    },
                )
                .await?;

            notifications.push(notification);
        }

        self.items_repository
            .replace_cart_items(&mut tx, customer, &Cart::new())
            .await?;
        self.carts_repository.touch_cart(&mut tx, customer).await?;

        let placed = self.with_items_one(&mut tx, created).await?;

        tx.commit().await?;

        tracing::info!(
            customer = %customer,
            total = placed.total,
            vendors = notifications.len(),
            "placed order"
        );

        Ok(Checkout {
            order: placed,
            notifications,
        })
    }

    async fn list_orders(
        &self,
        customer: AccountUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, customer).await?;
        let orders = self.with_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(
        &self,
        customer: AccountUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_order(&mut tx, customer, order).await?;
        let record = self.with_items_one(&mut tx, record).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders_by_status(&mut tx, status).await?;
        let orders = self.with_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.service.update_status",
        skip(self),
        fields(order_uuid = %order, status = %status),
        err
    )]
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.lock_order(&mut tx, order).await?;
        let next = current.status.advance_to(status)?;

        let updated = self.repository.set_order_status(&mut tx, order, next).await?;
        let updated = self.with_items_one(&mut tx, updated).await?;

        tx.commit().await?;

        tracing::info!(order = %order, status = %next, "updated order status");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turns the customer's cart into an order, notifies each vendor in it and
    /// empties the cart, all in one transaction.
    async fn checkout(
        &self,
        customer: AccountUuid,
        order: NewOrder,
    ) -> Result<Checkout, OrdersServiceError>;

    /// Retrieves a customer's orders, newest first.
    async fn list_orders(&self, customer: AccountUuid)
    -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieves one of a customer's orders.
    async fn get_order(
        &self,
        customer: AccountUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves every order in a given status, oldest first.
    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Moves an order one fulfilment step forward.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use wave::{
        accounts::Role,
        cart::CartAction,
        checkout::{SALE_NOTICE_TITLE, ShippingAddress},
        orders::OrderStatusError,
    };

    use crate::{
        domain::{
            carts::CartsService,
            notifications::NotificationsService,
            products::{ProductsService, records::ProductUuid},
        },
        test::{
            TestContext,
            helpers::{create_account, create_approved_product, shipping_to},
        },
    };

    use super::*;

    async fn add(ctx: &TestContext, customer: AccountUuid, product: ProductUuid) -> TestResult {
        ctx.carts
            .apply_action(
                customer,
                CartAction::AddItem {
                    product: product.into_uuid(),
                },
            )
            .await?;

        Ok(())
    }

    fn new_order(name: &str) -> NewOrder {
        NewOrder {
            uuid: OrderUuid::new(),
            shipping: shipping_to(name),
        }
    }

    #[tokio::test]
    async fn checkout_fans_out_one_notice_per_vendor() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = create_account(&ctx, "ada@example.com", Role::Vendor).await?;
        let bola = create_account(&ctx, "bola@example.com", Role::Vendor).await?;
        let customer = create_account(&ctx, "customer@example.com", Role::Customer).await?;

        let rice = create_approved_product(&ctx, ada.uuid, "Ofada Rice", "Food", 3_000_00).await?;
        let beans = create_approved_product(&ctx, ada.uuid, "Honey Beans", "Food", 2_000_00).await?;
        let phone =
            create_approved_product(&ctx, bola.uuid, "Tecno Phone", "Electronics", 150_000_00)
                .await?;

        add(&ctx, customer.uuid, rice.uuid).await?;
        add(&ctx, customer.uuid, rice.uuid).await?;
        add(&ctx, customer.uuid, phone.uuid).await?;
        add(&ctx, customer.uuid, beans.uuid).await?;

        let checkout = ctx
            .orders
            .checkout(customer.uuid, new_order("Chidi Okafor"))
            .await?;

        assert_eq!(checkout.order.status, OrderStatus::Pending);
        assert_eq!(checkout.order.total, 158_000_00);
        assert_eq!(checkout.order.items.len(), 3);
        assert_eq!(checkout.order.items[0].quantity, 2);

        let vendors: Vec<AccountUuid> = checkout
            .notifications
            .iter()
            .map(|notification| notification.vendor_uuid)
            .collect();
        assert_eq!(vendors, vec![ada.uuid, bola.uuid]);

        let ada_notice = &checkout.notifications[0];
        assert_eq!(ada_notice.title, SALE_NOTICE_TITLE);
        assert_eq!(
            ada_notice.message,
            "You sold 2 product(s) to Chidi Okafor for a total of ₦8,000.00."
        );
        assert_eq!(ada_notice.order_uuid, Some(checkout.order.uuid));

        let inbox = ctx.notifications.list_notifications(bola.uuid).await?;
        assert_eq!(inbox.len(), 1);

        let cart = ctx.carts.get_cart(customer.uuid).await?;
        assert!(cart.lines.is_empty(), "checkout should empty the cart");

        Ok(())
    }

    #[tokio::test]
    async fn checkout_snapshots_prices() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;
        let customer = create_account(&ctx, "customer@example.com", Role::Customer).await?;
        let rice = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        add(&ctx, customer.uuid, rice.uuid).await?;

        let checkout = ctx
            .orders
            .checkout(customer.uuid, new_order("Chidi Okafor"))
            .await?;

        ctx.products.delete_product(vendor.uuid, rice.uuid).await?;

        let order = ctx.orders.get_order(customer.uuid, checkout.order.uuid).await?;

        assert_eq!(order.total, 3_000_00);
        assert_eq!(order.items[0].name, "Ofada Rice");
        assert_eq!(order.items[0].unit_price, 3_000_00);
        assert_eq!(order.items[0].vendor_uuid, Some(vendor.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_empty_cart_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = create_account(&ctx, "customer@example.com", Role::Customer).await?;

        let result = ctx
            .orders
            .checkout(customer.uuid, new_order("Chidi Okafor"))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );

        let cleared = ctx.carts.apply_action(customer.uuid, CartAction::Clear).await?;
        assert!(cleared.lines.is_empty());

        let result = ctx
            .orders
            .checkout(customer.uuid, new_order("Chidi Okafor"))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_withdrawn_product_writes_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;
        let customer = create_account(&ctx, "customer@example.com", Role::Customer).await?;
        let rice = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        add(&ctx, customer.uuid, rice.uuid).await?;
        ctx.products.delete_product(vendor.uuid, rice.uuid).await?;

        let result = ctx
            .orders
            .checkout(customer.uuid, new_order("Chidi Okafor"))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::ProductUnavailable(uuid)) if uuid == rice.uuid),
            "expected ProductUnavailable, got {result:?}"
        );

        assert!(ctx.orders.list_orders(customer.uuid).await?.is_empty());
        assert!(ctx.notifications.list_notifications(vendor.uuid).await?.is_empty());
        assert_eq!(ctx.carts.get_cart(customer.uuid).await?.lines.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_rejects_invalid_shipping() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = create_account(&ctx, "customer@example.com", Role::Customer).await?;

        let result = ctx
            .orders
            .checkout(
                customer.uuid,
                NewOrder {
                    uuid: OrderUuid::new(),
                    shipping: ShippingAddress {
                        email: "nope".to_string(),
                        ..shipping_to("Chidi Okafor")
                    },
                },
            )
            .await;

        assert!(
            matches!(&result, Err(OrdersServiceError::Invalid(errors)) if errors.has("email")),
            "expected Invalid, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn orders_are_private_to_their_customer() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;
        let customer = create_account(&ctx, "customer@example.com", Role::Customer).await?;
        let other = create_account(&ctx, "other@example.com", Role::Customer).await?;
        let rice = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        add(&ctx, customer.uuid, rice.uuid).await?;
        let checkout = ctx
            .orders
            .checkout(customer.uuid, new_order("Chidi Okafor"))
            .await?;

        let result = ctx.orders.get_order(other.uuid, checkout.order.uuid).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(ctx.orders.list_orders(customer.uuid).await?.len(), 1);
        assert!(ctx.orders.list_orders(other.uuid).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn status_moves_forward_one_step_at_a_time() -> TestResult {
        let ctx = TestContext::new().await;
        let vendor = create_account(&ctx, "vendor@example.com", Role::Vendor).await?;
        let customer = create_account(&ctx, "customer@example.com", Role::Customer).await?;
        let rice = create_approved_product(&ctx, vendor.uuid, "Ofada Rice", "Food", 3_000_00).await?;

        add(&ctx, customer.uuid, rice.uuid).await?;
        let order = ctx
            .orders
            .checkout(customer.uuid, new_order("Chidi Okafor"))
            .await?
            .order;

        let pending = ctx.orders.list_orders_by_status(OrderStatus::Pending).await?;
        assert_eq!(pending.len(), 1);

        let skipped = ctx
            .orders
            .update_status(order.uuid, OrderStatus::Delivered)
            .await;
        assert!(
            matches!(
                skipped,
                Err(OrdersServiceError::InvalidTransition(
                    OrderStatusError::InvalidTransition { .. }
                ))
            ),
            "expected InvalidTransition, got {skipped:?}"
        );

        let shipped = ctx.orders.update_status(order.uuid, OrderStatus::Shipped).await?;
        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert_eq!(shipped.items.len(), 1);

        let delivered = ctx
            .orders
            .update_status(order.uuid, OrderStatus::Delivered)
            .await?;
        assert_eq!(delivered.status, OrderStatus::Delivered);

        let unknown = ctx
            .orders
            .update_status(OrderUuid::new(), OrderStatus::Shipped)
            .await;
        assert!(
            matches!(unknown, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {unknown:?}"
        );

        Ok(())
    }
}
