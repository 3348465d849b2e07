//! Order service: checkout and the payment lifecycle.
//!
//! Checkout prices the cart, then inserts the order, its details and the stock
//! decrements in one database transaction. For gateway payments the charge is requested
//! inside that transaction too, so a rejected charge leaves no order and no stock change
//! behind. Every later status change goes through [`transition`].

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::payment::GatewayNotificationDto,
    server::{
        data::{
            address::AddressRepository, order::OrderRepository, product::ProductRepository,
            voucher::VoucherRepository,
        },
        error::AppError,
        model::{
            checkout::{merge_cart, LineTotals, OrderTotals},
            order::{generate_order_code, CreateOrderParam, GetOrdersParam, InsertOrderParam, Order},
            order_status::{transition, OrderEvent, OrderState, OrderStatus},
            user::User,
        },
        service::{
            notification::{OrderNotification, OrderNotifier},
            payment::{verify_signature, ChargeRequest, PaymentGateway},
        },
        util::pagination::{Page, PageRequest},
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn PaymentGateway,
    notifier: &'a dyn OrderNotifier,
    admin_fee: i64,
    server_key: &'a str,
}

impl<'a> OrderService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn PaymentGateway,
        notifier: &'a dyn OrderNotifier,
        admin_fee: i64,
        server_key: &'a str,
    ) -> Self {
        Self {
            db,
            gateway,
            notifier,
            admin_fee,
            server_key,
        }
    }

    /// Places an order for `user`.
    ///
    /// # Arguments
    /// - `user` - Customer placing the order
    /// - `param` - Address, optional voucher, payment method, shipment fee and cart lines
    ///
    /// # Returns
    /// - `Ok(Order)` - Committed order with its details and, for gateway payments, the
    ///   payment token and URL
    /// - `Err(AppError::BadRequest)` - Empty cart, bad quantity, insufficient stock, or a
    ///   voucher that is inactive or above the order's price
    /// - `Err(AppError::NotFound)` - Address not owned by the user, or a product/voucher
    ///   that does not exist
    /// - `Err(AppError::PaymentErr)` - Gateway refused the charge; nothing was persisted
    /// - `Err(AppError::DbErr)` - Database error; nothing was persisted
    pub async fn create(&self, user: &User, param: CreateOrderParam) -> Result<Order, AppError> {
        let items = merge_cart(param.items)?;

        let address_repo = AddressRepository::new(self.db);
        address_repo
            .find_owned(param.address_id, user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))?;

        let product_ids: Vec<i32> = items.iter().map(|i| i.product_id).collect();
        let products = ProductRepository::new(self.db)
            .find_by_ids(&product_ids)
            .await?;

        let mut lines = Vec::with_capacity(items.len());
        for item in &items {
            let product = products
                .iter()
                .find(|p| p.id == item.product_id)
                .ok_or_else(|| {
                    AppError::NotFound(format!("Product {} not found", item.product_id))
                })?;

            if product.stock < item.quantity {
                return Err(AppError::BadRequest(format!(
                    "Insufficient stock for product '{}'",
                    product.name
                )));
            }

            lines.push(LineTotals::new(product, item.quantity)?);
        }

        let mut totals = OrderTotals::from_lines(&lines)?;

        if let Some(voucher_id) = param.voucher_id {
            let voucher = VoucherRepository::new(self.db)
                .find_by_id(voucher_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Voucher not found".to_string()))?;

            if !voucher.is_active_at(Utc::now()) {
                return Err(AppError::BadRequest(format!(
                    "Voucher '{}' is not active",
                    voucher.code
                )));
            }
            if totals.grand_total_price < voucher.min_purchase {
                return Err(AppError::BadRequest(format!(
                    "Voucher '{}' requires a minimum purchase of {}",
                    voucher.code, voucher.min_purchase
                )));
            }

            totals.apply_voucher(voucher.discount)?;
        }

        totals.finalize(param.shipment_fee, self.admin_fee)?;

        let txn = self.db.begin().await?;

        let product_repo = ProductRepository::new(&txn);
        for line in &lines {
            if !product_repo
                .decrement_stock(line.product_id, line.quantity)
                .await?
            {
                return Err(AppError::BadRequest(format!(
                    "Insufficient stock for product {}",
                    line.product_id
                )));
            }
        }

        let order_repo = OrderRepository::new(&txn);
        let mut order = order_repo
            .create(InsertOrderParam {
                order_code: generate_order_code(Utc::now()),
                user_id: user.id,
                address_id: param.address_id,
                voucher_id: param.voucher_id,
                totals,
                state: OrderState::initial(),
                payment_method: param.payment_method,
                lines,
            })
            .await?;

        if order.payment_method.uses_gateway() {
            let charge = self
                .gateway
                .create_charge(ChargeRequest {
                    order_code: order.order_code.clone(),
                    gross_amount: order.totals.total_payment,
                    customer_name: user.name.clone(),
                    customer_email: user.email.clone(),
                })
                .await?;

            order_repo
                .set_payment(order.id, charge.token.clone(), charge.redirect_url.clone())
                .await?;

            order.payment_token = Some(charge.token);
            order.payment_url = Some(charge.redirect_url);
        }

        txn.commit().await?;

        tracing::info!(
            order_id = order.id,
            order_code = %order.order_code,
            user_id = user.id,
            total_payment = order.totals.total_payment,
            "Order created"
        );

        self.notify(OrderNotification::created(&order)).await;

        Ok(order)
    }

    /// Applies a gateway payment notification.
    ///
    /// Statuses the lifecycle does not react to are acknowledged without changes.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order in its state after the notification
    /// - `Err(AppError::PaymentErr)` - Signature mismatch
    /// - `Err(AppError::NotFound)` - No live order with the notified code
    pub async fn handle_gateway_callback(
        &self,
        notification: GatewayNotificationDto,
    ) -> Result<Order, AppError> {
        verify_signature(&notification, self.server_key)?;

        let order = OrderRepository::new(self.db)
            .find_by_code(&notification.order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        tracing::info!(
            order_code = %order.order_code,
            transaction_status = %notification.transaction_status,
            fraud_status = ?notification.fraud_status,
            "Received payment notification"
        );

        let Some(event) = OrderEvent::from_gateway(
            &notification.transaction_status,
            notification.fraud_status.as_deref(),
        ) else {
            return Ok(order);
        };

        self.apply(order, event).await
    }

    /// Marks an order as paid on an admin's behalf.
    pub async fn confirm_payment(&self, order_id: i32) -> Result<Order, AppError> {
        let order = self.find(order_id).await?;

        self.apply(order, OrderEvent::AdminConfirmed).await
    }

    /// Fails an order on an admin's behalf.
    pub async fn cancel_payment(&self, order_id: i32) -> Result<Order, AppError> {
        let order = self.find(order_id).await?;

        self.apply(order, OrderEvent::AdminCancelled).await
    }

    /// Gets an order visible to `user`.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order with details; the user owns it or is an admin
    /// - `Err(AppError::NotFound)` - Order missing, deleted, or owned by someone else
    pub async fn get(&self, order_id: i32, user: &User) -> Result<Order, AppError> {
        let order = self.find(order_id).await?;

        if order.user_id != user.id && !user.is_admin() {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        Ok(order)
    }

    pub async fn list_for_user(
        &self,
        user: &User,
        page: PageRequest,
    ) -> Result<Page<Order>, AppError> {
        let order_repo = OrderRepository::new(self.db);

        Ok(order_repo
            .get_paginated(&GetOrdersParam {
                user_id: Some(user.id),
                order_status: None,
                page,
            })
            .await?)
    }

    /// Lists every customer's orders, optionally filtered by order status label.
    ///
    /// # Returns
    /// - `Ok(Page<Order>)` - Orders of the normalized page
    /// - `Err(AppError::BadRequest)` - `status` is not a known order status label
    pub async fn list_all(
        &self,
        page: PageRequest,
        status: Option<&str>,
    ) -> Result<Page<Order>, AppError> {
        let order_status = status
            .map(|label| {
                OrderStatus::from_label(label)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown order status '{}'", label)))
            })
            .transpose()?;

        let order_repo = OrderRepository::new(self.db);

        Ok(order_repo
            .get_paginated(&GetOrdersParam {
                user_id: None,
                order_status,
                page,
            })
            .await?)
    }

    pub async fn delete(&self, order_id: i32) -> Result<(), AppError> {
        let order_repo = OrderRepository::new(self.db);

        if !order_repo.soft_delete(order_id).await? {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        tracing::info!(order_id, "Order deleted");

        Ok(())
    }

    async fn find(&self, order_id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    /// Persists the state `event` leads to and notifies when it differs.
    async fn apply(&self, mut order: Order, event: OrderEvent) -> Result<Order, AppError> {
        let next = transition(order.state, event);
        if next == order.state {
            return Ok(order);
        }

        if !OrderRepository::new(self.db)
            .update_state(order.id, next)
            .await?
        {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        tracing::info!(
            order_id = order.id,
            ?event,
            from_order_status = %order.state.order_status,
            to_order_status = %next.order_status,
            to_payment_status = %next.payment_status,
            "Order state changed"
        );

        order.state = next;
        self.notify(OrderNotification::status_changed(&order)).await;

        Ok(order)
    }

    async fn notify(&self, notification: OrderNotification) {
        if let Err(e) = self.notifier.notify(notification).await {
            tracing::warn!("Failed to send order notification: {}", e);
        }
    }
}
