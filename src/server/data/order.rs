//! Order repository.
//!
//! Generic over the connection so checkout can insert the order, its details and the
//! gateway payment fields inside one transaction. Soft-deleted orders are invisible to
//! every read.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        order::{GetOrdersParam, InsertOrderParam, Order},
        order_status::OrderState,
    },
    util::pagination::{Page, PageRequest},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order together with its detail lines.
    ///
    /// Callers wanting all-or-nothing semantics pass a `DatabaseTransaction`.
    ///
    /// # Arguments
    /// - `param` - Priced order with its lines, initial state and generated code
    ///
    /// # Returns
    /// - `Ok(Order)` - Inserted order including its details
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn create(&self, param: InsertOrderParam) -> Result<Order, DbErr> {
        let now = Utc::now();
        let totals = &param.totals;

        let order = entity::order::ActiveModel {
            order_code: ActiveValue::Set(param.order_code),
            user_id: ActiveValue::Set(param.user_id),
            address_id: ActiveValue::Set(param.address_id),
            voucher_id: ActiveValue::Set(param.voucher_id),
            grand_total_quantity: ActiveValue::Set(totals.grand_total_quantity),
            grand_total_price: ActiveValue::Set(totals.grand_total_price),
            grand_total_discount: ActiveValue::Set(totals.grand_total_discount),
            grand_total_exp: ActiveValue::Set(totals.grand_total_exp),
            grand_total_gram_plastic: ActiveValue::Set(totals.grand_total_gram_plastic),
            shipment_fee: ActiveValue::Set(totals.shipment_fee),
            admin_fee: ActiveValue::Set(totals.admin_fee),
            total_payment: ActiveValue::Set(totals.total_payment),
            order_status: ActiveValue::Set(param.state.order_status.as_str().to_string()),
            payment_status: ActiveValue::Set(param.state.payment_status.as_str().to_string()),
            payment_method: ActiveValue::Set(param.payment_method.as_str().to_string()),
            payment_token: ActiveValue::Set(None),
            payment_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let details = param
            .lines
            .into_iter()
            .map(|line| entity::order_detail::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(line.product_id),
                quantity: ActiveValue::Set(line.quantity),
                unit_price: ActiveValue::Set(line.unit_price),
                total_price: ActiveValue::Set(line.total_price),
                total_discount: ActiveValue::Set(line.total_discount),
                total_exp: ActiveValue::Set(line.total_exp),
                total_gram_plastic: ActiveValue::Set(line.total_gram_plastic),
                ..Default::default()
            })
            .collect::<Vec<_>>();

        if !details.is_empty() {
            entity::prelude::OrderDetail::insert_many(details)
                .exec(self.db)
                .await?;
        }

        let details = self.details_of(order.id).await?;

        Order::from_entity(order, details)
    }

    /// Stores the gateway token and redirect URL of an order.
    pub async fn set_payment(
        &self,
        id: i32,
        payment_token: String,
        payment_url: String,
    ) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::PaymentToken, Expr::value(payment_token))
            .col_expr(entity::order::Column::PaymentUrl, Expr::value(payment_url))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds a live order by id, including its details.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id)
            .filter(entity::order::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let details = self.details_of(order.id).await?;

        Ok(Some(Order::from_entity(order, details)?))
    }

    /// Finds a live order by the code sent to the payment gateway.
    pub async fn find_by_code(&self, order_code: &str) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find()
            .filter(entity::order::Column::OrderCode.eq(order_code))
            .filter(entity::order::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let details = self.details_of(order.id).await?;

        Ok(Some(Order::from_entity(order, details)?))
    }

    /// Persists a new lifecycle state.
    ///
    /// # Returns
    /// - `Ok(true)` - Live order updated
    /// - `Ok(false)` - No live order with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_state(&self, id: i32, state: OrderState) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::OrderStatus,
                Expr::value(state.order_status.as_str()),
            )
            .col_expr(
                entity::order::Column::PaymentStatus,
                Expr::value(state.payment_status.as_str()),
            )
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets live orders, newest first, without their details.
    ///
    /// # Arguments
    /// - `param` - Optional owner and order status filters plus the requested page
    ///
    /// # Returns
    /// - `Ok(Page<Order>)` - Orders of the normalized page
    /// - `Err(DbErr)` - Database error, or an unknown status label in a fetched row
    pub async fn get_paginated(&self, param: &GetOrdersParam) -> Result<Page<Order>, DbErr> {
        let mut query =
            entity::prelude::Order::find().filter(entity::order::Column::DeletedAt.is_null());

        if let Some(user_id) = param.user_id {
            query = query.filter(entity::order::Column::UserId.eq(user_id));
        }
        if let Some(status) = param.order_status {
            query = query.filter(entity::order::Column::OrderStatus.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, param.page.per_page);

        let total_items = paginator.num_items().await?;
        let (current_page, _) = param.page.normalize(total_items);
        let entities = paginator
            .fetch_page(PageRequest::fetch_index(current_page))
            .await?;

        Page::new(entities, current_page, total_items, param.page.per_page)
            .try_map(|entity| Order::from_entity(entity, Vec::new()))
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn details_of(&self, order_id: i32) -> Result<Vec<entity::order_detail::Model>, DbErr> {
        entity::prelude::OrderDetail::find()
            .filter(entity::order_detail::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_detail::Column::Id)
            .all(self.db)
            .await
    }
}
