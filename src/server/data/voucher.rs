//! Voucher repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::voucher::{CreateVoucherParam, Voucher},
    util::pagination::{Page, PageRequest},
};

pub struct VoucherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoucherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateVoucherParam) -> Result<Voucher, DbErr> {
        let entity = entity::voucher::ActiveModel {
            code: ActiveValue::Set(param.code),
            name: ActiveValue::Set(param.name),
            discount: ActiveValue::Set(param.discount),
            min_purchase: ActiveValue::Set(param.min_purchase),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Voucher::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Voucher>, DbErr> {
        let entity = entity::prelude::Voucher::find_by_id(id)
            .filter(entity::voucher::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Voucher::from_entity))
    }

    /// Finds a voucher by code, including soft-deleted ones since codes stay unique.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, DbErr> {
        let entity = entity::prelude::Voucher::find()
            .filter(entity::voucher::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Voucher::from_entity))
    }

    /// Gets vouchers whose validity window contains `now`, ending soonest first.
    pub async fn get_active_paginated(
        &self,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> Result<Page<Voucher>, DbErr> {
        let paginator = entity::prelude::Voucher::find()
            .filter(entity::voucher::Column::DeletedAt.is_null())
            .filter(entity::voucher::Column::StartDate.lte(now))
            .filter(entity::voucher::Column::EndDate.gte(now))
            .order_by_asc(entity::voucher::Column::EndDate)
            .order_by_asc(entity::voucher::Column::Id)
            .paginate(self.db, page.per_page);

        let total_items = paginator.num_items().await?;
        let (current_page, _) = page.normalize(total_items);
        let entities = paginator
            .fetch_page(PageRequest::fetch_index(current_page))
            .await?;
        let vouchers = entities.into_iter().map(Voucher::from_entity).collect();

        Ok(Page::new(vouchers, current_page, total_items, page.per_page))
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Voucher::update_many()
            .col_expr(entity::voucher::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::voucher::Column::Id.eq(id))
            .filter(entity::voucher::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
