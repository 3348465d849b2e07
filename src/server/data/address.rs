//! Shipping address repository.
//!
//! Addresses are soft deleted: `deleted_at` is set and every read filters it out.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::address::{Address, CreateAddressParam},
    util::pagination::{Page, PageRequest},
};

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAddressParam) -> Result<Address, DbErr> {
        let entity = entity::address::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            recipient: ActiveValue::Set(param.recipient),
            phone: ActiveValue::Set(param.phone),
            street: ActiveValue::Set(param.street),
            city: ActiveValue::Set(param.city),
            province: ActiveValue::Set(param.province),
            postal_code: ActiveValue::Set(param.postal_code),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Address::from_entity(entity))
    }

    /// Finds a live address belonging to `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Address))` - Address exists, is owned by the user and not deleted
    /// - `Ok(None)` - Missing, deleted or owned by someone else
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Address>, DbErr> {
        let entity = entity::prelude::Address::find_by_id(id)
            .filter(entity::address::Column::UserId.eq(user_id))
            .filter(entity::address::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Address::from_entity))
    }

    /// Gets a user's live addresses, newest first.
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Page<Address>, DbErr> {
        let paginator = entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .filter(entity::address::Column::DeletedAt.is_null())
            .order_by_desc(entity::address::Column::CreatedAt)
            .order_by_desc(entity::address::Column::Id)
            .paginate(self.db, page.per_page);

        let total_items = paginator.num_items().await?;
        let (current_page, _) = page.normalize(total_items);
        let entities = paginator
            .fetch_page(PageRequest::fetch_index(current_page))
            .await?;
        let addresses = entities.into_iter().map(Address::from_entity).collect();

        Ok(Page::new(addresses, current_page, total_items, page.per_page))
    }

    /// Soft deletes an address owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Address was marked deleted
    /// - `Ok(false)` - No live address with that id for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Address::update_many()
            .col_expr(
                entity::address::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::address::Column::Id.eq(id))
            .filter(entity::address::Column::UserId.eq(user_id))
            .filter(entity::address::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
