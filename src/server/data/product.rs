//! Product catalogue repository.
//!
//! Generic over the connection so checkout can read products and decrement stock inside
//! its order transaction. Soft-deleted products are invisible to every read.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::product::{CreateProductParam, GetProductsParam, Product, UpdateProductParam},
    util::pagination::{Page, PageRequest},
};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateProductParam) -> Result<Product, DbErr> {
        let now = Utc::now();
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category),
            price: ActiveValue::Set(param.price),
            discount: ActiveValue::Set(param.discount),
            exp: ActiveValue::Set(param.exp),
            gram_plastic: ActiveValue::Set(param.gram_plastic),
            stock: ActiveValue::Set(param.stock),
            image_url: ActiveValue::Set(param.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id)
            .filter(entity::product::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Loads every live product among `ids`. Missing ids are simply absent.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::product::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    /// Gets live products, newest first, optionally filtered by name and category.
    ///
    /// # Arguments
    /// - `param` - Optional name substring (SQL `LIKE '%term%'`), optional exact category,
    ///   and the requested page
    ///
    /// # Returns
    /// - `Ok(Page<Product>)` - Products of the normalized page
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_paginated(&self, param: &GetProductsParam) -> Result<Page<Product>, DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(entity::product::Column::DeletedAt.is_null());

        if let Some(term) = param.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(entity::product::Column::Name.contains(term));
        }
        if let Some(category) = param.category.as_deref().filter(|c| !c.is_empty()) {
            query = query.filter(entity::product::Column::Category.eq(category));
        }

        let paginator = query
            .order_by_desc(entity::product::Column::CreatedAt)
            .order_by_desc(entity::product::Column::Id)
            .paginate(self.db, param.page.per_page);

        let total_items = paginator.num_items().await?;
        let (current_page, _) = param.page.normalize(total_items);
        let entities = paginator
            .fetch_page(PageRequest::fetch_index(current_page))
            .await?;
        let products = entities.into_iter().map(Product::from_entity).collect();

        Ok(Page::new(products, current_page, total_items, param.page.per_page))
    }

    /// Applies a partial update to a live product.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Updated product
    /// - `Ok(None)` - No live product with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateProductParam,
    ) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id)
            .filter(entity::product::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(discount) = param.discount {
            active.discount = ActiveValue::Set(discount);
        }
        if let Some(exp) = param.exp {
            active.exp = ActiveValue::Set(exp);
        }
        if let Some(gram_plastic) = param.gram_plastic {
            active.gram_plastic = ActiveValue::Set(gram_plastic);
        }
        if let Some(stock) = param.stock {
            active.stock = ActiveValue::Set(stock);
        }
        if let Some(image_url) = param.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)))
    }

    /// Decrements stock only if enough is left.
    ///
    /// The check and the decrement are a single conditional `UPDATE`, so concurrent
    /// checkouts can never drive stock below zero.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock decremented by `quantity`
    /// - `Ok(false)` - Product missing, deleted, or stock below `quantity`
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_stock(&self, id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::Stock,
                Expr::col(entity::product::Column::Stock).sub(quantity),
            )
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::Stock.gte(quantity))
            .filter(entity::product::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(entity::product::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
