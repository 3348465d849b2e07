//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by id and email, the admin existence check used at
//! startup, and the paginated admin listing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::user::{CreateUserParam, Role, User},
    util::pagination::{Page, PageRequest},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Name, email, password hash and role of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            exp: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address (exact match).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether a one-time admin registration code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets users with pagination, ordered alphabetically by name.
    ///
    /// Rows are counted first and the requested page is clamped against that count
    /// before fetching, so the returned items always match `current_page`.
    ///
    /// # Arguments
    /// - `search` - Optional substring matched against name or email
    /// - `page` - Requested page and page size
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users of the normalized page with navigation metadata
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_all_paginated(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<User>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Name.contains(term))
                    .add(entity::user::Column::Email.contains(term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, page.per_page);

        let total_items = paginator.num_items().await?;
        let (current_page, _) = page.normalize(total_items);
        let entities = paginator
            .fetch_page(PageRequest::fetch_index(current_page))
            .await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok(Page::new(users, current_page, total_items, page.per_page))
    }
}
