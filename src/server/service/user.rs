//! User service for business logic.
//!
//! This module provides the `UserService` for user lookups and the admin user listing,
//! working with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, User},
    util::pagination::Page,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves users with pagination and optional search.
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users for the normalized page with navigation metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<Page<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let page = user_repo
            .get_all_paginated(param.search.as_deref(), param.page)
            .await?;

        Ok(page)
    }
}
