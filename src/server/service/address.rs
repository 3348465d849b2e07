//! Shipping address service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::address::AddressRepository,
    error::AppError,
    model::address::{Address, CreateAddressParam},
    util::pagination::{Page, PageRequest},
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an address for the user.
    ///
    /// # Returns
    /// - `Ok(Address)` - Created address
    /// - `Err(AppError::BadRequest)` - A required field is blank
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateAddressParam) -> Result<Address, AppError> {
        let required = [
            ("recipient", &param.recipient),
            ("phone", &param.phone),
            ("street", &param.street),
            ("city", &param.city),
            ("province", &param.province),
            ("postal_code", &param.postal_code),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }

        let address_repo = AddressRepository::new(self.db);
        let address = address_repo.create(param).await?;

        Ok(address)
    }

    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Page<Address>, AppError> {
        let address_repo = AddressRepository::new(self.db);

        Ok(address_repo.get_by_user_paginated(user_id, page).await?)
    }

    /// Soft deletes one of the user's addresses.
    ///
    /// Orders already placed keep pointing at the row.
    ///
    /// # Returns
    /// - `Ok(())` - Address deleted
    /// - `Err(AppError::NotFound)` - No live address with that id for this user
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let address_repo = AddressRepository::new(self.db);

        if !address_repo.soft_delete(id, user_id).await? {
            return Err(AppError::NotFound("Address not found".to_string()));
        }

        Ok(())
    }
}
