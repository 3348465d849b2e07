//! Voucher service.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::voucher::VoucherRepository,
    error::AppError,
    model::voucher::{CreateVoucherParam, Voucher},
    util::pagination::{Page, PageRequest},
};

pub struct VoucherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoucherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a voucher.
    ///
    /// # Returns
    /// - `Ok(Voucher)` - Created voucher
    /// - `Err(AppError::BadRequest)` - Blank code, negative amounts, window ending before
    ///   it starts, or code already used
    pub async fn create(&self, param: CreateVoucherParam) -> Result<Voucher, AppError> {
        if param.code.trim().is_empty() {
            return Err(AppError::BadRequest("Voucher code is required".to_string()));
        }
        if param.discount < 0 || param.min_purchase < 0 {
            return Err(AppError::BadRequest(
                "Discount and minimum purchase cannot be negative".to_string(),
            ));
        }
        if param.end_date < param.start_date {
            return Err(AppError::BadRequest(
                "Voucher end date is before its start date".to_string(),
            ));
        }

        let voucher_repo = VoucherRepository::new(self.db);
        if voucher_repo.find_by_code(&param.code).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Voucher code '{}' already exists",
                param.code
            )));
        }

        Ok(voucher_repo.create(param).await?)
    }

    /// Lists vouchers usable right now.
    pub async fn list_active(&self, page: PageRequest) -> Result<Page<Voucher>, AppError> {
        let voucher_repo = VoucherRepository::new(self.db);

        Ok(voucher_repo.get_active_paginated(Utc::now(), page).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let voucher_repo = VoucherRepository::new(self.db);

        if !voucher_repo.soft_delete(id).await? {
            return Err(AppError::NotFound("Voucher not found".to_string()));
        }

        Ok(())
    }
}
