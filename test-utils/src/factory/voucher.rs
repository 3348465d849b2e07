//! Voucher factory for creating test discount codes.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vouchers.
///
/// The default validity window starts one day ago and ends seven days from now.
pub struct VoucherFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    discount: i64,
    min_purchase: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl<'a> VoucherFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            code: format!("HEMAT{}", id),
            discount: 500,
            min_purchase: 0,
            start_date: now - Duration::days(1),
            end_date: now + Duration::days(7),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn discount(mut self, discount: i64) -> Self {
        self.discount = discount;
        self
    }

    pub fn min_purchase(mut self, min_purchase: i64) -> Self {
        self.min_purchase = min_purchase;
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the voucher entity into the database.
    pub async fn build(self) -> Result<entity::voucher::Model, DbErr> {
        entity::voucher::ActiveModel {
            name: ActiveValue::Set(format!("Voucher {}", self.code)),
            code: ActiveValue::Set(self.code),
            discount: ActiveValue::Set(self.discount),
            min_purchase: ActiveValue::Set(self.min_purchase),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a currently valid voucher with default values.
pub async fn create_voucher(db: &DatabaseConnection) -> Result<entity::voucher::Model, DbErr> {
    VoucherFactory::new(db).build().await
}
