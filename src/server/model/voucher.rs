//! Voucher domain model.

use chrono::{DateTime, Utc};

use crate::model::voucher::{CreateVoucherDto, VoucherDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Voucher {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub discount: i64,
    /// Smallest `grand_total_price` the voucher applies to.
    pub min_purchase: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Voucher {
    /// Whether `now` lies inside `[start_date, end_date]`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    pub fn into_dto(self) -> VoucherDto {
        VoucherDto {
            id: self.id,
            code: self.code,
            name: self.name,
            discount: self.discount,
            min_purchase: self.min_purchase,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    pub fn from_entity(entity: entity::voucher::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            discount: entity.discount,
            min_purchase: entity.min_purchase,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVoucherParam {
    pub code: String,
    pub name: String,
    pub discount: i64,
    pub min_purchase: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl CreateVoucherParam {
    pub fn from_dto(dto: CreateVoucherDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            discount: dto.discount,
            min_purchase: dto.min_purchase,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}
