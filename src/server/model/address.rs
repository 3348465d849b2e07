//! Shipping address domain model.

use chrono::{DateTime, Utc};

use crate::model::address::{AddressDto, CreateAddressDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub recipient: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

impl Address {
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: self.id,
            recipient: self.recipient,
            phone: self.phone,
            street: self.street,
            city: self.city,
            province: self.province,
            postal_code: self.postal_code,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            recipient: entity.recipient,
            phone: entity.phone,
            street: entity.street,
            city: entity.city,
            province: entity.province,
            postal_code: entity.postal_code,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAddressParam {
    pub user_id: i32,
    pub recipient: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
}

impl CreateAddressParam {
    pub fn from_dto(user_id: i32, dto: CreateAddressDto) -> Self {
        Self {
            user_id,
            recipient: dto.recipient,
            phone: dto.phone,
            street: dto.street,
            city: dto.city,
            province: dto.province,
            postal_code: dto.postal_code,
        }
    }
}
