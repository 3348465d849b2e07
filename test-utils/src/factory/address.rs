//! Address factory for creating test shipping addresses.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shipping addresses owned by a user.
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    recipient: String,
    city: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory with default values for the given owner.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            recipient: format!("Recipient {}", id),
            city: "Bandung".to_string(),
        }
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            recipient: ActiveValue::Set(self.recipient),
            phone: ActiveValue::Set("081234567890".to_string()),
            street: ActiveValue::Set("Jl. Merdeka No. 1".to_string()),
            city: ActiveValue::Set(self.city),
            province: ActiveValue::Set("Jawa Barat".to_string()),
            postal_code: ActiveValue::Set("40111".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values for the given owner.
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db, user_id).build().await
}
