//! Product factory for creating test catalogue entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable pricing and stock.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db)
///     .price(2000)
///     .discount(100)
///     .stock(3)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    price: i64,
    discount: i64,
    exp: i64,
    gram_plastic: i64,
    stock: i32,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - category: `"daily"`
    /// - price: `1000`, discount: `0`, exp: `10`, gram_plastic: `5`
    /// - stock: `100`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            category: "daily".to_string(),
            price: 1000,
            discount: 0,
            exp: 10,
            gram_plastic: 5,
            stock: 100,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn discount(mut self, discount: i64) -> Self {
        self.discount = discount;
        self
    }

    pub fn exp(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    pub fn gram_plastic(mut self, gram_plastic: i64) -> Self {
        self.gram_plastic = gram_plastic;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test product".to_string()),
            category: ActiveValue::Set(self.category),
            price: ActiveValue::Set(self.price),
            discount: ActiveValue::Set(self.discount),
            exp: ActiveValue::Set(self.exp),
            gram_plastic: ActiveValue::Set(self.gram_plastic),
            stock: ActiveValue::Set(self.stock),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
