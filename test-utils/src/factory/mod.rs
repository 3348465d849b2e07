//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the IDs of the rows they reference, so
//! tests create parents first and pass them along.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let product = factory::product::create_product(&db).await?;
//!
//!     // Create a customer with an address ready for checkout
//!     let (user, address) = factory::helpers::create_customer_with_address(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db)
//!     .price(1000)
//!     .stock(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `address` - Create shipping address entities
//! - `product` - Create product entities
//! - `voucher` - Create voucher entities
//! - `order` - Create order entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod address;
pub mod helpers;
pub mod order;
pub mod product;
pub mod user;
pub mod voucher;

pub use address::create_address;
pub use order::create_order;
pub use product::create_product;
pub use user::{create_admin, create_user};
pub use voucher::create_voucher;
