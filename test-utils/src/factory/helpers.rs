//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer user with a shipping address.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, address))` - Created user and their address
/// - `Err(DbErr)` - Database error during creation
pub async fn create_customer_with_address(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::address::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let address = crate::factory::address::create_address(db, user.id).await?;

    Ok((user, address))
}

/// Creates a pending order together with its owner and address.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, address, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::address::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let (user, address) = create_customer_with_address(db).await?;
    let order = crate::factory::order::create_order(db, user.id, address.id).await?;

    Ok((user, address, order))
}
