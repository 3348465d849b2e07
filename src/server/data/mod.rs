//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Repositories that take part in checkout (`product`, `order`) are generic over
//! `ConnectionTrait` so the same code runs on a pool connection or inside a transaction.

pub mod address;
pub mod order;
pub mod product;
pub mod user;
pub mod voucher;

#[cfg(test)]
mod test;
