//! SeaORM entity models for the shop database.

pub mod prelude;

pub mod address;
pub mod order;
pub mod order_detail;
pub mod product;
pub mod user;
pub mod voucher;
