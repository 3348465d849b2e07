use crate::server::{
    data::product::ProductRepository,
    model::product::{GetProductsParam, UpdateProductParam},
    util::pagination::PageRequest,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod decrement_stock;
mod get_paginated;
mod update;
