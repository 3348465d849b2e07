use crate::server::{
    data::order::OrderRepository,
    model::{
        checkout::{LineTotals, OrderTotals},
        order::{GetOrdersParam, InsertOrderParam, PaymentMethod},
        order_status::{OrderState, OrderStatus, PaymentStatus},
        product::Product,
    },
    util::pagination::PageRequest,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod soft_delete;
mod update_state;
