use crate::server::{data::voucher::VoucherRepository, util::pagination::PageRequest};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active_paginated;
mod soft_delete;
