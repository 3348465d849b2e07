use crate::server::{data::address::AddressRepository, util::pagination::PageRequest};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_owned;
mod get_by_user_paginated;
mod soft_delete;
