use std::time::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::token::TokenCache,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

const TTL: Duration = Duration::from_secs(60);
