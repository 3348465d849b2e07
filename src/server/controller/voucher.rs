use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pagination::PageDto,
        voucher::{CreateVoucherDto, VoucherDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::voucher::CreateVoucherParam,
        service::voucher::VoucherService,
        state::AppState,
    },
};

/// Tag for grouping voucher endpoints in OpenAPI documentation
pub static VOUCHER_TAG: &str = "voucher";

/// Get vouchers usable right now.
#[utoipa::path(
    get,
    path = "/api/v1/vouchers",
    tag = VOUCHER_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Page of active vouchers", body = PageDto<VoucherDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_vouchers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let voucher_service = VoucherService::new(&state.db);
    let vouchers = voucher_service.list_active(params.page_request()).await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(vouchers.map(|v| v.into_dto()))),
    ))
}

/// Create a voucher.
///
/// # Access Control
/// - `Admin` - Only admins can create vouchers
///
/// # Returns
/// - `201 Created` - Voucher created
/// - `400 Bad Request` - Invalid window, negative amounts or duplicate code
#[utoipa::path(
    post,
    path = "/api/v1/vouchers",
    tag = VOUCHER_TAG,
    request_body = CreateVoucherDto,
    responses(
        (status = 201, description = "Voucher created", body = VoucherDto),
        (status = 400, description = "Invalid voucher data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_voucher(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateVoucherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let voucher_service = VoucherService::new(&state.db);
    let voucher = voucher_service
        .create(CreateVoucherParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(voucher.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/vouchers/{voucher_id}",
    tag = VOUCHER_TAG,
    params(("voucher_id" = i32, Path, description = "Voucher ID")),
    responses(
        (status = 204, description = "Voucher deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Voucher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_voucher(
    State(state): State<AppState>,
    token: BearerToken,
    Path(voucher_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let voucher_service = VoucherService::new(&state.db);
    voucher_service.delete(voucher_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
