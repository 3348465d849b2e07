use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        address::{AddressDto, CreateAddressDto},
        api::ErrorDto,
        pagination::PageDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::address::CreateAddressParam,
        service::address::AddressService,
        state::AppState,
    },
};

/// Tag for grouping address endpoints in OpenAPI documentation
pub static ADDRESS_TAG: &str = "address";

#[utoipa::path(
    post,
    path = "/api/v1/addresses",
    tag = ADDRESS_TAG,
    request_body = CreateAddressDto,
    responses(
        (status = 201, description = "Address created", body = AddressDto),
        (status = 400, description = "Missing address field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_address(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[])
        .await?;

    let address_service = AddressService::new(&state.db);
    let address = address_service
        .create(CreateAddressParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(address.into_dto())))
}

/// Get the authenticated user's addresses.
#[utoipa::path(
    get,
    path = "/api/v1/addresses",
    tag = ADDRESS_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Page of addresses", body = PageDto<AddressDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_addresses(
    State(state): State<AppState>,
    token: BearerToken,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[])
        .await?;

    let address_service = AddressService::new(&state.db);
    let addresses = address_service
        .list_for_user(user.id, params.page_request())
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(addresses.map(|a| a.into_dto()))),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/addresses/{address_id}",
    tag = ADDRESS_TAG,
    params(("address_id" = i32, Path, description = "Address ID")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_address(
    State(state): State<AppState>,
    token: BearerToken,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[])
        .await?;

    let address_service = AddressService::new(&state.db);
    address_service.delete(address_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
