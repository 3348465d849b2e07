use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, OrderListItemDto},
        pagination::PageDto,
    },
    server::{
        controller::param::{non_empty, OrderListParam, PaginationParam},
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::order::CreateOrderParam,
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

pub(super) fn order_service(state: &AppState) -> OrderService<'_> {
    OrderService::new(
        &state.db,
        state.gateway.as_ref(),
        state.notifier.as_ref(),
        state.admin_fee,
        &state.midtrans_server_key,
    )
}

/// Check out a cart.
///
/// Prices the cart, applies the optional voucher and fees, reserves stock and, for
/// `midtrans` payments, returns the gateway payment URL.
///
/// # Returns
/// - `201 Created` - Order placed
/// - `400 Bad Request` - Empty cart, bad quantity, insufficient stock or unusable voucher
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Address, product or voucher not found
/// - `500 Internal Server Error` - Database or gateway error; nothing was persisted
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid checkout", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Address, product or voucher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_order(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[])
        .await?;

    let param = CreateOrderParam::from_dto(payload)?;
    let order = order_service(&state).create(&user, param).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get the authenticated user's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Page of orders", body = PageDto<OrderListItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_own_orders(
    State(state): State<AppState>,
    token: BearerToken,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[])
        .await?;

    let orders = order_service(&state)
        .list_for_user(&user, params.page_request())
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(orders.map(|o| o.into_list_item_dto()))),
    ))
}

/// Get one order with its details.
///
/// Customers only see their own orders; admins see any.
#[utoipa::path(
    get,
    path = "/api/v1/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_order(
    State(state): State<AppState>,
    token: BearerToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[])
        .await?;

    let order = order_service(&state).get(order_id, &user).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Get every customer's orders.
///
/// # Access Control
/// - `Admin` - Only admins can list all orders
///
/// # Returns
/// - `200 OK` - Page of orders
/// - `400 Bad Request` - Unknown status label
#[utoipa::path(
    get,
    path = "/api/v1/admin/orders",
    tag = ORDER_TAG,
    params(OrderListParam),
    responses(
        (status = 200, description = "Page of orders", body = PageDto<OrderListItemDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_orders(
    State(state): State<AppState>,
    token: BearerToken,
    Query(params): Query<OrderListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let page = params.page_request();
    let status = non_empty(params.status);
    let orders = order_service(&state)
        .list_all(page, status.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(orders.map(|o| o.into_list_item_dto()))),
    ))
}

/// Confirm an order's payment manually.
#[utoipa::path(
    post,
    path = "/api/v1/admin/orders/{order_id}/confirm",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order confirmed", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn confirm_order(
    State(state): State<AppState>,
    token: BearerToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let order = order_service(&state).confirm_payment(order_id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Cancel an order.
#[utoipa::path(
    post,
    path = "/api/v1/admin/orders/{order_id}/cancel",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    token: BearerToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let order = order_service(&state).cancel_payment(order_id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    token: BearerToken,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    order_service(&state).delete(order_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
