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
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::param::{non_empty, ProductListParam},
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::product::{CreateProductParam, GetProductsParam, UpdateProductParam},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Get paginated products.
///
/// Public catalogue listing, newest first. `search` matches a substring of the product
/// name; `category` must match exactly.
///
/// # Returns
/// - `200 OK` - Page of products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = PRODUCT_TAG,
    params(ProductListParam),
    responses(
        (status = 200, description = "Page of products", body = PageDto<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParam>,
) -> Result<impl IntoResponse, AppError> {
    let product_service = ProductService::new(&state.db);

    let page = params.page_request();
    let products = product_service
        .list(GetProductsParam {
            search: non_empty(params.search),
            category: non_empty(params.category),
            page,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(products.map(|p| p.into_dto()))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}",
    tag = PRODUCT_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product_service = ProductService::new(&state.db);
    let product = product_service.get(product_id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Create a product.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalogue
///
/// # Returns
/// - `201 Created` - Product created
/// - `400 Bad Request` - Blank name/category or negative amounts
/// - `401 Unauthorized` / `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let product_service = ProductService::new(&state.db);
    let product = product_service
        .create(CreateProductParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Update a product. Omitted fields keep their value.
#[utoipa::path(
    patch,
    path = "/api/v1/products/{product_id}",
    tag = PRODUCT_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_product(
    State(state): State<AppState>,
    token: BearerToken,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let product_service = ProductService::new(&state.db);
    let product = product_service
        .update(product_id, UpdateProductParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{product_id}",
    tag = PRODUCT_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    token: BearerToken,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let product_service = ProductService::new(&state.db);
    product_service.delete(product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
