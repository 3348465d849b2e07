use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, pagination::PageDto, user::UserDto},
    server::{
        controller::param::{non_empty, UserListParam},
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::user::GetAllUsersParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get paginated users.
///
/// Lists all registered users ordered by name, optionally filtered by a substring of
/// their name or email.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Page of users
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(UserListParam),
    responses(
        (status = 200, description = "Page of users", body = PageDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    token: BearerToken,
    Query(params): Query<UserListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, token.as_deref())
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);

    let page = params.page_request();
    let users = user_service
        .get_all_users(GetAllUsersParam {
            search: non_empty(params.search),
            page,
        })
        .await?;

    Ok((StatusCode::OK, Json(PageDto::from(users.map(|u| u.into_dto())))))
}
