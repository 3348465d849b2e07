//! Route table and API documentation.
//!
//! Routes are registered on a utoipa [`OpenApiRouter`] so the OpenAPI document is built
//! from the same handler list that serves requests. Swagger UI is mounted at `/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        OpenApi as OpenApiDoc,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{address, auth, order, payment, product, user, voucher},
    state::AppState,
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Shop API", description = "Catalogue, checkout and payment lifecycle"),
    modifiers(&BearerSecurity)
)]
struct ApiDoc;

/// Registers every API route and collects their OpenAPI operations.
pub fn api_router() -> (Router<AppState>, OpenApiDoc) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(user::get_all_users))
        .routes(routes!(address::create_address, address::get_addresses))
        .routes(routes!(address::delete_address))
        .routes(routes!(product::get_products, product::create_product))
        .routes(routes!(
            product::get_product,
            product::update_product,
            product::delete_product
        ))
        .routes(routes!(voucher::get_active_vouchers, voucher::create_voucher))
        .routes(routes!(voucher::delete_voucher))
        .routes(routes!(order::create_order, order::get_own_orders))
        .routes(routes!(order::get_order))
        .routes(routes!(order::get_all_orders))
        .routes(routes!(order::confirm_order))
        .routes(routes!(order::cancel_order))
        .routes(routes!(order::delete_order))
        .routes(routes!(payment::payment_notification))
        .split_for_parts()
}

/// Builds the application: API routes, Swagger UI, request tracing and CORS.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = api_router();

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
