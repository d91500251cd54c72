//! API route configuration
//!
//! Central route definition for the gift-card voucher service.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;
#[cfg(feature = "swagger-ui")]
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{generate_vouchers, health_check, list_cards, root, validate_voucher};
use crate::logging::http_request_logger;
use crate::AppState;

// OpenAPI documentation - only compiled when swagger-ui feature is enabled
#[cfg(feature = "swagger-ui")]
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::root,
        crate::api::handlers::list_cards,
        crate::api::handlers::generate_vouchers,
        crate::api::handlers::validate_voucher,
        crate::api::handlers::health_check
    ),
    components(schemas(
        crate::api::models::GenerateRequest,
        crate::api::models::ValidateRequest,
        crate::api::models::RootResponse,
        voucher_core::VoucherResult,
        voucher_core::ValidationResult
    )),
    tags(
        (name = "info", description = "Service banner and health"),
        (name = "cards", description = "Supported gift-card brands"),
        (name = "vouchers", description = "Voucher generation and validation")
    ),
    info(
        title = "USA Gift Card API",
        description = "Mock gift-card voucher generation and validation"
    )
)]
pub struct CardsrvApiDoc;

/// Create all API routes for the voucher service
///
/// CORS is fully permissive: any origin, method and header. The interactive
/// docs are mounted at `/docs` when the `swagger-ui` feature is on.
pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/cards", get(list_cards))
        .route("/generate", post(generate_vouchers))
        .route("/validate", post(validate_voucher))
        .route("/health", get(health_check));

    #[cfg(feature = "swagger-ui")]
    let router = router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", CardsrvApiDoc::openapi()));

    router
        .layer(CorsLayer::permissive())
        // Apply HTTP request logging middleware
        .layer(axum::middleware::from_fn(http_request_logger))
        .with_state(state)
}
