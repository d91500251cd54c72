//! HTTP handlers for the voucher API

use std::sync::Arc;

use axum::{extract::State, response::Json};
use chrono::Utc;
use chrono_tz::America::New_York;
use serde_json::json;
use tracing::{debug, info};
use voucher_core::{generate_batch, validate, ValidationResult, VoucherResult, MAX_COUNT};

use crate::api::models::{
    GenerateRequest, RootResponse, ValidateRequest, BANNER_MESSAGE, DOCS_PATH,
};
use crate::error::CardsrvError;
use crate::AppState;

/// Current time in US Eastern, formatted `YYYY-MM-DD hh:mm:ss AM/PM TZ`.
/// Tracks daylight saving, so the zone renders as EST or EDT.
fn eastern_now() -> String {
    Utc::now()
        .with_timezone(&New_York)
        .format("%Y-%m-%d %I:%M:%S %p %Z")
        .to_string()
}

/// Service banner
///
/// @route GET /
/// @output Json<RootResponse> - banner, US Eastern time and docs pointer
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses(
        (status = 200, description = "Service banner", body = RootResponse)
    )
))]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: BANNER_MESSAGE.to_string(),
        time: eastern_now(),
        docs: DOCS_PATH.to_string(),
    })
}

/// List supported gift-card brands
///
/// Names are returned in registry order and are the exact strings accepted
/// by the generate and validate endpoints.
///
/// @route GET /cards
/// @output Json<Vec<String>> - brand names in registry order
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    get,
    path = "/cards",
    tag = "cards",
    responses(
        (status = 200, description = "Supported brand names in registry order",
            body = Vec<String>,
            example = json!([
                "Amazon Gift Card",
                "Google Play Gift Card",
                "Steam Gift Card",
                "Best Buy Gift Card"
            ])
        )
    )
))]
pub async fn list_cards(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.registry.names())
}

/// Generate vouchers for a brand
///
/// Draws `count` random voucher codes matching the brand's format, plus a
/// numeric pin for brands that require one. Codes are synthetic and not
/// guaranteed unique across calls.
///
/// @route POST /generate
/// @output Json<Vec<VoucherResult>> - one entry per requested voucher
/// @status 200 - Vouchers generated
/// @status 404 - Unknown brand
/// @status 422 - Count out of range or malformed body
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    post,
    path = "/generate",
    tag = "vouchers",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated vouchers in generation order",
            body = Vec<VoucherResult>),
        (status = 404, description = "Brand not in the registry",
            body = inline(Object), example = json!({"detail": "Not supported"})),
        (status = 422, description = "Count outside 1..=50 or malformed request body")
    )
))]
pub async fn generate_vouchers(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Vec<VoucherResult>>, CardsrvError> {
    if !(1..=MAX_COUNT).contains(&req.count) {
        return Err(CardsrvError::InvalidCount(req.count));
    }
    let format = state
        .registry
        .lookup(&req.card_name)
        .ok_or(CardsrvError::UnknownBrand)?;

    let results = generate_batch(&mut rand::thread_rng(), format, req.count);
    info!("Generated {} voucher(s) for {}", results.len(), format.name);
    Ok(Json(results))
}

/// Validate a voucher/pin pair against a brand's format
///
/// The pattern match is anchored at both ends; for brands with a pin the
/// pin must be exactly the declared number of decimal digits. `accuracy`
/// is binary: 100.0 when valid, 0.0 otherwise.
///
/// @route POST /validate
/// @output Json<ValidationResult>
/// @status 200 - Validation performed (valid or not)
/// @status 404 - Unknown brand
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    post,
    path = "/validate",
    tag = "vouchers",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidationResult),
        (status = 404, description = "Brand not in the registry",
            body = inline(Object), example = json!({"detail": "Not supported"}))
    )
))]
pub async fn validate_voucher(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidationResult>, CardsrvError> {
    let format = state
        .registry
        .lookup(&req.card_name)
        .ok_or(CardsrvError::UnknownBrand)?;

    let result = validate(format, &req.voucher, req.pin.as_deref());
    debug!("Validated voucher for {}: valid={}", format.name, result.valid);
    Ok(Json(result))
}

/// Health check endpoint
///
/// @route GET /health
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    get,
    path = "/health",
    tag = "info",
    responses(
        (status = 200, description = "Service is up", body = inline(Object),
            example = json!({"status": "healthy", "service": "cardsrv"}))
    )
))]
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "cardsrv",
        "timestamp": Utc::now().to_rfc3339()
    }))
}
