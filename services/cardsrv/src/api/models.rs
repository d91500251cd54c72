//! Request and response wire models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Banner message returned by `GET /`.
pub const BANNER_MESSAGE: &str = "Live in USA";

/// Path of the interactive API documentation.
pub const DOCS_PATH: &str = "/docs";

/// Voucher generation request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Brand name, as listed by `GET /cards`.
    #[schema(example = "Amazon Gift Card")]
    pub card_name: String,

    /// Number of vouchers to generate (1..=50).
    #[serde(default = "default_count")]
    #[schema(example = 3)]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

/// Voucher validation request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ValidateRequest {
    /// Brand name, as listed by `GET /cards`.
    #[schema(example = "Best Buy Gift Card")]
    pub card_name: String,

    /// Voucher code to check.
    #[schema(example = "1234 5678 9012 3456")]
    pub voucher: String,

    /// Companion pin, only meaningful for brands that require one.
    #[serde(default)]
    #[schema(example = "1234")]
    pub pin: Option<String>,
}

/// Banner returned by `GET /`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RootResponse {
    /// Fixed service banner.
    #[schema(example = "Live in USA")]
    pub message: String,

    /// Current US Eastern time, `YYYY-MM-DD hh:mm:ss AM/PM TZ`.
    #[schema(example = "2026-08-25 09:15:42 AM EDT")]
    pub time: String,

    /// Where the interactive docs live.
    #[schema(example = "/docs")]
    pub docs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_count_defaults_to_one() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"card_name": "Amazon Gift Card"}"#).unwrap();
        assert_eq!(req.count, 1);
    }

    #[test]
    fn test_validate_request_pin_optional() {
        let req: ValidateRequest =
            serde_json::from_str(r#"{"card_name": "Steam Gift Card", "voucher": "X"}"#).unwrap();
        assert!(req.pin.is_none());

        let req: ValidateRequest = serde_json::from_str(
            r#"{"card_name": "Best Buy Gift Card", "voucher": "X", "pin": "1234"}"#,
        )
        .unwrap();
        assert_eq!(req.pin.as_deref(), Some("1234"));
    }
}
