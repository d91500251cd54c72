//! Voucher and pin validation

use serde::{Deserialize, Serialize};

use crate::format::BrandFormat;

/// Outcome of validating one voucher/pin pair.
///
/// `accuracy` is binary by contract: 100.0 when valid, 0.0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationResult {
    /// Whether the voucher (and pin, where required) match the format.
    pub valid: bool,
    /// 100.0 when valid, 0.0 otherwise.
    #[cfg_attr(feature = "openapi", schema(example = 100.0))]
    pub accuracy: f64,
}

/// Checks `voucher` (and `pin`, when the brand requires one) against the
/// brand's format.
///
/// The pattern match is anchored at both ends; the pin must be exactly
/// `pin_length` ASCII decimal digits. Pure function of its inputs.
pub fn validate(format: &BrandFormat, voucher: &str, pin: Option<&str>) -> ValidationResult {
    let voucher_ok = format.pattern.is_match(voucher);
    let pin_ok = match format.pin_length {
        None => true,
        Some(len) => pin.is_some_and(|p| p.len() == len && p.bytes().all(|b| b.is_ascii_digit())),
    };
    let valid = voucher_ok && pin_ok;
    ValidationResult {
        valid,
        accuracy: if valid { 100.0 } else { 0.0 },
    }
}
