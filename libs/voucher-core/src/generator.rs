//! Random voucher and pin generation
//!
//! One generic routine consumes the shape descriptor; brand identity never
//! drives a branch here. Callers supply the rng, so tests can seed a
//! [`rand::rngs::StdRng`] and get reproducible output.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::format::BrandFormat;
use crate::shape::{Alphabet, CodeShape};

/// Upper bound on vouchers per generation call.
pub const MAX_COUNT: usize = 50;

/// One generated voucher with its pin, when the brand uses one.
///
/// `pin` serializes as an explicit `null` for brands without a pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VoucherResult {
    /// The voucher code string.
    #[cfg_attr(feature = "openapi", schema(example = "QV0L-HKJ9-X2M1"))]
    pub voucher: String,
    /// Companion pin, all decimal digits.
    #[cfg_attr(feature = "openapi", schema(example = "4821"))]
    pub pin: Option<String>,
}

/// Draws `len` characters uniformly from `charset`.
fn draw<R: Rng + ?Sized>(rng: &mut R, charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Assembles one voucher string for `shape`.
pub fn voucher_string<R: Rng + ?Sized>(rng: &mut R, shape: &CodeShape) -> String {
    let charset = shape.alphabet.charset();
    let groups: Vec<String> = (0..shape.groups)
        .map(|_| draw(rng, charset, shape.group_len))
        .collect();
    groups.join(&shape.separator.to_string())
}

/// Generates one voucher, and a pin where the brand requires one.
pub fn generate_one<R: Rng + ?Sized>(rng: &mut R, format: &BrandFormat) -> VoucherResult {
    let voucher = voucher_string(rng, &format.shape);
    let pin = format
        .pin_length
        .map(|len| draw(rng, Alphabet::Digits.charset(), len));
    VoucherResult { voucher, pin }
}

/// Generates `count` vouchers in generation order.
///
/// Bounding `count` to `1..=MAX_COUNT` is the caller's responsibility;
/// collisions between results are acceptable and expected at low
/// probability.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    format: &BrandFormat,
    count: usize,
) -> Vec<VoucherResult> {
    (0..count).map(|_| generate_one(rng, format)).collect()
}
