//! Gift-card voucher domain library
//!
//! Pure format logic shared by the HTTP service:
//! - declarative code-shape descriptors and the registry of supported brands
//! - random voucher/pin generation conforming to a brand's shape
//! - voucher/pin validation against a brand's derived pattern
//!
//! No I/O and no global state; randomness is supplied by the caller so
//! generation stays deterministic under a seeded rng.

pub mod format;
pub mod generator;
pub mod registry;
pub mod shape;
pub mod validator;

// Re-export the working surface at crate root for convenience
pub use format::{BrandFormat, FormatError};
pub use generator::{generate_batch, generate_one, VoucherResult, MAX_COUNT};
pub use registry::BrandRegistry;
pub use shape::{Alphabet, CodeShape};
pub use validator::{validate, ValidationResult};
