//! Brand format descriptors

use regex::Regex;
use thiserror::Error;

use crate::shape::CodeShape;

/// Result type for format construction.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised while building brand formats.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Pattern derived from a shape failed to compile.
    #[error("invalid pattern for brand '{brand}': {source}")]
    InvalidPattern {
        brand: String,
        #[source]
        source: regex::Error,
    },
}

/// Immutable description of one brand's voucher format.
///
/// The validation pattern and the expected length are derived from `shape`
/// at construction, so generation and validation always agree.
#[derive(Debug, Clone)]
pub struct BrandFormat {
    /// Brand display name, unique across the registry.
    pub name: String,
    /// Structural descriptor driving generation.
    pub shape: CodeShape,
    /// Anchored pattern derived from `shape`.
    pub pattern: Regex,
    /// Informational total length, separators included.
    pub expected_len: usize,
    /// Required pin digit count, if the brand uses a pin.
    pub pin_length: Option<usize>,
}

impl BrandFormat {
    /// Builds a format from a shape, compiling the derived pattern.
    pub fn new(name: &str, shape: CodeShape, pin_length: Option<usize>) -> Result<Self> {
        let pattern = Regex::new(&shape.pattern()).map_err(|source| FormatError::InvalidPattern {
            brand: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            shape,
            pattern,
            expected_len: shape.expected_len(),
            pin_length,
        })
    }

    /// Whether this brand requires a companion pin.
    pub fn requires_pin(&self) -> bool {
        self.pin_length.is_some()
    }
}
