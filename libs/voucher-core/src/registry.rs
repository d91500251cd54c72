//! Registry of supported gift-card brands
//!
//! Built once at startup and shared read-only. Order is part of the API
//! contract: brand listings are returned in registration order.

use crate::format::{BrandFormat, Result};
use crate::shape::{Alphabet, CodeShape};

/// Ordered, immutable collection of supported brand formats.
#[derive(Debug, Clone)]
pub struct BrandRegistry {
    formats: Vec<BrandFormat>,
}

impl BrandRegistry {
    /// Builds the built-in brand table.
    pub fn builtin() -> Result<Self> {
        let formats = vec![
            BrandFormat::new(
                "Amazon Gift Card",
                CodeShape::new(3, 4, '-', Alphabet::UpperAlphanumeric),
                None,
            )?,
            BrandFormat::new(
                "Google Play Gift Card",
                CodeShape::new(4, 4, '-', Alphabet::UpperAlphanumeric),
                None,
            )?,
            BrandFormat::new(
                "Steam Gift Card",
                CodeShape::new(3, 5, '-', Alphabet::UpperAlphanumeric),
                None,
            )?,
            BrandFormat::new(
                "Best Buy Gift Card",
                CodeShape::new(4, 4, ' ', Alphabet::Digits),
                Some(4),
            )?,
        ];
        Ok(Self { formats })
    }

    /// Looks up a brand by exact name.
    pub fn lookup(&self, name: &str) -> Option<&BrandFormat> {
        self.formats.iter().find(|f| f.name == name)
    }

    /// Brand names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.formats.iter().map(|f| f.name.clone()).collect()
    }

    /// All formats in registration order.
    pub fn formats(&self) -> &[BrandFormat] {
        &self.formats
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
