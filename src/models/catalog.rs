use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::models::domain::{SizeEntry, SizeRange};

/// Catalog shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../../config/catalog.toml");

/// Errors that can occur while loading a size catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Size chart of one category within a brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChart {
    pub name: String,
    #[serde(rename = "displayName", alias = "display_name", default)]
    pub display_name: Option<String>,
    pub sizes: Vec<SizeEntry>,
}

impl SizeChart {
    /// Look up a size label (case-insensitive)
    pub fn size(&self, label: &str) -> Option<&SizeEntry> {
        self.sizes
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(label))
    }

    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// All size charts published by one brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSizes {
    pub name: String,
    pub categories: Vec<SizeChart>,
}

impl BrandSizes {
    /// Look up a category chart (case-insensitive)
    pub fn category(&self, name: &str) -> Option<&SizeChart> {
        self.categories
            .iter()
            .find(|chart| chart.name.eq_ignore_ascii_case(name))
    }
}

/// Static brand → category → size table
///
/// Brands, categories and sizes keep the order in which they were authored;
/// size recommendation relies on that order to break ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandCatalog {
    pub brands: Vec<BrandSizes>,
}

impl BrandCatalog {
    /// Catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: BrandCatalog = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check structural invariants not covered by deserialization
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut brand_names = HashSet::new();
        for brand in &self.brands {
            if !brand_names.insert(brand.name.to_ascii_lowercase()) {
                return Err(CatalogError::Invalid(format!("duplicate brand '{}'", brand.name)));
            }

            let mut category_names = HashSet::new();
            for chart in &brand.categories {
                if !category_names.insert(chart.name.to_ascii_lowercase()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate category '{}' in brand '{}'",
                        chart.name, brand.name
                    )));
                }
                if chart.sizes.is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "category '{}' in brand '{}' has no sizes",
                        chart.name, brand.name
                    )));
                }

                let mut labels = HashSet::new();
                for entry in &chart.sizes {
                    if !labels.insert(entry.label.to_ascii_lowercase()) {
                        return Err(CatalogError::Invalid(format!(
                            "duplicate size '{}' in {}/{}",
                            entry.label, brand.name, chart.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Look up a brand (case-insensitive)
    pub fn brand(&self, name: &str) -> Option<&BrandSizes> {
        self.brands
            .iter()
            .find(|brand| brand.name.eq_ignore_ascii_case(name))
    }

    /// Look up a brand's category chart
    pub fn chart(&self, brand: &str, category: &str) -> Option<(&BrandSizes, &SizeChart)> {
        let brand = self.brand(brand)?;
        let chart = brand.category(category)?;
        Some((brand, chart))
    }

    /// Look up the range of one brand/category/size
    pub fn range(&self, brand: &str, category: &str, size: &str) -> Option<SizeRange> {
        self.chart(brand, category)
            .and_then(|(_, chart)| chart.size(size))
            .map(|entry| entry.range)
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }
}
