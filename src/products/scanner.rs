use std::collections::HashMap;

use tracing::debug;

use super::dto::{LookupStrategy, ProductCandidate, ProductScanRequest, ProductScanResult};
use crate::{error::ValidationError, shared::ConfidenceLevel};

const MAX_INGREDIENTS: usize = 10;
const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Every character that ends a line on a printed label.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub ingredients: Vec<String>,
}

impl ProductRecord {
    fn new(name: &str, brand: &str, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn default_barcode_db() -> HashMap<String, ProductRecord> {
    HashMap::from([
        (
            "012345678905".to_string(),
            ProductRecord::new(
                "InfyFit Protein Bar",
                "InfyFit Labs",
                &["almonds", "whey protein", "honey", "sea salt"],
            ),
        ),
        (
            "5012345678900".to_string(),
            ProductRecord::new(
                "Whole Grain Pita",
                "Whole Hearth",
                &["whole wheat", "yeast", "olive oil", "sea salt"],
            ),
        ),
    ])
}

/// Resolves a barcode or label text to a product candidate.
#[derive(Debug, Clone)]
pub struct ProductScanner {
    barcode_db: HashMap<String, ProductRecord>,
}

impl Default for ProductScanner {
    fn default() -> Self {
        Self {
            barcode_db: default_barcode_db(),
        }
    }
}

impl ProductScanner {
    /// An empty db keeps the built-in barcodes.
    pub fn with_db(barcode_db: HashMap<String, ProductRecord>) -> Self {
        if barcode_db.is_empty() {
            return Self::default();
        }
        Self { barcode_db }
    }

    pub fn scan(&self, request: &ProductScanRequest) -> Result<ProductScanResult, ValidationError> {
        request.one_of_required()?;

        if let Some((barcode, record)) = request
            .barcode
            .as_deref()
            .and_then(|b| self.barcode_db.get(b).map(|r| (b, r)))
        {
            debug!(%barcode, "barcode hit");
            return Ok(ProductScanResult {
                candidate: ProductCandidate {
                    name: record.name.clone(),
                    brand: Some(record.brand.clone()),
                    barcode: Some(barcode.to_string()),
                    ingredients: record.ingredients.clone(),
                },
                confidence: ConfidenceLevel::High,
                lookup_strategy: LookupStrategy::Barcode,
            });
        }

        if let Some(text) = request.label_text.as_deref().filter(|t| !t.is_empty()) {
            let ingredients = extract_ingredients(text);
            let confidence = if ingredients.is_empty() {
                ConfidenceLevel::Low
            } else {
                ConfidenceLevel::Medium
            };
            debug!(ingredients = ingredients.len(), "label ocr fallback");
            return Ok(ProductScanResult {
                candidate: ProductCandidate {
                    name: name_from_label(text),
                    brand: None,
                    barcode: None,
                    ingredients,
                },
                confidence,
                lookup_strategy: LookupStrategy::LabelOcr,
            });
        }

        debug!(barcode = ?request.barcode, "unknown barcode without label");
        Ok(ProductScanResult {
            candidate: ProductCandidate {
                name: UNKNOWN_PRODUCT.into(),
                brand: None,
                barcode: None,
                ingredients: Vec::new(),
            },
            confidence: ConfidenceLevel::Low,
            lookup_strategy: LookupStrategy::Fallback,
        })
    }
}

fn name_from_label(text: &str) -> String {
    text.split(LINE_BREAKS)
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNKNOWN_PRODUCT)
        .to_string()
}

fn extract_ingredients(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let Some(idx) = lowered.find("ingredients") else {
        return Vec::new();
    };
    let tail = &lowered[idx + "ingredients".len()..];
    tail.replace([':', '.'], " ")
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .take(MAX_INGREDIENTS)
        .map(String::from)
        .collect()
}
