use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, meals::dto::default_locale, shared::ConfidenceLevel};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductScanRequest {
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub label_text: Option<String>,
}

impl ProductScanRequest {
    /// Empty strings count as missing.
    pub fn one_of_required(&self) -> Result<(), ValidationError> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        if present(&self.barcode) || present(&self.label_text) {
            Ok(())
        } else {
            Err(ValidationError(
                "Either barcode or label_text must be provided".into(),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCandidate {
    pub name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    Barcode,
    LabelOcr,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductScanResult {
    pub candidate: ProductCandidate,
    pub confidence: ConfidenceLevel,
    pub lookup_strategy: LookupStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NutritionResolverRequest {
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub ocr_text: Option<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub dietary_flags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientInfo {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub serving_size_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductScore {
    pub name: String,
    pub brand: Option<String>,
    pub health_score: u8,
    pub reason: String,
    pub better_alternatives: Vec<String>,
    pub nutrients: NutrientInfo,
}
