use serde::{Deserialize, Serialize};

use crate::shared::ConfidenceLevel;

#[derive(Debug, Clone, Deserialize)]
pub struct MealScanRequest {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub hints: Vec<String>,
}

pub(crate) fn default_locale() -> String {
    "en_US".into()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealItemEstimate {
    pub name: String,
    pub portion_grams: f64,
    pub calories: f64,
    pub confidence: ConfidenceLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealScanResult {
    pub items: Vec<MealItemEstimate>,
    pub total_calories: f64,
    pub confidence_message: String,
    pub clarification: Option<String>,
}
