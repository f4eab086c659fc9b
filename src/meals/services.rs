use std::collections::HashMap;

use tracing::debug;

use super::dto::{MealItemEstimate, MealScanRequest, MealScanResult};
use crate::shared::{round_to, ConfidenceLevel};

/// Calories per 100 g for the foods the first pass recognises.
pub const CALORIE_TABLE: &[(&str, f64)] = &[
    ("grilled chicken", 165.0),
    ("brown rice", 111.0),
    ("steamed broccoli", 55.0),
    ("avocado", 160.0),
    ("salmon", 208.0),
    ("sweet potato", 86.0),
    ("quinoa", 120.0),
    ("mixed greens", 20.0),
    ("fried chicken", 260.0),
    ("pasta", 131.0),
    ("marinara sauce", 74.0),
];

pub const DEFAULT_CALORIES_PER_100G: f64 = 150.0;

const PLACEHOLDER_PORTION_G: f64 = 120.0;

/// First-pass meal estimator working from free-text hints.
#[derive(Debug, Clone)]
pub struct MealEstimator {
    calorie_table: HashMap<String, f64>,
}

impl Default for MealEstimator {
    fn default() -> Self {
        Self {
            calorie_table: CALORIE_TABLE
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }
}

impl MealEstimator {
    /// An empty table keeps the built-in foods.
    pub fn with_table(table: impl IntoIterator<Item = (String, f64)>) -> Self {
        let calorie_table: HashMap<String, f64> = table.into_iter().collect();
        if calorie_table.is_empty() {
            return Self::default();
        }
        Self { calorie_table }
    }

    pub fn estimate(&self, request: &MealScanRequest) -> MealScanResult {
        if request.hints.is_empty() {
            debug!("no hints supplied, returning placeholder item");
            let item = MealItemEstimate {
                name: "unrecognised item".into(),
                portion_grams: PLACEHOLDER_PORTION_G,
                calories: DEFAULT_CALORIES_PER_100G / 100.0 * PLACEHOLDER_PORTION_G,
                confidence: ConfidenceLevel::Low,
            };
            return MealScanResult {
                total_calories: item.calories,
                items: vec![item],
                confidence_message: "Unable to confidently recognise the meal".into(),
                clarification: Some(
                    "No hints were provided. Please capture another angle or add a manual item."
                        .into(),
                ),
            };
        }

        let items: Vec<MealItemEstimate> = request
            .hints
            .iter()
            .map(|hint| self.estimate_hint(hint))
            .collect();

        let sum: f64 = items.iter().map(|i| i.calories).sum();
        let total_calories = if sum == 0.0 { 1.0 } else { sum };
        let confidence = average_confidence(&items);
        debug!(items = items.len(), total_calories, ?confidence, "meal estimated");

        MealScanResult {
            items,
            total_calories,
            confidence_message: confidence_message(confidence).into(),
            clarification: None,
        }
    }

    fn estimate_hint(&self, hint: &str) -> MealItemEstimate {
        let key = hint.trim().to_lowercase();
        let portion = portion_for(&key);
        let known = self.calorie_table.get(&key).copied();
        let per_100g = known.unwrap_or(DEFAULT_CALORIES_PER_100G);

        let confidence = if key.contains("fried") || key.contains("dessert") || known.is_none() {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::High
        };

        MealItemEstimate {
            name: hint.to_string(),
            portion_grams: portion,
            calories: round_to(per_100g / 100.0 * portion, 2),
            confidence,
        }
    }
}

fn portion_for(key: &str) -> f64 {
    if key.contains("bowl") {
        250.0
    } else if key.contains("salad") || key.contains("greens") {
        180.0
    } else if key.contains("snack") || key.contains("dessert") {
        90.0
    } else {
        150.0
    }
}

fn average_confidence(items: &[MealItemEstimate]) -> ConfidenceLevel {
    if items.is_empty() {
        return ConfidenceLevel::Low;
    }
    let total: u32 = items.iter().map(|i| u32::from(i.confidence.score())).sum();
    let avg = f64::from(total) / items.len() as f64;
    ConfidenceLevel::from_score(avg.round_ties_even() as u8)
}

fn confidence_message(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "Looks good! Tap to adjust if anything seems off.",
        ConfidenceLevel::Medium => "We recognised most items. Double-check portions before saving.",
        ConfidenceLevel::Low => "Low confidence. Consider adding items manually.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hints: &[&str]) -> MealScanRequest {
        MealScanRequest {
            locale: "en_US".into(),
            preferences: vec![],
            hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[test]
    fn empty_hints_return_placeholder() {
        let result = MealEstimator::default().estimate(&request(&[]));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "unrecognised item");
        assert_eq!(result.items[0].portion_grams, 120.0);
        assert_eq!(result.items[0].confidence, ConfidenceLevel::Low);
        assert_eq!(result.total_calories, 180.0);
        assert!(result.clarification.is_some());
    }

    #[test]
    fn known_food_uses_table_and_default_portion() {
        let result = MealEstimator::default().estimate(&request(&["grilled chicken"]));
        let item = &result.items[0];
        assert_eq!(item.portion_grams, 150.0);
        assert_eq!(item.calories, 247.5);
        assert_eq!(item.confidence, ConfidenceLevel::High);
        assert_eq!(
            result.confidence_message,
            "Looks good! Tap to adjust if anything seems off."
        );
        assert!(result.clarification.is_none());
    }

    #[test]
    fn hint_is_normalised_for_lookup_but_echoed_verbatim() {
        let result = MealEstimator::default().estimate(&request(&["  Grilled Chicken "]));
        assert_eq!(result.items[0].name, "  Grilled Chicken ");
        assert_eq!(result.items[0].confidence, ConfidenceLevel::High);
    }

    #[test]
    fn portion_heuristics() {
        assert_eq!(portion_for("poke bowl"), 250.0);
        assert_eq!(portion_for("mixed greens"), 180.0);
        assert_eq!(portion_for("caesar salad"), 180.0);
        assert_eq!(portion_for("dessert"), 90.0);
        assert_eq!(portion_for("afternoon snack"), 90.0);
        assert_eq!(portion_for("salmon"), 150.0);
    }

    #[test]
    fn fried_food_is_capped_at_medium() {
        let result = MealEstimator::default().estimate(&request(&["fried chicken"]));
        assert_eq!(result.items[0].confidence, ConfidenceLevel::Medium);
        assert_eq!(result.items[0].calories, 390.0);
    }

    #[test]
    fn unknown_food_uses_default_density() {
        let result = MealEstimator::default().estimate(&request(&["tofu bowl"]));
        let item = &result.items[0];
        assert_eq!(item.portion_grams, 250.0);
        assert_eq!(item.calories, 375.0);
        assert_eq!(item.confidence, ConfidenceLevel::Medium);
        assert_eq!(
            result.confidence_message,
            "We recognised most items. Double-check portions before saving."
        );
    }

    #[test]
    fn total_is_sum_of_items() {
        let result =
            MealEstimator::default().estimate(&request(&["Grilled Chicken", "Mixed Greens", "pasta"]));
        let sum: f64 = result.items.iter().map(|i| i.calories).sum();
        assert!((result.total_calories - sum).abs() < 1e-9);
        assert_eq!(result.items[1].calories, 36.0);
    }

    #[test]
    fn average_rounds_half_to_even() {
        // high + medium averages to 1.5, which rounds up to high
        let result = MealEstimator::default().estimate(&request(&["salmon", "mystery"]));
        assert_eq!(
            result.confidence_message,
            "Looks good! Tap to adjust if anything seems off."
        );
        assert_eq!(average_confidence(&[]), ConfidenceLevel::Low);
    }

    #[test]
    fn custom_table_replaces_defaults() {
        let estimator = MealEstimator::with_table([("tempeh".to_string(), 192.0)]);
        let result = estimator.estimate(&request(&["tempeh", "salmon"]));
        assert_eq!(result.items[0].confidence, ConfidenceLevel::High);
        assert_eq!(result.items[1].calories, 225.0);
        assert_eq!(result.items[1].confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn empty_table_keeps_builtin_foods() {
        let estimator = MealEstimator::with_table(Vec::new());
        let result = estimator.estimate(&request(&["grilled chicken"]));
        assert_eq!(result.items[0].calories, 247.5);
        assert_eq!(result.items[0].confidence, ConfidenceLevel::High);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let estimator = MealEstimator::default();
        let req = request(&["quinoa", "avocado"]);
        assert_eq!(estimator.estimate(&req), estimator.estimate(&req));
    }
}
