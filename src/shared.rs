use serde::{Deserialize, Serialize};

/// Estimate quality attached to heuristic outputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn score(self) -> u8 {
        match self {
            ConfidenceLevel::Low => 0,
            ConfidenceLevel::Medium => 1,
            ConfidenceLevel::High => 2,
        }
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            0 => ConfidenceLevel::Low,
            1 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::High,
        }
    }
}

/// Rounds to `digits` decimals, half to even on the exact decimal value.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

pub fn is_poor_sleep(sleep_quality: &str) -> bool {
    matches!(sleep_quality.to_lowercase().as_str(), "poor" | "fair")
}
