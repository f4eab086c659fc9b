use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutPlanRequest {
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default)]
    pub recent_intake: f64,
    #[serde(default)]
    pub steps_today: u32,
    #[serde(default = "default_sleep_quality")]
    pub sleep_quality: String,
}

fn default_goal() -> String {
    "maintenance".into()
}

pub(crate) fn default_sleep_quality() -> String {
    "unknown".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanLabel {
    Short,
    Standard,
    Recovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPlanOption {
    pub label: PlanLabel,
    pub duration_minutes: f64,
    pub intensity: Intensity,
    pub estimated_burn_calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPlanResult {
    pub options: Vec<WorkoutPlanOption>,
}
