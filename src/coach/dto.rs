use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::workouts::dto::default_sleep_quality;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Deserialize)]
pub struct CoachRequest {
    #[serde(with = "iso_date", default = "today")]
    pub day: Date,
    #[serde(default)]
    pub total_calories: f64,
    #[serde(default)]
    pub steps: u32,
    #[serde(default = "default_sleep_quality")]
    pub sleep_quality: String,
    #[serde(default)]
    pub streak_days: u32,
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachCategory {
    Nutrition,
    Activity,
    Recovery,
    Celebration,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachCard {
    pub title: String,
    pub body: String,
    pub category: CoachCategory,
    #[serde(with = "iso_date")]
    pub generated_for: Date,
}
