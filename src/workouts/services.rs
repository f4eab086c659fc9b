use tracing::debug;

use super::dto::{Intensity, PlanLabel, WorkoutPlanOption, WorkoutPlanRequest, WorkoutPlanResult};
use crate::shared::{is_poor_sleep, round_to};

const KCAL_PER_MINUTE: f64 = 6.0;
const INTAKE_BASELINE_KCAL: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    /// Unrecognised goals plan as maintenance.
    pub fn normalize(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "weight_loss" => Goal::WeightLoss,
            "muscle_gain" => Goal::MuscleGain,
            _ => Goal::Maintenance,
        }
    }

    fn base_intensity(self, label: PlanLabel) -> f64 {
        match (self, label) {
            (Goal::WeightLoss, PlanLabel::Short) => 0.8,
            (Goal::WeightLoss, PlanLabel::Standard) => 1.0,
            (Goal::WeightLoss, PlanLabel::Recovery) => 0.6,
            (Goal::MuscleGain, PlanLabel::Short) => 0.9,
            (Goal::MuscleGain, PlanLabel::Standard) => 1.1,
            (Goal::MuscleGain, PlanLabel::Recovery) => 0.7,
            (Goal::Maintenance, PlanLabel::Short) => 0.7,
            (Goal::Maintenance, PlanLabel::Standard) => 0.9,
            (Goal::Maintenance, PlanLabel::Recovery) => 0.6,
        }
    }
}

impl PlanLabel {
    pub const ALL: [PlanLabel; 3] = [PlanLabel::Short, PlanLabel::Standard, PlanLabel::Recovery];

    fn base_duration(self) -> f64 {
        match self {
            PlanLabel::Short => 20.0,
            PlanLabel::Standard => 40.0,
            PlanLabel::Recovery => 25.0,
        }
    }
}

impl Intensity {
    fn from_factor(factor: f64) -> Self {
        if factor >= 1.0 {
            Intensity::High
        } else if factor >= 0.8 {
            Intensity::Moderate
        } else {
            Intensity::Low
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutPlanner;

impl WorkoutPlanner {
    pub fn build_plan(&self, request: &WorkoutPlanRequest) -> WorkoutPlanResult {
        let goal = Goal::normalize(&request.goal);
        let sleep_penalty = if is_poor_sleep(&request.sleep_quality) { 0.8 } else { 1.0 };
        let activity_bonus = if request.steps_today > 10_000 { 0.9 } else { 1.0 };
        let caloric_delta = (request.recent_intake - INTAKE_BASELINE_KCAL).max(0.0) / 500.0;
        debug!(?goal, sleep_penalty, activity_bonus, caloric_delta, "planning workouts");

        let options = PlanLabel::ALL
            .into_iter()
            .map(|label| {
                let factor = goal.base_intensity(label) * sleep_penalty * activity_bonus;
                // recovery sessions are not stretched by surplus intake
                let scale = match label {
                    PlanLabel::Recovery => 1.0,
                    _ => 1.0 + caloric_delta * 0.1,
                };
                let duration = label.base_duration() * scale;
                let burn = KCAL_PER_MINUTE * duration * factor;
                WorkoutPlanOption {
                    label,
                    duration_minutes: round_to(duration, 1),
                    intensity: Intensity::from_factor(factor),
                    estimated_burn_calories: round_to(burn, 1),
                }
            })
            .collect();

        WorkoutPlanResult { options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(goal: &str, intake: f64, steps: u32, sleep: &str) -> WorkoutPlanRequest {
        WorkoutPlanRequest {
            goal: goal.into(),
            recent_intake: intake,
            steps_today: steps,
            sleep_quality: sleep.into(),
        }
    }

    #[test]
    fn always_three_options_in_order() {
        let plan = WorkoutPlanner.build_plan(&request("anything", 0.0, 0, "unknown"));
        let labels: Vec<_> = plan.options.iter().map(|o| o.label).collect();
        assert_eq!(labels, PlanLabel::ALL);
        for option in &plan.options {
            assert!(option.duration_minutes > 0.0);
            assert!(option.estimated_burn_calories > 0.0);
        }
    }

    #[test]
    fn weight_loss_with_surplus_stretches_active_sessions() {
        let plan = WorkoutPlanner.build_plan(&request("weight_loss", 2200.0, 6000, "good"));
        let [short, standard, recovery] = &plan.options[..] else {
            panic!("expected three options");
        };
        assert_eq!(short.duration_minutes, 20.8);
        assert_eq!(short.estimated_burn_calories, 99.8);
        assert_eq!(short.intensity, Intensity::Moderate);
        assert_eq!(standard.duration_minutes, 41.6);
        assert_eq!(standard.estimated_burn_calories, 249.6);
        assert_eq!(standard.intensity, Intensity::High);
        assert_eq!(recovery.duration_minutes, 25.0);
        assert_eq!(recovery.estimated_burn_calories, 90.0);
        assert_eq!(recovery.intensity, Intensity::Low);
    }

    #[test]
    fn poor_sleep_and_high_steps_lower_intensity() {
        let plan = WorkoutPlanner.build_plan(&request("MUSCLE_GAIN", 1800.0, 12_000, "Poor"));
        // 1.1 * 0.8 * 0.9 = 0.792
        assert_eq!(plan.options[1].intensity, Intensity::Low);
        assert_eq!(plan.options[1].duration_minutes, 40.0);
        assert_eq!(plan.options[1].estimated_burn_calories, 190.1);
    }

    #[test]
    fn unknown_goal_is_maintenance() {
        assert_eq!(Goal::normalize("bulk"), Goal::Maintenance);
        assert_eq!(Goal::normalize("Weight_Loss"), Goal::WeightLoss);
        let plan = WorkoutPlanner.build_plan(&request("bulk", 2000.0, 5000, "good"));
        assert_eq!(plan.options[0].estimated_burn_calories, 84.0);
        assert_eq!(plan.options[1].intensity, Intensity::Moderate);
    }

    #[test]
    fn labels_serialise_title_case() {
        let json = serde_json::to_value(PlanLabel::Recovery).unwrap();
        assert_eq!(json, "Recovery");
        let json = serde_json::to_value(Intensity::Moderate).unwrap();
        assert_eq!(json, "Moderate");
    }
}
