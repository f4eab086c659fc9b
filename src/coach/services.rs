use time::Date;
use tracing::debug;

use super::dto::{CoachCard, CoachCategory, CoachRequest};
use crate::shared::is_poor_sleep;

const CALORIE_CEILING: f64 = 2400.0;
const STEP_FLOOR: u32 = 5000;

const CALORIE_TIP: &str = "Swap one dinner carb for greens to stay on target.";
const WALK_TIP: &str = "Add a 10-minute walk after lunch to boost steps.";
const SLEEP_TIP: &str = "Try winding down 30 minutes earlier tonight.";
const STREAK_TIP: &str = "Seven-day streak! Lock it in with a quick reflection.";
const MOMENTUM_TIP: &str = "Keep the momentum—log meals within 15 minutes for accuracy.";

impl CoachCategory {
    pub fn title(self) -> &'static str {
        match self {
            CoachCategory::Nutrition => "Fuel Check",
            CoachCategory::Activity => "Move Boost",
            CoachCategory::Recovery => "Rest Reset",
            CoachCategory::Celebration => "Streak High-Five",
            CoachCategory::Maintenance => "Daily Focus",
        }
    }
}

/// One actionable card per day.
#[derive(Debug, Clone, Default)]
pub struct CoachInsights;

impl CoachInsights {
    pub fn generate(&self, request: &CoachRequest) -> CoachCard {
        let category = category_for(request);
        debug!(?category, day = %request.day, "coach card selected");
        CoachCard {
            title: category.title().into(),
            body: body_for(request),
            category,
            generated_for: request.day,
        }
    }
}

fn over_calories(r: &CoachRequest) -> bool {
    r.total_calories > CALORIE_CEILING
}

fn low_steps(r: &CoachRequest) -> bool {
    r.steps < STEP_FLOOR
}

fn weekly_streak(r: &CoachRequest) -> bool {
    r.streak_days > 0 && r.streak_days % 7 == 0
}

/// First matching rule wins.
fn category_for(r: &CoachRequest) -> CoachCategory {
    if over_calories(r) {
        CoachCategory::Nutrition
    } else if low_steps(r) {
        CoachCategory::Activity
    } else if is_poor_sleep(&r.sleep_quality) {
        CoachCategory::Recovery
    } else if weekly_streak(r) {
        CoachCategory::Celebration
    } else {
        CoachCategory::Maintenance
    }
}

/// Every matching rule contributes a sentence, independent of the category.
fn body_for(r: &CoachRequest) -> String {
    let tips: Vec<&str> = [
        (over_calories(r), CALORIE_TIP),
        (low_steps(r), WALK_TIP),
        (is_poor_sleep(&r.sleep_quality), SLEEP_TIP),
        (weekly_streak(r), STREAK_TIP),
    ]
    .into_iter()
    .filter_map(|(applies, tip)| applies.then_some(tip))
    .collect();

    if tips.is_empty() {
        MOMENTUM_TIP.to_string()
    } else {
        tips.join(" ")
    }
}

/// Card for a neutral day with nothing to flag.
pub fn default_daily_card(day: Date) -> CoachCard {
    CoachInsights.generate(&CoachRequest {
        day,
        total_calories: 2000.0,
        steps: 8000,
        sleep_quality: "good".into(),
        streak_days: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn request(calories: f64, steps: u32, sleep: &str, streak: u32) -> CoachRequest {
        CoachRequest {
            day: date!(2026 - 10 - 18),
            total_calories: calories,
            steps,
            sleep_quality: sleep.into(),
            streak_days: streak,
        }
    }

    #[test]
    fn calories_win_and_body_stacks_every_tip() {
        let card = CoachInsights.generate(&request(2500.0, 3000, "fair", 6));
        assert_eq!(card.category, CoachCategory::Nutrition);
        assert_eq!(card.title, "Fuel Check");
        assert_eq!(
            card.body,
            format!("{CALORIE_TIP} {WALK_TIP} {SLEEP_TIP}")
        );
        assert_eq!(card.generated_for, date!(2026 - 10 - 18));
    }

    #[test]
    fn category_priority_order() {
        assert_eq!(category_for(&request(2000.0, 4000, "poor", 7)), CoachCategory::Activity);
        assert_eq!(category_for(&request(2000.0, 9000, "Poor", 7)), CoachCategory::Recovery);
        assert_eq!(category_for(&request(2000.0, 9000, "good", 14)), CoachCategory::Celebration);
        assert_eq!(category_for(&request(2000.0, 9000, "good", 0)), CoachCategory::Maintenance);
        assert_eq!(category_for(&request(2400.0, 5000, "good", 3)), CoachCategory::Maintenance);
    }

    #[test]
    fn streak_card() {
        let card = CoachInsights.generate(&request(1800.0, 10_000, "great", 21));
        assert_eq!(card.title, "Streak High-Five");
        assert_eq!(card.body, STREAK_TIP);
    }

    #[test]
    fn default_card_is_maintenance() {
        let card = default_daily_card(date!(2026 - 10 - 18));
        assert_eq!(card.category, CoachCategory::Maintenance);
        assert_eq!(card.title, "Daily Focus");
        assert_eq!(card.body, MOMENTUM_TIP);
    }
}
