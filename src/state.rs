use std::sync::Arc;

use crate::coach::CoachInsights;
use crate::config::AppConfig;
use crate::meals::MealEstimator;
use crate::ops::{OfflineSync, PrivacyOps, TelemetryIngest};
use crate::products::{NutritionResolver, ProductScanner};
use crate::workouts::WorkoutPlanner;

/// One instance of every agent. Agents are read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct Agents {
    pub meal_estimator: MealEstimator,
    pub product_scanner: ProductScanner,
    pub nutrition_resolver: NutritionResolver,
    pub workout_planner: WorkoutPlanner,
    pub coach: CoachInsights,
    pub offline_sync: OfflineSync,
    pub privacy_ops: PrivacyOps,
    pub telemetry: TelemetryIngest,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub agents: Arc<Agents>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(config, Arc::new(Agents::default())))
    }

    pub fn from_parts(config: Arc<AppConfig>, agents: Arc<Agents>) -> Self {
        Self { config, agents }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::from_parts(Arc::new(AppConfig::default()), Arc::new(Agents::default()))
    }
}
