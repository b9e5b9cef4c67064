//! Demo configuration loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use arm_motion::{demo_collision_object, CollisionObject, PlanParameters};
use serde::{Deserialize, Serialize};

/// Demo configuration, loaded from a YAML file. A missing file means
/// defaults; a present file may override any subset of the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Planning group the pipeline plans for.
    pub group_name: String,

    /// Frame incoming goal poses are expressed in.
    pub base_frame: String,

    /// Link whose pose goal-pose events target.
    pub tip_link: String,

    /// Plan request parameters.
    pub planning: PlanningConfig,

    /// Obstacles seeded into the planning scene at startup.
    pub collision_objects: Vec<CollisionObject>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            group_name: "manipulator".to_string(),
            base_frame: "base_iiwa".to_string(),
            tip_link: "tool0".to_string(),
            planning: PlanningConfig::default(),
            collision_objects: vec![demo_collision_object()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    pub attempts: u32,
    pub time_secs: f64,
    pub velocity_scaling: f64,
    pub acceleration_scaling: f64,
    pub pipeline: Option<String>,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            attempts: 1,
            time_secs: 5.0,
            velocity_scaling: 0.4,
            acceleration_scaling: 0.4,
            pipeline: None,
        }
    }
}

impl PlanningConfig {
    fn validate(&self) -> Result<()> {
        ensure!(self.attempts >= 1, "planning.attempts must be at least 1");
        ensure!(
            self.time_secs.is_finite() && self.time_secs > 0.0,
            "planning.time_secs must be a positive number of seconds, got {}",
            self.time_secs
        );
        for (name, value) in [
            ("velocity_scaling", self.velocity_scaling),
            ("acceleration_scaling", self.acceleration_scaling),
        ] {
            ensure!(
                value.is_finite() && value > 0.0 && value <= 1.0,
                "planning.{name} must be in (0, 1], got {value}"
            );
        }
        Ok(())
    }

    pub fn to_parameters(&self) -> PlanParameters {
        PlanParameters {
            planning_attempts: self.attempts,
            planning_time: Duration::from_secs_f64(self.time_secs),
            max_velocity_scaling: self.velocity_scaling,
            max_acceleration_scaling: self.acceleration_scaling,
            planning_pipeline: self.pipeline.clone(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config
            .planning
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }
}
