use std::time::Duration;

use crate::geom::PoseStamped;
use crate::trajectory::JointTrajectory;

/// Fixed request parameters for a plan-and-execute cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanParameters {
    pub planning_attempts: u32,
    pub planning_time: Duration,
    pub max_velocity_scaling: f64,
    pub max_acceleration_scaling: f64,
    pub planning_pipeline: Option<String>,
}

impl Default for PlanParameters {
    fn default() -> Self {
        Self {
            planning_attempts: 1,
            planning_time: Duration::from_secs(5),
            max_velocity_scaling: 0.4,
            max_acceleration_scaling: 0.4,
            planning_pipeline: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanGoal {
    /// A target known to the pipeline by name.
    NamedTarget(String),
    /// A pose for `tip_link`, relative to the pose's frame.
    PoseTarget { pose: PoseStamped, tip_link: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanSolution {
    pub trajectory: JointTrajectory,
}

/// External planning pipeline. Computing a feasible trajectory is entirely
/// the implementor's concern; "no plan found" is `None`, not an error.
pub trait PlanningPipeline {
    fn pipeline_names(&self) -> Vec<String>;

    fn plan(&mut self, goal: &PlanGoal, params: &PlanParameters) -> Option<PlanSolution>;
}
