//! In-process stand-ins for the external collaborators, good enough to run
//! the demo end to end without a planner or a robot.

use std::collections::BTreeMap;
use std::time::Duration;

use arm_motion::{
    CollisionObject, JointTrajectory, KinematicModel, PlanGoal, PlanParameters, PlanSolution,
    PlanningPipeline, PlanningScene, Pose, TrajectoryPoint, Vec3,
};
use tracing::info;

const JOINT_COUNT: usize = 7;
const LINK_LENGTH: f64 = 0.4;

/// Toy 7-joint model: a planar two-segment reachability approximation with
/// symmetric limits. Real kinematics live outside this repository.
pub struct StubKinematics {
    joints: Vec<String>,
}

impl StubKinematics {
    pub fn new() -> Self {
        Self {
            joints: (1..=JOINT_COUNT).map(|i| format!("joint_a{i}")).collect(),
        }
    }
}

impl Default for StubKinematics {
    fn default() -> Self {
        Self::new()
    }
}

impl KinematicModel for StubKinematics {
    fn model_frame(&self) -> &str {
        "base_footprint"
    }

    fn joint_names(&self) -> &[String] {
        &self.joints
    }

    fn default_positions(&self) -> Vec<f64> {
        vec![0.0; self.joints.len()]
    }

    fn joint_limits(&self) -> Vec<(f64, f64)> {
        vec![(-2.96, 2.96); self.joints.len()]
    }

    fn frame_transform(&self, positions: &[f64], link: &str) -> Option<Pose> {
        if link != "tool0" || positions.len() != self.joints.len() {
            return None;
        }
        let q1 = positions[0];
        let q4 = positions[3];
        let x = LINK_LENGTH * q1.cos() + LINK_LENGTH * (q1 + q4).cos();
        let y = LINK_LENGTH * q1.sin() + LINK_LENGTH * (q1 + q4).sin();
        Some(Pose::from_position(Vec3::new(x, y, 0.9)))
    }

    fn solve_ik(&self, link: &str, target: &Pose, _timeout: Duration) -> Option<Vec<f64>> {
        if link != "tool0" {
            return None;
        }
        let p = target.position;
        let reach = (p.x * p.x + p.y * p.y).sqrt();
        if reach > 2.0 * LINK_LENGTH {
            return None;
        }
        // Two-segment planar solution on joints 1 and 4, elbow-up.
        let cos_q4 = (reach * reach) / (2.0 * LINK_LENGTH * LINK_LENGTH) - 1.0;
        let q4 = cos_q4.clamp(-1.0, 1.0).acos();
        let q1 = p.y.atan2(p.x) - (LINK_LENGTH * q4.sin()).atan2(LINK_LENGTH * (1.0 + q4.cos()));
        let mut out = self.default_positions();
        out[0] = q1;
        out[3] = q4;
        Some(out)
    }
}

/// Pipeline stand-in: resolves the goal to a joint target (preset table for
/// named targets, stub IK for pose targets) and emits a short interpolated
/// trajectory whose pacing honors the velocity scaling.
pub struct StubPipeline {
    model: StubKinematics,
    named_targets: BTreeMap<String, Vec<f64>>,
    waypoints: usize,
}

impl StubPipeline {
    pub fn new() -> Self {
        let mut named_targets = BTreeMap::new();
        named_targets.insert("home".to_string(), vec![0.0; JOINT_COUNT]);
        named_targets.insert(
            "pose1".to_string(),
            vec![0.0, 0.52, 0.0, -1.04, 0.0, 0.78, 0.0],
        );
        Self {
            model: StubKinematics::new(),
            named_targets,
            waypoints: 5,
        }
    }

    fn joint_target(&self, goal: &PlanGoal, params: &PlanParameters) -> Option<Vec<f64>> {
        match goal {
            PlanGoal::NamedTarget(name) => self.named_targets.get(name).cloned(),
            PlanGoal::PoseTarget { pose, tip_link } => {
                self.model
                    .solve_ik(tip_link, &pose.pose, params.planning_time)
            }
        }
    }
}

impl Default for StubPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanningPipeline for StubPipeline {
    fn pipeline_names(&self) -> Vec<String> {
        vec!["stub".to_string()]
    }

    fn plan(&mut self, goal: &PlanGoal, params: &PlanParameters) -> Option<PlanSolution> {
        let target = self.joint_target(goal, params)?;
        let start = self.model.default_positions();

        // Nominal 0.25 s per step at full speed, stretched by the scaling.
        let step = Duration::from_secs_f64(0.25 / params.max_velocity_scaling.max(1e-3));
        let points = (0..=self.waypoints)
            .map(|i| {
                let t = i as f64 / self.waypoints as f64;
                TrajectoryPoint {
                    positions: start
                        .iter()
                        .zip(&target)
                        .map(|(s, g)| s + (g - s) * t)
                        .collect(),
                    time_from_start: step * i as u32,
                }
            })
            .collect();

        Some(PlanSolution {
            trajectory: JointTrajectory {
                joint_names: self.model.joint_names().to_vec(),
                points,
            },
        })
    }
}

/// Scene stand-in that only logs what it is given.
#[derive(Default)]
pub struct LoggingScene;

impl PlanningScene for LoggingScene {
    fn add_collision_object(&mut self, object: CollisionObject) {
        info!(
            id = %object.id,
            frame = %object.frame_id,
            primitives = object.primitives.len(),
            "collision object added"
        );
    }
}
