use std::sync::mpsc::Receiver;
use std::time::Duration;

use arm_core::DeterministicRng;
use tracing::{info, warn};

use crate::clock::ReplayClock;
use crate::geom::PoseStamped;
use crate::model::KinematicModel;
use crate::plan::{PlanGoal, PlanParameters, PlanningPipeline};
use crate::publish::Publisher;
use crate::ready::ReadyGate;
use crate::scene::{CollisionObject, PlanningScene};
use crate::trajectory::{DisplayState, JointTrajectory};

/// Events the driver services, one at a time, on the dispatch thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A named planning target.
    Frame(String),
    /// A goal pose for the tip link.
    GoalPose(PoseStamped),
}

/// Drives one plan-and-execute cycle per incoming event: request a single
/// plan with fixed parameters, replay the waypoints for display paced to
/// their scheduled times, then hand the full trajectory to the controller
/// topic. A failed plan is logged and skipped; there is no retry and no
/// cancellation of an in-flight replay.
pub struct MotionDriver {
    pipeline: Box<dyn PlanningPipeline + Send>,
    model: Box<dyn KinematicModel + Send>,
    clock: Box<dyn ReplayClock + Send>,
    display_publisher: Box<dyn Publisher<DisplayState> + Send>,
    trajectory_publisher: Box<dyn Publisher<JointTrajectory> + Send>,
    params: PlanParameters,
    tip_link: String,
}

impl MotionDriver {
    pub fn new(
        pipeline: Box<dyn PlanningPipeline + Send>,
        model: Box<dyn KinematicModel + Send>,
        clock: Box<dyn ReplayClock + Send>,
        display_publisher: Box<dyn Publisher<DisplayState> + Send>,
        trajectory_publisher: Box<dyn Publisher<JointTrajectory> + Send>,
        tip_link: impl Into<String>,
    ) -> Self {
        Self {
            pipeline,
            model,
            clock,
            display_publisher,
            trajectory_publisher,
            params: PlanParameters::default(),
            tip_link: tip_link.into(),
        }
    }

    pub fn with_parameters(mut self, params: PlanParameters) -> Self {
        self.params = params;
        self
    }

    pub fn on_frame(&mut self, frame: &str) {
        info!(frame, "frame received");
        self.execute(PlanGoal::NamedTarget(frame.to_string()));
    }

    pub fn on_pose(&mut self, pose: PoseStamped) {
        info!(
            x = pose.pose.position.x,
            y = pose.pose.position.y,
            z = pose.pose.position.z,
            frame = %pose.frame_id,
            "goal pose received"
        );
        let tip_link = self.tip_link.clone();
        self.execute(PlanGoal::PoseTarget { pose, tip_link });
    }

    /// Seed the configured obstacles into an external planning scene.
    pub fn setup_scene(&self, scene: &mut dyn PlanningScene, objects: Vec<CollisionObject>) {
        info!(count = objects.len(), "adding collision objects");
        for object in objects {
            scene.add_collision_object(object);
        }
    }

    /// One-shot kinematics exercise: draw random joint positions, take the
    /// tip pose from forward kinematics, and ask IK to recover joint values
    /// for it with a short budget. Purely informational, logs either way.
    pub fn probe_ik(&self, rng: &mut dyn DeterministicRng) {
        info!(frame = self.model.model_frame(), "model frame");

        let positions: Vec<f64> = self
            .model
            .joint_limits()
            .iter()
            .map(|&(lo, hi)| rng.next_f64_range(lo, hi))
            .collect();

        let Some(tip) = self.model.frame_transform(&positions, &self.tip_link) else {
            warn!(link = %self.tip_link, "tip link unknown to the model");
            return;
        };
        info!(
            x = tip.position.x,
            y = tip.position.y,
            z = tip.position.z,
            "tip translation"
        );

        match self
            .model
            .solve_ik(&self.tip_link, &tip, Duration::from_millis(100))
        {
            Some(solution) => {
                for (name, value) in self.model.joint_names().iter().zip(&solution) {
                    info!(joint = %name, value, "ik joint value");
                }
            }
            None => info!("did not find IK solution"),
        }
    }

    /// Wait for initialization, then service events until the channel closes.
    /// Replay blocks this thread for the duration of each trajectory.
    pub fn dispatch(&mut self, gate: &ReadyGate, events: Receiver<Event>) {
        if !gate.wait() {
            warn!("initialization abandoned, not servicing events");
            return;
        }
        for event in events {
            match event {
                Event::Frame(frame) => self.on_frame(&frame),
                Event::GoalPose(pose) => self.on_pose(pose),
            }
        }
    }

    fn execute(&mut self, goal: PlanGoal) {
        info!("plan to goal");

        let mut params = self.params.clone();
        if params.planning_pipeline.is_none() {
            params.planning_pipeline = self.pipeline.pipeline_names().into_iter().next();
        }

        let Some(solution) = self.pipeline.plan(&goal, &params) else {
            // Terminal for this request: log and skip, nothing to retry.
            warn!("no plan found, skipping execution");
            return;
        };

        self.replay(&solution.trajectory);

        info!(
            waypoints = solution.trajectory.len(),
            "sending the trajectory for execution"
        );
        self.trajectory_publisher.publish(solution.trajectory);
    }

    fn replay(&mut self, trajectory: &JointTrajectory) {
        let start = self.clock.elapsed();
        for point in &trajectory.points {
            self.clock.sleep_until(start + point.time_from_start);
            self.display_publisher.publish(DisplayState {
                joint_names: trajectory.joint_names.clone(),
                positions: point.positions.clone(),
            });
        }
    }
}
