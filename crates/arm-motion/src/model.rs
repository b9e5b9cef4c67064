use std::time::Duration;

use crate::geom::Pose;

/// External kinematic model of the robot (loaded and solved elsewhere).
pub trait KinematicModel {
    /// Root frame the model's transforms are expressed in.
    fn model_frame(&self) -> &str;

    fn joint_names(&self) -> &[String];

    fn default_positions(&self) -> Vec<f64>;

    /// Per-joint (lower, upper) position limits, in joint order.
    fn joint_limits(&self) -> Vec<(f64, f64)>;

    /// Forward kinematics: pose of `link` in the model frame, or `None` for
    /// an unknown link.
    fn frame_transform(&self, positions: &[f64], link: &str) -> Option<Pose>;

    /// Inverse kinematics for `link` against `target`, bounded by `timeout`.
    /// `None` means no solution was found in time.
    fn solve_ik(&self, link: &str, target: &Pose, timeout: Duration) -> Option<Vec<f64>>;
}
