//! Plan-and-execute demo glue over an external planning pipeline.
//!
//! Model loading, IK solving, plan computation, and trajectory transport are
//! external collaborators behind the traits in [`model`], [`plan`],
//! [`scene`], and [`publish`]; this crate only sequences them.

#![forbid(unsafe_code)]

pub mod clock;
pub mod driver;
pub mod geom;
pub mod model;
pub mod plan;
pub mod publish;
pub mod ready;
pub mod scene;
pub mod trajectory;

pub use clock::{ManualClock, ReplayClock, SystemClock};
pub use driver::{Event, MotionDriver};
pub use geom::{Pose, PoseStamped, Quat, Vec3};
pub use model::KinematicModel;
pub use plan::{PlanGoal, PlanParameters, PlanSolution, PlanningPipeline};
pub use publish::{ChannelPublisher, Publisher};
pub use ready::{readiness, ReadyGate, ReadySignal};
pub use scene::{demo_collision_object, BoxPrimitive, CollisionObject, PlanningScene};
pub use trajectory::{DisplayState, JointTrajectory, TrajectoryPoint};
