use serde::{Deserialize, Serialize};

use crate::geom::{Pose, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxPrimitive {
    pub dimensions: [f64; 3],
}

/// An obstacle to add to the planning scene, expressed in `frame_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionObject {
    pub frame_id: String,
    pub id: String,
    pub primitives: Vec<(BoxPrimitive, Pose)>,
}

/// External planning scene. Collision checking is the implementor's concern.
pub trait PlanningScene {
    fn add_collision_object(&mut self, object: CollisionObject);
}

/// The obstacle the demo seeds so planning isn't trivially straight-line:
/// two thin boxes forming an L at roughly shoulder height.
pub fn demo_collision_object() -> CollisionObject {
    CollisionObject {
        frame_id: "base_footprint".to_string(),
        id: "box".to_string(),
        primitives: vec![
            (
                BoxPrimitive {
                    dimensions: [0.05, 0.3, 0.1],
                },
                Pose::from_position(Vec3::new(-0.05, 0.0, 1.0)),
            ),
            (
                BoxPrimitive {
                    dimensions: [0.3, 0.05, 0.1],
                },
                Pose::from_position(Vec3::new(0.0, 0.15, 1.0)),
            ),
        ],
    }
}
