//! Scripted event files for driving the demo without a message bus.

use std::path::Path;

use anyhow::{Context, Result};
use arm_motion::{Event, PoseStamped};
use serde::Deserialize;

/// One scripted event, YAML-tagged by kind. `frame_id` may be omitted on
/// pose events; it then falls back to the configured base frame.
///
/// ```yaml
/// - frame: pose1
/// - pose:
///     frame_id: base_iiwa
///     pose:
///       position: { x: 0.3, y: 0.4, z: 0.9 }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptedEvent {
    Frame(String),
    Pose(PoseStamped),
}

impl ScriptedEvent {
    fn into_event(self, default_frame: &str) -> Event {
        match self {
            ScriptedEvent::Frame(frame) => Event::Frame(frame),
            ScriptedEvent::Pose(mut pose) => {
                if pose.frame_id.is_empty() {
                    pose.frame_id = default_frame.to_string();
                }
                Event::GoalPose(pose)
            }
        }
    }
}

pub fn load_events(path: &Path, default_frame: &str) -> Result<Vec<Event>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading events {}", path.display()))?;
    let scripted: Vec<ScriptedEvent> = serde_yaml::with::singleton_map_recursive::deserialize(
        serde_yaml::Deserializer::from_str(&raw),
    )
    .with_context(|| format!("parsing events {}", path.display()))?;
    Ok(scripted
        .into_iter()
        .map(|event| event.into_event(default_frame))
        .collect())
}
