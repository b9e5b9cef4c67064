use arm_core::{Blackboard, BlackboardError, TickContext};
use tracing::debug;

use crate::bt::{BtNode, NodeResult, NodeStatus};
use crate::registry::PortSpec;

/// Registration name for [`FrameEmptyCondition`].
pub const FRAME_EMPTY_NODE_NAME: &str = "FrameEmpty";

/// Condition reporting whether a named frame is considered empty.
///
/// Reads the `check_frame` input, looks up the boolean stored under that
/// frame name, and succeeds when it is true, publishing the frame name to
/// `empty_frame`. Stateless: every evaluation is an independent read.
///
/// The `frame` input is declared and fetched but the lookup is driven by
/// `check_frame`. The two ports look swapped in the tree definitions this
/// node ships with; kept as-is so existing trees keep their meaning.
#[derive(Debug, Default)]
pub struct FrameEmptyCondition;

impl FrameEmptyCondition {
    pub fn new() -> Self {
        Self
    }

    pub fn provided_ports() -> Vec<PortSpec> {
        vec![
            PortSpec::input::<String>("frame", "Which frame to check if empty"),
            PortSpec::input::<String>("check_frame", "Frame name whose empty flag is consulted"),
            PortSpec::output::<String>("empty_frame", "Which frame found to be empty"),
        ]
    }

    fn is_frame_empty(&self, blackboard: &mut Blackboard) -> Result<bool, BlackboardError> {
        let _frame = blackboard.get_by_name::<String>("frame").ok();
        let check_frame = blackboard.get_by_name::<String>("check_frame")?.clone();
        let empty = *blackboard.get_by_name::<bool>(&check_frame)?;

        if empty {
            blackboard.set_by_name("empty_frame", check_frame.clone())?;
            debug!(frame = %check_frame, "frame is empty");
        }
        Ok(empty)
    }
}

impl BtNode for FrameEmptyCondition {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut Blackboard) -> NodeResult {
        if self.is_frame_empty(blackboard)? {
            Ok(NodeStatus::Success)
        } else {
            Ok(NodeStatus::Failure)
        }
    }
}
