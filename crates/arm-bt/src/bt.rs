use arm_core::{Blackboard, BlackboardError, TickContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Running,
    Success,
    Failure,
}

/// Outcome of a single node evaluation. A `BlackboardError` is a typed
/// failure distinct from `NodeStatus::Failure`: it aborts the whole tick
/// instead of letting composites fall through to a sibling.
pub type NodeResult = Result<NodeStatus, BlackboardError>;

pub trait BtNode: 'static {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> NodeResult;

    fn reset(&mut self) {}
}

/// A root node plus the blackboard its subtree shares.
///
/// The blackboard lives as long as the tree; completed ticks reset the root
/// so the next tick starts from a clean control-flow state.
pub struct BehaviorTree {
    root: Box<dyn BtNode>,
    pub blackboard: Blackboard,
    last: NodeStatus,
}

impl BehaviorTree {
    pub fn new(root: Box<dyn BtNode>) -> Self {
        Self {
            root,
            blackboard: Blackboard::new(),
            last: NodeStatus::Running,
        }
    }

    pub fn last_status(&self) -> NodeStatus {
        self.last
    }

    pub fn tick(&mut self, ctx: &TickContext) -> NodeResult {
        let status = self.root.tick(ctx, &mut self.blackboard)?;
        self.last = status;
        if status != NodeStatus::Running {
            self.root.reset();
        }
        Ok(status)
    }
}
