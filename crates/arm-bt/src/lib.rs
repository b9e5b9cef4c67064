//! Behavior tree runtime built on `arm-core`.

#![forbid(unsafe_code)]

pub mod bt;
pub mod frame_empty;
pub mod nodes;
pub mod registry;

pub use bt::{BehaviorTree, BtNode, NodeResult, NodeStatus};
pub use frame_empty::{FrameEmptyCondition, FRAME_EMPTY_NODE_NAME};
// Defaults: reactive control flow nodes (abort-friendly).
//
// Memory variants are still available as `MemSelector` / `MemSequence` for
// cases where you explicitly want "resume running child without re-checking
// earlier conditions".
pub use nodes::{
    Condition, ReactiveSelector, ReactiveSequence, Selector as MemSelector, Sequence as MemSequence,
};
pub use nodes::{ReactiveSelector as Selector, ReactiveSequence as Sequence};
pub use registry::{
    register_builtin_nodes, NodeRegistry, PortDirection, PortSpec, RegistryError,
};
