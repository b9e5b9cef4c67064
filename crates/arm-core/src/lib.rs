//! Kernel primitives for robot behavior control.

#![forbid(unsafe_code)]

pub mod blackboard;
pub mod rng;
pub mod tick;

pub use blackboard::{Blackboard, BlackboardError, Key};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
