//! Demo wiring: configuration, scripted events, and stub collaborators for
//! the plan-and-execute driver.

#![forbid(unsafe_code)]

pub mod config;
pub mod events;
pub mod stubs;

pub use config::{DemoConfig, PlanningConfig};
pub use events::{load_events, ScriptedEvent};
pub use stubs::{LoggingScene, StubKinematics, StubPipeline};
