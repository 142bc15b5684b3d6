//! Build orchestration: metadata preparation, compile and post-build notifications

pub mod orchestrator;

pub use orchestrator::{BuildOrchestrator, BuildReport, Collaborators, ProjectLayout};
