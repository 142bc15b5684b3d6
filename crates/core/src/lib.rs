//! buildpanel - build session tracking for an editor's builds panel
//!
//! This crate provides functionality to:
//! - Run solution builds through an injected compiler and record each one as a session
//! - Keep sessions ordered most-recently-built first, one per solution and configuration
//! - Keep the summary list selection and the detail view in step
//! - Filter a session's warnings and errors and open its build log
pub mod build;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod interfaces;
pub mod panel;
pub mod registry;
pub mod selection;
pub mod services;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use build::{BuildOrchestrator, BuildReport, Collaborators, ProjectLayout};
pub use cache::SessionStore;
pub use config::PanelConfig;
pub use filter::IssueFilter;
pub use panel::BuildPanel;
pub use registry::SessionRegistry;
pub use selection::SelectionController;
