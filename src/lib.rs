//! Workspace-level integration tests for buildpanel live in `tests/`.
//!
//! They drive `buildpanel-core` end-to-end with its `testing` doubles.

pub use buildpanel_core;
