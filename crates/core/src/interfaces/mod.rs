//! Collaborator interfaces consumed by the core
//!
//! The core never talks to a build tool, the file system metadata pipeline,
//! a running game instance or a widget toolkit directly. The host injects
//! implementations of these traits instead.

pub mod compiler;
pub mod file_copier;
pub mod log_viewer;
pub mod metadata_generator;
pub mod presentation;
pub mod reload_notifier;

pub use compiler::{BuildRequest, CompileOutcome, Compiler};
pub use file_copier::{CopyError, FileCopier};
pub use log_viewer::LogViewer;
pub use metadata_generator::MetadataGenerator;
pub use presentation::{PresentationSurface, StatusIcon, SummaryEntry};
pub use reload_notifier::ReloadNotifier;
