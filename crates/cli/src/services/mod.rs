//! Terminal-host implementations of the core's collaborator interfaces

pub mod log_viewer;
pub mod process_compiler;
pub mod reload_notifier;
pub mod scripts_metadata;

pub use log_viewer::{PrintLogViewer, SystemLogViewer};
pub use process_compiler::ProcessCompiler;
pub use reload_notifier::SignalFileNotifier;
pub use scripts_metadata::ScriptsMetadataGenerator;
