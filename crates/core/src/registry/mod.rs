//! Ordered storage of build sessions keyed by build identity

pub mod session_registry;

// Re-export the main registry type
pub use session_registry::SessionRegistry;
