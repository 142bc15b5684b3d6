//! Persistence of build sessions between host runs

pub mod session_store;

// Re-export the main store type
pub use session_store::SessionStore;
