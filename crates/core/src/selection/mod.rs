//! Summary list selection synchronization

pub mod controller;

pub use controller::{SelectionController, summary_entry, tooltip};
