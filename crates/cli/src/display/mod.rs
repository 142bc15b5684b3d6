pub mod formatter;
pub mod terminal_surface;

pub use formatter::{format_entry, format_issue, format_tooltip, status_icon};
pub use terminal_surface::TerminalSurface;
