pub mod loader;
pub mod workspace;

pub use loader::{collaborators, load_config, load_config_from, open_panel, save_panel, session_store};
pub use workspace::{detect_config, find_project, find_solution};
