pub mod build;
pub mod init;
pub mod log;
pub mod sessions;

pub use build::build_command;
pub use init::init_command;
pub use log::log_command;
pub use sessions::sessions_command;
