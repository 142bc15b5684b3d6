pub mod file;
pub mod parser;

pub use file::{find_files_with_extension, read_lossy};
pub use parser::{parse_build_output, parse_diagnostic_line};
