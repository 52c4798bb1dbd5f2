pub mod environment;
pub mod input;
pub mod paths;

pub use environment::get_config_path;
pub use input::{read_export, validate_file_size};
pub use paths::{STDIN_PATH, discover_exports, format_path_with_tilde};
