use std::env;
use std::path::PathBuf;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "CHAT_EXPORT_PARSER_CONFIG";

const CONFIG_DIR_NAME: &str = "chat-export-parser";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Locate the config file: `$CHAT_EXPORT_PARSER_CONFIG`, else
/// `<config dir>/chat-export-parser/config.toml`.
///
/// Returns `None` when no config directory can be determined. The file itself
/// may not exist.
pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_ENV_VAR)
        && !explicit.trim().is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
