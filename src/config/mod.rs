//! User configuration.
//!
//! Settings are resolved with the precedence CLI flag > config file > built-in
//! default. The config file is optional TOML:
//!
//! ```toml
//! self_aliases = ["Tú", "Jane Doe"]
//! date_order = "day-first"
//! placeholder_name = "Imported Chat"
//! width = 100
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parsers::{AliasSelfDetector, DEFAULT_PLACEHOLDER_NAME, DateOrder, ParseOptions};
use crate::render::DEFAULT_WIDTH;
use crate::utils::get_config_path;

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub self_aliases: Vec<String>,
    pub date_order: Option<DateOrder>,
    pub placeholder_name: Option<String>,
    pub width: Option<usize>,
}

impl FileConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config file")
    }
}

/// Load the config file.
///
/// An explicit path must exist. Without one, the default location is used if
/// present and an empty config otherwise.
pub fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit_path {
        Some(p) => {
            if !p.exists() {
                bail!("Config file not found: {}", p.display());
            }
            Some(p.to_path_buf())
        }
        None => get_config_path().filter(|p| p.exists()),
    };

    let Some(path) = path else {
        debug!("no config file, using defaults");
        return Ok(FileConfig::default());
    };

    debug!(path = %path.display(), "loading config file");
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    FileConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Values given on the command line, which win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub self_aliases: Vec<String>,
    pub date_order: Option<DateOrder>,
    pub placeholder_name: Option<String>,
    pub width: Option<usize>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub self_aliases: Vec<String>,
    pub date_order: DateOrder,
    pub placeholder_name: String,
    pub width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), Overrides::default())
    }
}

impl Settings {
    /// Merge file values with CLI overrides. Aliases from both sources are kept.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let mut self_aliases = file.self_aliases;
        self_aliases.extend(overrides.self_aliases);

        Self {
            self_aliases,
            date_order: overrides.date_order.or(file.date_order).unwrap_or_default(),
            placeholder_name: overrides
                .placeholder_name
                .or(file.placeholder_name)
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_NAME.to_string()),
            width: overrides.width.or(file.width).unwrap_or(DEFAULT_WIDTH),
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_date_order(self.date_order)
            .with_placeholder_name(self.placeholder_name.clone())
            .with_self_detector(AliasSelfDetector::new(&self.self_aliases))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::parsers::SelfDetector;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_toml(
            r#"
self_aliases = ["Tú", "Jane Doe"]
date_order = "day-first"
placeholder_name = "Notes"
width = 100
"#,
        )
        .unwrap();

        assert_eq!(config.self_aliases, vec!["Tú", "Jane Doe"]);
        assert_eq!(config.date_order, Some(DateOrder::DayFirst));
        assert_eq!(config.placeholder_name.as_deref(), Some("Notes"));
        assert_eq!(config.width, Some(100));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(FileConfig::from_toml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(FileConfig::from_toml("colour = \"green\"").is_err());
        assert!(FileConfig::from_toml("date_order = \"sideways\"").is_err());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = load_file_config(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"date_order = \"auto\"\n").unwrap();
        file.flush().unwrap();

        let config = load_file_config(Some(file.path())).unwrap();
        assert_eq!(config.date_order, Some(DateOrder::Auto));
    }

    #[test]
    fn test_load_invalid_file_mentions_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"width = \"wide\"\n").unwrap();
        file.flush().unwrap();

        let err = load_file_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_resolve_precedence() {
        let file = FileConfig {
            self_aliases: vec!["Tú".to_string()],
            date_order: Some(DateOrder::DayFirst),
            placeholder_name: Some("From file".to_string()),
            width: Some(100),
        };
        let overrides = Overrides {
            self_aliases: vec!["Jane".to_string()],
            date_order: Some(DateOrder::Auto),
            placeholder_name: None,
            width: None,
        };

        let settings = Settings::resolve(file, overrides);
        assert_eq!(settings.self_aliases, vec!["Tú", "Jane"]);
        assert_eq!(settings.date_order, DateOrder::Auto);
        assert_eq!(settings.placeholder_name, "From file");
        assert_eq!(settings.width, 100);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.self_aliases.is_empty());
        assert_eq!(settings.date_order, DateOrder::MonthFirst);
        assert_eq!(settings.placeholder_name, DEFAULT_PLACEHOLDER_NAME);
        assert_eq!(settings.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_parse_options_use_aliases() {
        let settings = Settings::resolve(
            FileConfig { self_aliases: vec!["Jane".to_string()], ..FileConfig::default() },
            Overrides::default(),
        );
        let options = settings.parse_options();
        assert!(options.self_detector.is_self("jane"));
        assert!(options.self_detector.is_self("You"));
        assert!(!options.self_detector.is_self("Alice"));
    }
}
