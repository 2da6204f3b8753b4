//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.postview/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::DisplayZone;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostviewConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Post file to show when none is given on the command line.
    pub post_file: Option<String>,
    pub timezone: Option<DisplayZone>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "postview.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` shows the built-in demo post.
    pub post_file: Option<PathBuf>,
    pub timezone: DisplayZone,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub post_file: Option<PathBuf>,
    pub timezone: Option<DisplayZone>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.postview/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".postview").join("config.toml"))
}

/// Load config from `~/.postview/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PostviewConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PostviewConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PostviewConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PostviewConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<PostviewConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PostviewConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Postview Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# post_file = "/home/me/posts/launch.toml"   # Or set POSTVIEW_POST_FILE
# timezone = "local"                          # "local" or "utc"

# [logging]
# file = "postview.log"
# level = "debug"                             # "error", "warn", "info", "debug", "trace", "off"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PostviewConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &PostviewConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Post file: CLI → env → config → demo
    let post_file = cli
        .post_file
        .clone()
        .or_else(|| env("POSTVIEW_POST_FILE").map(PathBuf::from))
        .or_else(|| config.general.post_file.as_ref().map(PathBuf::from));

    // Timezone: CLI → env → config → local
    let timezone = cli
        .timezone
        .or_else(|| env("POSTVIEW_TIMEZONE").and_then(|v| parse_zone(&v)))
        .or(config.general.timezone)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = env("POSTVIEW_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|v| match v.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Ignoring unknown log level {:?}", v);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        post_file,
        timezone,
        log_file,
        log_level,
    }
}

fn parse_zone(value: &str) -> Option<DisplayZone> {
    match value.trim().to_ascii_lowercase().as_str() {
        "local" => Some(DisplayZone::Local),
        "utc" => Some(DisplayZone::Utc),
        other => {
            warn!("Ignoring unknown POSTVIEW_TIMEZONE {:?}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PostviewConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.post_file, None);
        assert_eq!(resolved.timezone, DisplayZone::Local);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PostviewConfig {
            general: GeneralConfig {
                post_file: Some("post.toml".to_string()),
                timezone: Some(DisplayZone::Utc),
            },
            logging: LoggingConfig {
                file: Some("/tmp/pv.log".to_string()),
                level: Some("warn".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.post_file, Some(PathBuf::from("post.toml")));
        assert_eq!(resolved.timezone, DisplayZone::Utc);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/pv.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_env_overrides_config() {
        let config = PostviewConfig {
            general: GeneralConfig {
                post_file: Some("from-config.toml".to_string()),
                timezone: Some(DisplayZone::Local),
            },
            ..Default::default()
        };
        let env = env_of(&[
            ("POSTVIEW_POST_FILE", "from-env.toml"),
            ("POSTVIEW_TIMEZONE", "UTC"),
            ("POSTVIEW_LOG_LEVEL", "info"),
        ]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.post_file, Some(PathBuf::from("from-env.toml")));
        assert_eq!(resolved.timezone, DisplayZone::Utc);
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_cli_wins() {
        let env = env_of(&[("POSTVIEW_POST_FILE", "from-env.toml"), ("POSTVIEW_TIMEZONE", "utc")]);
        let cli = CliOverrides {
            post_file: Some(PathBuf::from("from-cli.toml")),
            timezone: Some(DisplayZone::Local),
            log_file: Some(PathBuf::from("cli.log")),
        };
        let resolved = resolve_with_env(&PostviewConfig::default(), &cli, env);
        assert_eq!(resolved.post_file, Some(PathBuf::from("from-cli.toml")));
        assert_eq!(resolved.timezone, DisplayZone::Local);
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
    }

    #[test]
    fn test_bad_env_values_fall_through() {
        let config = PostviewConfig {
            general: GeneralConfig {
                timezone: Some(DisplayZone::Utc),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = env_of(&[("POSTVIEW_TIMEZONE", "mars"), ("POSTVIEW_LOG_LEVEL", "loud")]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.timezone, DisplayZone::Utc);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
timezone = "utc"
"#;
        let config: PostviewConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.timezone, Some(DisplayZone::Utc));
        assert!(config.general.post_file.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("postview-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ntimezone = 3").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
