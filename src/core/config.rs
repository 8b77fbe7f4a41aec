//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quill/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::language::{Language, LanguageList};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub responses: ResponsesConfig,
    #[serde(default)]
    pub languages: LanguagesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_path: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub debounce_ms: Option<u64>,
    pub suggestion_latency_ms: Option<u64>,
    pub rewrite_latency_ms: Option<u64>,
    pub translation_latency_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ResponsesConfig {
    pub suggestion: Option<String>,
    pub rewrite: Option<String>,
    pub translation: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LanguagesConfig {
    pub writing: Option<Vec<Language>>,
    pub translation: Option<Vec<Language>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_SUGGESTION_LATENCY_MS: u64 = 500;
pub const DEFAULT_REWRITE_LATENCY_MS: u64 = 800;
pub const DEFAULT_TRANSLATION_LATENCY_MS: u64 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

pub const DEFAULT_SUGGESTION: &str = "This is a suggestion for your input.";
pub const DEFAULT_REWRITE: &str = "This is a rewritten version of your input.";
pub const DEFAULT_TRANSLATION: &str = "This is the translated text.";
pub const DEFAULT_EXPLANATION: &str =
    "Here's an explanation of the translation and any corrections made.";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Canned responses returned by the simulated operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responses {
    pub suggestion: String,
    pub rewrite: String,
    pub translation: String,
    pub explanation: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_path: String,
    pub log_level: String,
    pub debounce: Duration,
    pub suggestion_latency: Duration,
    pub rewrite_latency: Duration,
    pub translation_latency: Duration,
    pub responses: Responses,
    pub writing_languages: LanguageList,
    pub translation_languages: LanguageList,
}

impl ResolvedConfig {
    /// The configured log level, or `None` if it is not a level name.
    pub fn log_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub path: Option<String>,
    pub debounce_ms: Option<u64>,
    pub log_level: Option<String>,
}

/// Values taken from `QUILL_*` environment variables. `None` = not set.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub start_path: Option<String>,
    pub debounce_ms: Option<u64>,
}

impl EnvOverrides {
    /// Reads `QUILL_START_PATH` and `QUILL_DEBOUNCE_MS`. An unparsable
    /// debounce value counts as unset.
    pub fn from_env() -> Self {
        Self {
            start_path: std::env::var("QUILL_START_PATH").ok(),
            debounce_ms: std::env::var("QUILL_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
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

/// Returns the path to `~/.quill/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quill").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise `~/.quill/config.toml`.
///
/// A missing default file is generated (commented out) and yields
/// `QuillConfig::default()`. A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<QuillConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(QuillConfig::default());
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuillConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<QuillConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Quill Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_path = "/"                   # Or set QUILL_START_PATH env var
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"

# [timing]
# debounce_ms = 300                  # Or set QUILL_DEBOUNCE_MS env var
# suggestion_latency_ms = 500
# rewrite_latency_ms = 800
# translation_latency_ms = 1000

# [responses]
# suggestion = "This is a suggestion for your input."
# rewrite = "This is a rewritten version of your input."
# translation = "This is the translated text."
# explanation = "Here's an explanation of the translation and any corrections made."

# [languages]
# writing = ["English", "Spanish", "French", "German", "Italian"]
# translation = ["English", "Spanish", "French", "German", "Italian", "Chinese", "Japanese"]
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuillConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    // Start path: CLI → env → config → default
    let start_path = cli
        .path
        .clone()
        .or_else(|| env.start_path.clone())
        .or_else(|| config.general.start_path.clone())
        .unwrap_or_else(|| "/".to_string());

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Debounce: CLI → env → config → default
    let debounce_ms = cli
        .debounce_ms
        .or(env.debounce_ms)
        .or(config.timing.debounce_ms)
        .unwrap_or(DEFAULT_DEBOUNCE_MS);

    let responses = Responses {
        suggestion: config
            .responses
            .suggestion
            .clone()
            .unwrap_or_else(|| DEFAULT_SUGGESTION.to_string()),
        rewrite: config
            .responses
            .rewrite
            .clone()
            .unwrap_or_else(|| DEFAULT_REWRITE.to_string()),
        translation: config
            .responses
            .translation
            .clone()
            .unwrap_or_else(|| DEFAULT_TRANSLATION.to_string()),
        explanation: config
            .responses
            .explanation
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string()),
    };

    ResolvedConfig {
        start_path,
        log_level,
        debounce: Duration::from_millis(debounce_ms),
        suggestion_latency: Duration::from_millis(
            config
                .timing
                .suggestion_latency_ms
                .unwrap_or(DEFAULT_SUGGESTION_LATENCY_MS),
        ),
        rewrite_latency: Duration::from_millis(
            config
                .timing
                .rewrite_latency_ms
                .unwrap_or(DEFAULT_REWRITE_LATENCY_MS),
        ),
        translation_latency: Duration::from_millis(
            config
                .timing
                .translation_latency_ms
                .unwrap_or(DEFAULT_TRANSLATION_LATENCY_MS),
        ),
        responses,
        writing_languages: resolve_languages(
            "writing",
            config.languages.writing.as_deref(),
            LanguageList::writing,
        ),
        translation_languages: resolve_languages(
            "translation",
            config.languages.translation.as_deref(),
            LanguageList::translation,
        ),
    }
}

/// Uses the configured list when it has at least one entry.
fn resolve_languages(
    which: &str,
    configured: Option<&[Language]>,
    fallback: fn() -> LanguageList,
) -> LanguageList {
    match configured {
        Some(langs) => LanguageList::new(langs.iter().copied()).unwrap_or_else(|| {
            warn!("Configured {} language list is empty, using defaults", which);
            fallback()
        }),
        None => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = QuillConfig::default();
        assert!(config.general.start_path.is_none());
        assert!(config.languages.writing.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(
            &QuillConfig::default(),
            &EnvOverrides::default(),
            &CliOverrides::default(),
        );
        assert_eq!(resolved.suggestion_latency, Duration::from_millis(500));
        assert_eq!(resolved.rewrite_latency, Duration::from_millis(800));
        assert_eq!(resolved.translation_latency, Duration::from_millis(1000));
        assert_eq!(resolved.responses.suggestion, DEFAULT_SUGGESTION);
        assert_eq!(resolved.writing_languages, LanguageList::writing());
        assert_eq!(resolved.translation_languages, LanguageList::translation());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = QuillConfig {
            timing: TimingConfig {
                rewrite_latency_ms: Some(50),
                ..Default::default()
            },
            responses: ResponsesConfig {
                rewrite: Some("Rewritten.".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &EnvOverrides::default(), &CliOverrides::default());
        assert_eq!(resolved.rewrite_latency, Duration::from_millis(50));
        assert_eq!(resolved.responses.rewrite, "Rewritten.");
        assert_eq!(resolved.responses.translation, DEFAULT_TRANSLATION);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = QuillConfig {
            general: GeneralConfig {
                start_path: Some("/from-config".to_string()),
                log_level: Some("info".to_string()),
            },
            timing: TimingConfig {
                debounce_ms: Some(1000),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            path: Some("/from-cli".to_string()),
            debounce_ms: Some(10),
            log_level: Some("trace".to_string()),
        };
        let resolved = resolve(&config, &EnvOverrides::default(), &cli);
        assert_eq!(resolved.start_path, "/from-cli");
        assert_eq!(resolved.debounce, Duration::from_millis(10));
        assert_eq!(resolved.log_level, "trace");
    }

    #[test]
    fn test_log_filter_rejects_unknown_levels() {
        let cli = |level: &str| CliOverrides {
            log_level: Some(level.to_string()),
            ..Default::default()
        };
        let config = QuillConfig::default();
        let env = EnvOverrides::default();

        assert_eq!(
            resolve(&config, &env, &cli("INFO")).log_filter(),
            Some(log::LevelFilter::Info)
        );
        assert_eq!(
            resolve(&config, &env, &cli("trace")).log_filter(),
            Some(log::LevelFilter::Trace)
        );
        assert_eq!(resolve(&config, &env, &cli("verbose")).log_filter(), None);
    }

    #[test]
    fn test_resolve_env_sits_between_file_and_cli() {
        let config = QuillConfig {
            general: GeneralConfig {
                start_path: Some("/from-config".to_string()),
                log_level: None,
            },
            timing: TimingConfig {
                debounce_ms: Some(1000),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = EnvOverrides {
            start_path: Some("/from-env".to_string()),
            debounce_ms: Some(5),
        };

        let resolved = resolve(&config, &env, &CliOverrides::default());
        assert_eq!(resolved.start_path, "/from-env");
        assert_eq!(resolved.debounce, Duration::from_millis(5));

        let cli = CliOverrides {
            debounce_ms: Some(20),
            ..Default::default()
        };
        let resolved = resolve(&config, &env, &cli);
        assert_eq!(resolved.start_path, "/from-env");
        assert_eq!(resolved.debounce, Duration::from_millis(20));

        // Without env values the file applies, whatever the process has set
        let resolved = resolve(&config, &EnvOverrides::default(), &CliOverrides::default());
        assert_eq!(resolved.start_path, "/from-config");
        assert_eq!(resolved.debounce, Duration::from_millis(1000));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
start_path = "/"
log_level = "info"

[timing]
debounce_ms = 250
translation_latency_ms = 1500

[responses]
explanation = "Nothing changed."

[languages]
writing = ["English", "German"]
translation = ["English", "Chinese", "Japanese"]
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.timing.debounce_ms, Some(250));
        assert_eq!(config.timing.translation_latency_ms, Some(1500));
        assert_eq!(
            config.languages.writing,
            Some(vec![Language::English, Language::German])
        );
        assert_eq!(config.responses.explanation.as_deref(), Some("Nothing changed."));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[timing]
suggestion_latency_ms = 10
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.timing.suggestion_latency_ms, Some(10));
        assert!(config.timing.debounce_ms.is_none());
        assert!(config.responses.suggestion.is_none());
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let result = parse_config("[languages]\nwriting = [\"Klingon\"]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_language_list_falls_back() {
        let config = QuillConfig {
            languages: LanguagesConfig {
                writing: Some(Vec::new()),
                translation: Some(vec![Language::Japanese, Language::English]),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &EnvOverrides::default(), &CliOverrides::default());
        assert_eq!(resolved.writing_languages, LanguageList::writing());
        assert_eq!(
            resolved.translation_languages.as_slice(),
            &[Language::Japanese, Language::English]
        );
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let result = load_config(Some(Path::new("/nonexistent/quill/config.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
