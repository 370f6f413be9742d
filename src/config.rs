use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Configuration loaded from prosemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProsemapConfig {
    #[serde(default)]
    pub analysis: Option<AnalysisConfig>,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Analysis tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Language tag passed along to the grammar matcher
    #[serde(default = "default_language")]
    pub language: String,

    /// Plain text shorter than this is not scored for readability
    #[serde(default = "default_min_readability_chars")]
    pub min_readability_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            min_readability_chars: default_min_readability_chars(),
        }
    }
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_min_readability_chars() -> usize {
    50
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
}

/// Cache the configuration
static CONFIG: OnceLock<ProsemapConfig> = OnceLock::new();

/// Pure function to parse config from TOML contents
fn parse_config(contents: &str) -> Result<ProsemapConfig, toml::de::Error> {
    toml::from_str::<ProsemapConfig>(contents)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<ProsemapConfig> {
    let contents = match std::fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Load configuration from prosemap.toml, searching the current
/// directory and its ancestors
pub fn load_config() -> ProsemapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ProsemapConfig::default();
        }
    };

    std::iter::successors(Some(current), |dir| {
        dir.parent().map(Path::to_path_buf)
    })
    .take(MAX_TRAVERSAL_DEPTH)
    .map(|dir| dir.join("prosemap.toml"))
    .find_map(|path| try_load_config_from_path(&path))
    .unwrap_or_default()
}

/// Get the cached configuration
pub fn get_config() -> &'static ProsemapConfig {
    CONFIG.get_or_init(load_config)
}

/// Get the language tag for matcher requests (default: en-US)
pub fn get_language() -> String {
    get_config()
        .analysis
        .as_ref()
        .map(|a| a.language.clone())
        .unwrap_or_else(default_language)
}

/// Get the minimum plain-text length for readability scoring (default: 50)
pub fn get_min_readability_chars() -> usize {
    get_config()
        .analysis
        .as_ref()
        .map(|a| a.min_readability_chars)
        .unwrap_or_else(default_min_readability_chars)
}

/// Get the configured default output format, if any
pub fn get_default_format() -> Option<String> {
    get_config()
        .output
        .as_ref()
        .and_then(|o| o.default_format.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [analysis]
            language = "en-GB"
            min_readability_chars = 100

            [output]
            default_format = "json"
            "#,
        )
        .unwrap();

        let analysis = config.analysis.unwrap();
        assert_eq!(analysis.language, "en-GB");
        assert_eq!(analysis.min_readability_chars, 100);
        assert_eq!(config.output.unwrap().default_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_partial_analysis_section_uses_field_defaults() {
        let config = parse_config("[analysis]\nlanguage = \"de-DE\"\n").unwrap();

        let analysis = config.analysis.unwrap();
        assert_eq!(analysis.language, "de-DE");
        assert_eq!(analysis.min_readability_chars, 50);
    }

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.analysis.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("not = [valid").is_err());
    }

    #[test]
    fn test_analysis_defaults() {
        let analysis = AnalysisConfig::default();
        assert_eq!(analysis.language, "en-US");
        assert_eq!(analysis.min_readability_chars, 50);
    }
}
