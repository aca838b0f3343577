use serde::Deserialize;
use std::path::Path;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid threshold range: {min}..={max}")]
    ThresholdRange { min: f64, max: f64 },
}

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Contrast threshold used when a request doesn't carry one
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,

    /// Lowest threshold the threshold control accepts
    #[serde(default = "default_min_threshold")]
    pub min_threshold: f64,

    /// Highest threshold the threshold control accepts
    #[serde(default = "default_max_threshold")]
    pub max_threshold: f64,

    /// Label colors to choose from when drawing text on a swatch
    #[serde(default = "default_readable_candidates")]
    pub readable_candidates: Vec<String>,

    /// Prefix for shareable links
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_threshold() -> f64 {
    4.5 // WCAG AA, normal text
}

fn default_min_threshold() -> f64 {
    1.0
}

fn default_max_threshold() -> f64 {
    21.0
}

fn default_readable_candidates() -> Vec<String> {
    vec!["#ffffff".to_string(), "#000000".to_string()]
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        if config.min_threshold > config.max_threshold {
            return Err(ConfigError::ThresholdRange {
                min: config.min_threshold,
                max: config.max_threshold,
            });
        }
        Ok(config)
    }

    /// Read configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load configuration from an optional file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    default_threshold = config.default_threshold,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve a requested threshold against the configured range
    pub fn threshold(&self, requested: Option<f64>) -> f64 {
        match requested {
            Some(t) if t.is_finite() => t.clamp(self.min_threshold, self.max_threshold),
            _ => self.default_threshold,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            min_threshold: default_min_threshold(),
            max_threshold: default_max_threshold(),
            readable_candidates: default_readable_candidates(),
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.default_threshold, 4.5);
        assert_eq!(config.min_threshold, 1.0);
        assert_eq!(config.max_threshold, 21.0);
        assert_eq!(config.readable_candidates, vec!["#ffffff", "#000000"]);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = AppConfig::from_yaml("default_threshold: 7.0\n").unwrap();

        assert_eq!(config.default_threshold, 7.0);
        assert_eq!(config.max_threshold, 21.0);
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = AppConfig::from_yaml("min_threshold: 10\nmax_threshold: 2\n");
        assert!(matches!(result, Err(ConfigError::ThresholdRange { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: https://grid.example").unwrap();
        writeln!(file, "readable_candidates: ['#fafafa', '#111111']").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.base_url, "https://grid.example");
        assert_eq!(config.readable_candidates, vec!["#fafafa", "#111111"]);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_threshold_clamped_to_range() {
        let config = AppConfig::default();

        assert_eq!(config.threshold(None), 4.5);
        assert_eq!(config.threshold(Some(3.0)), 3.0);
        assert_eq!(config.threshold(Some(0.2)), 1.0);
        assert_eq!(config.threshold(Some(99.0)), 21.0);
        assert_eq!(config.threshold(Some(f64::NAN)), 4.5);
    }
}
