use serde::Deserialize;
use std::path::Path;

use crate::report::TITLE;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    /// Banner width in columns
    #[serde(default = "default_width")]
    pub width: usize,
    /// Append a generation timestamp to the report
    #[serde(default)]
    pub timestamp: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            width: default_width(),
            timestamp: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogConfig {
    /// Emit logs as JSON lines
    #[serde(default)]
    pub json: bool,
}

/// The centered title must fit inside the banner
const MIN_WIDTH: usize = TITLE.len();

// Default value functions
fn default_width() -> usize { 80 }

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config '{}': {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.report.width < MIN_WIDTH {
            anyhow::bail!(
                "report.width must be at least {} (got {})",
                MIN_WIDTH,
                self.report.width
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.report.format, ReportFormat::Text);
        assert_eq!(config.report.width, 80);
        assert!(!config.report.timestamp);
        assert!(!config.log.json);
    }

    #[test]
    fn test_parse_sections() {
        let config: Config = toml::from_str(
            "[report]\nformat = \"json\"\nwidth = 100\ntimestamp = true\n\n[log]\njson = true\n",
        )
        .unwrap();
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.width, 100);
        assert!(config.report.timestamp);
        assert!(config.log.json);
    }

    #[test]
    fn test_load_rejects_narrow_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defi-risk-score.toml");

        // Narrower than the 44-column title
        std::fs::write(&path, "[report]\nwidth = 43\n").unwrap();
        let err = Config::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("report.width"));

        std::fs::write(&path, "[report]\nwidth = 44\n").unwrap();
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.report.width, TITLE.len());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = Config::load_or_default("/nonexistent/defi-risk-score.toml").unwrap();
        assert_eq!(config.report.width, 80);
        assert!(Config::load("/nonexistent/defi-risk-score.toml").is_err());
    }
}
