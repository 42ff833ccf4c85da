/// Gallery configuration
///
/// Every field has a default, so the optional config file only needs the
/// keys it wants to override:
/// - Linux: ~/.config/image-gallery/config.json
/// - macOS: ~/Library/Application Support/image-gallery/config.json
/// - Windows: %APPDATA%\image-gallery\config.json
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::state::columns::GridColumns;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// CDN root, without trailing slash
    pub cdn_base: String,
    /// Identifier of the first candidate
    pub base_offset: u32,
    /// Number of candidates
    pub candidate_count: usize,
    /// Items realized at startup
    pub initial_count: usize,
    /// Items added per growth
    pub batch_size: usize,
    /// Artificial latency before a growth is applied
    pub load_delay_ms: u64,
    /// Lookahead below the viewport for the sentinel
    pub sentinel_margin: f32,
    /// Offset past which the "Top" button shows
    pub scroll_top_threshold: f32,
    pub image_width: u32,
    pub image_height: u32,
    pub default_columns: GridColumns,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            cdn_base: "https://picsum.photos".to_string(),
            base_offset: 10,
            candidate_count: 100,
            initial_count: 20,
            batch_size: 20,
            load_delay_ms: 1000,
            sentinel_margin: 20.0,
            scroll_top_threshold: 400.0,
            image_width: 400,
            image_height: 300,
            default_columns: GridColumns::Four,
        }
    }
}

impl GalleryConfig {
    /// Load the config file if present, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Where the config file is looked up
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("image-gallery");
        path.push("config.json");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    fn sanitized(mut self) -> Self {
        self.batch_size = self.batch_size.max(1);
        self.initial_count = self.initial_count.min(self.candidate_count);
        self.cdn_base = self.cdn_base.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = GalleryConfig::from_json("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.load_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_override() {
        let config = GalleryConfig::from_json(
            r#"{ "batch_size": 10, "default_columns": 6, "cdn_base": "http://localhost:8080/" }"#,
        )
        .unwrap();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.default_columns, GridColumns::Six);
        assert_eq!(config.cdn_base, "http://localhost:8080");
        assert_eq!(config.candidate_count, 100);
    }

    #[test]
    fn test_invalid_columns_rejected() {
        let result = GalleryConfig::from_json(r#"{ "default_columns": 3 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_counts_are_clamped() {
        let config =
            GalleryConfig::from_json(r#"{ "batch_size": 0, "initial_count": 500 }"#).unwrap();
        assert_eq!(config.batch_size, 1);
        assert_eq!(config.initial_count, 100);
    }
}
