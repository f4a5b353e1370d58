//! Storyboard configuration.
//!
//! Every section is optional in TOML; missing values take the defaults of
//! the component they configure.
//!
//! ```toml
//! scene_duration_secs = 6
//!
//! [segmenter]
//! fallback_threshold = 300
//!
//! [keywords]
//! max_keywords = 8
//!
//! [matcher]
//! limit = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::MatchConfig;
use crate::error::{ReelscriptError, Result};
use crate::segment::{KeywordConfig, SegmenterConfig};

/// Default on-screen time for a new scene.
pub const DEFAULT_SCENE_DURATION_SECS: u32 = 5;

/// Configuration for the whole script-to-storyboard pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryboardConfig {
    pub segmenter: SegmenterConfig,
    pub keywords: KeywordConfig,
    pub matcher: MatchConfig,
    pub scene_duration_secs: u32,
}

impl Default for StoryboardConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::default(),
            keywords: KeywordConfig::default(),
            matcher: MatchConfig::default(),
            scene_duration_secs: DEFAULT_SCENE_DURATION_SECS,
        }
    }
}

impl StoryboardConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidConfig` if the document does not parse
    /// or fails [`validate`](Self::validate).
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| ReelscriptError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidConfig` if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| {
            ReelscriptError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&input)
    }

    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidConfig` for a zero scene duration.
    pub fn validate(&self) -> Result<()> {
        if self.scene_duration_secs == 0 {
            return Err(ReelscriptError::InvalidConfig(
                "scene_duration_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Set the sentence-split fallback threshold.
    pub fn with_fallback_threshold(mut self, threshold: usize) -> Self {
        self.segmenter.fallback_threshold = threshold;
        self
    }

    /// Set the keyword cap.
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.keywords.max_keywords = max_keywords;
        self
    }

    /// Set the matched-visual cap.
    pub fn with_match_limit(mut self, limit: usize) -> Self {
        self.matcher.limit = limit;
        self
    }

    /// Set the default scene duration.
    pub fn with_scene_duration(mut self, secs: u32) -> Self {
        self.scene_duration_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StoryboardConfig::default();
        assert_eq!(config.segmenter.fallback_threshold, 200);
        assert_eq!(config.keywords.min_len, 3);
        assert_eq!(config.keywords.max_keywords, 5);
        assert_eq!(config.matcher.limit, 6);
        assert_eq!(config.scene_duration_secs, 5);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = StoryboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoryboardConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = StoryboardConfig::from_toml_str(
            "scene_duration_secs = 6\n[keywords]\nmax_keywords = 8\n[matcher]\nlimit = 4\n",
        )
        .unwrap();
        assert_eq!(config.scene_duration_secs, 6);
        assert_eq!(config.keywords.max_keywords, 8);
        assert_eq!(config.keywords.min_len, 3);
        assert_eq!(config.matcher.limit, 4);
        assert_eq!(config.segmenter.fallback_threshold, 200);
    }

    #[test]
    fn bad_toml_is_invalid_config() {
        assert!(matches!(
            StoryboardConfig::from_toml_str("[matcher]\nlimit = \"six\""),
            Err(ReelscriptError::InvalidConfig(_))
        ));
        assert!(matches!(
            StoryboardConfig::from_toml_str("scene_duration_secs = 0"),
            Err(ReelscriptError::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_file_is_invalid_config() {
        let err = StoryboardConfig::from_toml_file("/nonexistent/reelscript.toml").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn builders() {
        let config = StoryboardConfig::new()
            .with_fallback_threshold(50)
            .with_max_keywords(3)
            .with_match_limit(2)
            .with_scene_duration(8);
        assert_eq!(config.segmenter.fallback_threshold, 50);
        assert_eq!(config.keywords.max_keywords, 3);
        assert_eq!(config.matcher.limit, 2);
        assert_eq!(config.scene_duration_secs, 8);
    }
}
