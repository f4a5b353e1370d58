use std::fmt;

use serde::{Deserialize, Serialize};

use super::scene::Scene;
use crate::error::{ReelscriptError, Result};
use crate::storyboard::Storyboard;

/// Output frame size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputResolution {
    #[serde(rename = "720p")]
    HD720,
    #[default]
    #[serde(rename = "1080p")]
    FHD1080,
    #[serde(rename = "4K")]
    UHD4K,
}

impl fmt::Display for OutputResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HD720 => write!(f, "720p"),
            Self::FHD1080 => write!(f, "1080p"),
            Self::UHD4K => write!(f, "4K"),
        }
    }
}

/// Music bed played under the whole video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundMusic {
    pub url: String,
    /// Gain in `[0.0, 1.0]`.
    pub volume: f32,
}

impl BackgroundMusic {
    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidConfig` if `volume` is outside `[0.0, 1.0]`.
    pub fn new(url: impl Into<String>, volume: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(ReelscriptError::InvalidConfig(format!(
                "background music volume {volume} outside 0.0..=1.0"
            )));
        }
        Ok(Self {
            url: url.into(),
            volume,
        })
    }
}

/// Video-wide output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub resolution: OutputResolution,
    pub framerate: u32,
    pub background_music: Option<BackgroundMusic>,
    pub subtitles: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            resolution: OutputResolution::default(),
            framerate: 30,
            background_music: None,
            subtitles: false,
        }
    }
}

/// A named storyboard plus its output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Slug derived from the name.
    pub id: String,
    pub name: String,
    pub script: String,
    pub scenes: Vec<Scene>,
    pub settings: ProjectSettings,
}

impl Project {
    /// Wraps a storyboard with default settings.
    #[must_use]
    pub fn new(name: impl Into<String>, storyboard: Storyboard) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            script: storyboard.script,
            scenes: storyboard.scenes,
            settings: ProjectSettings::default(),
        }
    }

    /// Replace the output settings.
    #[must_use]
    pub fn with_settings(mut self, settings: ProjectSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sum of scene durations, saturating at `u32::MAX`.
    pub fn total_duration_secs(&self) -> u32 {
        self.scenes
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.duration_secs))
    }
}

fn slugify(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() { "untitled".to_string() } else { slug }
}
