use serde::{Deserialize, Serialize};

use super::style::TextStyle;
use crate::catalog::{AiVoice, VisualAsset};

/// Where a scene's narration comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VoiceSource {
    /// A catalog AI voice reads the scene text.
    Ai { voice: AiVoice },
    /// A user-supplied recording.
    Custom { audio_url: String },
}

/// Narration attached to a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voiceover {
    pub id: String,
    pub source: VoiceSource,
    /// Text being narrated; the scene text at assignment time.
    pub text: String,
}

impl Voiceover {
    /// AI narration for scene `index`; id is `{voice id}-{index}`.
    #[must_use]
    pub fn ai(voice: &AiVoice, index: usize, text: impl Into<String>) -> Self {
        Self {
            id: format!("{}-{index}", voice.id),
            source: VoiceSource::Ai {
                voice: voice.clone(),
            },
            text: text.into(),
        }
    }

    /// Uploaded narration for scene `index`; id is `custom-{index}`.
    #[must_use]
    pub fn custom(audio_url: impl Into<String>, index: usize, text: impl Into<String>) -> Self {
        Self {
            id: format!("custom-{index}"),
            source: VoiceSource::Custom {
                audio_url: audio_url.into(),
            },
            text: text.into(),
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self.source, VoiceSource::Ai { .. })
    }
}

/// One shot of the storyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// `scene-{index}`.
    pub id: String,

    /// Narration / overlay text.
    pub text: String,

    /// Planned on-screen time.
    pub duration_secs: u32,

    /// Candidate visuals from keyword matching.
    pub visuals: Vec<VisualAsset>,

    /// The visual chosen for this scene.
    pub selected_visual: Option<VisualAsset>,

    pub voiceover: Option<Voiceover>,

    pub text_style: TextStyle,
}

impl Scene {
    /// Creates scene `index` with no visuals, no voiceover and the default style.
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            id: format!("scene-{index}"),
            text: text.into(),
            duration_secs,
            visuals: Vec::new(),
            selected_visual: None,
            voiceover: None,
            text_style: TextStyle::default(),
        }
    }

    pub fn has_visual(&self) -> bool {
        self.selected_visual.is_some()
    }

    pub fn has_voiceover(&self) -> bool {
        self.voiceover.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_voice;

    #[test]
    fn new_scene_is_bare() {
        let scene = Scene::new(3, "Closing shot.", 5);
        assert_eq!(scene.id, "scene-3");
        assert_eq!(scene.duration_secs, 5);
        assert!(scene.visuals.is_empty());
        assert!(!scene.has_visual());
        assert!(!scene.has_voiceover());
        assert_eq!(scene.text_style, TextStyle::default());
    }

    #[test]
    fn voiceover_ids() {
        let voice = find_voice("david-au").unwrap();
        let ai = Voiceover::ai(voice, 2, "G'day.");
        assert_eq!(ai.id, "david-au-2");
        assert!(ai.is_ai());

        let custom = Voiceover::custom("https://example.com/audio.mp3", 4, "Hi.");
        assert_eq!(custom.id, "custom-4");
        assert!(!custom.is_ai());
    }

    #[test]
    fn voice_source_is_tagged() {
        let custom = Voiceover::custom("file:///take1.wav", 0, "Hi.");
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(json["source"]["type"], "custom");
        assert_eq!(json["source"]["audio_url"], "file:///take1.wav");
    }
}
