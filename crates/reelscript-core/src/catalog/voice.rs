use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Voice gender as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// A synthetic narrator that can be assigned to a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiVoice {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub accent: String,
    pub language: String,
    /// Sample line shown when previewing the voice.
    pub preview: String,
}

impl fmt::Display for AiVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} {})",
            self.name, self.gender, self.accent, self.language
        )
    }
}

const VOICES: [(&str, &str, Gender, &str, &str, &str); 5] = [
    (
        "sarah-us",
        "Sarah",
        Gender::Female,
        "American",
        "English",
        "Hello, I'm Sarah. I can narrate your videos with a clear American accent.",
    ),
    (
        "james-uk",
        "James",
        Gender::Male,
        "British",
        "English",
        "Good day, I'm James. I offer a sophisticated British narration style.",
    ),
    (
        "maria-es",
        "María",
        Gender::Female,
        "Spanish",
        "Spanish",
        "Hola, soy María. Puedo narrar tus videos en español con acento neutro.",
    ),
    (
        "david-au",
        "David",
        Gender::Male,
        "Australian",
        "English",
        "G'day, I'm David. I can provide a friendly Australian voice for your content.",
    ),
    (
        "sophie-fr",
        "Sophie",
        Gender::Female,
        "French",
        "French",
        "Bonjour, je suis Sophie. Je peux narrer vos vidéos en français.",
    ),
];

static AI_VOICES: LazyLock<Vec<AiVoice>> = LazyLock::new(|| {
    VOICES
        .iter()
        .map(|&(id, name, gender, accent, language, preview)| AiVoice {
            id: id.to_string(),
            name: name.to_string(),
            gender,
            accent: accent.to_string(),
            language: language.to_string(),
            preview: preview.to_string(),
        })
        .collect()
});

/// The built-in AI voice catalog. The first entry is the default voice.
pub fn ai_voices() -> &'static [AiVoice] {
    &AI_VOICES
}

/// Looks up an AI voice by id.
pub fn find_voice(id: &str) -> Option<&'static AiVoice> {
    ai_voices().iter().find(|v| v.id == id)
}
