use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Kind of media a visual asset provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    Video,
    Image,
    Animation,
}

impl fmt::Display for VisualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Image => write!(f, "image"),
            Self::Animation => write!(f, "animation"),
        }
    }
}

/// A catalog entry that can be shown behind a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualAsset {
    /// Catalog identifier.
    pub id: String,

    /// Media kind.
    pub kind: VisualKind,

    /// Display title.
    pub title: String,

    /// Lowercase labels used for keyword matching.
    pub tags: Vec<String>,

    /// Full-size media location.
    pub url: String,

    /// Preview image location.
    pub thumbnail: String,

    /// Clip length in seconds; `None` for stills.
    pub duration_secs: Option<u32>,
}

impl VisualAsset {
    /// Creates an asset with the given tags, lowercased.
    ///
    /// Used for user uploads, which share the stock catalog's shape.
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, kind: VisualKind, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            tags: tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
            url: String::new(),
            thumbnail: String::new(),
            duration_secs: None,
        }
    }

    /// Set the media and thumbnail locations.
    #[must_use]
    pub fn with_urls(mut self, url: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        self.url = url.into();
        self.thumbnail = thumbnail.into();
        self
    }

    /// Set the clip length.
    #[must_use]
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    /// Returns `true` if any tag contains `needle` (already lowercase).
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

impl fmt::Display for VisualAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] ({})", self.title, self.kind, self.tags.join(", "))
    }
}

struct StockEntry {
    id: &'static str,
    kind: VisualKind,
    title: &'static str,
    tags: [&'static str; 4],
    url: &'static str,
    thumbnail: &'static str,
    duration_secs: Option<u32>,
}

const STOCK: [StockEntry; 6] = [
    StockEntry {
        id: "1",
        kind: VisualKind::Video,
        title: "Business Meeting",
        tags: ["business", "meeting", "professional", "office"],
        url: "https://images.pexels.com/videos/3843433/pexels-photo-3843433.jpeg",
        thumbnail: "https://images.pexels.com/videos/3843433/pexels-photo-3843433.jpeg?auto=compress&cs=tinysrgb&w=300",
        duration_secs: Some(15),
    },
    StockEntry {
        id: "2",
        kind: VisualKind::Video,
        title: "Technology Innovation",
        tags: ["technology", "innovation", "digital", "modern"],
        url: "https://images.pexels.com/videos/6774934/pexels-photo-6774934.jpeg",
        thumbnail: "https://images.pexels.com/videos/6774934/pexels-photo-6774934.jpeg?auto=compress&cs=tinysrgb&w=300",
        duration_secs: Some(20),
    },
    StockEntry {
        id: "3",
        kind: VisualKind::Image,
        title: "Creative Workspace",
        tags: ["creative", "workspace", "design", "inspiration"],
        url: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg",
        thumbnail: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=300",
        duration_secs: None,
    },
    StockEntry {
        id: "4",
        kind: VisualKind::Video,
        title: "City Lifestyle",
        tags: ["city", "urban", "lifestyle", "modern"],
        url: "https://images.pexels.com/videos/5726708/pexels-photo-5726708.jpeg",
        thumbnail: "https://images.pexels.com/videos/5726708/pexels-photo-5726708.jpeg?auto=compress&cs=tinysrgb&w=300",
        duration_secs: Some(12),
    },
    StockEntry {
        id: "5",
        kind: VisualKind::Image,
        title: "Team Collaboration",
        tags: ["team", "collaboration", "work", "together"],
        url: "https://images.pexels.com/photos/3183197/pexels-photo-3183197.jpeg",
        thumbnail: "https://images.pexels.com/photos/3183197/pexels-photo-3183197.jpeg?auto=compress&cs=tinysrgb&w=300",
        duration_secs: None,
    },
    StockEntry {
        id: "6",
        kind: VisualKind::Video,
        title: "Nature Landscape",
        tags: ["nature", "landscape", "peaceful", "outdoor"],
        url: "https://images.pexels.com/videos/3130284/pexels-photo-3130284.jpeg",
        thumbnail: "https://images.pexels.com/videos/3130284/pexels-photo-3130284.jpeg?auto=compress&cs=tinysrgb&w=300",
        duration_secs: Some(18),
    },
];

static STOCK_VISUALS: LazyLock<Vec<VisualAsset>> = LazyLock::new(|| {
    STOCK
        .iter()
        .map(|entry| VisualAsset {
            id: entry.id.to_string(),
            kind: entry.kind,
            title: entry.title.to_string(),
            tags: entry.tags.iter().map(|t| (*t).to_string()).collect(),
            url: entry.url.to_string(),
            thumbnail: entry.thumbnail.to_string(),
            duration_secs: entry.duration_secs,
        })
        .collect()
});

/// The built-in stock visual catalog, in display order.
pub fn stock_visuals() -> &'static [VisualAsset] {
    &STOCK_VISUALS
}

/// Looks up a stock visual by id.
pub fn find_visual(id: &str) -> Option<&'static VisualAsset> {
    stock_visuals().iter().find(|v| v.id == id)
}
