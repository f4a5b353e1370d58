use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ReelscriptError, Result};

/// Font families offered for text overlays.
pub const FONT_FAMILIES: &[&str] = &["Inter", "Roboto", "Open Sans", "Montserrat", "Poppins", "Nunito"];

/// Accepted overlay font sizes, in pixels.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 24..=72;

/// Accepted stroke widths, in pixels.
pub const STROKE_WIDTH_RANGE: RangeInclusive<u32> = 1..=5;

/// Accepted shadow blur radii, in pixels.
pub const SHADOW_BLUR_RANGE: RangeInclusive<u32> = 0..=10;

/// Entrance animation for the overlay text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnimation {
    None,
    #[default]
    Fade,
    Slide,
    Zoom,
    Typewriter,
}

impl fmt::Display for TextAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Fade => write!(f, "Fade In"),
            Self::Slide => write!(f, "Slide Up"),
            Self::Zoom => write!(f, "Zoom In"),
            Self::Typewriter => write!(f, "Typewriter"),
        }
    }
}

/// Vertical placement of the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Outline drawn around overlay glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub enabled: bool,
    pub color: String,
    pub width: u32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#000000".into(),
            width: 2,
        }
    }
}

/// Drop shadow behind overlay glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shadow {
    pub enabled: bool,
    pub color: String,
    pub blur: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: true,
            color: "#000000".into(),
            blur: 4,
            offset_x: 2,
            offset_y: 2,
        }
    }
}

/// Per-scene text overlay style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: u32,
    pub color: String,
    pub stroke: Stroke,
    pub shadow: Shadow,
    pub animation: TextAnimation,
    pub position: TextPosition,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Inter".into(),
            font_size: 36,
            color: "#ffffff".into(),
            stroke: Stroke::default(),
            shadow: Shadow::default(),
            animation: TextAnimation::default(),
            position: TextPosition::default(),
        }
    }
}

impl TextStyle {
    /// Checks every field against its accepted range or format.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidStyle` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.font_family.trim().is_empty() {
            return Err(ReelscriptError::InvalidStyle("font family is blank".into()));
        }
        check_range("font size", self.font_size, &FONT_SIZE_RANGE)?;
        check_color("text color", &self.color)?;
        check_range("stroke width", self.stroke.width, &STROKE_WIDTH_RANGE)?;
        check_color("stroke color", &self.stroke.color)?;
        check_range("shadow blur", self.shadow.blur, &SHADOW_BLUR_RANGE)?;
        check_color("shadow color", &self.shadow.color)?;
        Ok(())
    }

    /// Returns a copy with `patch` applied, validated.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidStyle` if the patched style is invalid;
    /// `self` is left untouched either way.
    pub fn patched(&self, patch: &TextStylePatch) -> Result<Self> {
        let mut next = self.clone();
        if let Some(ref family) = patch.font_family {
            next.font_family = family.clone();
        }
        if let Some(size) = patch.font_size {
            next.font_size = size;
        }
        if let Some(ref color) = patch.color {
            next.color = color.clone();
        }
        if let Some(ref stroke) = patch.stroke {
            next.stroke = stroke.clone();
        }
        if let Some(ref shadow) = patch.shadow {
            next.shadow = shadow.clone();
        }
        if let Some(animation) = patch.animation {
            next.animation = animation;
        }
        if let Some(position) = patch.position {
            next.position = position;
        }
        next.validate()?;
        Ok(next)
    }
}

/// Partial update of a [`TextStyle`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStylePatch {
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub color: Option<String>,
    pub stroke: Option<Stroke>,
    pub shadow: Option<Shadow>,
    pub animation: Option<TextAnimation>,
    pub position: Option<TextPosition>,
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ReelscriptError::InvalidStyle(format!(
            "{field} {value} outside {}..={}",
            range.start(),
            range.end()
        )))
    }
}

/// `#rrggbb`, case-insensitive.
fn check_color(field: &str, value: &str) -> Result<()> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ReelscriptError::InvalidStyle(format!("{field} {value:?} is not #rrggbb")))
    }
}
