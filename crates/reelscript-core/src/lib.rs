//! # Reelscript Core
//!
//! Turns a text script into a storyboard: scene segmentation, keyword
//! extraction, stock-visual matching, voiceover and text-style assignment.
//!
//! ## Quick Start
//!
//! ```rust
//! use reelscript_core::storyboard::Pipeline;
//! use reelscript_core::catalog::stock_visuals;
//!
//! let pipeline = Pipeline::with_defaults().unwrap();
//! let board = pipeline.build(
//!     "Our business team meets in the office.\n\nThen we hike through peaceful nature.",
//!     stock_visuals(),
//! );
//!
//! assert_eq!(board.scenes.len(), 2);
//! assert_eq!(board.scenes[1].selected_visual.as_ref().unwrap().title, "Nature Landscape");
//! ```
pub mod catalog;
pub mod config;
pub mod error;
pub mod segment;
pub mod storyboard;
pub mod types;

// Re-export primary API
pub use catalog::{
    AiVoice, Gender, MatchConfig, VisualAsset, VisualKind, VisualMatcher, ai_voices, find_visual,
    find_voice, stock_visuals,
};
pub use config::StoryboardConfig;
pub use error::{ReelscriptError, Result};
pub use segment::{KeywordConfig, KeywordExtractor, Segmenter, SegmenterConfig};
pub use storyboard::{Pipeline, ScriptDraft, StepProgress, Storyboard};
pub use types::{
    BackgroundMusic, OutputResolution, Project, ProjectSettings, Scene, TextAnimation,
    TextPosition, TextStyle, TextStylePatch, VoiceSource, Voiceover,
};
