//! # Script-to-Storyboard Pipeline
//!
//! Bundles the segmenter, keyword extractor and visual matcher behind one
//! configuration so callers go from raw script to a matched storyboard in a
//! single call.

use tracing::info;

use super::board::Storyboard;
use super::draft::ScriptDraft;
use crate::catalog::{VisualAsset, VisualMatcher, stock_visuals};
use crate::config::StoryboardConfig;
use crate::error::Result;
use crate::segment::{KeywordExtractor, Segmenter};

/// Segmenter, extractor and matcher built from one [`StoryboardConfig`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: StoryboardConfig,
    segmenter: Segmenter,
    extractor: KeywordExtractor,
    matcher: VisualMatcher,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidConfig` if the configuration fails
    /// validation, or `ReelscriptError::RegexError` if a pattern fails to compile.
    pub fn new(config: StoryboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            segmenter: Segmenter::with_config(config.segmenter.clone())?,
            extractor: KeywordExtractor::with_config(config.keywords.clone())?,
            matcher: VisualMatcher::with_config(config.matcher.clone()),
            config,
        })
    }

    /// Create a pipeline with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::RegexError` if a pattern fails to compile.
    pub fn with_defaults() -> Result<Self> {
        Self::new(StoryboardConfig::default())
    }

    /// Segments, then matches every scene against `catalog`.
    ///
    /// # Examples
    /// ```
    /// use reelscript_core::catalog::stock_visuals;
    /// use reelscript_core::storyboard::Pipeline;
    ///
    /// let pipeline = Pipeline::with_defaults().unwrap();
    /// let board = pipeline.build("A city at night.\n\nA team at work.", stock_visuals());
    ///
    /// assert_eq!(board.scenes.len(), 2);
    /// assert_eq!(board.scenes[0].selected_visual.as_ref().unwrap().title, "City Lifestyle");
    /// ```
    pub fn build(&self, script: &str, catalog: &[VisualAsset]) -> Storyboard {
        let scenes = self.segmenter.segment(script);
        let mut board = Storyboard::from_scenes(script, scenes, self.config.scene_duration_secs);
        board.auto_match(&self.extractor, &self.matcher, catalog);
        info!(scenes = board.len(), "built storyboard");
        board
    }

    /// Builds from a hand-edited draft instead of re-segmenting.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::DraftNotReady` if the draft cannot proceed.
    pub fn build_from_draft(&self, draft: &ScriptDraft, catalog: &[VisualAsset]) -> Result<Storyboard> {
        let mut board = Storyboard::from_draft(draft, self.config.scene_duration_secs)?;
        board.auto_match(&self.extractor, &self.matcher, catalog);
        Ok(board)
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn matcher(&self) -> &VisualMatcher {
        &self.matcher
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &StoryboardConfig {
        &self.config
    }
}

/// Convenience function to build a storyboard against the stock catalog with
/// default settings.
///
/// # Errors
///
/// Returns `ReelscriptError::RegexError` if a pattern fails to compile.
pub fn storyboard(script: &str) -> Result<Storyboard> {
    Ok(Pipeline::with_defaults()?.build(script, stock_visuals()))
}
