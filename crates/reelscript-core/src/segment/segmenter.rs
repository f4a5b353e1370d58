//! # Scene Segmenter
//!
//! Splits raw script text into an ordered list of scenes. Paragraph breaks
//! and line-terminated sentences are the primary boundaries; a long script
//! with no such boundary is split sentence by sentence instead.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Scripts longer than this many characters with no paragraph break are
/// sentence-split.
pub const DEFAULT_FALLBACK_THRESHOLD: usize = 200;

/// Characters accepted as the end of a sentence.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Configuration for the segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Character count above which a single-fragment script is re-split on
    /// sentence boundaries.
    pub fallback_threshold: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
        }
    }
}

impl SegmenterConfig {
    /// Create a new segmenter configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentence-split fallback threshold.
    pub fn with_fallback_threshold(mut self, threshold: usize) -> Self {
        self.fallback_threshold = threshold;
        self
    }
}

/// Splits script text into scenes.
///
/// Holds only pre-compiled patterns, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    re_scene_break: Regex,
    re_sentence_break: Regex,
}

impl Segmenter {
    /// Constructs a segmenter with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::RegexError` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Self::with_config(SegmenterConfig::default())
    }

    /// Constructs a segmenter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::RegexError` if a pattern fails to compile.
    pub fn with_config(config: SegmenterConfig) -> Result<Self> {
        Ok(Self {
            config,
            re_scene_break: Regex::new(r"\n\s*\n|[.;]\s*\n")?,
            re_sentence_break: Regex::new(r"[.!?]+\s+")?,
        })
    }

    /// Splits `script` into trimmed, non-empty scenes.
    ///
    /// Blank input yields no scenes. Any other input yields at least one.
    ///
    /// # Examples
    /// ```
    /// use reelscript_core::segment::Segmenter;
    ///
    /// let segmenter = Segmenter::new().unwrap();
    /// let scenes = segmenter.segment("Hello world.\n\nThis is scene two.");
    /// assert_eq!(scenes, vec!["Hello world.", "This is scene two."]);
    /// ```
    pub fn segment(&self, script: &str) -> Vec<String> {
        let scenes = self.split_scenes(script);

        if scenes.len() == 1 && script.chars().count() > self.config.fallback_threshold {
            let sentences = self.split_sentences(script);
            debug!(
                sentences = sentences.len(),
                threshold = self.config.fallback_threshold,
                "no scene breaks in long script, split by sentence"
            );
            return sentences;
        }

        debug!(scenes = scenes.len(), "segmented script");
        scenes
    }

    /// Get the segmenter configuration.
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Splits on blank lines and on `.`/`;` at the end of a line. The
    /// terminating `.` or `;` stays with the fragment it ends.
    fn split_scenes(&self, script: &str) -> Vec<String> {
        let mut scenes = Vec::new();
        let mut start = 0;

        for m in self.re_scene_break.find_iter(script) {
            let end = if m.as_str().starts_with(['.', ';']) {
                m.start() + 1
            } else {
                m.start()
            };
            push_trimmed(&mut scenes, &script[start..end]);
            start = m.end();
        }
        push_trimmed(&mut scenes, &script[start..]);

        scenes
    }

    /// Splits on runs of `.`, `!`, `?` followed by whitespace and ends every
    /// sentence with `.`. The run is dropped, so "Why? Because" gives
    /// `["Why.", "Because."]`; only the final sentence can keep a `!` or `?`.
    fn split_sentences(&self, script: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in self.re_sentence_break.find_iter(script) {
            push_trimmed(&mut sentences, &script[start..m.start()]);
            start = m.end();
        }
        push_trimmed(&mut sentences, &script[start..]);

        sentences
            .into_iter()
            .map(|mut sentence| {
                if !sentence.ends_with(TERMINATORS) {
                    sentence.push('.');
                }
                sentence
            })
            .collect()
    }
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
