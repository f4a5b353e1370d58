//! # Keyword Extractor
//!
//! Pulls the first few salient words out of a scene so they can be matched
//! against visual tags.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tokens must be longer than this many characters to count as keywords.
pub const DEFAULT_MIN_LEN: usize = 3;

/// Maximum number of keywords returned per text.
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Common English function words that never count as keywords.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "shall",
];

/// Returns `true` if `word` (already lowercase) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Configuration for the keyword extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Tokens with this many characters or fewer are dropped.
    pub min_len: usize,
    /// Cap on the number of keywords returned.
    pub max_keywords: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

impl KeywordConfig {
    /// Create a new keyword configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum token length (exclusive).
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Set the keyword cap.
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }
}

/// Stopword-filtering keyword extractor.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    config: KeywordConfig,
    re_punctuation: Regex,
}

impl KeywordExtractor {
    /// Constructs an extractor with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::RegexError` if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_config(KeywordConfig::default())
    }

    /// Constructs an extractor with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::RegexError` if the pattern fails to compile.
    pub fn with_config(config: KeywordConfig) -> Result<Self> {
        Ok(Self {
            config,
            re_punctuation: Regex::new(r"[^A-Za-z0-9_\s]")?,
        })
    }

    /// Extracts keywords from `text` in order of first occurrence.
    ///
    /// Repeated words are not deduplicated.
    ///
    /// # Examples
    /// ```
    /// use reelscript_core::segment::KeywordExtractor;
    ///
    /// let extractor = KeywordExtractor::new().unwrap();
    /// let keywords = extractor.extract("The quick brown fox jumps over the lazy dog");
    /// assert_eq!(keywords, vec!["quick", "brown", "jumps", "over", "lazy"]);
    /// ```
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.re_punctuation.replace_all(&lowered, " ");

        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() > self.config.min_len && !is_stopword(word))
            .take(self.config.max_keywords)
            .map(str::to_string)
            .collect()
    }

    /// Get the extractor configuration.
    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }
}
