//! # Visual Matcher
//!
//! Existence matching of keywords against catalog tags. There is no
//! relevance score: results come back in catalog order.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::visual::VisualAsset;

/// Maximum number of candidates returned per match.
pub const DEFAULT_MATCH_LIMIT: usize = 6;

/// Configuration for the visual matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Cap on the number of matched assets.
    pub limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

impl MatchConfig {
    /// Create a new match configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Matches keywords to tagged visual assets.
#[derive(Debug, Clone, Default)]
pub struct VisualMatcher {
    config: MatchConfig,
}

impl VisualMatcher {
    /// Create a matcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with the given configuration.
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Returns the catalog assets having at least one tag that contains at
    /// least one keyword, case-insensitively, capped at the configured limit.
    ///
    /// Keywords are lowercased but otherwise used as given: an empty keyword
    /// matches every asset, and no keywords means no matches.
    ///
    /// # Examples
    /// ```
    /// use reelscript_core::catalog::{VisualMatcher, stock_visuals};
    ///
    /// let matcher = VisualMatcher::new();
    /// let hits = matcher.match_visuals(&["office"], stock_visuals());
    /// assert_eq!(hits[0].title, "Business Meeting");
    /// ```
    pub fn match_visuals<'a, S: AsRef<str>>(
        &self,
        keywords: &[S],
        catalog: &'a [VisualAsset],
    ) -> Vec<&'a VisualAsset> {
        let needles: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();

        let matches: Vec<&VisualAsset> = catalog
            .iter()
            .filter(|asset| needles.iter().any(|n| asset.has_tag_containing(n)))
            .take(self.config.limit)
            .collect();

        trace!(keywords = ?needles, matched = matches.len(), "matched visuals");
        matches
    }

    /// Free-text catalog search over titles and tags.
    ///
    /// A blank term returns the whole catalog. Results are not capped.
    pub fn search<'a>(&self, term: &str, catalog: &'a [VisualAsset]) -> Vec<&'a VisualAsset> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return catalog.iter().collect();
        }

        catalog
            .iter()
            .filter(|asset| asset.title.to_lowercase().contains(&term) || asset.has_tag_containing(&term))
            .collect()
    }

    /// Get the matcher configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{VisualKind, stock_visuals};

    fn titles(assets: &[&VisualAsset]) -> Vec<String> {
        assets.iter().map(|a| a.title.clone()).collect()
    }

    #[test]
    fn business_keywords_match_meeting_not_nature() {
        let hits = VisualMatcher::new().match_visuals(&["business", "office"], stock_visuals());
        let names = titles(&hits);
        assert!(names.contains(&"Business Meeting".to_string()));
        assert!(!names.contains(&"Nature Landscape".to_string()));
    }

    #[test]
    fn no_keywords_no_matches() {
        let empty: [&str; 0] = [];
        assert!(VisualMatcher::new().match_visuals(&empty, stock_visuals()).is_empty());
    }

    #[test]
    fn keywords_are_not_trimmed() {
        let matcher = VisualMatcher::new();
        assert_eq!(matcher.match_visuals(&[""], stock_visuals()).len(), DEFAULT_MATCH_LIMIT);
        assert!(matcher.match_visuals(&[" office"], stock_visuals()).is_empty());
        assert!(matcher.match_visuals(&["  "], stock_visuals()).is_empty());
    }

    #[test]
    fn substring_and_case_insensitive() {
        let hits = VisualMatcher::new().match_visuals(&["TECH"], stock_visuals());
        assert_eq!(titles(&hits), vec!["Technology Innovation"]);

        // "work" is a substring of "workspace" and equal to "work".
        let hits = VisualMatcher::new().match_visuals(&["work"], stock_visuals());
        assert_eq!(titles(&hits), vec!["Creative Workspace", "Team Collaboration"]);
    }

    #[test]
    fn results_follow_catalog_order() {
        let hits = VisualMatcher::new().match_visuals(&["peaceful", "modern"], stock_visuals());
        assert_eq!(
            titles(&hits),
            vec!["Technology Innovation", "City Lifestyle", "Nature Landscape"]
        );
    }

    #[test]
    fn limit_caps_results() {
        let catalog: Vec<VisualAsset> = (0..10)
            .map(|i| VisualAsset::new(format!("c{i}"), VisualKind::Image, format!("Sky {i}"), ["sky"]))
            .collect();

        let hits = VisualMatcher::new().match_visuals(&["sky"], &catalog);
        assert_eq!(hits.len(), DEFAULT_MATCH_LIMIT);
        assert_eq!(hits[0].id, "c0");
        assert_eq!(hits[5].id, "c5");

        let matcher = VisualMatcher::with_config(MatchConfig::new().with_limit(2));
        assert_eq!(matcher.match_visuals(&["sky"], &catalog).len(), 2);
    }

    #[test]
    fn every_match_has_a_containing_tag() {
        let keywords = ["meet", "city", "land", "zzz"];
        for asset in VisualMatcher::new().match_visuals(&keywords, stock_visuals()) {
            assert!(
                asset
                    .tags
                    .iter()
                    .any(|t| keywords.iter().any(|k| t.contains(k))),
                "{} matched without a tag hit",
                asset.title
            );
        }
    }

    #[test]
    fn search_by_title_or_tag() {
        let matcher = VisualMatcher::new();
        assert_eq!(titles(&matcher.search("landscape", stock_visuals())), vec!["Nature Landscape"]);
        assert_eq!(titles(&matcher.search("  Lifestyle ", stock_visuals())), vec!["City Lifestyle"]);
        assert_eq!(titles(&matcher.search("together", stock_visuals())), vec!["Team Collaboration"]);
        assert!(matcher.search("volcano", stock_visuals()).is_empty());
    }

    #[test]
    fn blank_search_returns_whole_catalog() {
        assert_eq!(VisualMatcher::new().search("   ", stock_visuals()).len(), 6);
    }
}
