use thiserror::Error;

/// Errors that can occur while building or editing a storyboard.
///
/// Segmentation, keyword extraction and visual matching never fail; these
/// variants cover construction and the editing operations layered on top.
#[derive(Debug, Error)]
pub enum ReelscriptError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A scene index did not refer to an existing scene.
    #[error("scene index {index} is out of range (scene count: {len})")]
    SceneIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of scenes at the time of the request.
        len: usize,
    },

    /// The script draft is blank or has a blank scene.
    #[error("script draft is not ready: {0}")]
    DraftNotReady(String),

    /// No AI voice with the given id exists in the voice catalog.
    #[error("unknown voice id: {0:?}")]
    UnknownVoice(String),

    /// No visual with the given id exists in the catalog.
    #[error("unknown visual id: {0:?}")]
    UnknownVisual(String),

    /// A text style value was outside its accepted range or format.
    #[error("invalid text style: {0}")]
    InvalidStyle(String),

    /// Configuration could not be parsed or holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for reelscript operations.
pub type Result<T> = std::result::Result<T, ReelscriptError>;
