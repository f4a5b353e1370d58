//! # reelscript
//!
//! Turn a text script into a storyboard. This crate re-exports
//! [`reelscript_core`]; see its documentation for the full API.
//!
//! ```rust
//! use reelscript::Segmenter;
//!
//! let segmenter = Segmenter::new().unwrap();
//! let scenes = segmenter.segment("Opening shot.\n\nClosing shot.");
//! assert_eq!(scenes, vec!["Opening shot.", "Closing shot."]);
//! ```

pub use reelscript_core::*;
