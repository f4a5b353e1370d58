pub mod board;
pub mod draft;
pub mod pipeline;

pub use board::{StepProgress, Storyboard};
pub use draft::ScriptDraft;
pub use pipeline::{Pipeline, storyboard};
