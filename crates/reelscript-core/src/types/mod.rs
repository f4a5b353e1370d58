pub mod project;
pub mod scene;
pub mod style;

pub use project::{BackgroundMusic, OutputResolution, Project, ProjectSettings};
pub use scene::{Scene, VoiceSource, Voiceover};
pub use style::{Shadow, Stroke, TextAnimation, TextPosition, TextStyle, TextStylePatch};
