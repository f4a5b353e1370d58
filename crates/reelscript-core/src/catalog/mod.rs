pub mod matcher;
pub mod visual;
pub mod voice;

pub use matcher::{MatchConfig, VisualMatcher};
pub use visual::{VisualAsset, VisualKind, find_visual, stock_visuals};
pub use voice::{AiVoice, Gender, ai_voices, find_voice};
