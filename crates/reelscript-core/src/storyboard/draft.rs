use serde::{Deserialize, Serialize};

use crate::error::{ReelscriptError, Result};
use crate::segment::Segmenter;

/// Script text and its hand-editable scene list, before a storyboard exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDraft {
    script: String,
    scenes: Vec<String>,
    /// Re-segment on every script edit.
    auto_mode: bool,
}

impl Default for ScriptDraft {
    fn default() -> Self {
        Self {
            script: String::new(),
            scenes: Vec::new(),
            auto_mode: true,
        }
    }
}

impl ScriptDraft {
    /// An empty draft in auto mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn scenes(&self) -> &[String] {
        &self.scenes
    }

    pub fn auto_mode(&self) -> bool {
        self.auto_mode
    }

    /// Replaces the script. In auto mode a non-blank script also replaces the
    /// scene list; a blank one leaves the scenes as they were.
    pub fn set_script(&mut self, text: impl Into<String>, segmenter: &Segmenter) {
        self.script = text.into();
        if self.auto_mode && !self.script.trim().is_empty() {
            self.scenes = segmenter.segment(&self.script);
        }
    }

    /// Toggling does not re-segment; the next script edit does.
    pub fn set_auto_mode(&mut self, enabled: bool) {
        self.auto_mode = enabled;
    }

    /// # Errors
    ///
    /// Returns `ReelscriptError::SceneIndexOutOfRange` for a missing scene.
    pub fn edit_scene(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.scenes.len();
        let scene = self
            .scenes
            .get_mut(index)
            .ok_or(ReelscriptError::SceneIndexOutOfRange { index, len })?;
        *scene = text.into();
        Ok(())
    }

    /// Appends an empty scene and returns its index.
    pub fn add_scene(&mut self) -> usize {
        self.scenes.push(String::new());
        self.scenes.len() - 1
    }

    /// Removes and returns the scene at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::SceneIndexOutOfRange` for a missing scene.
    pub fn remove_scene(&mut self, index: usize) -> Result<String> {
        if index >= self.scenes.len() {
            return Err(ReelscriptError::SceneIndexOutOfRange {
                index,
                len: self.scenes.len(),
            });
        }
        Ok(self.scenes.remove(index))
    }

    /// Non-blank script, at least one scene, and no blank scene.
    pub fn can_proceed(&self) -> bool {
        self.readiness().is_ok()
    }

    /// Like [`can_proceed`](Self::can_proceed) but says what is missing.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::DraftNotReady` describing the first problem.
    pub fn readiness(&self) -> Result<()> {
        if self.script.trim().is_empty() {
            return Err(ReelscriptError::DraftNotReady("script is blank".into()));
        }
        if self.scenes.is_empty() {
            return Err(ReelscriptError::DraftNotReady("no scenes".into()));
        }
        if let Some(index) = self.scenes.iter().position(|s| s.trim().is_empty()) {
            return Err(ReelscriptError::DraftNotReady(format!("scene {index} is blank")));
        }
        Ok(())
    }
}
