use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::draft::ScriptDraft;
use crate::catalog::{AiVoice, VisualAsset, VisualMatcher, find_voice};
use crate::error::{ReelscriptError, Result};
use crate::segment::KeywordExtractor;
use crate::types::{Scene, TextStylePatch, Voiceover};

/// Which authoring steps are finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    /// The script is non-blank.
    pub script: bool,
    /// Every scene has a selected visual.
    pub visuals: bool,
    /// Every scene has a voiceover.
    pub voiceover: bool,
}

impl StepProgress {
    pub fn all_done(&self) -> bool {
        self.script && self.visuals && self.voiceover
    }
}

/// The script and its ordered scenes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    pub script: String,
    pub scenes: Vec<Scene>,
}

impl Storyboard {
    /// Creates one bare scene per text, ids `scene-0`, `scene-1`, ...
    #[must_use]
    pub fn from_scenes<I, S>(script: impl Into<String>, texts: I, duration_secs: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scenes = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Scene::new(index, text, duration_secs))
            .collect();

        Self {
            script: script.into(),
            scenes,
        }
    }

    /// Creates a storyboard from a finished draft.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::DraftNotReady` if the draft cannot proceed.
    pub fn from_draft(draft: &ScriptDraft, duration_secs: u32) -> Result<Self> {
        draft.readiness()?;
        Ok(Self::from_scenes(
            draft.script(),
            draft.scenes().iter().cloned(),
            duration_secs,
        ))
    }

    /// Fills every scene's candidates from its keywords and selects the first
    /// candidate, or the first catalog entry when nothing matched.
    pub fn auto_match(
        &mut self,
        extractor: &KeywordExtractor,
        matcher: &VisualMatcher,
        catalog: &[VisualAsset],
    ) {
        for scene in &mut self.scenes {
            let keywords = extractor.extract(&scene.text);
            let candidates = matcher.match_visuals(&keywords, catalog);

            scene.selected_visual = candidates.first().copied().or(catalog.first()).cloned();
            if candidates.is_empty() {
                warn!(scene = %scene.id, ?keywords, "no visual matched, using catalog default");
            } else {
                debug!(scene = %scene.id, candidates = candidates.len(), "matched visuals");
            }
            scene.visuals = candidates.into_iter().cloned().collect();
        }
    }

    fn scene_mut(&mut self, index: usize) -> Result<&mut Scene> {
        let len = self.scenes.len();
        self.scenes
            .get_mut(index)
            .ok_or(ReelscriptError::SceneIndexOutOfRange { index, len })
    }

    /// # Errors
    ///
    /// Returns `ReelscriptError::SceneIndexOutOfRange` for a missing scene.
    pub fn select_visual(&mut self, index: usize, visual: VisualAsset) -> Result<()> {
        self.scene_mut(index)?.selected_visual = Some(visual);
        Ok(())
    }

    /// Selects the catalog visual with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::UnknownVisual` if no catalog entry has `id`,
    /// or `ReelscriptError::SceneIndexOutOfRange` for a missing scene.
    pub fn select_visual_by_id(
        &mut self,
        index: usize,
        id: &str,
        catalog: &[VisualAsset],
    ) -> Result<()> {
        let visual = catalog
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| ReelscriptError::UnknownVisual(id.to_string()))?;
        self.select_visual(index, visual.clone())
    }

    /// Narrates scene `index` with an AI voice.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::SceneIndexOutOfRange` for a missing scene.
    pub fn assign_ai_voice(&mut self, index: usize, voice: &AiVoice) -> Result<()> {
        let scene = self.scene_mut(index)?;
        scene.voiceover = Some(Voiceover::ai(voice, index, scene.text.clone()));
        Ok(())
    }

    /// Narrates scene `index` with the catalog voice `voice_id`.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::UnknownVoice` or
    /// `ReelscriptError::SceneIndexOutOfRange`.
    pub fn assign_voice_by_id(&mut self, index: usize, voice_id: &str) -> Result<()> {
        let voice =
            find_voice(voice_id).ok_or_else(|| ReelscriptError::UnknownVoice(voice_id.to_string()))?;
        self.assign_ai_voice(index, voice)
    }

    /// Narrates every scene with the same AI voice.
    pub fn assign_ai_voice_all(&mut self, voice: &AiVoice) {
        for (index, scene) in self.scenes.iter_mut().enumerate() {
            scene.voiceover = Some(Voiceover::ai(voice, index, scene.text.clone()));
        }
    }

    /// Attaches an uploaded recording to scene `index`.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::SceneIndexOutOfRange` for a missing scene.
    pub fn assign_custom_voice(&mut self, index: usize, audio_url: impl Into<String>) -> Result<()> {
        let scene = self.scene_mut(index)?;
        scene.voiceover = Some(Voiceover::custom(audio_url, index, scene.text.clone()));
        Ok(())
    }

    /// Applies a partial style update to scene `index`.
    ///
    /// # Errors
    ///
    /// Returns `ReelscriptError::InvalidStyle` if the result is out of range (the
    /// scene keeps its old style), or `ReelscriptError::SceneIndexOutOfRange`.
    pub fn update_style(&mut self, index: usize, patch: &TextStylePatch) -> Result<()> {
        let scene = self.scene_mut(index)?;
        scene.text_style = scene.text_style.patched(patch)?;
        Ok(())
    }

    /// Completion of each authoring step. With no scenes, the visual and
    /// voiceover steps count as done.
    pub fn progress(&self) -> StepProgress {
        StepProgress {
            script: !self.script.trim().is_empty(),
            visuals: self.scenes.iter().all(Scene::has_visual),
            voiceover: self.scenes.iter().all(Scene::has_voiceover),
        }
    }

    /// Every step done and at least one scene.
    pub fn is_complete(&self) -> bool {
        !self.scenes.is_empty() && self.progress().all_done()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{VisualKind, find_voice, stock_visuals};
    use crate::segment::Segmenter;
    use crate::types::{TextAnimation, VoiceSource};

    fn matched_board(script: &str) -> Storyboard {
        let scenes = Segmenter::new().unwrap().segment(script);
        let mut board = Storyboard::from_scenes(script, scenes, 5);
        board.auto_match(
            &KeywordExtractor::new().unwrap(),
            &VisualMatcher::new(),
            stock_visuals(),
        );
        board
    }

    #[test]
    fn scenes_get_sequential_ids() {
        let board = Storyboard::from_scenes("a\n\nb", ["a", "b"], 5);
        let ids: Vec<_> = board.scenes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["scene-0", "scene-1"]);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn auto_match_selects_first_candidate() {
        let board = matched_board(
            "Our business team meets in the office.\n\nThen we hike through peaceful nature.",
        );

        let first = &board.scenes[0];
        assert_eq!(first.selected_visual.as_ref().map(|v| v.id.as_str()), Some("1"));
        assert!(first.visuals.iter().any(|v| v.title == "Team Collaboration"));

        let second = &board.scenes[1];
        assert_eq!(
            second.selected_visual.as_ref().map(|v| v.title.as_str()),
            Some("Nature Landscape")
        );
        assert!(board.progress().visuals);
    }

    #[test]
    fn unmatched_scene_falls_back_to_catalog_head() {
        let board = matched_board("Zebras gallop.");
        let scene = &board.scenes[0];
        assert!(scene.visuals.is_empty());
        assert_eq!(scene.selected_visual.as_ref().map(|v| v.id.as_str()), Some("1"));
    }

    #[test]
    fn empty_catalog_leaves_selection_empty() {
        let mut board = Storyboard::from_scenes("x", ["Anything at all"], 5);
        board.auto_match(&KeywordExtractor::new().unwrap(), &VisualMatcher::new(), &[]);
        assert!(board.scenes[0].selected_visual.is_none());
        assert!(!board.progress().visuals);
    }

    #[test]
    fn manual_visual_selection() {
        let mut board = matched_board("Zebras gallop.");
        board.select_visual_by_id(0, "4", stock_visuals()).unwrap();
        assert_eq!(
            board.scenes[0].selected_visual.as_ref().map(|v| v.title.as_str()),
            Some("City Lifestyle")
        );

        let upload = VisualAsset::new("upload-1", VisualKind::Image, "Zebra", ["zebra", "safari"]);
        board.select_visual(0, upload).unwrap();
        assert_eq!(board.scenes[0].selected_visual.as_ref().unwrap().id, "upload-1");

        assert!(matches!(
            board.select_visual_by_id(0, "99", stock_visuals()),
            Err(ReelscriptError::UnknownVisual(_))
        ));
        assert!(matches!(
            board.select_visual_by_id(3, "1", stock_visuals()),
            Err(ReelscriptError::SceneIndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn voice_assignment_and_progress() {
        let mut board = matched_board("Scene one.\n\nScene two.");
        assert!(!board.progress().voiceover);
        assert!(!board.is_complete());

        board.assign_voice_by_id(0, "james-uk").unwrap();
        board.assign_custom_voice(1, "https://example.com/audio.mp3").unwrap();

        let vo = board.scenes[0].voiceover.as_ref().unwrap();
        assert_eq!(vo.id, "james-uk-0");
        assert_eq!(vo.text, "Scene one.");
        assert_eq!(board.scenes[1].voiceover.as_ref().unwrap().id, "custom-1");
        assert!(matches!(
            board.scenes[1].voiceover.as_ref().unwrap().source,
            VoiceSource::Custom { .. }
        ));

        assert!(board.progress().all_done());
        assert!(board.is_complete());
    }

    #[test]
    fn voice_for_all_scenes() {
        let mut board = matched_board("One.\n\nTwo.\n\nThree.");
        board.assign_ai_voice_all(find_voice("sophie-fr").unwrap());
        let ids: Vec<_> = board
            .scenes
            .iter()
            .map(|s| s.voiceover.as_ref().unwrap().id.clone())
            .collect();
        assert_eq!(ids, vec!["sophie-fr-0", "sophie-fr-1", "sophie-fr-2"]);
    }

    #[test]
    fn unknown_voice_errors() {
        let mut board = matched_board("One.");
        assert!(matches!(
            board.assign_voice_by_id(0, "robot-zz"),
            Err(ReelscriptError::UnknownVoice(id)) if id == "robot-zz"
        ));
    }

    #[test]
    fn style_update_is_validated() {
        let mut board = matched_board("One.");
        let patch = TextStylePatch {
            animation: Some(TextAnimation::Zoom),
            ..TextStylePatch::default()
        };
        board.update_style(0, &patch).unwrap();
        assert_eq!(board.scenes[0].text_style.animation, TextAnimation::Zoom);

        let bad = TextStylePatch {
            font_size: Some(10),
            animation: Some(TextAnimation::Slide),
            ..TextStylePatch::default()
        };
        assert!(board.update_style(0, &bad).is_err());
        assert_eq!(board.scenes[0].text_style.animation, TextAnimation::Zoom);
    }

    #[test]
    fn empty_board_progress() {
        let board = Storyboard::default();
        let progress = board.progress();
        assert!(!progress.script);
        assert!(progress.visuals && progress.voiceover);
        assert!(!board.is_complete());
    }

    #[test]
    fn from_draft_requires_ready_draft() {
        let segmenter = Segmenter::new().unwrap();
        let mut draft = ScriptDraft::new();
        assert!(matches!(
            Storyboard::from_draft(&draft, 5),
            Err(ReelscriptError::DraftNotReady(_))
        ));

        draft.set_script("Hook.\n\nPayoff.", &segmenter);
        let board = Storyboard::from_draft(&draft, 7).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.scenes[1].duration_secs, 7);
    }
}
