use super::types::SceneDefinition;
use crate::clock::{Millis, elapsed};
use crate::mood::{MoodSnapshot, MoodType, classify};

/// Tracks the scene on screen and decides when it is time to move on.
///
/// `'r` is the lifetime of the scene catalog: the active scene is a borrow
/// into it, so the catalog must outlive the state holding the reference.
pub trait SceneStateControl<'r> {
    fn should_transition(&self, mood: &MoodSnapshot) -> bool;
    fn begin_scene(&mut self, scene: &'r SceneDefinition, mood: &MoodSnapshot);
    fn active_scene(&self) -> Option<&'r SceneDefinition>;
}

/// Hold-time transition policy: a scene stays for `min_hold_ms`, then
/// yields to a known mood it does not list, and always yields after
/// `max_hold_ms`.
pub struct SceneState<'r> {
    active: Option<&'r SceneDefinition>,
    scene_started_at: Millis,
    transitions: u32,
}

impl<'r> SceneState<'r> {
    pub fn new() -> Self {
        Self {
            active: None,
            scene_started_at: 0,
            transitions: 0,
        }
    }

    pub fn scene_started_at(&self) -> Millis {
        self.scene_started_at
    }

    /// Number of scenes begun so far.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

impl Default for SceneState<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> SceneStateControl<'r> for SceneState<'r> {
    fn should_transition(&self, mood: &MoodSnapshot) -> bool {
        let Some(scene) = self.active else {
            return false;
        };
        let held = elapsed(mood.timestamp, self.scene_started_at);
        if held >= scene.max_hold_ms {
            return true;
        }
        let now = classify(mood);
        held >= scene.min_hold_ms && now != MoodType::Unknown && !scene.moods.contains(&now)
    }

    fn begin_scene(&mut self, scene: &'r SceneDefinition, mood: &MoodSnapshot) {
        log::info!(
            "Begin scene '{}' (mood {})",
            scene.name,
            classify(mood)
        );
        self.active = Some(scene);
        self.scene_started_at = mood.timestamp;
        self.transitions = self.transitions.wrapping_add(1);
    }

    fn active_scene(&self) -> Option<&'r SceneDefinition> {
        self.active
    }
}
