use std::path::Path;

use thiserror::Error;

use super::types::SceneDefinition;
use crate::mood::{MoodSnapshot, MoodType, classify};

/// Chooses the scene to show for a mood. Pure read: picking never changes
/// the catalog, and the returned reference lives as long as the selector.
pub trait SceneSelector {
    fn pick_scene_by_mood(
        &self,
        active: Option<&SceneDefinition>,
        mood: &MoodSnapshot,
    ) -> &SceneDefinition;
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read scene catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scene catalog is empty")]
    Empty,
}

/// Owns the scene catalog. Never empty.
pub struct SceneRegistry {
    scenes: Vec<SceneDefinition>,
}

impl SceneRegistry {
    pub fn new(scenes: Vec<SceneDefinition>) -> Result<Self, RegistryError> {
        if scenes.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { scenes })
    }

    /// Parse a JSON array of scene definitions.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let scenes: Vec<SceneDefinition> = serde_json::from_str(json)?;
        Self::new(scenes)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&contents)?;
        log::info!(
            "Loaded {} scenes from {}",
            registry.scenes.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Default catalog: at least one scene per mood, plus a catch-all.
    pub fn builtin() -> Self {
        let scenes = vec![
            SceneDefinition::new("Tide Pool", &[MoodType::Calm]),
            SceneDefinition::new("Candle Drift", &[MoodType::Calm, MoodType::Floaty]),
            SceneDefinition::new("Aurora", &[MoodType::Floaty]),
            SceneDefinition::new("Pulse Grid", &[MoodType::Energetic])
                .with_hold(6_000, 30_000),
            SceneDefinition::new("Neon Runner", &[MoodType::Energetic, MoodType::Intense])
                .with_hold(6_000, 30_000),
            SceneDefinition::new("Strobe Storm", &[MoodType::Intense]).with_hold(4_000, 20_000),
            SceneDefinition::new("Slow Rainbow", &[]),
        ];
        Self { scenes }
    }

    pub fn scenes(&self) -> &[SceneDefinition] {
        &self.scenes
    }

    pub fn find(&self, name: &str) -> Option<&SceneDefinition> {
        self.scenes.iter().find(|s| s.name == name)
    }
}

impl SceneSelector for SceneRegistry {
    /// Scenes suited to the classified mood, rotating past the active one.
    /// Falls back to the whole catalog when nothing suits the mood.
    fn pick_scene_by_mood(
        &self,
        active: Option<&SceneDefinition>,
        mood: &MoodSnapshot,
    ) -> &SceneDefinition {
        let mood = classify(mood);
        let mut candidates: Vec<&SceneDefinition> =
            self.scenes.iter().filter(|s| s.suits(mood)).collect();
        if candidates.is_empty() {
            candidates = self.scenes.iter().collect();
        }

        let next = active
            .and_then(|a| candidates.iter().position(|c| c.name == a.name))
            .map_or(0, |i| (i + 1) % candidates.len());
        candidates[next]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn snapshot(energy: f32, dynamics: f32, bpm: f32) -> MoodSnapshot {
        MoodSnapshot::from_mood_inputs(energy, bpm, dynamics)
    }

    fn calm() -> MoodSnapshot {
        snapshot(0.1, 0.05, 70.0)
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(SceneRegistry::new(Vec::new()), Err(RegistryError::Empty)));
        assert!(matches!(SceneRegistry::from_json("[]"), Err(RegistryError::Empty)));
    }

    #[test]
    fn bad_json_is_parse_error() {
        assert!(matches!(
            SceneRegistry::from_json("{not json"),
            Err(RegistryError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SceneRegistry::load_from_path(Path::new("/nonexistent/scenes.json"));
        assert!(matches!(err, Err(RegistryError::Io(_))));
    }

    #[test]
    fn load_from_path_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "A", "moods": ["Calm"]}}, {{"name": "B", "max_hold_ms": 1000}}]"#
        )
        .unwrap();
        let reg = SceneRegistry::load_from_path(file.path()).unwrap();
        assert_eq!(reg.scenes().len(), 2);
        assert_eq!(reg.find("B").unwrap().max_hold_ms, 1000);
    }

    #[test]
    fn builtin_covers_every_classified_mood() {
        let reg = SceneRegistry::builtin();
        for mood in [MoodType::Calm, MoodType::Energetic, MoodType::Intense, MoodType::Floaty] {
            assert!(
                reg.scenes().iter().any(|s| s.moods.contains(&mood)),
                "no scene for {mood}"
            );
        }
    }

    #[test]
    fn first_pick_is_first_suitable_scene() {
        let reg = SceneRegistry::builtin();
        let picked = reg.pick_scene_by_mood(None, &calm());
        assert_eq!(picked.name, "Tide Pool");
    }

    #[test]
    fn pick_rotates_past_active_scene() {
        let reg = SceneRegistry::builtin();
        let first = reg.pick_scene_by_mood(None, &calm());
        let second = reg.pick_scene_by_mood(Some(first), &calm());
        let third = reg.pick_scene_by_mood(Some(second), &calm());
        let fourth = reg.pick_scene_by_mood(Some(third), &calm());
        assert_eq!(second.name, "Candle Drift");
        assert_eq!(third.name, "Slow Rainbow");
        assert_eq!(fourth.name, first.name);
    }

    #[test]
    fn unknown_mood_uses_catch_all_scenes() {
        let reg = SceneRegistry::builtin();
        let picked = reg.pick_scene_by_mood(None, &snapshot(0.5, 0.3, 90.0));
        assert_eq!(picked.name, "Slow Rainbow");
    }

    #[test]
    fn falls_back_to_whole_catalog() {
        let reg = SceneRegistry::new(vec![
            SceneDefinition::new("Only Calm", &[MoodType::Calm]),
            SceneDefinition::new("Only Floaty", &[MoodType::Floaty]),
        ])
        .unwrap();
        let intense = snapshot(0.9, 0.6, 120.0);
        let a = reg.pick_scene_by_mood(None, &intense);
        let b = reg.pick_scene_by_mood(Some(a), &intense);
        assert_eq!(a.name, "Only Calm");
        assert_eq!(b.name, "Only Floaty");
    }

    #[test]
    fn active_outside_candidates_picks_first() {
        let reg = SceneRegistry::builtin();
        let strobe = reg.find("Strobe Storm").unwrap();
        let picked = reg.pick_scene_by_mood(Some(strobe), &calm());
        assert_eq!(picked.name, "Tide Pool");
    }
}
