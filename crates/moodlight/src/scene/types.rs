use serde::{Deserialize, Serialize};

use crate::clock::Millis;
use crate::mood::MoodType;

/// A named scene in the catalog and the moods it suits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDefinition {
    pub name: String,
    /// Moods this scene is chosen for. Empty = any mood.
    #[serde(default)]
    pub moods: Vec<MoodType>,
    /// Minimum time on screen before a mood change may replace it.
    #[serde(default = "default_min_hold_ms")]
    pub min_hold_ms: Millis,
    /// Scene is replaced after this long regardless of mood.
    #[serde(default = "default_max_hold_ms")]
    pub max_hold_ms: Millis,
}

fn default_min_hold_ms() -> Millis {
    8_000
}

fn default_max_hold_ms() -> Millis {
    45_000
}

impl SceneDefinition {
    pub fn new(name: &str, moods: &[MoodType]) -> Self {
        Self {
            name: name.to_string(),
            moods: moods.to_vec(),
            min_hold_ms: default_min_hold_ms(),
            max_hold_ms: default_max_hold_ms(),
        }
    }

    pub fn with_hold(mut self, min_hold_ms: Millis, max_hold_ms: Millis) -> Self {
        self.min_hold_ms = min_hold_ms;
        self.max_hold_ms = max_hold_ms;
        self
    }

    pub fn suits(&self, mood: MoodType) -> bool {
        self.moods.is_empty() || self.moods.contains(&mood)
    }
}
