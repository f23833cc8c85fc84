//! Mood-driven scene director for audio-reactive lighting.
//!
//! Audio features arrive once per tick; [`mood::MoodHistory`] classifies
//! them and predicts where the mood is heading, and
//! [`director::SceneDirector`] uses that to pick scenes and sprinkle
//! short-lived reactive layers on top.

pub mod audio;
pub mod clock;
pub mod director;
pub mod layer;
pub mod mood;
pub mod random;
pub mod scene;
pub mod settings;

pub use audio::AudioFeatures;
pub use director::{DirectorPhase, ReactiveInjector, SceneDirector};
pub use mood::{MoodHistory, MoodSnapshot, MoodType};
