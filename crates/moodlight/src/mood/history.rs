use std::collections::VecDeque;

use super::classifier::classify;
use super::snapshot::MoodSnapshot;
use super::types::MoodType;
use crate::audio::AudioFeatures;
use crate::clock::Millis;

/// ~6 seconds at 25 updates per second.
pub const HISTORY_CAPACITY: usize = 150;
/// Below this many snapshots the prediction is the current mood.
pub const MIN_PREDICTION_SAMPLES: usize = 10;

/// Bounded window of recent snapshots plus the moods derived from it.
pub struct MoodHistory {
    history: VecDeque<MoodSnapshot>,
    capacity: usize,
    min_prediction_samples: usize,

    current: MoodSnapshot,
    predicted: MoodSnapshot,
    current_mood: MoodType,
    predicted_mood: MoodType,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::with_limits(HISTORY_CAPACITY, MIN_PREDICTION_SAMPLES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_limits(capacity, MIN_PREDICTION_SAMPLES)
    }

    /// `capacity` is clamped to at least 1.
    pub fn with_limits(capacity: usize, min_prediction_samples: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: VecDeque::with_capacity(capacity + 1),
            capacity,
            min_prediction_samples,
            current: MoodSnapshot::default(),
            predicted: MoodSnapshot::default(),
            current_mood: MoodType::Unknown,
            predicted_mood: MoodType::Unknown,
        }
    }

    /// Record this tick's features and recompute both moods.
    pub fn update(&mut self, features: &AudioFeatures, now: Millis) {
        let snapshot = MoodSnapshot::capture(features, now);

        self.current = snapshot;
        self.history.push_back(snapshot);
        if self.history.len() > self.capacity {
            self.history.pop_front();
        }

        let previous = self.current_mood;
        self.current_mood = classify(&snapshot);
        let (predicted_mood, predicted) = self.predict_next_mood();
        self.predicted_mood = predicted_mood;
        self.predicted = predicted;

        if previous != self.current_mood {
            log::debug!(
                "Mood {} -> {} (predicted {})",
                previous,
                self.current_mood,
                self.predicted_mood
            );
        }
    }

    /// Classify the window average of energy, bpm and dynamics.
    fn predict_next_mood(&self) -> (MoodType, MoodSnapshot) {
        if self.history.len() < self.min_prediction_samples {
            return (self.current_mood, self.current);
        }

        let mut energy = 0.0f32;
        let mut bpm = 0.0f32;
        let mut dynamics = 0.0f32;
        for m in &self.history {
            energy += m.energy;
            bpm += m.bpm;
            dynamics += m.dynamics;
        }
        let n = self.history.len() as f32;

        let synthetic = MoodSnapshot::from_mood_inputs(energy / n, bpm / n, dynamics / n);
        (classify(&synthetic), synthetic)
    }

    pub fn current_snapshot(&self) -> &MoodSnapshot {
        &self.current
    }

    /// Averaged snapshot the prediction was made from (the current snapshot
    /// while the window is too short to predict).
    pub fn predicted_snapshot(&self) -> &MoodSnapshot {
        &self.predicted
    }

    pub fn current_mood(&self) -> MoodType {
        self.current_mood
    }

    pub fn predicted_mood(&self) -> MoodType {
        self.predicted_mood
    }

    pub fn current_mood_name(&self) -> &'static str {
        self.current_mood.display_name()
    }

    pub fn predicted_mood_name(&self) -> &'static str {
        self.predicted_mood.display_name()
    }

    /// Oldest first.
    pub fn history(&self) -> &VecDeque<MoodSnapshot> {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MoodHistory {
    fn default() -> Self {
        Self::new()
    }
}
