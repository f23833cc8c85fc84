use crate::audio::AudioFeatures;
use crate::clock::Millis;

/// One tick's features, frozen at the time they arrived.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoodSnapshot {
    pub volume: f32,
    pub loudness: f32,
    pub peak: f32,
    pub average: f32,
    pub agc_level: f32,

    pub bass: f32,
    pub mid: f32,
    pub treble: f32,

    pub spectrum_centroid: f32,
    pub dominant_band: i32,
    pub dynamics: f32,
    pub energy: f32,

    pub beat_detected: bool,
    pub bpm: f32,
    pub bass_hits: i32,

    pub noise_floor: f32,
    pub signal_presence: bool,

    pub frequency: f32,

    pub timestamp: Millis,
}

impl MoodSnapshot {
    pub fn capture(f: &AudioFeatures, timestamp: Millis) -> Self {
        Self {
            volume: f.volume,
            loudness: f.loudness,
            peak: f.peak,
            average: f.average,
            agc_level: f.agc_level,
            bass: f.bass,
            mid: f.mid,
            treble: f.treble,
            spectrum_centroid: f.spectrum_centroid,
            dominant_band: f.dominant_band,
            dynamics: f.dynamics,
            energy: f.energy,
            beat_detected: f.beat_detected,
            bpm: f.bpm,
            bass_hits: f.bass_hits,
            noise_floor: f.noise_floor,
            signal_presence: f.signal_presence,
            frequency: f.frequency,
            timestamp,
        }
    }

    /// Snapshot carrying only the fields the classifier reads.
    pub fn from_mood_inputs(energy: f32, bpm: f32, dynamics: f32) -> Self {
        Self {
            energy,
            bpm,
            dynamics,
            ..Self::default()
        }
    }
}

impl Default for MoodSnapshot {
    fn default() -> Self {
        Self::capture(&AudioFeatures::default(), 0)
    }
}
