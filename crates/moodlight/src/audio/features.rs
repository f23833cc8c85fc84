use serde::{Deserialize, Serialize};

/// Per-tick features delivered by the extraction stage. Level and band
/// fields are normalized to 0.0-1.0; `bpm` and `frequency` are absolute.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioFeatures {
    pub volume: f32,            // Smoothed input level
    pub loudness: f32,          // Perceptual loudness
    pub peak: f32,              // Short-window peak
    pub average: f32,           // Long-window mean level
    pub agc_level: f32,         // Auto gain control multiplier
    pub bass: f32,              // Low band energy
    pub mid: f32,               // Mid band energy
    pub treble: f32,            // High band energy
    pub spectrum_centroid: f32, // Spectral centroid (normalized)
    pub dominant_band: i32,     // Index of the strongest band
    pub dynamics: f32,          // Level spread over the recent window
    pub energy: f32,            // Overall loudness-derived intensity
    pub beat_detected: bool,    // Beat onset on this tick
    pub bpm: f32,               // Tempo estimate
    pub bass_hits: i32,         // Bass hits counted in the recent window
    pub noise_floor: f32,       // Estimated background level
    pub signal_presence: bool,  // Input above the noise floor
    pub frequency: f32,         // Dominant frequency in Hz
}

impl Default for AudioFeatures {
    fn default() -> Self {
        Self {
            volume: 0.0,
            loudness: 0.0,
            peak: 0.0,
            average: 0.0,
            agc_level: 1.0,
            bass: 0.0,
            mid: 0.0,
            treble: 0.0,
            spectrum_centroid: 0.0,
            dominant_band: 0,
            dynamics: 0.0,
            energy: 0.0,
            beat_detected: false,
            bpm: 0.0,
            bass_hits: 0,
            noise_floor: 0.0,
            signal_presence: false,
            frequency: 0.0,
        }
    }
}
