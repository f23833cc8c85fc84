use super::features::AudioFeatures;

/// Drifting feature generator standing in for the extraction pipeline.
/// Energy, dynamics and tempo follow bounded random walks; beats fire on
/// the walked tempo.
pub struct SyntheticSource {
    rng: fastrand::Rng,
    energy: f32,
    dynamics: f32,
    bpm: f32,
    beat_phase: f32,
    bass_hits: i32,
}

const BPM_MIN: f32 = 60.0;
const BPM_MAX: f32 = 160.0;

impl SyntheticSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            energy: 0.2,
            dynamics: 0.1,
            bpm: 96.0,
            beat_phase: 0.0,
            bass_hits: 0,
        }
    }

    fn walk(&mut self, value: f32, step: f32, lo: f32, hi: f32) -> f32 {
        let delta = (self.rng.f32() * 2.0 - 1.0) * step;
        (value + delta).clamp(lo, hi)
    }

    /// Advance by `dt` seconds and return the features for this tick.
    pub fn next_features(&mut self, dt: f32) -> AudioFeatures {
        self.energy = self.walk(self.energy, 0.03, 0.0, 1.0);
        self.dynamics = self.walk(self.dynamics, 0.02, 0.0, 1.0);
        self.bpm = self.walk(self.bpm, 0.8, BPM_MIN, BPM_MAX);

        self.beat_phase += dt * self.bpm / 60.0;
        let beat_detected = self.beat_phase >= 1.0;
        if beat_detected {
            self.beat_phase -= self.beat_phase.floor();
            self.bass_hits = (self.bass_hits + 1) % 16;
        }

        let pulse = if beat_detected { 0.25 } else { 0.0 };
        let bass = (self.energy * 0.8 + pulse).min(1.0);
        let mid = self.energy * 0.6;
        let treble = (self.energy * 0.4 + self.dynamics * 0.3).min(1.0);
        let noise_floor = 0.02;

        AudioFeatures {
            volume: self.energy,
            loudness: self.energy.sqrt(),
            peak: (self.energy + self.dynamics * 0.5).min(1.0),
            average: self.energy * 0.9,
            agc_level: 1.0,
            bass,
            mid,
            treble,
            spectrum_centroid: treble / (bass + mid + treble).max(1e-3),
            dominant_band: if bass >= mid && bass >= treble { 0 } else if mid >= treble { 1 } else { 2 },
            dynamics: self.dynamics,
            energy: self.energy,
            beat_detected,
            bpm: self.bpm,
            bass_hits: self.bass_hits,
            noise_floor,
            signal_presence: self.energy > noise_floor,
            frequency: 40.0 + 2000.0 * treble,
        }
    }
}
