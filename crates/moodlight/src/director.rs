use crate::audio::AudioFeatures;
use crate::clock::{Millis, elapsed};
use crate::layer::{LayerSink, LayerType};
use crate::mood::MoodHistory;
use crate::random::RandomSource;
use crate::scene::{SceneDefinition, SceneSelector, SceneStateControl};
use crate::settings::DirectorConfig;

/// Whether the director has put a scene on screen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorPhase {
    NoActiveScene,
    SceneActive,
}

/// Probabilistic scheduler for short-lived layers. Each trigger owns its
/// cooldown; the cooldowns start at 0, so a trigger cannot fire until its
/// cooldown has elapsed from controller start.
pub struct ReactiveInjector {
    max_active_layers: usize,
    beat_cooldown_ms: Millis,
    beat_chance_pct: u32,
    energy_threshold: f32,
    energy_cooldown_ms: Millis,
    energy_chance_pct: u32,
    ambient_chance_per_mille: u32,
    last_beat_effect: Millis,
    last_energy_effect: Millis,
}

impl ReactiveInjector {
    pub fn new() -> Self {
        Self::from_config(&DirectorConfig::default())
    }

    pub fn from_config(config: &DirectorConfig) -> Self {
        Self {
            max_active_layers: config.max_active_layers,
            beat_cooldown_ms: config.beat_cooldown_ms,
            beat_chance_pct: config.beat_chance_pct,
            energy_threshold: config.energy_threshold,
            energy_cooldown_ms: config.energy_cooldown_ms,
            energy_chance_pct: config.energy_chance_pct,
            ambient_chance_per_mille: config.ambient_chance_per_mille,
            last_beat_effect: 0,
            last_energy_effect: 0,
        }
    }

    /// Run the beat, energy and ambient triggers in that order and return
    /// how many layers were added.
    ///
    /// The layer cap is checked once on entry. Triggers that fire in the same
    /// call are not re-checked against it, so one call can take the stack
    /// past the cap.
    pub fn maybe_inject(
        &mut self,
        layers: &mut impl LayerSink,
        audio: &AudioFeatures,
        now: Millis,
        rng: &mut impl RandomSource,
    ) -> usize {
        if layers.active_count() >= self.max_active_layers {
            return 0;
        }
        let mut added = 0;

        if audio.beat_detected && elapsed(now, self.last_beat_effect) > self.beat_cooldown_ms {
            if rng.chance(self.beat_chance_pct, 100) {
                layers.add_layer_by_type(LayerType::Reactive);
                self.last_beat_effect = now;
                added += 1;
            }
        }

        if audio.energy > self.energy_threshold
            && elapsed(now, self.last_energy_effect) > self.energy_cooldown_ms
        {
            if rng.chance(self.energy_chance_pct, 100) {
                layers.add_layer_by_type(LayerType::Overlay);
                self.last_energy_effect = now;
                added += 1;
            }
        }

        if rng.chance(self.ambient_chance_per_mille, 1000) {
            layers.add_layer_by_type(LayerType::MoodArc);
            added += 1;
        }

        if added > 0 {
            log::debug!("Injected {added} layer(s) at {now} ms");
        }
        added
    }
}

impl Default for ReactiveInjector {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives scene changes from the mood history.
///
/// Owns the history, the cooldowns and the random source; borrows the
/// scene catalog for `'r`, which every active-scene reference points into.
pub struct SceneDirector<'r, R, S, G> {
    registry: &'r R,
    state: S,
    mood: MoodHistory,
    injector: ReactiveInjector,
    rng: G,
    scene_log_interval_ms: Millis,
    last_scene_log: Millis,
}

impl<'r, R, S, G> SceneDirector<'r, R, S, G>
where
    R: SceneSelector,
    S: SceneStateControl<'r>,
    G: RandomSource,
{
    pub fn new(registry: &'r R, state: S, rng: G) -> Self {
        Self::with_config(registry, state, &DirectorConfig::default(), rng)
    }

    pub fn with_config(registry: &'r R, state: S, config: &DirectorConfig, rng: G) -> Self {
        Self {
            registry,
            state,
            mood: MoodHistory::with_limits(config.history_capacity, config.min_prediction_samples),
            injector: ReactiveInjector::from_config(config),
            rng,
            scene_log_interval_ms: config.scene_log_interval_ms,
            last_scene_log: 0,
        }
    }

    /// Put the first scene on screen, chosen from the current mood.
    pub fn begin(&mut self) {
        let registry: &'r R = self.registry;
        let snapshot = self.mood.current_snapshot();
        let scene = registry.pick_scene_by_mood(self.state.active_scene(), snapshot);
        self.state.begin_scene(scene, snapshot);
    }

    /// Feed one tick. The history is refreshed before the transition check;
    /// a due transition picks from the predicted mood. Returns true when a
    /// new scene began.
    pub fn update(&mut self, features: &AudioFeatures, now: Millis) -> bool {
        self.mood.update(features, now);

        let registry: &'r R = self.registry;
        let current = self.mood.current_snapshot();
        if !self.state.should_transition(current) {
            return false;
        }
        let next = registry.pick_scene_by_mood(
            self.state.active_scene(),
            self.mood.predicted_snapshot(),
        );
        self.state.begin_scene(next, current);
        true
    }

    /// Switch now, chosen from the current mood rather than the prediction.
    pub fn force_next_scene(&mut self) {
        let registry: &'r R = self.registry;
        let current = self.mood.current_snapshot();
        let next = registry.pick_scene_by_mood(self.state.active_scene(), current);
        self.state.begin_scene(next, current);
    }

    pub fn maybe_inject_reactive_layer(
        &mut self,
        layers: &mut impl LayerSink,
        audio: &AudioFeatures,
        now: Millis,
    ) -> usize {
        self.injector.maybe_inject(layers, audio, now, &mut self.rng)
    }

    /// Log the active scene name, at most once per log interval.
    /// Returns true when a line was written.
    pub fn log_active_scene(&mut self, now: Millis) -> bool {
        if elapsed(now, self.last_scene_log) <= self.scene_log_interval_ms {
            return false;
        }
        self.last_scene_log = now;
        log::info!(
            "[Scene] {} | mood {} -> {}",
            self.current_scene_name(),
            self.mood.current_mood_name(),
            self.mood.predicted_mood_name()
        );
        true
    }

    pub fn phase(&self) -> DirectorPhase {
        match self.state.active_scene() {
            Some(_) => DirectorPhase::SceneActive,
            None => DirectorPhase::NoActiveScene,
        }
    }

    pub fn active_scene(&self) -> Option<&'r SceneDefinition> {
        self.state.active_scene()
    }

    pub fn current_scene_name(&self) -> &str {
        self.active_scene().map_or("None", |s| s.name.as_str())
    }

    pub fn mood(&self) -> &MoodHistory {
        &self.mood
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}
