use crate::clock::{Millis, elapsed};

/// Kind of short-lived decorative layer stacked on top of the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    /// Beat flash.
    Reactive,
    /// Energy swell.
    Overlay,
    /// Slow ambient sweep.
    MoodArc,
}

impl LayerType {
    pub const ALL: &[LayerType] = &[LayerType::Reactive, LayerType::Overlay, LayerType::MoodArc];

    pub fn display_name(&self) -> &'static str {
        match self {
            LayerType::Reactive => "Reactive",
            LayerType::Overlay => "Overlay",
            LayerType::MoodArc => "Mood Arc",
        }
    }

    /// How long a layer of this type stays active.
    pub fn lifetime_ms(&self) -> Millis {
        match self {
            LayerType::Reactive => 600,
            LayerType::Overlay => 2_000,
            LayerType::MoodArc => 8_000,
        }
    }
}

/// What the director needs from the layer stack.
pub trait LayerSink {
    fn active_count(&self) -> usize;
    fn add_layer_by_type(&mut self, layer_type: LayerType);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLayer {
    pub layer_type: LayerType,
    pub started_at: Millis,
}

impl ActiveLayer {
    pub fn expired(&self, now: Millis) -> bool {
        elapsed(now, self.started_at) >= self.layer_type.lifetime_ms()
    }
}

/// Timed layer stack. Call [`LayerManager::tick`] once per frame before
/// injecting so new layers are stamped with the current time.
pub struct LayerManager {
    layers: Vec<ActiveLayer>,
    now: Millis,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            now: 0,
        }
    }

    /// Advance to `now`, dropping layers whose lifetime has elapsed.
    pub fn tick(&mut self, now: Millis) {
        self.now = now;
        self.layers.retain(|l| !l.expired(now));
    }

    pub fn layers(&self) -> &[ActiveLayer] {
        &self.layers
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerSink for LayerManager {
    fn active_count(&self) -> usize {
        self.layers.len()
    }

    fn add_layer_by_type(&mut self, layer_type: LayerType) {
        self.layers.push(ActiveLayer {
            layer_type,
            started_at: self.now,
        });
    }
}
