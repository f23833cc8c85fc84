use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use moodlight::audio::FeatureFeed;
use moodlight::clock::{MonotonicClock, elapsed};
use moodlight::layer::LayerManager;
use moodlight::scene::{SceneRegistry, SceneState};
use moodlight::settings::DirectorConfig;
use moodlight::SceneDirector;

#[derive(Parser, Debug)]
#[command(name = "moodlight", version, about = "Run the mood scene director against a synthetic feature feed")]
struct Cli {
    /// How long to run.
    #[arg(long, default_value_t = 20)]
    seconds: u32,

    /// Seed for the feature feed and layer draws (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Scene catalog JSON (array of scene definitions).
    #[arg(long)]
    scenes: Option<PathBuf>,

    /// Director config JSON (defaults to the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured tick rate.
    #[arg(long)]
    tick_hz: Option<u32>,

    /// Force a scene change every N seconds.
    #[arg(long)]
    force_every: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DirectorConfig::load_from_path(path)
            .with_context(|| format!("loading director config {}", path.display()))?,
        None => DirectorConfig::load(),
    };
    if let Some(hz) = cli.tick_hz {
        config.tick_hz = hz;
    }
    let tick_hz = config.tick_hz.max(1);

    let registry = match &cli.scenes {
        Some(path) => SceneRegistry::load_from_path(path)
            .with_context(|| format!("loading scene catalog {}", path.display()))?,
        None => SceneRegistry::builtin(),
    };

    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    log::info!("Seed {seed}, {} scenes, {tick_hz} Hz", registry.scenes().len());

    let mut feed = FeatureFeed::spawn_synthetic(seed, tick_hz)?;
    let clock = MonotonicClock::new();
    let mut layers = LayerManager::new();
    let mut director = SceneDirector::with_config(
        &registry,
        SceneState::new(),
        &config,
        fastrand::Rng::with_seed(seed.rotate_left(17)),
    );
    director.begin();

    let period = Duration::from_secs_f32(1.0 / tick_hz as f32);
    let run_ms = cli.seconds.saturating_mul(1000);
    let mut last_forced = 0;

    loop {
        let now = clock.now();
        if now >= run_ms {
            break;
        }

        if let Some(features) = feed.latest_features() {
            director.update(&features, now);
            layers.tick(now);
            director.maybe_inject_reactive_layer(&mut layers, &features, now);
        }

        if let Some(every) = cli.force_every {
            if elapsed(now, last_forced) >= every.saturating_mul(1000) {
                director.force_next_scene();
                last_forced = now;
            }
        }

        director.log_active_scene(now);
        thread::sleep(period);
    }

    feed.stop();
    log::info!(
        "Done: {} scenes shown, ending on '{}' with {} active layers",
        director.state().transitions(),
        director.current_scene_name(),
        layers.layers().len()
    );

    Ok(())
}
