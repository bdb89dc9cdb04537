//! Space Rocks headless driver
//!
//! Loads settings, plays a scripted round and logs the outcome. A windowed
//! frontend replays the recorded blits and drains the audio queue each frame.
//!
//! Usage: `space-rocks [settings.json] [assets.json]`

use space_rocks::renderer::FrameRecorder;
use space_rocks::sim::{GamePhase, GameState, TickInput, tick};
use space_rocks::{AssetManifest, AudioManager, Settings};

/// Frames to simulate before giving up on the round
const MAX_FRAMES: u64 = 60 * 60;

/// Autopilot: spin slowly, thrust in short bursts, fire every 8th frame
fn scripted_input(frame: u64) -> TickInput {
    TickInput {
        rotate_cw: frame % 3 == 0,
        rotate_ccw: false,
        thrust: frame % 240 < 10,
        shoot: frame % 8 == 0,
    }
}

fn main() {
    env_logger::init();
    log::info!("Space Rocks (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let assets = match args.next() {
        Some(path) => match AssetManifest::load(&path) {
            Ok(assets) => assets,
            Err(e) => {
                log::error!("Cannot load assets from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AssetManifest::default(),
    };

    let mut state = match GameState::new(&settings, &assets) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start round: {}", e);
            std::process::exit(1);
        }
    };

    let mut audio = AudioManager::new();
    settings.apply_audio(&mut audio);
    let mut frame = FrameRecorder::new(settings.width, settings.height);
    let mut sounds_played = 0usize;

    while state.phase == GamePhase::Playing && state.time_ticks < MAX_FRAMES {
        let input = scripted_input(state.time_ticks);
        tick(&mut state, &input, &mut audio);

        frame.clear();
        state.draw(&mut frame);
        sounds_played += audio.drain().len();

        for event in &state.events {
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
    }

    log::info!(
        "Round over after {} frames: {:?} ({} asteroids left, {} sounds, {} blits last frame)",
        state.time_ticks,
        state.phase,
        state.asteroids.len(),
        sounds_played,
        frame.blits.len()
    );
}
