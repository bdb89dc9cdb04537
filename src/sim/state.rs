//! Game state: the live-object collections the frame loop owns

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::asteroid::{Asteroid, AsteroidSize};
use super::body::GameObject;
use super::bullet::Bullet;
use super::ship::Spaceship;
use crate::assets::{AssetError, AssetManifest};
use crate::consts::MIN_ASTEROID_DISTANCE;
use crate::renderer::{Sprite, Surface};
use crate::settings::Settings;

/// Placement retries before an asteroid is accepted too close to the ship
const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// Errors raised while starting a round
#[derive(Debug, Error)]
pub enum StartError {
    #[error("playfield must be finite and positive, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ship alive, asteroids remain
    Playing,
    /// Every asteroid destroyed with the ship alive
    Won,
    /// Ship hit an asteroid
    Lost,
}

/// Things that happened during a tick, for HUD/audio/logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AsteroidDestroyed { size: AsteroidSize },
    ShipDestroyed,
    Won,
}

/// Complete round state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield size; positions wrap modulo this
    pub bounds: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// `None` once destroyed
    pub ship: Option<Spaceship>,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Start a round: ship in the middle, large asteroids scattered around it
    pub fn new(settings: &Settings, assets: &AssetManifest) -> Result<Self, StartError> {
        if !settings.has_valid_playfield() {
            return Err(StartError::InvalidPlayfield {
                width: settings.width,
                height: settings.height,
            });
        }
        let bounds = settings.bounds();
        let ship = Spaceship::from_assets(bounds * 0.5, assets)?;
        let asteroid_sprite = assets.load_sprite("asteroid")?;

        let mut state = Self::with_ship(bounds, settings.seed, ship);
        for _ in 0..settings.asteroid_count {
            state.spawn_asteroid(&asteroid_sprite);
        }

        log::info!(
            "Round started: seed={}, playfield={}x{}, asteroids={}",
            settings.seed,
            bounds.x,
            bounds.y,
            state.asteroids.len()
        );
        Ok(state)
    }

    /// A round with only the given ship in it
    pub fn with_ship(bounds: Vec2, seed: u64, ship: Spaceship) -> Self {
        Self {
            seed,
            bounds,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship: Some(ship),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The round's RNG (asteroid velocities, placement)
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Add a large asteroid at a random spot away from the ship
    pub fn spawn_asteroid(&mut self, sprite: &Sprite) {
        let ship_pos = self.ship.as_ref().map(|s| s.body.pos);
        let mut pos = self.random_position();
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            match ship_pos {
                Some(ship_pos) if pos.distance(ship_pos) <= MIN_ASTEROID_DISTANCE => {
                    pos = self.random_position();
                }
                _ => break,
            }
        }
        if let Some(ship_pos) = ship_pos
            && pos.distance(ship_pos) <= MIN_ASTEROID_DISTANCE
        {
            log::warn!("Playfield too small to keep asteroid clear of the ship");
        }

        let asteroid = Asteroid::new(pos, sprite, AsteroidSize::Large, &mut self.rng);
        self.asteroids.push(asteroid);
    }

    fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..self.bounds.x),
            self.rng.random_range(0.0..self.bounds.y),
        )
    }

    /// Draw asteroids, then bullets, then the ship on top
    pub fn draw(&self, surface: &mut dyn Surface) {
        for asteroid in &self.asteroids {
            asteroid.draw(surface);
        }
        for bullet in &self.bullets {
            bullet.draw(surface);
        }
        if let Some(ship) = &self.ship {
            ship.draw(surface);
        }
    }

    /// Number of live objects of every kind
    pub fn object_count(&self) -> usize {
        self.asteroids.len() + self.bullets.len() + usize::from(self.ship.is_some())
    }
}
