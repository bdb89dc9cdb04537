//! Simulation module
//!
//! Entities and the frame tick. Pure and deterministic:
//! - Seeded RNG only
//! - Spawned objects merge after the update pass
//! - No rendering or platform dependencies beyond the `Surface`/`AudioSink` traits

pub mod asteroid;
pub mod body;
pub mod bullet;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidSize, AsteroidSizeError};
pub use body::{Body, GameObject};
pub use bullet::Bullet;
pub use ship::Spaceship;
pub use state::{GameEvent, GamePhase, GameState, StartError};
pub use tick::{TickInput, tick};
