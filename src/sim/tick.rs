//! Per-frame simulation tick
//!
//! Applies input, moves everything, resolves collisions and merges spawned
//! objects only after the update pass so no collection changes mid-iteration.

use super::body::GameObject;
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::{AudioSink, SoundEffect};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub thrust: bool,
    /// Fire once this tick (debounce key repeat upstream)
    pub shoot: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, audio: &mut dyn AudioSink) {
    state.events.clear();
    state.time_ticks += 1;

    // Input only applies while the ship exists
    if let Some(ship) = state.ship.as_mut() {
        if input.rotate_cw {
            ship.rotate(true);
        }
        if input.rotate_ccw {
            ship.rotate(false);
        }
        if input.thrust {
            ship.accelerate();
        }
        if input.shoot {
            // Not iterating bullets yet, so the shot joins this frame's pass
            state.bullets.push(ship.shoot(audio));
        }
    }

    // Move
    let bounds = state.bounds;
    if let Some(ship) = state.ship.as_mut() {
        ship.step(bounds);
    }
    for asteroid in &mut state.asteroids {
        asteroid.step(bounds);
    }
    for bullet in &mut state.bullets {
        bullet.step(bounds);
    }

    // Ship vs asteroids
    if let Some(ship) = &state.ship
        && state.asteroids.iter().any(|a| a.collides_with(ship))
    {
        log::info!("Ship destroyed at tick {}", state.time_ticks);
        state.ship = None;
        state.events.push(GameEvent::ShipDestroyed);
        audio.play(SoundEffect::ShipDestroyed);
        if state.phase == GamePhase::Playing {
            state.phase = GamePhase::Lost;
        }
    }

    // Bullets vs asteroids; children are held back until the pass is done
    let mut spawned = Vec::new();
    let mut i = 0;
    while i < state.bullets.len() {
        let bullet = &state.bullets[i];
        let hit = state.asteroids.iter().position(|a| a.collides_with(bullet));
        match hit {
            Some(j) => {
                let asteroid = state.asteroids.remove(j);
                state.bullets.remove(i);
                spawned.extend(asteroid.split(state.rng()));
                state.events.push(GameEvent::AsteroidDestroyed {
                    size: asteroid.size(),
                });
                audio.play(SoundEffect::AsteroidBreak);
            }
            None => i += 1,
        }
    }

    // Bullets have no lifetime; drop them once off-screen
    let before = state.bullets.len();
    state.bullets.retain(|b| !b.is_off_screen(bounds));
    let culled = before - state.bullets.len();
    if culled > 0 {
        log::debug!("Culled {} off-screen bullets", culled);
    }

    state.asteroids.extend(spawned);

    if state.phase == GamePhase::Playing && state.ship.is_some() && state.asteroids.is_empty() {
        log::info!("All asteroids destroyed at tick {}", state.time_ticks);
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
    }
}
