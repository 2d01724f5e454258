//! Fixed timestep simulation tick
//!
//! Advances one round by a single 1/60 s step.

use super::particles::update_particles;
use super::player::MoveIntent;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub movement: MoveIntent,
    /// Jump pressed since the last tick
    pub jump: bool,
}

/// Advance the game state by one fixed timestep
///
/// Order: weapon cooldown, player movement, enemy motion, combo expiry,
/// spawn cadence, particles, round timer, end check. Does nothing unless
/// the round is being played.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.fire_cooldown = state.fire_cooldown.saturating_sub(1);

    // Player
    if input.jump {
        state.player.jump();
    }
    state.player.walk(input.movement, dt);
    state.player.fall(dt);

    // Enemies
    for enemy in &mut state.enemies {
        enemy.step();
    }

    // Combo window
    if state.combo > 0 && state.ticks_since_hit() > COMBO_WINDOW_TICKS {
        state.combo = 0;
        state.events.push(GameEvent::ComboExpired);
    }

    // Spawn waves
    state.spawn_timer += 1;
    if state.spawn_timer >= SPAWN_INTERVAL_TICKS {
        state.spawn_timer = 0;
        for _ in 0..SPAWN_BATCH {
            state.spawn_enemy();
        }
    }

    update_particles(&mut state.particles);

    // Round timer
    state.round_ticks += 1;
    if state.time_left() <= 0.0 {
        state.phase = GamePhase::Ended;
        let accuracy = state.accuracy();
        log::info!(
            "Round over: score {}, accuracy {:.0}%, max combo {}",
            state.score,
            accuracy * 100.0,
            state.max_combo
        );
        state.events.push(GameEvent::RoundEnded {
            score: state.score,
            accuracy,
        });
    }
}
