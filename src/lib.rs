//! Target Rush - A first-person arena target shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, enemies, combat, particles)
//! - `session`: Round state machine and input ownership
//! - `leaderboard`: In-memory top 10 scores
//! - `snapshot`: Read-only view handed to the renderer and UI
//! - `platform`: Browser/native platform abstraction

pub mod error;
pub mod input;
pub mod leaderboard;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod snapshot;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{ConfigError, StartError};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use session::GameSession;
pub use settings::{QualityPreset, Settings};

use glam::{EulerRot, Quat, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per rendered frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Round length
    pub const ROUND_SECONDS: f32 = 60.0;
    pub const ROUND_TICKS: u32 = 60 * TICKS_PER_SECOND;

    /// Player body
    pub const PLAYER_HEIGHT: f32 = 1.8;
    pub const PLAYER_RADIUS: f32 = 0.5;
    pub const PLAYER_SPAWN_Z: f32 = 5.0;
    /// Walk speed (units/s)
    pub const MOVE_SPEED: f32 = 5.0;
    /// Gravity applied to the player (units/s²)
    pub const GRAVITY: f32 = 9.8;
    /// Upward velocity on jump (units/s)
    pub const JUMP_VELOCITY: f32 = 8.0;

    /// Arena: players are clamped at 23, enemies bounce at 22, walls stand at 25
    pub const PLAYER_BOUNDARY: f32 = 23.0;
    pub const ENEMY_BOUNDARY: f32 = 22.0;
    pub const ARENA_WALL: f32 = 25.0;

    /// Pillars on a ring around the arena center
    pub const PILLAR_COUNT: usize = 8;
    pub const PILLAR_RING_RADIUS: f32 = 15.0;
    pub const PILLAR_RADIUS: f32 = 0.8;
    pub const PILLAR_HEIGHT: f32 = 4.0;
    /// Enemy-vs-pillar collision radius
    pub const ENEMY_PILLAR_RADIUS: f32 = 1.5;
    /// Speed enemies leave a pillar with (units/tick)
    pub const ENEMY_BOUNCE_SPEED: f32 = 0.03;

    /// Enemy spawning
    pub const MAX_ENEMIES: usize = 15;
    pub const INITIAL_ENEMIES: usize = 3;
    pub const SPAWN_INTERVAL_TICKS: u32 = 600;
    pub const SPAWN_BATCH: usize = 2;
    pub const SPAWN_ATTEMPTS: u32 = 20;
    /// Spawn points must keep this distance from every pillar
    pub const SPAWN_PILLAR_CLEARANCE: f32 = 3.0;
    pub const ENEMY_HOVER_HEIGHT: f32 = 1.0;
    /// Max drift per axis (units/tick, symmetric around zero)
    pub const ENEMY_DRIFT: f32 = 0.03;

    /// Weapon
    pub const FIRE_COOLDOWN_TICKS: u32 = 12;

    /// Combo expires after this many ticks without a hit (3 seconds)
    pub const COMBO_WINDOW_TICKS: u64 = 3 * TICKS_PER_SECOND as u64;

    /// Particles
    pub const BURST_SIZE: usize = 20;
    /// Downward acceleration on particles (units/tick²)
    pub const PARTICLE_GRAVITY: f32 = 0.02;
}

/// Look direction for a yaw/pitch pair (camera looks down -Z at rest)
#[inline]
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0) * Vec3::NEG_Z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_direction_at_rest() {
        let dir = look_direction(0.0, 0.0);
        assert!((dir - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_look_direction_yaw_left() {
        // Positive yaw turns the camera toward -X
        let dir = look_direction(std::f32::consts::FRAC_PI_2, 0.0);
        assert!((dir - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_look_direction_pitch_up() {
        let dir = look_direction(0.0, std::f32::consts::FRAC_PI_2);
        assert!((dir - Vec3::Y).length() < 1e-5);
    }
}
