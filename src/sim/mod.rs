//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod combat;
pub mod enemy;
pub mod particles;
pub mod player;
pub mod state;
pub mod tick;

pub use arena::{Pillar, pillars};
pub use collision::{RayHit, ray_sphere};
pub use combat::{ShotOutcome, base_points, combo_multiplier, fire, score_delta};
pub use enemy::{Enemy, EnemyColor, EnemyShape};
pub use particles::Particle;
pub use player::{MoveIntent, Player};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
