//! Game state and core simulation types
//!
//! Everything that changes during a round lives in `GameState`.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::particles::Particle;
use super::player::Player;
use crate::consts::*;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a username and a start trigger
    Start,
    /// Active gameplay
    Playing,
    /// Timer ran out, results are final
    Ended,
}

/// Things that happened this tick, for sound/visual feedback
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    ShotFired,
    EnemyHit {
        enemy_id: u32,
        /// Where the ray struck
        point: [f32; 3],
        /// Score awarded (same value the floating label shows)
        points: u32,
        combo: u32,
    },
    ShotMissed,
    EnemySpawned {
        enemy_id: u32,
    },
    ComboExpired,
    RoundEnded {
        score: u32,
        accuracy: f32,
    },
    /// The finished round made the leaderboard (1-based rank)
    LeaderboardPlaced {
        rank: usize,
    },
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Consecutive hits
    pub combo: u32,
    /// Best combo this round
    pub max_combo: u32,
    /// Round tick of the most recent hit
    pub last_hit_tick: u64,
    /// Ticks simulated this round
    pub round_ticks: u64,
    /// Ticks since the last spawn wave
    pub spawn_timer: u32,
    /// Ticks until the weapon can fire again
    pub fire_cooldown: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub player: Player,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Live explosion fragments
    pub particles: Vec<Particle>,
    /// Maximum live particles
    pub particle_cap: usize,
    /// Fragments per destroyed enemy
    pub burst_size: usize,
    /// Pending feedback events (drained by the presentation layer)
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0,
            combo: 0,
            max_combo: 0,
            last_hit_tick: 0,
            round_ticks: 0,
            spawn_timer: 0,
            fire_cooldown: 0,
            shots_fired: 0,
            hits: 0,
            player: Player::default(),
            enemies: Vec::new(),
            particles: Vec::new(),
            particle_cap: 500,
            burst_size: BURST_SIZE,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset every round-scoped field and enter `Playing` with fresh enemies
    pub fn begin_round(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.combo = 0;
        self.max_combo = 0;
        self.last_hit_tick = 0;
        self.round_ticks = 0;
        self.spawn_timer = 0;
        self.fire_cooldown = 0;
        self.shots_fired = 0;
        self.hits = 0;
        self.player = Player::default();
        self.enemies.clear();
        self.particles.clear();
        self.events.clear();

        for _ in 0..INITIAL_ENEMIES {
            self.spawn_enemy();
        }
    }

    /// Spawn one enemy unless the arena is full
    ///
    /// Returns the new enemy's ID, or `None` at the cap.
    pub fn spawn_enemy(&mut self) -> Option<u32> {
        if self.enemies.len() >= MAX_ENEMIES {
            return None;
        }
        let id = self.next_entity_id();
        let enemy = Enemy::spawn(id, &mut self.rng);
        log::debug!("Spawned enemy {} ({:?}) at {:?}", id, enemy.shape, enemy.pos);
        self.enemies.push(enemy);
        self.events.push(GameEvent::EnemySpawned { enemy_id: id });
        Some(id)
    }

    /// Remove an enemy by ID, returning it
    pub fn remove_enemy(&mut self, id: u32) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Spawn an explosion at `origin` using the current particle settings
    pub fn explode(&mut self, origin: Vec3) {
        super::particles::spawn_burst(
            &mut self.particles,
            origin,
            self.burst_size,
            self.particle_cap,
            &mut self.rng,
        );
    }

    /// Seconds elapsed this round
    pub fn elapsed_seconds(&self) -> f32 {
        self.round_ticks as f32 / TICKS_PER_SECOND as f32
    }

    /// Seconds left on the round timer (goes to zero or slightly below)
    pub fn time_left(&self) -> f32 {
        ROUND_SECONDS - self.elapsed_seconds()
    }

    /// Ticks since the most recent hit
    pub fn ticks_since_hit(&self) -> u64 {
        self.round_ticks.saturating_sub(self.last_hit_tick)
    }

    /// Hits over shots, rounded to two decimals (0 with no shots)
    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        let raw = self.hits as f32 / self.shots_fired as f32;
        (raw * 100.0).round() / 100.0
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.enemies.is_empty());
        assert_eq!(state.time_left(), ROUND_SECONDS);
    }

    #[test]
    fn test_begin_round() {
        let mut state = GameState::new(42);
        state.score = 99;
        state.combo = 4;
        state.round_ticks = 1234;
        state.player.yaw = 1.0;
        state.begin_round();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.time_left(), 60.0);
        assert_eq!(state.enemies.len(), INITIAL_ENEMIES);
        assert_eq!(state.player, Player::default());
    }

    #[test]
    fn test_spawn_cap() {
        let mut state = GameState::new(5);
        for _ in 0..MAX_ENEMIES {
            assert!(state.spawn_enemy().is_some());
        }
        assert_eq!(state.spawn_enemy(), None);
        assert_eq!(state.enemies.len(), MAX_ENEMIES);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(5);
        state.begin_round();
        state.begin_round();
        let mut ids: Vec<u32> = state.enemies.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), INITIAL_ENEMIES);
    }

    #[test]
    fn test_accuracy() {
        let mut state = GameState::new(1);
        assert_eq!(state.accuracy(), 0.0);
        state.shots_fired = 3;
        state.hits = 2;
        assert!((state.accuracy() - 0.67).abs() < 1e-6);
        state.shots_fired = 8;
        state.hits = 8;
        assert_eq!(state.accuracy(), 1.0);
    }

    #[test]
    fn test_time_left_reaches_zero() {
        let mut state = GameState::new(1);
        state.round_ticks = ROUND_TICKS as u64 - 1;
        assert!(state.time_left() > 0.0);
        state.round_ticks = ROUND_TICKS as u64;
        assert!(state.time_left() <= 0.0);
    }
}
