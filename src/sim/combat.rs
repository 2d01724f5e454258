//! Hitscan shooting, combo multiplier and score awards

use super::collision::ray_sphere;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// What a fired shot did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit { enemy_id: u32, points: u32 },
    Miss,
}

/// Combo multiplier in tenths (10 = 1.0x)
pub fn multiplier_tenths(combo: u32) -> u32 {
    match combo {
        0..=1 => 10,
        2..=4 => 12,
        5..=7 => 15,
        _ => 20,
    }
}

/// Combo multiplier as shown to the player
pub fn combo_multiplier(combo: u32) -> f32 {
    multiplier_tenths(combo) as f32 / 10.0
}

/// Base points for a hit; rises by 5 every 10 seconds of the round
pub fn base_points(round_ticks: u64) -> u32 {
    let elapsed_seconds = round_ticks / TICKS_PER_SECOND as u64;
    10 + (elapsed_seconds / 10) as u32 * 5
}

/// Points for a hit: floor(base × multiplier)
pub fn score_delta(base: u32, combo: u32) -> u32 {
    base * multiplier_tenths(combo) / 10
}

/// Fire the weapon through the crosshair
///
/// Returns `None` if the shot was not taken (not playing, or still cooling
/// down). Otherwise the ray is tested against every live enemy and the
/// nearest one is destroyed.
pub fn fire(state: &mut GameState) -> Option<ShotOutcome> {
    if state.phase != GamePhase::Playing || state.fire_cooldown > 0 {
        return None;
    }

    state.fire_cooldown = FIRE_COOLDOWN_TICKS;
    state.shots_fired += 1;
    state.events.push(GameEvent::ShotFired);

    let origin = state.player.pos;
    let dir = state.player.look_dir();

    let nearest = state
        .enemies
        .iter()
        .filter_map(|e| ray_sphere(origin, dir, e.pos, e.shape.hit_radius()).map(|hit| (e.id, hit)))
        .min_by(|a, b| {
            a.1.distance
                .partial_cmp(&b.1.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some((enemy_id, hit)) = nearest else {
        state.combo = 0;
        state.events.push(GameEvent::ShotMissed);
        return Some(ShotOutcome::Miss);
    };

    state.hits += 1;
    if let Some(enemy) = state.remove_enemy(enemy_id) {
        state.explode(enemy.pos);
    }

    state.combo += 1;
    state.max_combo = state.max_combo.max(state.combo);
    state.last_hit_tick = state.round_ticks;

    let points = score_delta(base_points(state.round_ticks), state.combo);
    state.score += points;

    state.events.push(GameEvent::EnemyHit {
        enemy_id,
        point: hit.point.to_array(),
        points,
        combo: state.combo,
    });

    Some(ShotOutcome::Hit { enemy_id, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::{Enemy, EnemyColor, EnemyShape};
    use glam::Vec3;
    use proptest::prelude::*;

    /// Playing state with a single target straight ahead of the spawn point
    fn state_with_targets(distances: &[f32]) -> GameState {
        let mut state = GameState::new(11);
        state.begin_round();
        state.enemies.clear();
        for &d in distances {
            let id = state.next_entity_id();
            state.enemies.push(Enemy {
                id,
                pos: Vec3::new(0.0, PLAYER_HEIGHT, PLAYER_SPAWN_Z - d),
                vel: Vec3::ZERO,
                rotation: Vec3::ZERO,
                angular_vel: Vec3::ZERO,
                health: 1,
                shape: EnemyShape::Sphere,
                color: EnemyColor::Blue,
            });
        }
        state
    }

    #[test]
    fn test_multiplier_steps() {
        assert_eq!(combo_multiplier(0), 1.0);
        assert_eq!(combo_multiplier(1), 1.0);
        assert_eq!(combo_multiplier(2), 1.2);
        assert_eq!(combo_multiplier(4), 1.2);
        assert_eq!(combo_multiplier(5), 1.5);
        assert_eq!(combo_multiplier(7), 1.5);
        assert_eq!(combo_multiplier(8), 2.0);
        assert_eq!(combo_multiplier(100), 2.0);
    }

    #[test]
    fn test_base_points_rise_over_time() {
        assert_eq!(base_points(0), 10);
        assert_eq!(base_points(599), 10);
        assert_eq!(base_points(600), 15);
        assert_eq!(base_points(3599), 35);
    }

    #[test]
    fn test_score_delta_floors() {
        assert_eq!(score_delta(10, 3), 12);
        assert_eq!(score_delta(15, 2), 18);
        assert_eq!(score_delta(25, 3), 30);
        assert_eq!(score_delta(35, 4), 42);
        assert_eq!(score_delta(15, 5), 22);
        assert_eq!(score_delta(35, 9), 70);
    }

    #[test]
    fn test_hit_destroys_nearest() {
        let mut state = state_with_targets(&[12.0, 6.0]);
        let far_id = state.enemies[0].id;
        let near_id = state.enemies[1].id;

        let outcome = fire(&mut state).unwrap();
        assert_eq!(outcome, ShotOutcome::Hit { enemy_id: near_id, points: 10 });
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].id, far_id);
        assert_eq!(state.hits, 1);
        assert_eq!(state.shots_fired, 1);
        assert_eq!(state.combo, 1);
        assert_eq!(state.score, 10);
        assert_eq!(state.particles.len(), BURST_SIZE);
    }

    #[test]
    fn test_miss_resets_combo() {
        let mut state = state_with_targets(&[]);
        state.combo = 6;
        state.max_combo = 6;
        assert_eq!(fire(&mut state), Some(ShotOutcome::Miss));
        assert_eq!(state.combo, 0);
        assert_eq!(state.max_combo, 6);
        assert_eq!(state.shots_fired, 1);
        assert_eq!(state.hits, 0);
        assert!(state.events.contains(&GameEvent::ShotMissed));
    }

    #[test]
    fn test_cooldown_blocks_fire() {
        let mut state = state_with_targets(&[5.0]);
        state.fire_cooldown = 3;
        assert_eq!(fire(&mut state), None);
        assert_eq!(state.shots_fired, 0);
        assert_eq!(state.enemies.len(), 1);
        assert!(!state.events.contains(&GameEvent::ShotFired));
    }

    #[test]
    fn test_fire_sets_cooldown() {
        let mut state = state_with_targets(&[]);
        fire(&mut state);
        assert_eq!(state.fire_cooldown, FIRE_COOLDOWN_TICKS);
        assert_eq!(fire(&mut state), None);
        assert_eq!(state.shots_fired, 1);
    }

    #[test]
    fn test_no_fire_outside_round() {
        let mut state = GameState::new(1);
        assert_eq!(fire(&mut state), None);
        assert_eq!(state.shots_fired, 0);
    }

    #[test]
    fn test_third_consecutive_hit() {
        let mut state = state_with_targets(&[4.0, 8.0, 12.0]);
        // 25 seconds in: base is 20
        state.round_ticks = 25 * 60;
        for _ in 0..3 {
            state.fire_cooldown = 0;
            fire(&mut state);
        }
        assert_eq!(state.combo, 3);
        assert_eq!(combo_multiplier(state.combo), 1.2);
        // 20 + 24 + 24
        assert_eq!(state.score, 68);
        assert_eq!(state.max_combo, 3);
        assert_eq!(state.last_hit_tick, 25 * 60);
    }

    #[test]
    fn test_hit_event_points_match_score() {
        let mut state = state_with_targets(&[4.0]);
        state.combo = 4;
        state.round_ticks = 45 * 60;
        fire(&mut state);
        let points = state.events.iter().find_map(|e| match e {
            GameEvent::EnemyHit { points, .. } => Some(*points),
            _ => None,
        });
        // Base 30 at combo 5 (1.5x)
        assert_eq!(points, Some(45));
        assert_eq!(state.score, 45);
    }

    proptest! {
        #[test]
        fn prop_multiplier_monotonic(a in 0u32..1000, b in 0u32..1000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(combo_multiplier(lo) <= combo_multiplier(hi));
        }

        #[test]
        fn prop_score_delta_matches_float_formula(ticks in 0u64..3600, combo in 0u32..20) {
            let base = base_points(ticks);
            let expected = (base as f64 * combo_multiplier(combo) as f64 + 1e-6).floor() as u32;
            prop_assert_eq!(score_delta(base, combo), expected);
        }
    }
}
