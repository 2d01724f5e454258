//! Read-only views of a session for the presentation layer
//!
//! The UI gets a `RoundSnapshot` (serializable to JSON) and the renderer
//! gets a `SceneFrame`: a camera pose plus flat per-object instance records
//! that can be uploaded to a GPU buffer as-is.

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;

use crate::consts::{ARENA_WALL, PILLAR_HEIGHT, TICKS_PER_SECOND};
use crate::leaderboard::format_date;
use crate::session::GameSession;
use crate::sim::combat::combo_multiplier;
use crate::sim::{Enemy, GamePhase, GameState, Particle, pillars};

/// Instance kind for explosion fragments (enemy shapes use 0-3)
pub const KIND_PARTICLE: u32 = 4;

/// How long ago the last hit landed, for tinting the combo readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboHeat {
    /// Under a second
    Fresh,
    /// One to two seconds
    Cooling,
    /// Over two seconds, about to expire
    Fading,
}

impl ComboHeat {
    pub fn from_ticks_since_hit(ticks: u64) -> Self {
        let second = TICKS_PER_SECOND as u64;
        if ticks > 2 * second {
            ComboHeat::Fading
        } else if ticks > second {
            ComboHeat::Cooling
        } else {
            ComboHeat::Fresh
        }
    }
}

/// One leaderboard line as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub username: String,
    pub score: u32,
    pub accuracy_percent: u32,
    /// "Just now", "5 mins ago", ...
    pub when: String,
    /// Row belongs to the current player
    pub highlight: bool,
}

/// Everything the HUD and results screen show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub phase: GamePhase,
    pub username: String,
    pub score: u32,
    /// Whole seconds on the timer, rounded up
    pub seconds_left: u32,
    pub combo: u32,
    /// "Combo x1.2 (3)"; absent with no combo
    pub combo_label: Option<String>,
    pub combo_heat: Option<ComboHeat>,
    pub max_combo: u32,
    pub hits: u32,
    pub shots: u32,
    pub accuracy_percent: u32,
    pub enemies: usize,
    pub pointer_captured: bool,
    /// Rank the current score would earn if the round ended now
    pub projected_rank: Option<usize>,
    /// Placement of the last finished round
    pub last_rank: Option<usize>,
    /// Top of the leaderboard
    pub best_score: Option<u32>,
    pub leaderboard: Vec<LeaderboardRow>,
}

impl RoundSnapshot {
    /// Capture the session; `now_ms` drives relative leaderboard dates
    pub fn capture(session: &GameSession, now_ms: f64) -> Self {
        let state = &session.state;
        let combo_label = (state.combo > 0)
            .then(|| format!("Combo x{:.1} ({})", combo_multiplier(state.combo), state.combo));
        let combo_heat = (state.combo > 0)
            .then(|| ComboHeat::from_ticks_since_hit(state.ticks_since_hit()));

        let leaderboard = session
            .leaderboard
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| LeaderboardRow {
                rank: i + 1,
                username: e.username.clone(),
                score: e.score,
                accuracy_percent: (e.accuracy * 100.0).round() as u32,
                when: format_date(e.timestamp, now_ms),
                highlight: !session.username().is_empty() && e.username == session.username(),
            })
            .collect();

        Self {
            phase: state.phase,
            username: session.username().to_string(),
            score: state.score,
            seconds_left: state.time_left().ceil().max(0.0) as u32,
            combo: state.combo,
            combo_label,
            combo_heat,
            max_combo: state.max_combo,
            hits: state.hits,
            shots: state.shots_fired,
            accuracy_percent: (state.accuracy() * 100.0).round() as u32,
            enemies: state.enemies.len(),
            pointer_captured: session.pointer_captured(),
            projected_rank: (state.phase == GamePhase::Playing)
                .then(|| session.leaderboard.potential_rank(state.score))
                .flatten(),
            last_rank: session.last_rank(),
            best_score: session.leaderboard.top_score(),
            leaderboard,
        }
    }
}

/// A pillar as the renderer builds it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PillarLayout {
    /// Base center (y = 0)
    pub base: [f32; 3],
    pub radius: f32,
    pub height: f32,
}

/// Static arena geometry, built once by the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaLayout {
    /// Walls stand at ±this on x and z
    pub wall_half_extent: f32,
    pub pillars: Vec<PillarLayout>,
}

impl ArenaLayout {
    pub fn new() -> Self {
        let pillars = pillars()
            .iter()
            .map(|p| PillarLayout {
                base: [p.center.x, 0.0, p.center.y],
                radius: p.radius,
                height: PILLAR_HEIGHT,
            })
            .collect();
        Self {
            wall_half_extent: ARENA_WALL,
            pillars,
        }
    }
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera placement for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
}

/// A drawable object, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneInstance {
    pub translation: [f32; 3],
    pub scale: f32,
    /// Quaternion (x, y, z, w)
    pub rotation: [f32; 4],
    pub color: [f32; 4],
    /// Enemy shape tag or `KIND_PARTICLE`
    pub kind: u32,
    pub _pad: [u32; 3],
}

impl SceneInstance {
    fn from_euler(translation: Vec3, rotation: Vec3, scale: f32, color: [f32; 4], kind: u32) -> Self {
        Self {
            translation: translation.to_array(),
            scale,
            rotation: Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
                .to_array(),
            color,
            kind,
            _pad: [0; 3],
        }
    }
}

impl From<&Enemy> for SceneInstance {
    fn from(e: &Enemy) -> Self {
        Self::from_euler(e.pos, e.rotation, 1.0, e.color.rgba(), e.shape.tag())
    }
}

impl From<&Particle> for SceneInstance {
    fn from(p: &Particle) -> Self {
        let [r, g, b] = p.color;
        let alpha = p.opacity().clamp(0.0, 1.0);
        Self::from_euler(
            p.pos,
            p.rotation,
            p.radius * p.scale(),
            [r, g, b, alpha],
            KIND_PARTICLE,
        )
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub camera: CameraPose,
    /// Enemies first, then particles
    pub instances: Vec<SceneInstance>,
}

impl SceneFrame {
    pub fn capture(state: &GameState) -> Self {
        let camera = CameraPose {
            position: state.player.pos.to_array(),
            yaw: state.player.yaw,
            pitch: state.player.pitch,
        };
        let instances = state
            .enemies
            .iter()
            .map(SceneInstance::from)
            .chain(state.particles.iter().map(SceneInstance::from))
            .collect();
        Self { camera, instances }
    }

    /// Raw instance bytes for a vertex buffer
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Instance data as floats (the `kind` and padding words are bit-cast)
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::fire;

    fn session() -> GameSession {
        GameSession::new(77, Settings::default(), 1_000_000.0)
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<SceneInstance>(), 64);
    }

    #[test]
    fn test_idle_snapshot() {
        let s = session();
        let snap = RoundSnapshot::capture(&s, 1_000_000.0);
        assert_eq!(snap.phase, GamePhase::Start);
        assert_eq!(snap.seconds_left, 60);
        assert_eq!(snap.combo_label, None);
        assert_eq!(snap.leaderboard.len(), 5);
        assert_eq!(snap.leaderboard[0].when, "Just now");
        assert_eq!(snap.leaderboard[0].accuracy_percent, 75);
        assert!(snap.leaderboard.iter().all(|r| !r.highlight));
        assert_eq!(snap.projected_rank, None);
        assert_eq!(snap.best_score, Some(500));
    }

    #[test]
    fn test_combo_label_and_timer() {
        let mut s = session();
        s.start_round("Bob").unwrap();
        s.state.combo = 3;
        s.state.last_hit_tick = 0;
        s.state.round_ticks = 90;
        let snap = RoundSnapshot::capture(&s, 0.0);
        assert_eq!(snap.combo_label.as_deref(), Some("Combo x1.2 (3)"));
        assert_eq!(snap.combo_heat, Some(ComboHeat::Cooling));
        // 58.5 seconds left shows as 59
        assert_eq!(snap.seconds_left, 59);
        // Zero points would still land below the five demo rows
        assert_eq!(snap.projected_rank, Some(6));
    }

    #[test]
    fn test_arena_layout() {
        let arena = ArenaLayout::new();
        assert_eq!(arena.wall_half_extent, 25.0);
        assert_eq!(arena.pillars.len(), 8);
        assert!(arena.pillars.iter().all(|p| p.base[1] == 0.0 && p.height == 4.0));
        // Pillar bases sit on the ring in the x/z plane
        let [x, _, z] = arena.pillars[2].base;
        assert!(x.abs() < 1e-4 && (z - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_combo_heat() {
        assert_eq!(ComboHeat::from_ticks_since_hit(0), ComboHeat::Fresh);
        assert_eq!(ComboHeat::from_ticks_since_hit(60), ComboHeat::Fresh);
        assert_eq!(ComboHeat::from_ticks_since_hit(61), ComboHeat::Cooling);
        assert_eq!(ComboHeat::from_ticks_since_hit(121), ComboHeat::Fading);
    }

    #[test]
    fn test_highlight_current_player() {
        let mut s = session();
        s.start_round("Player3").unwrap();
        let snap = RoundSnapshot::capture(&s, 1_000_000.0);
        let highlighted: Vec<usize> = snap
            .leaderboard
            .iter()
            .filter(|r| r.highlight)
            .map(|r| r.rank)
            .collect();
        assert_eq!(highlighted, vec![3]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut s = session();
        s.start_round("Bob").unwrap();
        let json = serde_json::to_string(&RoundSnapshot::capture(&s, 0.0)).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"username\":\"Bob\""));
    }

    #[test]
    fn test_scene_frame() {
        let mut s = session();
        s.start_round("Bob").unwrap();
        let target = s.state.enemies[0].pos;
        s.state.player.look_at(target);
        fire(&mut s.state);

        let frame = SceneFrame::capture(&s.state);
        let enemies = s.state.enemies.len();
        let particles = s.state.particles.len();
        assert_eq!(frame.instances.len(), enemies + particles);
        assert!(particles > 0);
        assert!(frame.instances[..enemies].iter().all(|i| i.kind < KIND_PARTICLE));
        assert!(frame.instances[enemies..].iter().all(|i| i.kind == KIND_PARTICLE));
        assert!(frame.instances.iter().all(|i| (0.0..=1.0).contains(&i.color[3])));
        assert_eq!(frame.instance_bytes().len(), frame.instances.len() * 64);
        assert_eq!(frame.instance_floats().len(), frame.instances.len() * 16);
        assert_eq!(frame.camera.position, s.state.player.pos.to_array());
    }
}
