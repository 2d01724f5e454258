//! Round lifecycle: start, play, end
//!
//! `GameSession` owns everything one player's browser tab needs: the round
//! state, the leaderboard, settings and the input flags written by event
//! handlers. Handlers only touch input; `tick` is the only thing that moves
//! bodies.

use crate::error::StartError;
use crate::input::KeyAction;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::platform;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, ShotOutcome, TickInput, fire, tick};
use crate::snapshot::{RoundSnapshot, SceneFrame};
use crate::consts::SIM_DT;

/// Allowed username length (characters, after trimming)
pub const MIN_USERNAME_LEN: usize = 2;
pub const MAX_USERNAME_LEN: usize = 12;

/// Check a username, returning the trimmed name
pub fn validate_username(raw: &str) -> Result<String, StartError> {
    let name = raw.trim();
    let len = name.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        return Err(StartError::UsernameLength { len });
    }
    Ok(name.to_string())
}

/// One player's game session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub leaderboard: Leaderboard,
    settings: Settings,
    username: String,
    input: TickInput,
    pointer_captured: bool,
    /// Leaderboard placement of the last finished round
    last_rank: Option<usize>,
}

impl GameSession {
    /// New session with demo leaderboard entries stamped relative to `now_ms`
    pub fn new(seed: u64, settings: Settings, now_ms: f64) -> Self {
        let mut session = Self {
            state: GameState::new(seed),
            leaderboard: Leaderboard::with_demo_entries(now_ms),
            settings: Settings::default(),
            username: String::new(),
            input: TickInput::default(),
            pointer_captured: false,
            last_rank: None,
        };
        session.apply_settings(settings);
        session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace settings; particle limits take effect immediately
    pub fn apply_settings(&mut self, settings: Settings) {
        self.state.particle_cap = settings.max_particles();
        self.state.burst_size = settings.burst_size();
        self.settings = settings;
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Start (or restart) a round
    ///
    /// On a bad username nothing changes and the session stays where it was.
    pub fn start_round(&mut self, username: &str) -> Result<(), StartError> {
        let name = validate_username(username).inspect_err(|e| {
            log::warn!("Rejected username {:?}: {}", username, e);
        })?;

        self.username = name;
        self.input = TickInput::default();
        self.last_rank = None;
        self.state.begin_round();

        log::info!(
            "Round started for {} with {} enemies",
            self.username,
            self.state.enemies.len()
        );
        Ok(())
    }

    /// Advance one frame, stamping a finished round with the wall clock
    pub fn tick(&mut self) {
        self.tick_at(platform::now_ms());
    }

    /// Advance one frame; `now_ms` stamps the leaderboard entry if the round ends
    pub fn tick_at(&mut self, now_ms: f64) {
        let was_playing = self.state.phase == GamePhase::Playing;
        tick(&mut self.state, &self.input, SIM_DT);
        // Jump is edge-triggered
        self.input.jump = false;

        if was_playing && self.state.phase == GamePhase::Ended {
            self.finish_round(now_ms);
        }
    }

    fn finish_round(&mut self, now_ms: f64) {
        self.pointer_captured = false;
        let entry = LeaderboardEntry {
            username: self.username.clone(),
            score: self.state.score,
            accuracy: self.state.accuracy(),
            timestamp: now_ms,
        };
        self.last_rank = self.leaderboard.record(entry);
        match self.last_rank {
            Some(rank) => {
                log::info!("{} placed #{} on the leaderboard", self.username, rank);
                self.state.events.push(GameEvent::LeaderboardPlaced { rank });
            }
            None => log::info!("{} did not make the leaderboard", self.username),
        }
    }

    /// Key pressed
    pub fn key_down(&mut self, key: &str) {
        match KeyAction::from_key(key) {
            Some(KeyAction::Forward) => self.input.movement.forward = true,
            Some(KeyAction::Backward) => self.input.movement.backward = true,
            Some(KeyAction::Left) => self.input.movement.left = true,
            Some(KeyAction::Right) => self.input.movement.right = true,
            Some(KeyAction::Jump) => self.input.jump = true,
            None => {}
        }
    }

    /// Key released
    pub fn key_up(&mut self, key: &str) {
        match KeyAction::from_key(key) {
            Some(KeyAction::Forward) => self.input.movement.forward = false,
            Some(KeyAction::Backward) => self.input.movement.backward = false,
            Some(KeyAction::Left) => self.input.movement.left = false,
            Some(KeyAction::Right) => self.input.movement.right = false,
            Some(KeyAction::Jump) | None => {}
        }
    }

    /// Pointer capture gained or lost
    pub fn set_pointer_captured(&mut self, captured: bool) {
        if captured != self.pointer_captured {
            log::debug!("Pointer capture {}", if captured { "acquired" } else { "released" });
        }
        self.pointer_captured = captured;
    }

    /// Mouse moved while captured (pixels)
    pub fn look(&mut self, dx: f32, dy: f32) {
        if !self.pointer_captured || self.state.phase != GamePhase::Playing {
            return;
        }
        let (delta_yaw, delta_pitch) = self.settings.look_delta(dx, dy);
        self.state.player.apply_look(delta_yaw, delta_pitch);
    }

    /// Left click while captured
    pub fn fire(&mut self) -> Option<ShotOutcome> {
        if !self.pointer_captured {
            return None;
        }
        fire(&mut self.state)
    }

    /// Take pending feedback events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// HUD/results view
    pub fn snapshot(&self, now_ms: f64) -> RoundSnapshot {
        RoundSnapshot::capture(self, now_ms)
    }

    /// Renderer view
    pub fn scene(&self) -> SceneFrame {
        SceneFrame::capture(&self.state)
    }
}
