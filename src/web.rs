//! Browser bindings
//!
//! The host page owns the canvas, the 3D scene and the DOM. It forwards
//! input here, calls `tick` once per animation frame, then reads the HUD
//! snapshot (JSON) and the scene instances (floats) back out.

use wasm_bindgen::prelude::*;

use crate::platform;
use crate::session::GameSession;
use crate::settings::Settings;
use crate::sim::ShotOutcome;
use crate::snapshot::ArenaLayout;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Target Rush loaded");
}

/// A game session exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session; `settings_json` may be omitted or partial
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebGame {
        let settings = match settings_json.as_deref().map(Settings::from_json) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("{}, using defaults", e);
                Settings::default()
            }
            None => Settings::default(),
        };
        let seed = platform::clock_seed();
        log::info!("Session created with seed: {}", seed);
        WebGame {
            session: GameSession::new(seed, settings, platform::now_ms()),
        }
    }

    /// Start or restart a round; rejects with the message to show the player
    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self, username: &str) -> Result<(), JsValue> {
        self.session
            .start_round(username)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.session.tick();
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) {
        self.session.key_down(key);
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: &str) {
        self.session.key_up(key);
    }

    /// Mouse movement (movementX/movementY)
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.session.look(dx, dy);
    }

    #[wasm_bindgen(js_name = setPointerCaptured)]
    pub fn set_pointer_captured(&mut self, captured: bool) {
        self.session.set_pointer_captured(captured);
    }

    /// Returns "hit", "miss" or undefined when the shot was not taken
    pub fn fire(&mut self) -> Option<String> {
        self.session.fire().map(|outcome| match outcome {
            ShotOutcome::Hit { .. } => "hit".to_string(),
            ShotOutcome::Miss => "miss".to_string(),
        })
    }

    /// Replace settings from JSON
    #[wasm_bindgen(js_name = applySettings)]
    pub fn apply_settings(&mut self, settings_json: &str) -> Result<(), JsValue> {
        let settings =
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session.apply_settings(settings);
        Ok(())
    }

    /// HUD and leaderboard state as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot(platform::now_ms()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Feedback events since the last call, as a JSON array
    #[wasm_bindgen(js_name = drainEventsJson)]
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.drain_events())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Walls and pillars as JSON, for building static geometry once
    #[wasm_bindgen(js_name = arenaJson)]
    pub fn arena_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&ArenaLayout::new()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Camera as [x, y, z, yaw, pitch]
    pub fn camera(&self) -> Vec<f32> {
        let camera = self.session.scene().camera;
        let [x, y, z] = camera.position;
        vec![x, y, z, camera.yaw, camera.pitch]
    }

    /// Scene instances, 16 floats each (see `SceneInstance`)
    pub fn instances(&self) -> js_sys::Float32Array {
        let frame = self.session.scene();
        js_sys::Float32Array::from(frame.instance_floats())
    }
}
