//! First-person player body: walking, jumping and mouse look

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::arena::clamp_to_square;
use super::collision::player_blocked;
use crate::consts::*;
use crate::look_direction;

/// Directional intent held by the input layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// The player's body and camera pose
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Eye position
    pub pos: Vec3,
    /// Rotation around world up (radians, 0 looks down -Z)
    pub yaw: f32,
    /// Rotation around the camera's right axis, clamped to ±π/2
    pub pitch: f32,
    /// Vertical velocity (units/s)
    pub vertical_vel: f32,
    /// Standing on the ground; jumping is allowed
    pub on_ground: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, PLAYER_HEIGHT, PLAYER_SPAWN_Z),
            yaw: 0.0,
            pitch: 0.0,
            vertical_vel: 0.0,
            on_ground: true,
        }
    }
}

impl Player {
    /// Full look direction (includes pitch)
    pub fn look_dir(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }

    /// Look direction flattened onto the ground plane
    pub fn flat_forward(&self) -> Vec3 {
        // Built from yaw alone so looking straight up or down still walks forward
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Apply a look delta (already scaled to radians)
    pub fn apply_look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Point the camera at a world position
    pub fn look_at(&mut self, target: Vec3) {
        let to = target - self.pos;
        let flat = (to.x * to.x + to.z * to.z).sqrt();
        if to.length_squared() < 1e-8 {
            return;
        }
        self.yaw = (-to.x).atan2(-to.z);
        self.pitch = to.y.atan2(flat).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Start a jump if standing
    pub fn jump(&mut self) {
        if self.on_ground {
            self.vertical_vel = JUMP_VELOCITY;
            self.on_ground = false;
        }
    }

    /// Resolve one tick of horizontal walking
    ///
    /// Returns true if the player moved. A move that would end inside a
    /// pillar is dropped entirely.
    pub fn walk(&mut self, intent: MoveIntent, dt: f32) -> bool {
        if !intent.any() {
            return false;
        }
        let forward = self.flat_forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();

        let mut direction = Vec3::ZERO;
        if intent.forward {
            direction += forward;
        }
        if intent.backward {
            direction -= forward;
        }
        if intent.right {
            direction += right;
        }
        if intent.left {
            direction -= right;
        }

        // Opposing keys cancel out
        let Some(direction) = direction.try_normalize() else {
            return false;
        };

        let candidate = clamp_to_square(self.pos + direction * MOVE_SPEED * dt, PLAYER_BOUNDARY);
        if player_blocked(candidate) {
            return false;
        }
        self.pos = candidate;
        true
    }

    /// Integrate gravity while airborne and land on the ground
    pub fn fall(&mut self, dt: f32) {
        if self.on_ground {
            return;
        }
        self.vertical_vel -= GRAVITY * dt;
        self.pos.y += self.vertical_vel * dt;

        if self.pos.y <= PLAYER_HEIGHT {
            self.pos.y = PLAYER_HEIGHT;
            self.vertical_vel = 0.0;
            self.on_ground = true;
        }
    }
}
