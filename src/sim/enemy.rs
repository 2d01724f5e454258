//! Enemy targets: spawning and drift/bounce motion

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{clear_of_pillars, pillars};
use super::collision::{first_pillar_contact, snap_outside};
use crate::consts::*;

/// Enemy mesh variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyShape {
    Box,
    Sphere,
    Cone,
    Octahedron,
}

impl EnemyShape {
    pub const ALL: [EnemyShape; 4] = [
        EnemyShape::Box,
        EnemyShape::Sphere,
        EnemyShape::Cone,
        EnemyShape::Octahedron,
    ];

    /// Radius of the bounding sphere used for hit tests
    pub fn hit_radius(&self) -> f32 {
        match self {
            // Unit cube half-diagonal
            EnemyShape::Box => 0.87,
            EnemyShape::Sphere => 0.7,
            // Cone of radius 0.6, height 1.2 centered on its midpoint
            EnemyShape::Cone => 0.78,
            EnemyShape::Octahedron => 0.8,
        }
    }

    /// Tag passed through to the renderer
    pub fn tag(&self) -> u32 {
        match self {
            EnemyShape::Box => 0,
            EnemyShape::Sphere => 1,
            EnemyShape::Cone => 2,
            EnemyShape::Octahedron => 3,
        }
    }
}

/// Enemy material color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl EnemyColor {
    pub const ALL: [EnemyColor; 4] = [
        EnemyColor::Red,
        EnemyColor::Blue,
        EnemyColor::Green,
        EnemyColor::Yellow,
    ];

    pub fn rgba(&self) -> [f32; 4] {
        match self {
            EnemyColor::Red => [1.0, 0.2, 0.2, 1.0],
            EnemyColor::Blue => [0.2, 0.2, 1.0, 1.0],
            EnemyColor::Green => [0.2, 1.0, 0.2, 1.0],
            EnemyColor::Yellow => [1.0, 1.0, 0.2, 1.0],
        }
    }
}

/// A live target
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec3,
    /// Drift per tick
    pub vel: Vec3,
    /// Euler rotation (radians, cosmetic)
    pub rotation: Vec3,
    /// Spin per tick
    pub angular_vel: Vec3,
    /// Always 1; a single hit destroys the enemy
    pub health: u8,
    pub shape: EnemyShape,
    pub color: EnemyColor,
}

impl Enemy {
    /// Roll a new enemy away from the pillars
    pub fn spawn(id: u32, rng: &mut Pcg32) -> Self {
        let pos = (0..SPAWN_ATTEMPTS)
            .map(|_| {
                Vec3::new(
                    (rng.random::<f32>() - 0.5) * 40.0,
                    ENEMY_HOVER_HEIGHT,
                    -(rng.random::<f32>() * 30.0 + 5.0),
                )
            })
            .find(|p| clear_of_pillars(*p, SPAWN_PILLAR_CLEARANCE))
            .unwrap_or_else(|| {
                log::debug!("Enemy {} found no clear spawn point, using fallback", id);
                Vec3::new(0.0, ENEMY_HOVER_HEIGHT, -10.0)
            });

        let shape = EnemyShape::ALL[rng.random_range(0..EnemyShape::ALL.len())];
        let color = EnemyColor::ALL[rng.random_range(0..EnemyColor::ALL.len())];

        let vel = Vec3::new(
            (rng.random::<f32>() - 0.5) * ENEMY_DRIFT,
            0.0,
            (rng.random::<f32>() - 0.5) * ENEMY_DRIFT,
        );
        let angular_vel = Vec3::new(
            rng.random::<f32>() * 0.01,
            rng.random::<f32>() * 0.02,
            rng.random::<f32>() * 0.01,
        );

        Self {
            id,
            pos,
            vel,
            rotation: Vec3::ZERO,
            angular_vel,
            health: 1,
            shape,
            color,
        }
    }

    /// Advance one tick: drift, spin, bounce off walls and pillars
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.rotation += self.angular_vel;

        if self.pos.x.abs() > ENEMY_BOUNDARY {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(-ENEMY_BOUNDARY, ENEMY_BOUNDARY);
        }
        if self.pos.z.abs() > ENEMY_BOUNDARY {
            self.vel.z = -self.vel.z;
            self.pos.z = self.pos.z.clamp(-ENEMY_BOUNDARY, ENEMY_BOUNDARY);
        }

        if let Some(contact) = first_pillar_contact(self.pos, ENEMY_PILLAR_RADIUS) {
            let pillar = pillars()[contact.index];
            self.vel.x = contact.normal.x * ENEMY_BOUNCE_SPEED;
            self.vel.z = contact.normal.y * ENEMY_BOUNCE_SPEED;
            self.pos = snap_outside(&pillar, contact.normal, ENEMY_PILLAR_RADIUS, self.pos.y);
        }
    }
}
