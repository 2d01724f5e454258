//! Collision detection and response for the arena
//!
//! The player and enemies are both treated as circles on the ground plane
//! when tested against pillars. Shots are rays tested against per-shape
//! bounding spheres.

use glam::{Vec2, Vec3};

use super::arena::{Pillar, pillars};
use crate::consts::*;

/// Result of a pillar overlap check
#[derive(Debug, Clone, Copy)]
pub struct PillarContact {
    /// Index of the pillar in the ring
    pub index: usize,
    /// Unit direction from pillar axis toward the body (ground plane)
    pub normal: Vec2,
    /// Horizontal distance from the pillar axis
    pub distance: f32,
}

/// First pillar whose axis lies closer than `radius` to `point`
///
/// Pillars are scanned in ring order; only the first overlap is reported.
pub fn first_pillar_contact(point: Vec3, radius: f32) -> Option<PillarContact> {
    pillars().iter().enumerate().find_map(|(index, pillar)| {
        let distance = pillar.distance_to(point);
        if distance < radius {
            let offset = Vec2::new(point.x, point.z) - pillar.center;
            Some(PillarContact {
                index,
                // A body sitting exactly on the axis gets pushed along +X
                normal: offset.try_normalize().unwrap_or(Vec2::X),
                distance,
            })
        } else {
            None
        }
    })
}

/// Check whether a player standing at `point` would overlap any pillar
pub fn player_blocked(point: Vec3) -> bool {
    first_pillar_contact(point, PLAYER_RADIUS + PILLAR_RADIUS).is_some()
}

/// Push a point out to exactly `radius` from the pillar along `normal`
#[inline]
pub fn snap_outside(pillar: &Pillar, normal: Vec2, radius: f32, height: f32) -> Vec3 {
    let p = pillar.center + normal * radius;
    Vec3::new(p.x, height, p.y)
}

/// A ray hit against a sphere
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Distance along the (unit) ray
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
}

/// Intersect a ray with a sphere, returning the nearest non-negative hit
///
/// `dir` must be normalized. A ray starting inside the sphere hits at the
/// exit point.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<RayHit> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let near = -b - sqrt_disc;
    let far = -b + sqrt_disc;
    let distance = if near >= 0.0 {
        near
    } else if far >= 0.0 {
        far
    } else {
        return None;
    };
    Some(RayHit {
        distance,
        point: origin + dir * distance,
    })
}
