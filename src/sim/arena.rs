//! Static arena geometry: the square boundary and the pillar ring
//!
//! All obstacles are vertical, so every test here works on the horizontal
//! (x, z) plane.

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use crate::consts::*;

/// A vertical cylinder obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pillar {
    /// Center on the ground plane (x, z)
    pub center: Vec2,
    /// Visual radius
    pub radius: f32,
}

impl Pillar {
    /// Horizontal distance from a world point to the pillar axis
    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        (Vec2::new(point.x, point.z) - self.center).length()
    }
}

/// The fixed ring of pillars, evenly spaced starting on the +X axis
pub fn pillars() -> [Pillar; PILLAR_COUNT] {
    std::array::from_fn(|i| {
        let angle = i as f32 / PILLAR_COUNT as f32 * TAU;
        Pillar {
            center: Vec2::new(angle.cos(), angle.sin()) * PILLAR_RING_RADIUS,
            radius: PILLAR_RADIUS,
        }
    })
}

/// Clamp a point into the axis-aligned square of the given half extent
#[inline]
pub fn clamp_to_square(point: Vec3, half_extent: f32) -> Vec3 {
    Vec3::new(
        point.x.clamp(-half_extent, half_extent),
        point.y,
        point.z.clamp(-half_extent, half_extent),
    )
}

/// True if a point keeps at least `clearance` from every pillar center
pub fn clear_of_pillars(point: Vec3, clearance: f32) -> bool {
    pillars().iter().all(|p| p.distance_to(point) >= clearance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_ring() {
        let ring = pillars();
        assert_eq!(ring.len(), 8);
        for p in &ring {
            assert!((p.center.length() - 15.0).abs() < 1e-4);
        }
        // First pillar sits on +X, third on +Z
        assert!((ring[0].center - Vec2::new(15.0, 0.0)).length() < 1e-4);
        assert!((ring[2].center - Vec2::new(0.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn test_clamp_to_square() {
        let p = clamp_to_square(Vec3::new(30.0, 2.0, -40.0), 23.0);
        assert_eq!(p, Vec3::new(23.0, 2.0, -23.0));
    }

    #[test]
    fn test_clear_of_pillars() {
        assert!(clear_of_pillars(Vec3::new(0.0, 1.0, 0.0), 3.0));
        assert!(!clear_of_pillars(Vec3::new(14.0, 1.0, 0.0), 3.0));
    }
}
