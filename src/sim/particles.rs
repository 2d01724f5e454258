//! Explosion fragments shown when an enemy is destroyed
//!
//! Particles are purely visual but their lifetime is part of the simulation:
//! they live for a fixed number of ticks and fall under gravity.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// A single explosion fragment
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec3,
    /// Per-tick velocity
    pub vel: Vec3,
    pub rotation: Vec3,
    pub angular_vel: Vec3,
    /// Ticks remaining
    pub life: f32,
    /// Reference lifetime for fade; rolled independently of `life`
    pub max_life: f32,
    /// Linear RGB
    pub color: [f32; 3],
    pub radius: f32,
}

impl Particle {
    /// Roll a fragment leaving `origin`
    pub fn burst_fragment(origin: Vec3, rng: &mut Pcg32) -> Self {
        let hue = rng.random::<f32>() * 0.1;
        let lightness = 0.5 + rng.random::<f32>() * 0.5;
        let radius = 0.05 + rng.random::<f32>() * 0.1;
        let vel = Vec3::new(
            (rng.random::<f32>() - 0.5) * 0.8,
            rng.random::<f32>() * 0.8,
            (rng.random::<f32>() - 0.5) * 0.8,
        );
        let angular_vel = Vec3::new(
            (rng.random::<f32>() - 0.5) * 0.2,
            (rng.random::<f32>() - 0.5) * 0.2,
            (rng.random::<f32>() - 0.5) * 0.2,
        );
        let life = 40.0 + rng.random::<f32>() * 20.0;
        let max_life = 40.0 + rng.random::<f32>() * 20.0;

        Self {
            pos: origin,
            vel,
            rotation: Vec3::ZERO,
            angular_vel,
            life,
            max_life,
            color: hsl_to_rgb(hue, 1.0, lightness),
            radius,
        }
    }

    /// Remaining-life ratio (may start above 1.0)
    #[inline]
    pub fn life_ratio(&self) -> f32 {
        self.life / self.max_life
    }

    /// Fade-out opacity
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life_ratio()
    }

    /// Fragments swell as they fade
    #[inline]
    pub fn scale(&self) -> f32 {
        1.0 + (1.0 - self.life_ratio()) * 0.5
    }
}

/// Spawn up to `count` fragments at `origin`, never exceeding `cap` live particles
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    origin: Vec3,
    count: usize,
    cap: usize,
    rng: &mut Pcg32,
) {
    let room = cap.saturating_sub(particles.len());
    let count = count.min(room);
    particles.extend((0..count).map(|_| Particle::burst_fragment(origin, rng)));
}

/// Age, move and cull all particles by one tick
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.life -= 1.0;
        if p.life <= 0.0 {
            return false;
        }
        p.vel.y -= PARTICLE_GRAVITY;
        p.pos += p.vel;
        p.rotation += p.angular_vel;
        true
    });
}

/// HSL (all components 0-1) to RGB
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
