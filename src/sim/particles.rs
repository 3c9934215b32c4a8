//! Particle burst effects
//!
//! A burst is a fixed-size group of points sharing one spawn event: random
//! initial velocities, per-tick drag, and a visually tuned gravity term
//! (distinct from player gravity). The whole burst expires as a unit.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{BURST_DRAG, BURST_GRAVITY};

/// The three named effect presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstPreset {
    /// Gold splash where a thrown can leaves the hand
    CanThrow,
    /// Red impact for mosh (also used for lift and heckle)
    Mosh,
    /// White flash when a guard captures the player
    Capture,
}

impl BurstPreset {
    pub fn count(self) -> usize {
        match self {
            BurstPreset::CanThrow => 30,
            BurstPreset::Mosh => 40,
            BurstPreset::Capture => 60,
        }
    }

    pub fn spread(self) -> f32 {
        match self {
            BurstPreset::CanThrow => 1.5,
            BurstPreset::Mosh => 2.0,
            BurstPreset::Capture => 3.0,
        }
    }

    /// Seconds before the burst expires
    pub fn lifetime(self) -> f32 {
        match self {
            BurstPreset::CanThrow => 1.0,
            BurstPreset::Mosh => 1.2,
            BurstPreset::Capture => 2.0,
        }
    }

    /// 0xRRGGBB for the host renderer
    pub fn color(self) -> u32 {
        match self {
            BurstPreset::CanThrow => 0xffd700,
            BurstPreset::Mosh => 0xff0000,
            BurstPreset::Capture => 0xffffff,
        }
    }
}

/// One point of a burst
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
}

/// An ephemeral burst of particles, destroyed as a unit after its lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleBurst {
    pub preset: BurstPreset,
    pub particles: Vec<Particle>,
    /// Seconds since spawn, monotonically non-decreasing
    pub age: f32,
    pub lifetime: f32,
}

impl ParticleBurst {
    /// Spawn a preset burst at `origin`. Horizontal spread is uniform in
    /// [-spread/2, spread/2], vertical in [0, spread * 0.8].
    pub fn spawn(preset: BurstPreset, origin: Vec3, rng: &mut impl Rng) -> Self {
        let spread = preset.spread();
        let particles = (0..preset.count())
            .map(|_| Particle {
                pos: origin,
                vel: Vec3::new(
                    rng.random_range(-spread / 2.0..spread / 2.0),
                    rng.random_range(0.0..spread * 0.8),
                    rng.random_range(-spread / 2.0..spread / 2.0),
                ),
            })
            .collect();

        Self {
            preset,
            particles,
            age: 0.0,
            lifetime: preset.lifetime(),
        }
    }

    /// Advance one tick: drag, visual gravity, age
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        if self.expired() {
            return;
        }
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
            particle.pos.y -= BURST_GRAVITY * dt * dt;
            particle.vel *= BURST_DRAG;
        }
    }

    /// True from the first tick where age exceeds the lifetime
    pub fn expired(&self) -> bool {
        self.age > self.lifetime
    }

    /// Fade factor for the host renderer
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age / self.lifetime).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawn(preset: BurstPreset) -> ParticleBurst {
        let mut rng = Pcg32::seed_from_u64(42);
        ParticleBurst::spawn(preset, Vec3::new(0.0, 1.0, 0.0), &mut rng)
    }

    #[test]
    fn test_preset_counts() {
        assert_eq!(spawn(BurstPreset::CanThrow).particles.len(), 30);
        assert_eq!(spawn(BurstPreset::Mosh).particles.len(), 40);
        assert_eq!(spawn(BurstPreset::Capture).particles.len(), 60);
    }

    #[test]
    fn test_initial_velocities_in_spread_bounds() {
        let burst = spawn(BurstPreset::Mosh);
        let spread = BurstPreset::Mosh.spread();
        for p in &burst.particles {
            assert!(p.vel.x >= -spread / 2.0 && p.vel.x < spread / 2.0);
            assert!(p.vel.z >= -spread / 2.0 && p.vel.z < spread / 2.0);
            assert!(p.vel.y >= 0.0 && p.vel.y < spread * 0.8);
        }
    }

    #[test]
    fn test_expires_at_first_tick_past_lifetime() {
        let mut burst = spawn(BurstPreset::CanThrow);
        let mut ticks = 0;
        while !burst.expired() {
            assert!(burst.age <= burst.lifetime);
            burst.update(SIM_DT);
            ticks += 1;
            assert!(ticks <= 100, "burst never expired");
        }
        // First tick past the 1 s lifetime at 60 Hz (exact boundary tick
        // depends on float accumulation)
        assert!((60..=61).contains(&ticks));
        assert!(burst.age > burst.lifetime);
    }

    #[test]
    fn test_opacity_fades_and_clamps() {
        let mut burst = spawn(BurstPreset::CanThrow);
        assert_eq!(burst.opacity(), 1.0);
        let mut last = 1.0;
        for _ in 0..70 {
            burst.update(SIM_DT);
            assert!(burst.opacity() <= last);
            last = burst.opacity();
        }
        assert_eq!(burst.opacity(), 0.0);
    }

    #[test]
    fn test_drag_damps_velocity() {
        let mut burst = spawn(BurstPreset::Mosh);
        let speed_before: f32 = burst.particles.iter().map(|p| p.vel.length()).sum();
        burst.update(SIM_DT);
        let speed_after: f32 = burst.particles.iter().map(|p| p.vel.length()).sum();
        assert!(speed_after < speed_before);
    }
}
