//! Yakkai Rush - a venue troublemaker chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, pursuit, physics, stage layout)
//! - `minigame`: Can-drinking side challenge with best-time persistence

pub mod minigame;
pub mod sim;

pub use minigame::{BestTime, DrinkingGame};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Floor height the player rests on
    pub const GROUND_Y: f32 = 1.0;
    /// Walk speed (units per tick)
    pub const WALK_SPEED: f32 = 0.08;
    /// Sprint speed (units per tick)
    pub const SPRINT_SPEED: f32 = 0.15;
    /// Downward acceleration on vertical velocity, per tick
    pub const PLAYER_GRAVITY: f32 = 0.02;
    /// Vertical velocity set by a jump
    pub const JUMP_VELOCITY: f32 = 0.25;
    /// Ticks before another jump may trigger (0.5 s)
    pub const JUMP_COOLDOWN_TICKS: u32 = 30;

    /// Hover height while lifted by the crowd
    pub const LIFT_HEIGHT: f32 = 2.5;
    /// Amplitude of the hover oscillation
    pub const LIFT_WOBBLE: f32 = 0.1;
    /// Angular frequency of the hover oscillation (rad/s of lift time)
    pub const LIFT_WOBBLE_FREQ: f32 = 5.0;
    /// Exponential approach factor toward the hover height, per tick
    pub const LIFT_EASE: f32 = 0.1;
    /// Horizontal speed multiplier while lifted
    pub const LIFT_MOVE_SCALE: f32 = 0.5;
    /// Ticks a lift lasts before gravity takes over again (2 s)
    pub const LIFT_DURATION_TICKS: u32 = 120;

    /// Guard chase speed (units per tick)
    pub const CHASE_SPEED: f32 = 0.06;
    /// Planar distance at which a guard captures the player
    pub const CAPTURE_RADIUS: f32 = 1.5;
    /// Guards stand this far above their configured floor position
    pub const GUARD_SPAWN_LIFT: f32 = 1.0;

    /// Thrown cans aim at the center of the stage platform
    pub const STAGE_CENTER: glam::Vec3 = glam::Vec3::new(0.0, 1.0, -15.0);
    /// Divisor converting throw distance to flight time
    pub const CAN_FLIGHT_DIVISOR: f32 = 10.0;
    /// Upward boost added to the throw velocity for the arc
    pub const CAN_UP_BOOST: f32 = 5.0;
    /// Downward acceleration on can vertical velocity, per tick
    pub const CAN_GRAVITY: f32 = 0.3;
    /// Height below which a can counts as landed
    pub const CAN_GROUND_Y: f32 = 0.5;
    /// Maximum seconds a can stays in flight
    pub const CAN_MAX_FLIGHT: f32 = 3.0;

    /// Visual gravity for particle bursts (applied as dt^2)
    pub const BURST_GRAVITY: f32 = 9.8;
    /// Multiplicative velocity damping per tick for burst particles
    pub const BURST_DRAG: f32 = 0.98;

    /// Audience seat grid spacing (units)
    pub const SEAT_SPACING: f32 = 2.0;
    /// Hard cap on the stage platform width
    pub const MAX_STAGE_WIDTH: f32 = 20.0;
}

/// Zero the y component of a vector (planar projection)
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Distance between two points ignoring height
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    flatten(b - a).length()
}
