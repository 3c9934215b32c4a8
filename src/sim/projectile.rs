//! Thrown-can projectile physics
//!
//! A can follows a computed parabola: the initial velocity solves a simple
//! time-of-flight split with a fixed upward boost for the arc, then per-tick
//! gravity pulls it down until it lands or times out. No bounce.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{CAN_FLIGHT_DIVISOR, CAN_GRAVITY, CAN_GROUND_Y, CAN_MAX_FLIGHT, CAN_UP_BOOST};

/// Result of one flight step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanStatus {
    Flying,
    /// Hit the ground threshold or exceeded max flight time; remove it
    Landed,
}

/// A thrown drink can in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Can {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Seconds in flight, monotonically non-decreasing
    pub age: f32,
}

impl Can {
    /// Launch a can from `start` toward `target`
    pub fn spawn(start: Vec3, target: Vec3) -> Self {
        let offset = target - start;
        let flight_time = offset.length() / CAN_FLIGHT_DIVISOR;
        let mut vel = if flight_time > 0.0 {
            offset / flight_time
        } else {
            Vec3::ZERO
        };
        vel.y += CAN_UP_BOOST;

        Self {
            pos: start,
            vel,
            age: 0.0,
        }
    }

    /// Advance one tick of flight
    pub fn update(&mut self, dt: f32) -> CanStatus {
        self.vel.y -= CAN_GRAVITY;
        self.pos += self.vel * dt;
        self.age += dt;

        if self.pos.y < CAN_GROUND_Y || self.age > CAN_MAX_FLIGHT {
            CanStatus::Landed
        } else {
            CanStatus::Flying
        }
    }
}
