//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (guards by slot, entities by spawn order)
//! - No rendering or platform dependencies

pub mod guard;
pub mod particles;
pub mod player;
pub mod projectile;
pub mod stage;
pub mod state;
pub mod tick;

pub use guard::{PursuitOutcome, update_guard};
pub use particles::{BurstPreset, Particle, ParticleBurst};
pub use player::{ActionSet, HECKLE_MESSAGES};
pub use projectile::{Can, CanStatus};
pub use stage::{
    Difficulty, LightKind, StageConfig, StageError, StageId, StageLayout, StageLight, WallBounds,
    generate_layout,
};
pub use state::{ActionKind, GameEvent, GamePhase, GameState, GuardState, PlayerState};
pub use tick::{TickInput, tick};
