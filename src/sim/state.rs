//! Game state and core simulation types
//!
//! All state a session needs for determinism lives here. The `GameState` is
//! owned by the host loop and mutated only through `tick`.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::{BurstPreset, ParticleBurst};
use super::projectile::Can;
use super::stage::{StageId, generate_layout};
use crate::consts::{GROUND_Y, GUARD_SPAWN_LIFT};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Session is paused
    Paused,
    /// A guard captured the player. Terminal: ticks are ignored until reset.
    Caught,
}

/// The four scored trouble actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Mosh,
    Lift,
    ThrowCan,
    Heckle,
}

impl ActionKind {
    /// Fixed firing order within a tick
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Mosh,
        ActionKind::Lift,
        ActionKind::ThrowCan,
        ActionKind::Heckle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Mosh => "mosh",
            ActionKind::Lift => "lift",
            ActionKind::ThrowCan => "throw-can",
            ActionKind::Heckle => "heckle",
        }
    }

    /// Score awarded when the action fires
    pub fn points(self) -> u64 {
        match self {
            ActionKind::Mosh => 100,
            ActionKind::Lift => 150,
            ActionKind::ThrowCan => 200,
            ActionKind::Heckle => 120,
        }
    }

    /// Cooldown started when the action fires. Lift's exceeds the lift
    /// duration so it cannot re-trigger mid-lift.
    pub fn cooldown_ticks(self) -> u32 {
        match self {
            ActionKind::Mosh => 60,
            ActionKind::Lift => 180,
            ActionKind::ThrowCan => 90,
            ActionKind::Heckle => 120,
        }
    }

    /// Index into `PlayerState::cooldowns`
    pub fn index(self) -> usize {
        match self {
            ActionKind::Mosh => 0,
            ActionKind::Lift => 1,
            ActionKind::ThrowCan => 2,
            ActionKind::Heckle => 3,
        }
    }
}

/// Player movement and action state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub pos: Vec3,
    /// Only the vertical component is meaningful
    pub vel: Vec3,
    pub grounded: bool,
    /// Mutually exclusive with `grounded`
    pub lifted: bool,
    /// Ticks spent in the current lift (0 when not lifted)
    pub lift_ticks: u32,
    /// Ticks before another jump may trigger
    pub jump_cooldown: u32,
    /// Remaining cooldown ticks per action, indexed by `ActionKind::index`
    pub cooldowns: [u32; 4],
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, GROUND_Y, 0.0),
            vel: Vec3::ZERO,
            grounded: true,
            lifted: false,
            lift_ticks: 0,
            jump_cooldown: 0,
            cooldowns: [0; 4],
        }
    }

    /// Whether `kind` may fire this tick
    pub fn can_fire(&self, kind: ActionKind) -> bool {
        self.cooldowns[kind.index()] == 0
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// One pursuing guard. Owned by its slot in `GameState::guards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardState {
    pub id: u32,
    pub pos: Vec3,
}

/// Events accumulated during a tick, drained by the host for scoring,
/// HUD, and effect spawning
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    TroubleAction {
        kind: ActionKind,
        points: u64,
        pos: Vec3,
    },
    /// Side channel of a Heckle fire; carries no score
    Heckle { message: &'static str },
    Captured { pos: Vec3 },
    ProjectileSpawned { start: Vec3, target: Vec3 },
    ProjectileLanded { pos: Vec3 },
    BurstSpawned { preset: BurstPreset, pos: Vec3 },
    BurstExpired { preset: BurstPreset },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG (heckle selection, particle spread)
    pub rng: Pcg32,
    pub stage: StageId,
    pub score: u64,
    /// Count of trouble actions fired this session
    pub trouble_actions: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: PlayerState,
    /// One entry per configured guard slot, stable order
    pub guards: Vec<GuardState>,
    /// In-flight thrown cans
    pub cans: Vec<Can>,
    /// Live particle bursts
    pub bursts: Vec<ParticleBurst>,
    /// Events queued since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session on the given stage. Guard slots come from the stage
    /// layout; their count matches the config for the session lifetime.
    pub fn new(stage: StageId, seed: u64) -> Self {
        let layout = generate_layout(stage.config());
        let guards = layout
            .guard_spawns
            .iter()
            .enumerate()
            .map(|(i, spawn)| GuardState {
                id: i as u32,
                pos: *spawn + Vec3::new(0.0, GUARD_SPAWN_LIFT, 0.0),
            })
            .collect();

        log::info!("session start: stage {:?}, seed {}", stage, seed);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            stage,
            score: 0,
            trouble_actions: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: PlayerState::new(),
            guards,
            cans: Vec::new(),
            bursts: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Take all queued events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Discard in-flight cans and bursts. No drain or completion is owed to
    /// them when a session ends or pauses.
    pub fn discard_transients(&mut self) {
        self.cans.clear();
        self.bursts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_count_matches_config() {
        for id in StageId::ALL {
            let state = GameState::new(id, 7);
            assert_eq!(state.guards.len(), id.config().guard_count);
        }
    }

    #[test]
    fn test_guards_spawn_above_floor() {
        let state = GameState::new(StageId::Livehouse, 7);
        for guard in &state.guards {
            assert_eq!(guard.pos.y, 1.0);
        }
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(StageId::Livehouse, 7);
        state.events.push(GameEvent::Heckle { message: "test" });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.events.is_empty());
    }
}
