//! Fixed timestep simulation tick
//!
//! Advances one session deterministically. Processing order within a tick is
//! fixed and must not be reordered: input → player → guards/capture-check →
//! projectiles → particles → event flush. Capture always sees the player's
//! finalized position for the tick.

use glam::{Vec2, Vec3};

use super::guard::{PursuitOutcome, update_guard};
use super::particles::{BurstPreset, ParticleBurst};
use super::player::{self, ActionSet};
use super::projectile::{Can, CanStatus};
use super::state::{ActionKind, GameEvent, GamePhase, GameState};
use crate::consts::STAGE_CENTER;

/// Input intent for a single tick (deterministic)
#[derive(Debug, Clone, PartialEq)]
pub struct TickInput {
    /// Movement intent in [-1,1]^2: x strafes along `right`, y walks along
    /// `forward`
    pub movement: Vec2,
    /// Camera forward basis in world space (height ignored)
    pub forward: Vec3,
    /// Camera right basis in world space
    pub right: Vec3,
    pub sprint: bool,
    pub jump: bool,
    /// Trouble actions requested this tick
    pub actions: ActionSet,
    /// Pause toggle
    pub pause: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            movement: Vec2::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            sprint: false,
            jump: false,
            actions: ActionSet::default(),
            pause: false,
        }
    }
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                // Leaving play discards in-flight cans and bursts; nothing
                // is owed to them
                state.phase = GamePhase::Paused;
                state.discard_transients();
                log::debug!("paused at tick {}", state.time_ticks);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
            }
            GamePhase::Caught => {}
        }
    }

    // Capture is terminal for the session; paused sessions don't advance
    match state.phase {
        GamePhase::Paused | GamePhase::Caught => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Player first: movement, vertical state, action firing
    let fired = player::update(
        &mut state.player,
        input,
        &mut state.rng,
        &mut state.events,
    );
    apply_fired_actions(state, fired);

    // Guards chase the finalized player position; stop at the first capture
    let player_pos = state.player.pos;
    for i in 0..state.guards.len() {
        if update_guard(&mut state.guards[i], player_pos) == PursuitOutcome::Captured {
            log::info!(
                "guard {} captured the player at tick {}",
                state.guards[i].id,
                state.time_ticks
            );
            on_capture(state, player_pos);
            break;
        }
    }

    // Projectiles
    let events = &mut state.events;
    state.cans.retain_mut(|can| match can.update(dt) {
        CanStatus::Flying => true,
        CanStatus::Landed => {
            events.push(GameEvent::ProjectileLanded { pos: can.pos });
            false
        }
    });

    // Particles, removed as whole bursts
    state.bursts.retain_mut(|burst| {
        burst.update(dt);
        if burst.expired() {
            events.push(GameEvent::BurstExpired {
                preset: burst.preset,
            });
            false
        } else {
            true
        }
    });
}

/// Score the fired actions and spawn their effects
fn apply_fired_actions(state: &mut GameState, fired: ActionSet) {
    let pos = state.player.pos;
    for kind in fired.iter() {
        state.score += kind.points();
        state.trouble_actions += 1;

        let preset = match kind {
            ActionKind::ThrowCan => BurstPreset::CanThrow,
            ActionKind::Mosh | ActionKind::Lift | ActionKind::Heckle => BurstPreset::Mosh,
        };
        spawn_burst(state, preset, pos);

        if kind == ActionKind::ThrowCan {
            let start = pos;
            state.cans.push(Can::spawn(start, STAGE_CENTER));
            state.events.push(GameEvent::ProjectileSpawned {
                start,
                target: STAGE_CENTER,
            });
        }
    }
}

/// Terminal capture: discard transients, flash, stop the session
fn on_capture(state: &mut GameState, pos: Vec3) {
    state.events.push(GameEvent::Captured { pos });
    state.discard_transients();
    spawn_burst(state, BurstPreset::Capture, pos);
    state.phase = GamePhase::Caught;
}

fn spawn_burst(state: &mut GameState, preset: BurstPreset, pos: Vec3) {
    let burst = ParticleBurst::spawn(preset, pos, &mut state.rng);
    state.bursts.push(burst);
    state.events.push(GameEvent::BurstSpawned { preset, pos });
}
