//! Player movement integration and the trouble-action state machine
//!
//! The player update is a transition function over `PlayerState`: countdown
//! timers, vertical motion (gravity / crowd lift), camera-relative horizontal
//! movement, then action firing. All timers are per-tick countdowns so a
//! cooldown expiring and an action firing in the same tick cannot race.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{ActionKind, GameEvent, PlayerState};
use super::tick::TickInput;
use crate::consts::*;
use crate::flatten;

/// Heckle shouts, drawn uniformly at random on each Heckle fire
pub const HECKLE_MESSAGES: [&str; 4] = [
    "男がいるなら、謝罪しろ〜！",
    "責任から逃げるな！",
    "メン地下彼氏は？",
    "風俗に在籍ある？",
];

/// Which trouble actions are requested (input) or fired (output) this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub mosh: bool,
    pub lift: bool,
    pub throw_can: bool,
    pub heckle: bool,
}

impl ActionSet {
    pub fn contains(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Mosh => self.mosh,
            ActionKind::Lift => self.lift,
            ActionKind::ThrowCan => self.throw_can,
            ActionKind::Heckle => self.heckle,
        }
    }

    pub fn set(&mut self, kind: ActionKind) {
        match kind {
            ActionKind::Mosh => self.mosh = true,
            ActionKind::Lift => self.lift = true,
            ActionKind::ThrowCan => self.throw_can = true,
            ActionKind::Heckle => self.heckle = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.mosh || self.lift || self.throw_can || self.heckle)
    }

    /// Set kinds in fixed firing order
    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

/// Advance the player by one tick. Returns the actions that actually fired;
/// requests whose cooldown is still running are silently dropped, never
/// queued. `TroubleAction` and `Heckle` events are pushed as they fire.
pub fn update(
    player: &mut PlayerState,
    input: &TickInput,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) -> ActionSet {
    // Timers count down first so an action whose cooldown reaches zero this
    // tick is firable this tick, never a tick early
    for cooldown in &mut player.cooldowns {
        *cooldown = cooldown.saturating_sub(1);
    }
    player.jump_cooldown = player.jump_cooldown.saturating_sub(1);

    // Lift auto-expiry
    if player.lifted {
        player.lift_ticks += 1;
        if player.lift_ticks >= LIFT_DURATION_TICKS {
            player.lifted = false;
            player.lift_ticks = 0;
        }
    }

    // Vertical motion
    if player.lifted {
        // Ease toward the hover height; never reaches it exactly
        let lift_time = player.lift_ticks as f32 * SIM_DT;
        let target = LIFT_HEIGHT + (lift_time * LIFT_WOBBLE_FREQ).sin() * LIFT_WOBBLE;
        player.pos.y += (target - player.pos.y) * LIFT_EASE;
        player.grounded = false;
    } else {
        player.vel.y -= PLAYER_GRAVITY;
        player.pos.y += player.vel.y;
        if player.pos.y <= GROUND_Y {
            player.pos.y = GROUND_Y;
            player.vel.y = 0.0;
        }
        player.grounded = player.pos.y <= GROUND_Y + 0.01;
    }

    // Jump, gated by its own short cooldown independent of the four actions
    if input.jump && player.grounded && !player.lifted && player.jump_cooldown == 0 {
        player.vel.y = JUMP_VELOCITY;
        player.jump_cooldown = JUMP_COOLDOWN_TICKS;
        player.grounded = false;
    }

    // Camera-relative horizontal movement; zero input normalizes to zero
    let forward = flatten(input.forward).normalize_or_zero();
    let right = flatten(input.right).normalize_or_zero();
    let dir = (right * input.movement.x + forward * input.movement.y).normalize_or_zero();
    let speed = if input.sprint { SPRINT_SPEED } else { WALK_SPEED };
    let scale = if player.lifted { LIFT_MOVE_SCALE } else { 1.0 };
    player.pos += dir * speed * scale;

    // Trouble actions, at most once each per tick, in fixed order
    let mut fired = ActionSet::default();
    for kind in ActionKind::ALL {
        if !input.actions.contains(kind) {
            continue;
        }
        // Re-firing Lift while lifted is a no-op
        if kind == ActionKind::Lift && player.lifted {
            continue;
        }
        if !player.can_fire(kind) {
            continue;
        }

        player.cooldowns[kind.index()] = kind.cooldown_ticks();
        if kind == ActionKind::Lift {
            player.lifted = true;
            player.lift_ticks = 0;
            player.grounded = false;
            player.vel.y = 0.0;
        }

        log::debug!("trouble action: {}", kind.as_str());
        events.push(GameEvent::TroubleAction {
            kind,
            points: kind.points(),
            pos: player.pos,
        });
        if kind == ActionKind::Heckle {
            let message = HECKLE_MESSAGES[rng.random_range(0..HECKLE_MESSAGES.len())];
            events.push(GameEvent::Heckle { message });
        }
        fired.set(kind);
    }

    fired
}
