//! Headless demo entry point
//!
//! Runs a scripted session on the stage named by the first argument
//! (default: livehouse) and logs events until capture or timeout.

use std::process::ExitCode;

use glam::Vec2;

use yakkai_rush::consts::SIM_DT;
use yakkai_rush::sim::{ActionSet, GamePhase, GameState, StageId, TickInput, tick};

/// 60 seconds at the fixed timestep
const MAX_TICKS: u64 = 3600;

fn main() -> ExitCode {
    env_logger::init();

    let stage_arg = std::env::args().nth(1).unwrap_or_else(|| "livehouse".into());
    let stage: StageId = match stage_arg.parse() {
        Ok(stage) => stage,
        Err(e) => {
            log::error!("{e} (expected livehouse, hall, or arena)");
            return ExitCode::FAILURE;
        }
    };

    let mut state = GameState::new(stage, 0xC0FFEE);

    for tick_no in 0..MAX_TICKS {
        let mut input = TickInput {
            // Walk toward the stage, weaving a little
            movement: Vec2::new(((tick_no as f32) * 0.01).sin() * 0.4, 1.0),
            ..Default::default()
        };
        input.actions = ActionSet {
            mosh: tick_no % 120 == 10,
            lift: tick_no % 600 == 300,
            throw_can: tick_no % 300 == 150,
            heckle: tick_no % 400 == 200,
        };
        input.jump = tick_no % 90 == 45;

        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            log::info!("{event:?}");
        }
        if state.phase == GamePhase::Caught {
            break;
        }
    }

    log::info!(
        "session over on {:?}: score {} from {} trouble actions in {} ticks",
        state.stage,
        state.score,
        state.trouble_actions,
        state.time_ticks
    );
    ExitCode::SUCCESS
}
